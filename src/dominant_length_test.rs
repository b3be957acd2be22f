use super::*;
use crate::boxes::{BoxType, PackingMethod};
use crate::config::DominantLengthWeights;

fn pending_of(box_type: &BoxType, count: usize) -> Vec<PendingBox> {
  let p = PendingBox::from(box_type);
  (0..count).map(|_| p.clone()).collect()
}

#[test]
fn empty_pool_falls_back_to_default() {
  let selection = select_dominant_length(&[], 100.0, DominantLengthWeights::default());
  assert_eq!(selection.primary, 34.0);
  assert!(selection.secondary.is_none());
}

#[test]
fn uniform_pool_selects_its_own_length() {
  let box_type = BoxType::new("A", crate::geometry::Dimensions::new(20.0, 30.0, 40.0), 10, PackingMethod::Carton);
  let pool = pending_of(&box_type, 10);
  let selection = select_dominant_length(&pool, 92.5, DominantLengthWeights::default());
  // Orientations are (20,30,40) and (30,20,40): lengths 30 and 20.
  assert!(selection.primary == 30.0 || selection.primary == 20.0);
}

#[test]
fn secondary_length_surfaces_for_mixed_pool() {
  let a = BoxType::new("A", crate::geometry::Dimensions::new(20.0, 34.0, 40.0), 5, PackingMethod::Carton);
  let b = BoxType::new("B", crate::geometry::Dimensions::new(20.0, 40.0, 40.0), 5, PackingMethod::Carton);
  let mut pool = pending_of(&a, 5);
  pool.extend(pending_of(&b, 5));

  let selection = select_dominant_length(&pool, 100.0, DominantLengthWeights::default());
  // Both 34 and 40 should appear among the top-3 candidates.
  let lengths: Vec<f64> = selection.top3.iter().map(|c| c.length).collect();
  assert!(lengths.iter().any(|&l| (l - 34.0).abs() < 0.01) || lengths.iter().any(|&l| (l - 40.0).abs() < 0.01));
}
