use super::*;
use crate::boxes::PackingMethod;
use crate::config::PackingConfig;
use crate::dominant_length::DominantLengthSelection;
use crate::geometry::Dimensions;

fn selection(primary: f64) -> DominantLengthSelection {
  DominantLengthSelection { primary, secondary: None, top3: Vec::new() }
}

#[test]
fn uniform_row_fills_columns_left_to_right() {
  let config = PackingConfig::default();
  let box_type = BoxType::new("A", Dimensions::new(20.0, 30.0, 25.0), 8, PackingMethod::Carton);
  let dominant = selection(30.0);

  let req = RowPackRequest {
    candidates: std::slice::from_ref(&box_type),
    row_y: 0.0,
    container_width: 100.0,
    container_height: 100.0,
    dominant: &dominant,
    remainder: None,
    config: &config,
  };

  let outcome = pack_row(&req);
  assert!(!outcome.placed.is_empty());
  for b in &outcome.placed {
    assert!(b.position.x + b.dimensions.w <= 100.0 + 1e-9);
    assert!(b.position.z + b.dimensions.h <= 100.0 + 1e-9);
    assert_eq!(b.position.y, 0.0);
  }
}

#[test]
fn placements_never_overlap() {
  let config = PackingConfig::default();
  let box_type = BoxType::new("A", Dimensions::new(15.0, 30.0, 18.0), 20, PackingMethod::Carton);
  let dominant = selection(30.0);

  let req = RowPackRequest {
    candidates: std::slice::from_ref(&box_type),
    row_y: 0.0,
    container_width: 80.0,
    container_height: 60.0,
    dominant: &dominant,
    remainder: None,
    config: &config,
  };

  let outcome = pack_row(&req);
  for (i, a) in outcome.placed.iter().enumerate() {
    for b in outcome.placed.iter().skip(i + 1) {
      assert!(!a.footprint().overlaps(&b.footprint()) || a.position.z != b.position.z, "boxes {} and {} overlap", i, b.code);
    }
  }
}

#[test]
fn length_mismatched_candidates_are_filtered_out_when_pool_is_large() {
  let config = PackingConfig::default();
  // 20 boxes whose only orientations give length 30 (matches), mixed with
  // a handful whose length is far from the dominant length and whose
  // count is small enough that the filter doesn't get defeated by the
  // less-than-10-kept fallback.
  let matching = BoxType::new("A", Dimensions::new(20.0, 30.0, 10.0), 20, PackingMethod::Carton);
  let mismatched = BoxType::new("B", Dimensions::new(60.0, 60.0, 10.0), 2, PackingMethod::Carton);
  let dominant = selection(30.0);

  let req = RowPackRequest {
    candidates: &[matching, mismatched],
    row_y: 0.0,
    container_width: 200.0,
    container_height: 100.0,
    dominant: &dominant,
    remainder: None,
    config: &config,
  };

  let outcome = pack_row(&req);
  assert!(outcome.placed.iter().all(|b| b.code == "A"));
}

#[test]
fn width_gap_fill_pulls_from_remainder_pool() {
  let config = PackingConfig::default();
  // A single narrow box leaves most of a wide container empty; the
  // remainder pool should be used to fill the leftover width.
  let primary = BoxType::new("A", Dimensions::new(10.0, 30.0, 90.0), 1, PackingMethod::Carton);
  let filler = BoxType::new("Z", Dimensions::new(80.0, 30.0, 90.0), 1, PackingMethod::Carton);
  let dominant = selection(30.0);

  let req = RowPackRequest {
    candidates: std::slice::from_ref(&primary),
    row_y: 0.0,
    container_width: 100.0,
    container_height: 100.0,
    dominant: &dominant,
    remainder: Some(std::slice::from_ref(&filler)),
    config: &config,
  };

  let outcome = pack_row(&req);
  assert!(outcome.placed.iter().any(|b| b.code == "Z"));
}

#[test]
fn empty_candidates_yields_no_placements() {
  let config = PackingConfig::default();
  let dominant = selection(30.0);
  let req = RowPackRequest {
    candidates: &[],
    row_y: 0.0,
    container_width: 100.0,
    container_height: 100.0,
    dominant: &dominant,
    remainder: None,
    config: &config,
  };
  let outcome = pack_row(&req);
  assert!(outcome.placed.is_empty());
}
