use super::*;
use crate::boxes::PackingMethod;
use crate::geometry::{Dimensions, Position};

fn placed(code: &str, x: f64, y: f64, z: f64, dims: Dimensions) -> PlacedBox {
  PlacedBox {
    code: code.into(),
    dimensions: dims,
    position: Position::new(x, y, z),
    material: String::new(),
    purchasing_doc: String::new(),
    packing_method: PackingMethod::Carton,
    sort_order: 999,
  }
}

#[test]
fn groups_rows_then_cells_and_aggregates_codes() {
  let dims = Dimensions::new(20.0, 30.0, 20.0);
  let boxes = vec![
    placed("A", 0.0, 0.0, 0.0, dims),
    placed("A", 0.0, 0.0, 20.0, dims),
    placed("B", 20.0, 0.0, 0.0, dims),
    placed("C", 0.0, 30.0, 0.0, dims),
  ];

  let formatted = format_container(&boxes);

  assert_eq!(formatted.rows.len(), 2);
  let first_row = &formatted.rows[0];
  assert_eq!(first_row.cells.len(), 2);

  let cell_a = first_row.cells.iter().find(|c| c.content.contains('A')).unwrap();
  assert_eq!(cell_a.content, "2A");
  assert_eq!(cell_a.total_boxes, 2);
  assert_eq!(*cell_a.breakdown.get("A").unwrap(), 2);
}

#[test]
fn utilization_is_volume_over_bounding_box() {
  let dims = Dimensions::new(10.0, 10.0, 10.0);
  let boxes = vec![placed("A", 0.0, 0.0, 0.0, dims)];
  let formatted = format_container(&boxes);
  assert!((formatted.utilization - 1.0).abs() < 1e-9);
}

#[test]
fn empty_container_has_zero_utilization() {
  let formatted = format_container(&[]);
  assert_eq!(formatted.utilization, 0.0);
  assert!(formatted.rows.is_empty());
}
