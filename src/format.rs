//! Output formatter (C8, §6's downstream-formatter contract).
//!
//! The core isn't required to render wire JSON or serve HTTP (§1's
//! out-of-scope list), but §6 names row/cell grouping, code aggregation,
//! and utilization as a contract the core must satisfy — so this module
//! implements that grouping in-core, leaving only transport/serialization
//! external (see DESIGN.md's Open Question decision).

use std::collections::BTreeMap;

use crate::boxes::PlacedBox;
use crate::grouping::group_indices_by;

const TOLERANCE: f64 = 0.5;

/// One vertical column within a row: boxes sharing an `x` origin.
#[derive(Clone, Debug)]
pub struct FormattedCell {
  pub x: f64,
  pub y: f64,
  pub width: f64,
  pub length: f64,
  pub height: f64,
  /// `"<n><code>+<n><code>…"` in ascending code order.
  pub content: String,
  pub total_boxes: usize,
  pub breakdown: BTreeMap<String, usize>,
}

/// A band of boxes sharing a `y` origin.
#[derive(Clone, Debug)]
pub struct FormattedRow {
  pub y: f64,
  pub height: f64,
  pub cells: Vec<FormattedCell>,
}

/// The row/cell view of one packed container, plus its volumetric
/// utilization.
#[derive(Clone, Debug)]
pub struct FormattedContainer {
  pub rows: Vec<FormattedRow>,
  pub total_boxes: usize,
  pub utilization: f64,
}

/// Group `placed` into rows (by `y`) then cells (by `x` within each row,
/// tolerance 0.5 on both axes) and compute the container's volumetric
/// utilization.
pub fn format_container(placed: &[PlacedBox]) -> FormattedContainer {
  let mut rows: Vec<FormattedRow> = Vec::new();

  let mut row_groups = group_indices_by(placed, |b| b.position.y, TOLERANCE);
  row_groups.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

  for (row_y, row_indices) in row_groups {
    let members: Vec<PlacedBox> = row_indices.iter().map(|&i| placed[i].clone()).collect();
    let mut cell_groups = group_indices_by(&members, |b| b.position.x, TOLERANCE);
    cell_groups.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

    let mut cells = Vec::with_capacity(cell_groups.len());
    let mut row_height = 0.0_f64;

    for (cell_x, local_indices) in cell_groups {
      let cell_boxes: Vec<&PlacedBox> = local_indices.iter().map(|&li| &members[li]).collect();

      let min_x = cell_boxes.iter().map(|b| b.position.x).fold(f64::INFINITY, f64::min);
      let max_x = cell_boxes.iter().map(|b| b.position.x + b.dimensions.w).fold(0.0, f64::max);
      let min_y = cell_boxes.iter().map(|b| b.position.y).fold(f64::INFINITY, f64::min);
      let max_y = cell_boxes.iter().map(|b| b.position.y + b.dimensions.l).fold(0.0, f64::max);
      let cell_height = cell_boxes.iter().map(|b| b.top_z()).fold(0.0, f64::max);

      let (content, breakdown) = aggregate_codes(&cell_boxes);
      row_height = row_height.max(cell_height);

      cells.push(FormattedCell {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        length: max_y - min_y,
        height: cell_height,
        content,
        total_boxes: cell_boxes.len(),
        breakdown,
      });
    }

    rows.push(FormattedRow { y: row_y, height: row_height, cells });
  }

  FormattedContainer {
    rows,
    total_boxes: placed.len(),
    utilization: volumetric_utilization(placed),
  }
}

/// `"<n><code>+<n><code>…"` in ascending code order, plus the underlying
/// per-code counts (§6).
fn aggregate_codes(boxes: &[&PlacedBox]) -> (String, BTreeMap<String, usize>) {
  let mut counts: BTreeMap<String, usize> = BTreeMap::new();
  for b in boxes {
    *counts.entry(b.code.clone()).or_insert(0) += 1;
  }
  let content = counts.iter().map(|(code, count)| format!("{count}{code}")).collect::<Vec<_>>().join("+");
  (content, counts)
}

/// `Σ (w·l·h) / (bounding-box volume)` across every placed box (§6).
fn volumetric_utilization(placed: &[PlacedBox]) -> f64 {
  if placed.is_empty() {
    return 0.0;
  }
  let used_volume: f64 = placed.iter().map(|b| b.dimensions.volume()).sum();

  let min_x = placed.iter().map(|b| b.position.x).fold(f64::INFINITY, f64::min);
  let max_x = placed.iter().map(|b| b.position.x + b.dimensions.w).fold(0.0, f64::max);
  let min_y = placed.iter().map(|b| b.position.y).fold(f64::INFINITY, f64::min);
  let max_y = placed.iter().map(|b| b.position.y + b.dimensions.l).fold(0.0, f64::max);
  let min_z = placed.iter().map(|b| b.position.z).fold(f64::INFINITY, f64::min);
  let max_z = placed.iter().map(|b| b.position.z + b.dimensions.h).fold(0.0, f64::max);

  let bounding_volume = (max_x - min_x) * (max_y - min_y) * (max_z - min_z);
  if bounding_volume <= 0.0 {
    return 0.0;
  }
  used_volume / bounding_volume
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
