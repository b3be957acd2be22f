//! Row-consolidation pass (§4.6.4): merge row pairs side by side when their
//! combined width still fits the container, shrinking the row count.

use crate::boxes::PlacedBox;
use crate::config::Container;
use crate::geometry::{Cuboid, Position};
use crate::grouping::group_indices_by;

const TOLERANCE: f64 = 0.5;

struct RowStat {
  y: f64,
  width: f64,
  height: f64,
  indices: Vec<usize>,
}

fn build_rows(placed: &[PlacedBox]) -> Vec<RowStat> {
  let mut rows: Vec<RowStat> = group_indices_by(placed, |b| b.position.y, TOLERANCE)
    .into_iter()
    .map(|(y, indices)| {
      let width = indices.iter().map(|&i| placed[i].position.x + placed[i].dimensions.w).fold(0.0, f64::max);
      let height = indices.iter().map(|&i| placed[i].top_z()).fold(0.0, f64::max);
      RowStat { y, width, height, indices }
    })
    .collect();
  rows.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap());
  rows
}

/// True if shifting every box in `indices` by `(dx, dy)` keeps it inside the
/// container and clear of every box not in `indices`, mirroring
/// `cell_move.rs`'s `move_is_legal`.
fn merge_is_legal(placed: &[PlacedBox], indices: &[usize], dx: f64, dy: f64, container: &Container) -> bool {
  for &i in indices {
    let moved = Cuboid::new(Position::new(placed[i].position.x + dx, placed[i].position.y + dy, placed[i].position.z), placed[i].dimensions);
    if moved.position.x < 0.0 || moved.max_x() > container.width || moved.position.y < 0.0 || moved.max_y() > container.length || moved.max_z() > container.height {
      return false;
    }
    for (j, other) in placed.iter().enumerate() {
      if indices.contains(&j) {
        continue;
      }
      if moved.overlaps(&other.footprint()) {
        return false;
      }
    }
  }
  true
}

/// Try one merge: the first row pair `(i, j)`, `i < j`, whose combined width
/// fits `container.width`, whose taller row still fits `container.height`,
/// and whose shifted boxes land inside the container clear of every row they
/// don't belong to. Shifts row `j`'s boxes to sit flush against row `i`'s
/// right edge and pulls them onto row `i`'s `y`. Returns whether a merge
/// happened.
fn try_merge_one(placed: &mut [PlacedBox], container: &Container) -> bool {
  let rows = build_rows(placed);
  for i in 0..rows.len() {
    for j in (i + 1)..rows.len() {
      if rows[i].width + rows[j].width > container.width {
        continue;
      }
      if rows[i].height.max(rows[j].height) > container.height {
        continue;
      }
      let dx = rows[i].width;
      let dy = rows[i].y - rows[j].y;
      if !merge_is_legal(placed, &rows[j].indices, dx, dy, container) {
        continue;
      }
      for &idx in &rows[j].indices {
        placed[idx].position.x += dx;
        placed[idx].position.y += dy;
      }
      return true;
    }
  }
  false
}

/// Repeatedly merge row pairs until a full pass finds nothing to merge, or
/// the iteration cap (the initial row count) is reached (§4.6.4).
pub fn apply(placed: &mut Vec<PlacedBox>, container: &Container) {
  if placed.is_empty() {
    return;
  }
  let cap = build_rows(placed).len();
  for _ in 0..cap {
    if !try_merge_one(placed, container) {
      break;
    }
  }
}

#[cfg(test)]
#[path = "row_consolidation_test.rs"]
mod row_consolidation_test;
