//! Cell-move pass (§4.6.1): migrate whole cells from later rows into the
//! unused width of earlier rows, shrinking the container's used length.

use crate::boxes::PlacedBox;
use crate::config::Container;
use crate::geometry::{Cuboid, Position};
use crate::grouping::group_indices_by;

const TOLERANCE: f64 = 0.5;

struct Cell {
  x: f64,
  width: f64,
  height: f64,
  indices: Vec<usize>,
}

fn build_rows(placed: &[PlacedBox]) -> Vec<(f64, Vec<usize>)> {
  let mut rows = group_indices_by(placed, |b| b.position.y, TOLERANCE);
  rows.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
  rows
}

fn build_cells(placed: &[PlacedBox], row_indices: &[usize]) -> Vec<Cell> {
  let members: Vec<PlacedBox> = row_indices.iter().map(|&i| placed[i].clone()).collect();
  group_indices_by(&members, |b| b.position.x, TOLERANCE)
    .into_iter()
    .map(|(rep_x, local)| {
      let global: Vec<usize> = local.iter().map(|&li| row_indices[li]).collect();
      let width = global.iter().map(|&gi| placed[gi].position.x + placed[gi].dimensions.w - rep_x).fold(0.0, f64::max);
      let height = global.iter().map(|&gi| placed[gi].top_z()).fold(0.0, f64::max);
      Cell { x: rep_x, width, height, indices: global }
    })
    .collect()
}

fn move_is_legal(placed: &[PlacedBox], indices: &[usize], dx: f64, dy: f64, container: &Container) -> bool {
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

/// Single pass: for each row (from the back forward), try relocating each
/// of its cells into the first earlier row with enough spare width and a
/// compatible height ceiling. Not exhaustive — mirrors the empty-space
/// merge's single-pass tradeoff.
pub fn apply(placed: &mut Vec<PlacedBox>, container: &Container) {
  let rows = build_rows(placed);
  if rows.len() < 2 {
    return;
  }

  let mut row_state: Vec<(f64, f64)> = rows
    .iter()
    .map(|(_, idxs)| {
      let max_x = idxs.iter().map(|&i| placed[i].position.x + placed[i].dimensions.w).fold(0.0_f64, f64::max);
      let max_h = idxs.iter().map(|&i| placed[i].top_z()).fold(0.0_f64, f64::max);
      (max_x, max_h)
    })
    .collect();

  for later in (1..rows.len()).rev() {
    let cells = build_cells(placed, &rows[later].1);
    for cell in cells {
      for earlier in 0..later {
        let (row_max_x, row_max_height) = row_state[earlier];
        let remaining_width = container.width - row_max_x;
        if cell.width > remaining_width {
          continue;
        }
        if !(cell.height <= row_max_height || row_max_height == 0.0) {
          continue;
        }

        let dx = row_max_x - cell.x;
        let dy = rows[earlier].0 - rows[later].0;
        if move_is_legal(placed, &cell.indices, dx, dy, container) {
          for &gi in &cell.indices {
            placed[gi].position.x += dx;
            placed[gi].position.y += dy;
          }
          row_state[earlier] = (row_max_x + cell.width, row_max_height.max(cell.height));
          break;
        }
      }
    }
  }
}

#[cfg(test)]
#[path = "cell_move_test.rs"]
mod cell_move_test;
