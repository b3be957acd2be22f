//! Cell-height-fill pass (§4.6.2): top up columns that fell short of the
//! container's height using whatever instances never found a row.

use crate::boxes::{PendingBox, PlacedBox};
use crate::config::{Container, PackingConfig};
use crate::geometry::{Cuboid, Position};
use crate::grouping::group_indices_by;
use crate::orientation::orientations;

const TOLERANCE: f64 = 0.5;

struct Cell {
  x: f64,
  y: f64,
  width: f64,
  depth: f64,
  height: f64,
}

fn build_cells(placed: &[PlacedBox]) -> Vec<Cell> {
  let mut cells = Vec::new();
  for (row_y, row_indices) in group_indices_by(placed, |b| b.position.y, TOLERANCE) {
    let members: Vec<PlacedBox> = row_indices.iter().map(|&i| placed[i].clone()).collect();
    for (cell_x, local) in group_indices_by(&members, |b| b.position.x, TOLERANCE) {
      let global: Vec<usize> = local.iter().map(|&li| row_indices[li]).collect();
      let width = global.iter().map(|&gi| placed[gi].position.x + placed[gi].dimensions.w - cell_x).fold(0.0, f64::max);
      let depth = global.iter().map(|&gi| placed[gi].position.y + placed[gi].dimensions.l - row_y).fold(0.0, f64::max);
      let height = global.iter().map(|&gi| placed[gi].top_z()).fold(0.0, f64::max);
      cells.push(Cell { x: cell_x, y: row_y, width, depth, height });
    }
  }
  cells
}

fn overlaps_any(placed: &[PlacedBox], candidate: &Cuboid) -> bool {
  placed.iter().any(|b| candidate.overlaps(&b.footprint()))
}

/// Greedily place leftover instances on top of columns under 95% of the
/// container height, smallest-height candidate first.
pub fn apply(placed: &mut Vec<PlacedBox>, unplaced: &mut Vec<PendingBox>, container: &Container, _config: &PackingConfig) {
  if unplaced.is_empty() {
    return;
  }

  for cell in build_cells(placed) {
    if cell.height >= 0.95 * container.height {
      continue;
    }
    let mut cell_height = cell.height;
    let mut i = 0;
    while i < unplaced.len() {
      if cell_height >= 0.95 * container.height {
        break;
      }
      let pending = unplaced[i].clone();
      let remaining_height = container.height - cell_height;
      let fit = orientations(pending.dimensions, pending.packing_method)
        .into_iter()
        .filter(|o| o.h <= remaining_height && o.w <= cell.width && o.l <= cell.depth)
        .min_by(|a, b| a.h.partial_cmp(&b.h).unwrap());

      match fit {
        Some(orientation) => {
          let candidate = Cuboid::new(Position::new(cell.x, cell.y, cell_height), orientation);
          if overlaps_any(placed, &candidate) {
            i += 1;
            continue;
          }
          placed.push(pending.place(orientation, candidate.position));
          cell_height += orientation.h;
          unplaced.remove(i);
        }
        None => i += 1,
      }
    }
  }
}

#[cfg(test)]
#[path = "cell_height_fill_test.rs"]
mod cell_height_fill_test;
