//! Width-gap-fill pass (§4.6.3): spend any leftover row width on whatever
//! instances never found a row, ignoring length tolerance entirely.

use crate::boxes::{PendingBox, PlacedBox};
use crate::config::{Container, PackingConfig};
use crate::geometry::{Cuboid, Position};
use crate::grouping::group_indices_by;
use crate::orientation::orientations;

const TOLERANCE: f64 = 0.5;
const MIN_GAP: f64 = 5.0;

struct Row {
  y: f64,
  depth: f64,
  max_x: f64,
}

fn build_rows(placed: &[PlacedBox]) -> Vec<Row> {
  group_indices_by(placed, |b| b.position.y, TOLERANCE)
    .into_iter()
    .map(|(y, indices)| {
      let depth = indices.iter().map(|&i| placed[i].position.y + placed[i].dimensions.l - y).fold(0.0, f64::max);
      let max_x = indices.iter().map(|&i| placed[i].position.x + placed[i].dimensions.w).fold(0.0, f64::max);
      Row { y, depth, max_x }
    })
    .collect()
}

fn overlaps_any(placed: &[PlacedBox], candidate: &Cuboid) -> bool {
  placed.iter().any(|b| candidate.overlaps(&b.footprint()))
}

/// Greedily widen each row into its unused width using the leftover pool,
/// widest-fitting-orientation first.
pub fn apply(placed: &mut Vec<PlacedBox>, unplaced: &mut Vec<PendingBox>, container: &Container, _config: &PackingConfig) {
  if unplaced.is_empty() {
    return;
  }

  for row in build_rows(placed) {
    let mut cursor_x = row.max_x;
    loop {
      let gap = container.width - cursor_x;
      if gap < MIN_GAP {
        break;
      }

      let mut best: Option<(usize, crate::geometry::Dimensions)> = None;
      for (i, pending) in unplaced.iter().enumerate() {
        let fit = orientations(pending.dimensions, pending.packing_method)
          .into_iter()
          .filter(|o| o.w <= gap && o.l <= row.depth && o.h <= container.height)
          .max_by(|a, b| a.w.partial_cmp(&b.w).unwrap());
        if let Some(o) = fit {
          if best.as_ref().map_or(true, |(_, bo)| o.w > bo.w) {
            best = Some((i, o));
          }
        }
      }

      match best {
        Some((i, orientation)) => {
          let candidate = Cuboid::new(Position::new(cursor_x, row.y, 0.0), orientation);
          if overlaps_any(placed, &candidate) {
            break;
          }
          let pending = unplaced.remove(i);
          placed.push(pending.place(orientation, candidate.position));
          cursor_x += orientation.w;
        }
        None => break,
      }
    }
  }
}

#[cfg(test)]
#[path = "width_gap_fill_test.rs"]
mod width_gap_fill_test;
