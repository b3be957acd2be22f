//! Post-processing passes (C7, §4.6).
//!
//! Run in order after row scheduling completes: cell move, cell-height
//! fill, width-gap fill, row consolidation — then cell-height fill and
//! width-gap fill run once more, since consolidation can open new room.
//! Every pass is best-effort: a move or insertion that would overlap or
//! spill outside the container is simply skipped.

pub mod cell_height_fill;
pub mod cell_move;
pub mod row_consolidation;
pub mod width_gap_fill;

use crate::boxes::{PendingBox, PlacedBox};
use crate::config::{Container, PackingConfig};

/// Apply the full post-processing sequence in place.
pub fn apply_all(placed: &mut Vec<PlacedBox>, unplaced: &mut Vec<PendingBox>, container: &Container, config: &PackingConfig) {
  cell_move::apply(placed, container);
  cell_height_fill::apply(placed, unplaced, container, config);
  width_gap_fill::apply(placed, unplaced, container, config);
  row_consolidation::apply(placed, container);
  cell_height_fill::apply(placed, unplaced, container, config);
  width_gap_fill::apply(placed, unplaced, container, config);
}
