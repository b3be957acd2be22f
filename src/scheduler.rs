//! Row scheduler (C6, §4.5).
//!
//! Groups box types by `sort_order`, and for each group advances a Y-cursor
//! row by row: selecting a dominant length, handing the remaining candidates
//! to the row packer, and stopping a group once its boxes are exhausted or
//! the container's length is spent. Two trailing steps run after each row:
//! a capped row-gap-fill borrowing from other groups, and an L* retry when
//! the row came out short and sparse.

use std::collections::HashMap;

use crate::boxes::{expand_quantity, BoxGroupKey, BoxType, PendingBox, PlacedBox};
use crate::config::{Container, PackingConfig};
use crate::dominant_length::select_dominant_length_with_gap;
use crate::row_packer::{pack_row, row_gap_fill, RowPackRequest};

pub struct ScheduleOutcome {
  pub placed: Vec<PlacedBox>,
  /// Whatever never found a row: container-length overflow (§7 `Overflow`),
  /// or a group whose row stopped producing placements before its
  /// quantity drained.
  pub unplaced: Vec<PendingBox>,
}

/// Remaining quantity per box-type group, decremented as rows place boxes.
struct RemainingCounts {
  counts: HashMap<BoxGroupKey, u32>,
  templates: HashMap<BoxGroupKey, BoxType>,
}

impl RemainingCounts {
  fn new(box_types: &[BoxType]) -> Self {
    let mut counts = HashMap::new();
    let mut templates = HashMap::new();
    for box_type in box_types {
      let key = box_type.group_key();
      *counts.entry(key.clone()).or_insert(0) += box_type.quantity;
      templates.entry(key).or_insert_with(|| box_type.clone());
    }
    Self { counts, templates }
  }

  fn total_remaining(&self) -> u32 {
    self.counts.values().sum()
  }

  /// Candidate box types across every still-remaining group, shaped like
  /// their original `BoxType` but with `quantity` replaced by what's left.
  fn candidates(&self) -> Vec<BoxType> {
    self
      .counts
      .iter()
      .filter(|(_, &qty)| qty > 0)
      .map(|(key, &qty)| {
        let mut template = self.templates[key].clone();
        template.quantity = qty;
        template
      })
      .collect()
  }

  fn candidates_for_sort_order(&self, sort_order: i32) -> Vec<BoxType> {
    self.candidates().into_iter().filter(|b| b.sort_order == sort_order).collect()
  }

  fn candidates_excluding_sort_order(&self, sort_order: i32) -> Vec<BoxType> {
    self.candidates().into_iter().filter(|b| b.sort_order != sort_order).collect()
  }

  fn record_placements(&mut self, placed: &[PlacedBox]) {
    for p in placed {
      let key = p.group_key();
      if let Some(count) = self.counts.get_mut(&key) {
        *count = count.saturating_sub(1);
      }
    }
  }
}

/// §4.5 step 3: borrow up to 5 boxes from other groups into the row's own
/// unused width, without opening a new row.
const ROW_GAP_FILL_CAP: u32 = 5;
/// §4.5 step 4 thresholds: retry with the next `L*` candidate when a row
/// both falls short on height and placed few of its candidates.
const RETRY_HEIGHT_FRACTION: f64 = 0.50;
const RETRY_PLACED_FRACTION: f64 = 0.30;

/// Run the full row-by-row scheduling pass over every `sort_order` group, in
/// ascending `sort_order` (lower values pack first, §4.5 step 1).
pub fn schedule(container: &Container, box_types: &[BoxType], config: &PackingConfig) -> ScheduleOutcome {
  let mut remaining = RemainingCounts::new(box_types);
  let mut placed = Vec::new();
  let mut current_y = config.door_clearance;

  let mut sort_orders: Vec<i32> = box_types.iter().map(|b| b.sort_order).collect();
  sort_orders.sort_unstable();
  sort_orders.dedup();

  for sort_order in sort_orders {
    loop {
      if current_y >= container.length {
        break;
      }
      let group_candidates = remaining.candidates_for_sort_order(sort_order);
      if group_candidates.is_empty() {
        break;
      }

      let expanded_for_length: Vec<_> = group_candidates.iter().flat_map(crate::boxes::expand_quantity).collect();
      let candidate_pool_size = expanded_for_length.len();
      let dominant = select_dominant_length_with_gap(
        &expanded_for_length,
        container.width,
        config.dominant_length_weights,
        config.secondary_length_gap,
        config.secondary_length_min_share,
      );

      let remainder = remaining.candidates();
      let mut outcome = pack_row(&RowPackRequest {
        candidates: &group_candidates,
        row_y: current_y,
        container_width: container.width,
        container_height: container.height,
        dominant: &dominant,
        remainder: Some(&remainder),
        config,
      });

      // §4.5 step 4: the row came out short and sparse — retry with the
      // next-best `L*` candidate and keep whichever result is better.
      let placed_fraction = if candidate_pool_size > 0 { outcome.placed.len() as f64 / candidate_pool_size as f64 } else { 1.0 };
      if outcome.height_used() < RETRY_HEIGHT_FRACTION * container.height && placed_fraction < RETRY_PLACED_FRACTION {
        for retry_candidate in dominant.top3.iter().filter(|c| (c.length - dominant.primary).abs() > f64::EPSILON) {
          let mut retry_dominant = dominant.clone();
          retry_dominant.primary = retry_candidate.length;
          retry_dominant.secondary = None;
          let retry_outcome = pack_row(&RowPackRequest {
            candidates: &group_candidates,
            row_y: current_y,
            container_width: container.width,
            container_height: container.height,
            dominant: &retry_dominant,
            remainder: Some(&remainder),
            config,
          });
          if retry_outcome.placed.len() > outcome.placed.len() || retry_outcome.height_used() > outcome.height_used() {
            outcome = retry_outcome;
          }
        }
      }

      if outcome.placed.is_empty() {
        // Nothing fit at this row for this group; don't spin forever.
        break;
      }

      // Net out what this row already placed, including whatever its own
      // width-gap fill pulled from `remainder`, before computing donors.
      // `remainder` is a pre-row snapshot, so without this, step 3 below
      // would see stale counts and could borrow instances `pack_row`
      // already placed (§3 invariant 4).
      let row_width_utilization = outcome.width_utilization(container.width);
      remaining.record_placements(&outcome.placed);

      // §4.5 step 3: row width utilization fell short — borrow a handful of
      // boxes from other groups into the existing gap, no new row.
      if row_width_utilization < 0.80 {
        let donors = remaining.candidates_excluding_sort_order(sort_order);
        if !donors.is_empty() {
          let before = outcome.placed.len();
          row_gap_fill(&mut outcome.placed, &donors, container.width, container.height, current_y, ROW_GAP_FILL_CAP);
          remaining.record_placements(&outcome.placed[before..]);
        }
      }

      let row_depth = outcome.placed.iter().map(|b| b.dimensions.l).fold(0.0_f64, f64::max);
      placed.extend(outcome.placed);
      current_y += row_depth;

      if remaining.total_remaining() == 0 {
        return ScheduleOutcome { placed, unplaced: Vec::new() };
      }
    }
  }

  let unplaced = remaining.candidates().iter().flat_map(expand_quantity).collect();
  ScheduleOutcome { placed, unplaced }
}

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;
