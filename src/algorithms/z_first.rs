//! Z-First — the primary, most sophisticated strategy (§4.4–§4.6, §9).
//!
//! Row-dominant: a single dominant length governs every box in a row, boxes
//! stack vertically (Z) before the column cursor advances (X), and four
//! post-processing passes raise width/height utilization once every row is
//! packed. Unlike LAFF, Z-First never opens a second container — it stops
//! at `y >= L` and reports whatever didn't fit (§7).

use crate::boxes::{BoxType, PendingBox, PlacedBox};
use crate::config::{Container, PackingConfig};
use crate::orientation::fits_envelope;
use crate::postprocess;
use crate::scheduler::schedule;

#[derive(Debug, Clone)]
pub struct ZFirstReport {
  pub placed: Vec<PlacedBox>,
  /// Box types that can't fit the container in any orientation, on any
  /// axis — skipped before scheduling even starts (§7 `OversizedBox`).
  pub oversized: Vec<BoxType>,
  /// Individual box instances that had room in an orientation but never
  /// found a row (container-length overflow, or a row that gave up on a
  /// group early).
  pub unplaced: Vec<PendingBox>,
}

fn partition_oversized(container: &Container, config: &PackingConfig, box_types: &[BoxType]) -> (Vec<BoxType>, Vec<BoxType>) {
  let usable_length = (container.length - config.door_clearance).max(0.0);
  let mut fits = Vec::new();
  let mut oversized = Vec::new();
  for box_type in box_types {
    if fits_envelope(box_type.dimensions, box_type.packing_method, container.width, usable_length, container.height) {
      fits.push(box_type.clone());
    } else {
      oversized.push(box_type.clone());
    }
  }
  (fits, oversized)
}

/// Run the Z-First strategy end to end: skip what can never fit, schedule
/// rows, then apply the four post-processing passes.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "z_first::pack"))]
pub fn pack(container: &Container, box_types: &[BoxType], config: &PackingConfig) -> ZFirstReport {
  let (fitting, oversized) = partition_oversized(container, config, box_types);

  #[cfg(feature = "tracing")]
  for box_type in &oversized {
    tracing::debug!(code = %box_type.code, "skipping oversized box type, no orientation fits the container");
  }

  let outcome = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("scheduler::schedule").entered();
    schedule(container, &fitting, config)
  };

  let mut placed = outcome.placed;
  let mut unplaced = outcome.unplaced;

  {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("postprocess::apply_all").entered();
    postprocess::apply_all(&mut placed, &mut unplaced, container, config);
  }

  ZFirstReport { placed, oversized, unplaced }
}

#[cfg(test)]
#[path = "z_first_test.rs"]
mod z_first_test;
