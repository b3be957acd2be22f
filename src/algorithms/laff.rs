//! LAFF — Largest-Area-First-Fit (§4.2 substrate, §9 algorithm dispatch).
//!
//! Sorts every box instance by descending base area (after grouping by
//! material and purchasing document), then greedily drops each into the
//! best-fitting empty space, skipping instances that don't fit or that
//! would lack vertical support under PRE_PACK.

use crate::boxes::{expand_quantity, BoxType, PackingMethod, PendingBox, PlacedBox};
use crate::config::{Container, PackingConfig};
use crate::empty_space::{has_support, EmptySpaceList};

pub struct LaffOutcome {
  pub placed: Vec<PlacedBox>,
  /// Instances that never found a legal space; reported, not retried.
  pub skipped: Vec<PendingBox>,
}

fn compare(a: &BoxType, b: &BoxType) -> std::cmp::Ordering {
  a.material
    .cmp(&b.material)
    .then_with(|| a.purchasing_doc.cmp(&b.purchasing_doc))
    .then_with(|| a.dimensions.h.partial_cmp(&b.dimensions.h).unwrap())
    .then_with(|| b.dimensions.base_area().partial_cmp(&a.dimensions.base_area()).unwrap())
    .then_with(|| b.quantity.cmp(&a.quantity))
}

/// Run LAFF over every box type's expanded instances.
pub fn pack(container: &Container, box_types: &[BoxType], config: &PackingConfig) -> LaffOutcome {
  let mut sorted: Vec<BoxType> = box_types.to_vec();
  sorted.sort_by(compare);

  let expanded: Vec<PendingBox> = sorted.iter().flat_map(expand_quantity).collect();

  let mut spaces = EmptySpaceList::new(container.width, container.length, container.height, config.door_clearance, config.container_walls);
  let mut placed: Vec<PlacedBox> = Vec::with_capacity(expanded.len());
  let mut skipped: Vec<PendingBox> = Vec::new();

  for pending in expanded {
    match spaces.select(pending.dimensions, pending.packing_method) {
      Some((index, orientation)) => {
        let cuboid = spaces.spaces()[index];
        let position = cuboid.position;
        if pending.packing_method == PackingMethod::PrePack && !has_support(position, orientation, &placed) {
          skipped.push(pending);
          continue;
        }
        let placed_cuboid = spaces.place(index, orientation);
        placed.push(pending.place(placed_cuboid.dimensions, placed_cuboid.position));
      }
      None => skipped.push(pending),
    }
  }

  LaffOutcome { placed, skipped }
}

/// Fraction of the container's usable volume occupied by `placed` (§4.2
/// `calculate_utilization`).
pub fn utilization(container: &Container, placed: &[PlacedBox]) -> f64 {
  let container_volume = container.as_dimensions().volume();
  if container_volume <= 0.0 {
    return 0.0;
  }
  let used: f64 = placed.iter().map(|b| b.dimensions.volume()).sum();
  used / container_volume
}

#[cfg(test)]
#[path = "laff_test.rs"]
mod laff_test;
