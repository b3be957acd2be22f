//! Simple-Index — flat index-order placement (§9).
//!
//! The plainest of the four strategies: no area sort, no row/length
//! reasoning. Box types are expanded and placed in the order they were
//! given, each dropped into the first empty space it fits.

use crate::boxes::{expand_quantity, BoxType, PackingMethod, PendingBox, PlacedBox};
use crate::config::{Container, PackingConfig};
use crate::empty_space::{has_support, EmptySpaceList};

pub struct SimpleIndexOutcome {
  pub placed: Vec<PlacedBox>,
  pub skipped: Vec<PendingBox>,
}

/// Run Simple-Index packing, preserving `box_types`' given order.
pub fn pack(container: &Container, box_types: &[BoxType], config: &PackingConfig) -> SimpleIndexOutcome {
  let expanded: Vec<PendingBox> = box_types.iter().flat_map(expand_quantity).collect();

  let mut spaces = EmptySpaceList::new(container.width, container.length, container.height, config.door_clearance, config.container_walls);
  let mut placed: Vec<PlacedBox> = Vec::with_capacity(expanded.len());
  let mut skipped: Vec<PendingBox> = Vec::new();

  for pending in expanded {
    match spaces.select(pending.dimensions, pending.packing_method) {
      Some((index, orientation)) => {
        let position = spaces.spaces()[index].position;
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

  SimpleIndexOutcome { placed, skipped }
}

#[cfg(test)]
#[path = "simple_index_test.rs"]
mod simple_index_test;
