//! Empty-space engine — the LAFF substrate (C3, §4.2).
//!
//! Maintains an unordered list of non-overlapping empty cuboids. Placing a
//! box removes the space it was taken from and inserts up to three
//! Guillotine-style remainders, then opportunistically merges adjacent
//! congruent spaces back together.

use crate::boxes::PackingMethod;
use crate::geometry::{Cuboid, Dimensions, Position};
use crate::orientation::smallest_fitting_orientation;

/// Face-adjacency merge tolerance and stack-support tolerance (§4.2).
const MERGE_EPS: f64 = 0.1;
pub const SUPPORT_EPS: f64 = 0.1;

#[derive(Clone, Debug, Default)]
pub struct EmptySpaceList {
  spaces: Vec<Cuboid>,
}

impl EmptySpaceList {
  /// A single cuboid covering the usable container volume (§4.2).
  pub fn new(container_width: f64, container_length: f64, container_height: f64, door_clearance: f64, wall: f64) -> Self {
    let position = Position::new(wall, door_clearance, 0.0);
    let dimensions = Dimensions::new(container_width - 2.0 * wall, container_length - door_clearance - wall, container_height - wall);
    Self {
      spaces: vec![Cuboid::new(position, dimensions)],
    }
  }

  pub fn spaces(&self) -> &[Cuboid] {
    &self.spaces
  }

  pub fn is_empty(&self) -> bool {
    self.spaces.is_empty()
  }

  /// Select the empty space that best fits `dims` under `method`: lowest
  /// `z`, then largest base area, then smallest height. Returns the index
  /// of the chosen space plus the orientation to place it in.
  pub fn select(&self, dims: Dimensions, method: PackingMethod) -> Option<(usize, Dimensions)> {
    let mut candidates: Vec<(usize, &Cuboid)> = self.spaces.iter().enumerate().collect();
    candidates.sort_by(|(_, a), (_, b)| {
      a.position
        .z
        .partial_cmp(&b.position.z)
        .unwrap()
        .then_with(|| b.dimensions.base_area().partial_cmp(&a.dimensions.base_area()).unwrap())
        .then_with(|| a.dimensions.h.partial_cmp(&b.dimensions.h).unwrap())
    });

    for (idx, space) in candidates {
      if let Some(orientation) = smallest_fitting_orientation(dims, method, space.dimensions) {
        return Some((idx, orientation));
      }
    }
    None
  }

  /// Remove the space at `index`, place `orientation` at its minimum
  /// corner, insert the right/front/top remainders, then merge.
  pub fn place(&mut self, index: usize, orientation: Dimensions) -> Cuboid {
    let used = self.spaces.remove(index);
    let placed = Cuboid::new(used.position, orientation);

    let mut remainders = Vec::with_capacity(3);

    // Right remainder (x-axis).
    if used.dimensions.w > orientation.w {
      remainders.push(Cuboid::new(
        Position::new(used.position.x + orientation.w, used.position.y, used.position.z),
        Dimensions::new(used.dimensions.w - orientation.w, used.dimensions.l, used.dimensions.h),
      ));
    }
    // Front remainder (y-axis), limited to the placed box's x/z footprint.
    if used.dimensions.l > orientation.l {
      remainders.push(Cuboid::new(
        Position::new(used.position.x, used.position.y + orientation.l, used.position.z),
        Dimensions::new(orientation.w, used.dimensions.l - orientation.l, used.dimensions.h),
      ));
    }
    // Top remainder (z-axis), limited to the placed box's x/y footprint.
    if used.dimensions.h > orientation.h {
      remainders.push(Cuboid::new(
        Position::new(used.position.x, used.position.y, used.position.z + orientation.h),
        Dimensions::new(orientation.w, orientation.l, used.dimensions.h - orientation.h),
      ));
    }

    self.spaces.extend(remainders);
    self.merge();
    placed
  }

  /// Opportunistically coalesce pairs of cuboids sharing a full face.
  /// Not exhaustive: a single pass over the current list.
  fn merge(&mut self) {
    if self.spaces.len() <= 1 {
      return;
    }
    let mut merged: Vec<Cuboid> = Vec::with_capacity(self.spaces.len());
    let mut used = vec![false; self.spaces.len()];

    for i in 0..self.spaces.len() {
      if used[i] {
        continue;
      }
      let mut current = self.spaces[i];
      used[i] = true;
      for j in (i + 1)..self.spaces.len() {
        if used[j] {
          continue;
        }
        if can_merge(&current, &self.spaces[j]) {
          current = merge_two(&current, &self.spaces[j]);
          used[j] = true;
        }
      }
      merged.push(current);
    }
    self.spaces = merged;
  }
}

fn can_merge(a: &Cuboid, b: &Cuboid) -> bool {
  let same_y_z = (a.position.y - b.position.y).abs() < MERGE_EPS
    && (a.position.z - b.position.z).abs() < MERGE_EPS
    && (a.dimensions.l - b.dimensions.l).abs() < MERGE_EPS
    && (a.dimensions.h - b.dimensions.h).abs() < MERGE_EPS;
  let same_x_z = (a.position.x - b.position.x).abs() < MERGE_EPS
    && (a.position.z - b.position.z).abs() < MERGE_EPS
    && (a.dimensions.w - b.dimensions.w).abs() < MERGE_EPS
    && (a.dimensions.h - b.dimensions.h).abs() < MERGE_EPS;
  let same_x_y = (a.position.x - b.position.x).abs() < MERGE_EPS
    && (a.position.y - b.position.y).abs() < MERGE_EPS
    && (a.dimensions.w - b.dimensions.w).abs() < MERGE_EPS
    && (a.dimensions.l - b.dimensions.l).abs() < MERGE_EPS;
  same_y_z || same_x_z || same_x_y
}

fn merge_two(a: &Cuboid, b: &Cuboid) -> Cuboid {
  let min_x = a.position.x.min(b.position.x);
  let min_y = a.position.y.min(b.position.y);
  let min_z = a.position.z.min(b.position.z);
  let max_x = a.max_x().max(b.max_x());
  let max_y = a.max_y().max(b.max_y());
  let max_z = a.max_z().max(b.max_z());
  Cuboid::new(Position::new(min_x, min_y, min_z), Dimensions::new(max_x - min_x, max_y - min_y, max_z - min_z))
}

/// PRE_PACK stack-support check (§4.2): a placement with `z > 0` is legal
/// only if some already-placed box's top face lies within tolerance
/// directly beneath it and their x/y footprints overlap.
pub fn has_support(position: Position, dimensions: Dimensions, placed: &[crate::boxes::PlacedBox]) -> bool {
  if position.z <= 0.0 {
    return true;
  }
  placed.iter().any(|box_| {
    (box_.top_z() - position.z).abs() < SUPPORT_EPS
      && crate::geometry::footprints_overlap(position, dimensions, box_.position, box_.dimensions)
  })
}

#[cfg(test)]
#[path = "empty_space_test.rs"]
mod empty_space_test;
