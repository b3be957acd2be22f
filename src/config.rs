//! Container record, algorithm selector, and tunable configuration (§6).

use crate::geometry::Dimensions;

/// A container's inner extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
  pub width: f64,
  pub length: f64,
  pub height: f64,
}

impl Container {
  pub fn new(width: f64, length: f64, height: f64) -> Self {
    Self { width, length, height }
  }

  pub fn as_dimensions(&self) -> Dimensions {
    Dimensions::new(self.width, self.length, self.height)
  }
}

/// Which packing strategy to run (§6, §9).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// Area-first packing with Guillotine-style empty-space splitting.
  Laff,
  /// Row-dominant, Z-first stacking. The primary, most sophisticated variant.
  ZFirst,
  /// Flat index-order placement with no row/length reasoning.
  SimpleIndex,
  /// Manual row template read from an external JSON file.
  ///
  /// Not implemented: the template schema is referenced but not specified
  /// by the source material this crate was built from (see DESIGN.md).
  Guided,
}

/// Weights combining width-utilization and quantity when the dominant-length
/// selector scores a candidate row length (§4.3).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DominantLengthWeights {
  pub width_utilization: f64,
  pub quantity: f64,
}

impl Default for DominantLengthWeights {
  fn default() -> Self {
    Self {
      width_utilization: 0.6,
      quantity: 0.4,
    }
  }
}

/// Weights the row packer uses when scoring candidate orientations (§4.4).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationWeights {
  pub width: f64,
  pub length_match: f64,
}

impl OrientationWeights {
  pub const LOW_UTILIZATION: Self = Self {
    width: 0.9,
    length_match: 0.1,
  };
  pub const DEFAULT: Self = Self {
    width: 0.7,
    length_match: 0.3,
  };
}

/// Tunable parameters for every algorithm (§6). Defaults match the
/// documented source-of-truth values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackingConfig {
  /// Y offset the first row starts at.
  pub door_clearance: f64,
  /// Reserved wall buffer on the width axis (LAFF only; disabled by
  /// default — see DESIGN.md's Open Question on this buffer).
  pub container_walls: f64,
  /// Reserved spacing between items (LAFF only; not enforced by default).
  pub between_items: f64,
  /// Initial length-matching tolerance used by the row packer.
  pub initial_tolerance: f64,
  /// Tolerance used when a secondary dominant length is also accepted.
  pub secondary_tolerance: f64,
  /// Tolerance ceiling progressive relaxation will raise up to.
  pub max_tolerance: f64,
  pub dominant_length_weights: DominantLengthWeights,
  /// Minimum secondary-length gap from the primary to be considered
  /// distinct (§4.3).
  pub secondary_length_gap: f64,
  /// Minimum fraction of the pool the secondary length must cover (§4.3).
  pub secondary_length_min_share: f64,
}

impl Default for PackingConfig {
  fn default() -> Self {
    Self {
      door_clearance: 10.0,
      container_walls: 0.0,
      between_items: 0.5,
      initial_tolerance: 1.0,
      secondary_tolerance: 2.0,
      max_tolerance: 3.0,
      dominant_length_weights: DominantLengthWeights::default(),
      secondary_length_gap: 3.0,
      secondary_length_min_share: 0.30,
    }
  }
}

impl PackingConfig {
  pub fn with_door_clearance(mut self, value: f64) -> Self {
    self.door_clearance = value;
    self
  }

  pub fn with_container_walls(mut self, value: f64) -> Self {
    self.container_walls = value;
    self
  }

  pub fn with_between_items(mut self, value: f64) -> Self {
    self.between_items = value;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_documented_values() {
    let config = PackingConfig::default();
    assert_eq!(config.door_clearance, 10.0);
    assert_eq!(config.container_walls, 0.0);
    assert_eq!(config.between_items, 0.5);
    assert_eq!(config.dominant_length_weights.width_utilization, 0.6);
    assert_eq!(config.dominant_length_weights.quantity, 0.4);
  }

  #[test]
  fn with_methods_build_on_defaults_without_mutating_other_fields() {
    let config = PackingConfig::default().with_door_clearance(0.0).with_container_walls(2.0);
    assert_eq!(config.door_clearance, 0.0);
    assert_eq!(config.container_walls, 2.0);
    assert_eq!(config.between_items, 0.5);
  }

  #[test]
  fn orientation_weight_presets_differ() {
    assert_ne!(OrientationWeights::DEFAULT.width, OrientationWeights::LOW_UTILIZATION.width);
  }

  #[test]
  fn container_as_dimensions_preserves_extents() {
    let container = Container::new(10.0, 20.0, 30.0);
    let dims = container.as_dimensions();
    assert_eq!((dims.w, dims.l, dims.h), (10.0, 20.0, 30.0));
  }
}
