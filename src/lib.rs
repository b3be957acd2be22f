//! Container-loading packer (§1–§9).
//!
//! Four interchangeable strategies — Z-First (the primary, row-dominant
//! variant), LAFF (area-first with Guillotine-style empty-space splitting),
//! Simple-Index (flat index order), and Guided (unimplemented, see
//! [`algorithms::guided`]) — place box types into a rectangular container
//! and report what landed where. [`pack`] is the single entry point; input
//! validation happens here, at the boundary, so [`error::PackingError::InvalidInput`]
//! never crosses into a core packing loop.

pub mod algorithms;
pub mod boxes;
pub mod config;
pub mod dominant_length;
pub mod empty_space;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grouping;
pub mod orientation;
pub mod postprocess;
pub mod row_packer;
pub mod scheduler;

pub use boxes::{BoxGroupKey, BoxType, PackingMethod, PendingBox, PlacedBox};
pub use config::{Algorithm, Container, DominantLengthWeights, OrientationWeights, PackingConfig};
pub use error::{PackingError, PackingResult};
pub use geometry::{Cuboid, Dimensions, Position};

/// A container's box placements after one run of [`pack`].
#[derive(Clone, Debug)]
pub struct PackedContainer {
  pub container_id: u32,
  pub dimensions: Container,
  pub boxes: Vec<PlacedBox>,
}

impl PackedContainer {
  fn new(container_id: u32, dimensions: Container, boxes: Vec<PlacedBox>) -> Self {
    Self { container_id, dimensions, boxes }
  }
}

/// The full result of one [`pack`] call: every container that was opened,
/// plus whatever couldn't be placed at all (§7).
#[derive(Clone, Debug, Default)]
pub struct PackingReport {
  pub containers: Vec<PackedContainer>,
  /// Box types no orientation fits the container, on any axis — reported,
  /// never retried, because a fresh container wouldn't help either.
  pub oversized: Vec<BoxType>,
  /// Individual instances that had room in some orientation but never
  /// found a slot in the containers that were opened.
  pub unplaced: Vec<PendingBox>,
}

impl PackingReport {
  fn single(container_id: u32, dimensions: Container, boxes: Vec<PlacedBox>) -> Self {
    Self {
      containers: vec![PackedContainer::new(container_id, dimensions, boxes)],
      oversized: Vec::new(),
      unplaced: Vec::new(),
    }
  }
}

/// Reject non-positive container extents, non-positive box extents, and
/// zero/absurd quantities before any algorithm runs (§7 `InvalidInput`).
fn validate(container: &Container, box_types: &[BoxType]) -> PackingResult<()> {
  if container.width <= 0.0 || container.length <= 0.0 || container.height <= 0.0 {
    return Err(PackingError::InvalidInput(format!(
      "container dimensions must be positive, got {}x{}x{}",
      container.width, container.length, container.height
    )));
  }
  for box_type in box_types {
    let d = box_type.dimensions;
    if d.w <= 0.0 || d.l <= 0.0 || d.h <= 0.0 {
      return Err(PackingError::InvalidInput(format!("box {} has non-positive dimensions {}x{}x{}", box_type.code, d.w, d.l, d.h)));
    }
    if box_type.quantity == 0 {
      return Err(PackingError::InvalidInput(format!("box {} has zero quantity", box_type.code)));
    }
  }
  Ok(())
}

/// Rebuild `BoxType`s (quantity 1 each) from leftover pending instances, so
/// a fresh container can be scheduled against them (LAFF's overflow path,
/// §7).
fn regroup(pending: Vec<PendingBox>) -> Vec<BoxType> {
  pending
    .into_iter()
    .map(|p| {
      BoxType::new(p.code, p.dimensions, 1, p.packing_method)
        .with_material(p.material)
        .with_purchasing_doc(p.purchasing_doc)
        .with_sort_order(p.sort_order)
    })
    .collect()
}

/// LAFF opens a new container whenever instances are left over, stopping
/// only once every instance is placed or a box type is oversized even for
/// a fresh container (§7). `max_containers` bounds the loop; in practice
/// runs converge in a handful of iterations since each pass can only ever
/// skip a strict subset of what the previous pass saw.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "pack::laff_multi_container"))]
fn pack_laff_multi(container: &Container, box_types: &[BoxType], config: &PackingConfig) -> PackingResult<PackingReport> {
  let usable_length = (container.length - config.door_clearance).max(0.0);
  let max_containers = box_types.iter().map(|b| b.quantity as usize).sum::<usize>().max(1) + 1;

  let mut remaining: Vec<BoxType> = box_types.to_vec();
  let mut containers = Vec::new();
  let mut container_id = 1u32;

  loop {
    let outcome = algorithms::laff::pack(container, &remaining, config);
    containers.push(PackedContainer::new(container_id, *container, outcome.placed));

    if outcome.skipped.is_empty() {
      break;
    }

    for pending in &outcome.skipped {
      if !orientation::fits_envelope(pending.dimensions, pending.packing_method, container.width, usable_length, container.height) {
        return Err(PackingError::OversizedBox {
          code: pending.code.clone(),
          reason: "no legal orientation fits the container on every axis".to_string(),
        });
      }
    }

    if container_id as usize >= max_containers {
      return Err(PackingError::OversizedBox {
        code: outcome.skipped[0].code.clone(),
        reason: "did not converge after opening a new container for every remaining instance".to_string(),
      });
    }

    remaining = regroup(outcome.skipped);
    container_id += 1;
  }

  Ok(PackingReport { containers, oversized: Vec::new(), unplaced: Vec::new() })
}

/// Run `algorithm` against `box_types` inside one `container`, returning
/// every container opened and whatever couldn't be placed (§6, §7).
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "pack", fields(algorithm = ?algorithm)))]
pub fn pack(algorithm: Algorithm, container: &Container, box_types: &[BoxType], config: &PackingConfig) -> PackingResult<PackingReport> {
  validate(container, box_types)?;

  match algorithm {
    Algorithm::ZFirst => {
      let report = algorithms::z_first::pack(container, box_types, config);
      Ok(PackingReport {
        containers: vec![PackedContainer::new(1, *container, report.placed)],
        oversized: report.oversized,
        unplaced: report.unplaced,
      })
    }
    Algorithm::SimpleIndex => {
      let outcome = algorithms::simple_index::pack(container, box_types, config);
      Ok(PackingReport::single(1, *container, outcome.placed).with_unplaced(outcome.skipped))
    }
    Algorithm::Laff => pack_laff_multi(container, box_types, config),
    Algorithm::Guided => algorithms::guided::pack(container, box_types, config).map(|placed| PackingReport::single(1, *container, placed)),
  }
}

impl PackingReport {
  fn with_unplaced(mut self, unplaced: Vec<PendingBox>) -> Self {
    self.unplaced = unplaced;
    self
  }
}

/// One independent packing run, bundled for [`pack_many`].
pub struct PackingRequest {
  pub algorithm: Algorithm,
  pub container: Container,
  pub box_types: Vec<BoxType>,
  pub config: PackingConfig,
}

/// Run several independent packing requests in parallel (§5). Each request
/// is fully isolated — no shared container state — so this is just a
/// `rayon` fan-out over [`pack`].
pub fn pack_many(requests: &[PackingRequest]) -> Vec<PackingResult<PackingReport>> {
  use rayon::prelude::*;

  requests
    .par_iter()
    .map(|request| pack(request.algorithm, &request.container, &request.box_types, &request.config))
    .collect()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;
