//! Row packer — Z-first (C5, §4.4).
//!
//! Fills one row: stack vertically within a column, advance the column when
//! it's full, backfill cells that fell short of the container height, then
//! spend any remaining width on a final gap-fill pass.

use crate::boxes::{BoxType, PendingBox, PlacedBox};
use crate::config::{OrientationWeights, PackingConfig};
use crate::dominant_length::DominantLengthSelection;
use crate::grouping::group_indices_by;
use crate::orientation::orientations;

const CELL_GROUP_TOLERANCE: f64 = 0.5;

pub struct RowPackRequest<'a> {
  /// This row's candidate box types, with `quantity` already reduced to
  /// what's still remaining for this sort_order group.
  pub candidates: &'a [BoxType],
  pub row_y: f64,
  pub container_width: f64,
  pub container_height: f64,
  pub dominant: &'a DominantLengthSelection,
  /// Full cross-group remainder, used only by the trailing width-gap fill.
  pub remainder: Option<&'a [BoxType]>,
  pub config: &'a PackingConfig,
}

#[derive(Default)]
pub struct RowPackOutcome {
  pub placed: Vec<PlacedBox>,
}

impl RowPackOutcome {
  pub fn width_used(&self) -> f64 {
    self.placed.iter().map(|b| b.position.x + b.dimensions.w).fold(0.0, f64::max)
  }

  pub fn height_used(&self) -> f64 {
    self.placed.iter().map(|b| b.position.z + b.dimensions.h).fold(0.0, f64::max)
  }

  pub fn width_utilization(&self, container_width: f64) -> f64 {
    if container_width <= 0.0 {
      return 0.0;
    }
    self.width_used() / container_width
  }
}

/// Sort order for candidate box types within a row (§4.4 "Sort").
fn sort_candidates(candidates: &mut [BoxType]) {
  candidates.sort_by(|a, b| {
    a.packing_method
      .priority()
      .cmp(&b.packing_method.priority())
      .then(a.sort_order.cmp(&b.sort_order))
      .then(b.quantity.cmp(&a.quantity))
      .then(a.dimensions.h.partial_cmp(&b.dimensions.h).unwrap())
      .then(b.dimensions.base_area().partial_cmp(&a.dimensions.base_area()).unwrap())
  });
}

fn expand_sorted(candidates: &[BoxType]) -> Vec<PendingBox> {
  let mut sorted: Vec<BoxType> = candidates.to_vec();
  sort_candidates(&mut sorted);
  sorted.iter().flat_map(crate::boxes::expand_quantity).collect()
}

/// Score component for how well an orientation's length matches the row's
/// target length(s): `0.0` for a primary match, `0.5` for a secondary
/// match, `None` if neither matches within `tau`.
fn length_match_score(length: f64, dominant: &DominantLengthSelection, tau: f64) -> Option<f64> {
  if (length - dominant.primary).abs() <= tau {
    return Some(0.0);
  }
  if let Some(secondary) = dominant.secondary {
    if (length - secondary).abs() <= tau {
      return Some(0.5);
    }
  }
  None
}

fn has_length_match(pending: &PendingBox, dominant: &DominantLengthSelection, tau: f64) -> bool {
  orientations(pending.dimensions, pending.packing_method)
    .into_iter()
    .any(|o| length_match_score(o.l, dominant, tau).is_some())
}

/// §4.4 "Filter": tries `initial/secondary` tolerance, then `max_tolerance`
/// if fewer than half the pool survives, then drops the filter entirely if
/// still under 10 items.
fn filter_by_tolerance(expanded: &[PendingBox], dominant: &DominantLengthSelection, config: &PackingConfig) -> (Vec<usize>, f64) {
  let mut tau = if dominant.secondary.is_some() { config.secondary_tolerance } else { config.initial_tolerance };
  let mut kept: Vec<usize> = expanded
    .iter()
    .enumerate()
    .filter(|(_, p)| has_length_match(p, dominant, tau))
    .map(|(i, _)| i)
    .collect();

  if expanded.len() > 0 && kept.len() * 2 < expanded.len() {
    tau = config.max_tolerance;
    kept = expanded
      .iter()
      .enumerate()
      .filter(|(_, p)| has_length_match(p, dominant, tau))
      .map(|(i, _)| i)
      .collect();
  }

  if kept.len() < 10 {
    kept = (0..expanded.len()).collect();
  }

  (kept, tau)
}

/// Find the best-scoring orientation that fits at `(x, z)` within
/// `(container_width, container_height)`, or `None`.
fn best_orientation_at(
  pending: &PendingBox,
  x: f64,
  z: f64,
  container_width: f64,
  container_height: f64,
  dominant: &DominantLengthSelection,
  tau: f64,
  weights: OrientationWeights,
) -> Option<crate::geometry::Dimensions> {
  let mut best: Option<(crate::geometry::Dimensions, f64)> = None;
  for o in orientations(pending.dimensions, pending.packing_method) {
    let Some(match_score) = length_match_score(o.l, dominant, tau) else {
      continue;
    };
    if x + o.w > container_width || z + o.h > container_height {
      continue;
    }
    let score = weights.width * (o.w / container_width) + weights.length_match * match_score;
    match &best {
      Some((_, best_score)) if *best_score >= score => {}
      _ => best = Some((o, score)),
    }
  }
  best.map(|(o, _)| o)
}

/// Run the Z-first row packer.
pub fn pack_row(req: &RowPackRequest) -> RowPackOutcome {
  let expanded = expand_sorted(req.candidates);
  if expanded.is_empty() {
    return RowPackOutcome::default();
  }

  let (kept_indices, initial_tau) = filter_by_tolerance(&expanded, req.dominant, req.config);
  let mut tau = initial_tau;

  let mut placed: Vec<PlacedBox> = Vec::new();
  let mut placed_flags = vec![false; expanded.len()];

  let mut current_x = 0.0_f64;
  let mut current_z = 0.0_f64;
  let mut column_max_width = 0.0_f64;

  let relax_every = (expanded.len() / 4).max(10);
  let mut since_relax = 0usize;

  for &idx in &kept_indices {
    if current_x >= req.container_width {
      break;
    }
    let pending = &expanded[idx];

    let width_utilization = if req.container_width > 0.0 {
      (current_x + column_max_width) / req.container_width
    } else {
      0.0
    };
    let weights = if width_utilization < 0.70 && placed.len() >= 10 {
      OrientationWeights::LOW_UTILIZATION
    } else {
      OrientationWeights::DEFAULT
    };

    let mut orientation = best_orientation_at(
      pending,
      current_x,
      current_z,
      req.container_width,
      req.container_height,
      req.dominant,
      tau,
      weights,
    );

    if orientation.is_none() {
      // Column is full vertically (or nothing fits here) — advance and retry once.
      current_x += column_max_width;
      current_z = 0.0;
      column_max_width = 0.0;
      if current_x >= req.container_width {
        break;
      }
      orientation = best_orientation_at(
        pending,
        current_x,
        current_z,
        req.container_width,
        req.container_height,
        req.dominant,
        tau,
        weights,
      );
    }

    let Some(orientation) = orientation else {
      // Doesn't fit even in a fresh column — skip it, don't break the row.
      continue;
    };

    let placed_box = pending.place(orientation, crate::geometry::Position::new(current_x, req.row_y, current_z));
    placed.push(placed_box);
    placed_flags[idx] = true;

    current_z += orientation.h;
    column_max_width = f64::max(column_max_width, orientation.w);

    if current_z >= req.container_height {
      current_x += column_max_width;
      current_z = 0.0;
      column_max_width = 0.0;
      if current_x >= req.container_width {
        break;
      }
    }

    since_relax += 1;
    if since_relax >= relax_every {
      since_relax = 0;
      let width_utilization = if req.container_width > 0.0 {
        (current_x + column_max_width) / req.container_width
      } else {
        0.0
      };
      if width_utilization < 0.80 && tau < req.config.max_tolerance {
        tau += 1.0;
      }
    }
  }

  let leftover: Vec<PendingBox> = (0..expanded.len()).filter(|&i| !placed_flags[i]).map(|i| expanded[i].clone()).collect();

  active_cell_height_fill(&mut placed, &leftover, req, tau);
  width_gap_fill(&mut placed, req);

  RowPackOutcome { placed }
}

/// §4.4 "Active cell-height fill": top up columns that fell short of 95%
/// of the container height using the smallest leftover boxes that fit.
fn active_cell_height_fill(placed: &mut Vec<PlacedBox>, leftover: &[PendingBox], req: &RowPackRequest, tau: f64) {
  if leftover.is_empty() || placed.is_empty() {
    return;
  }

  let groups = group_indices_by(placed, |b| b.position.x, CELL_GROUP_TOLERANCE);
  let mut used_leftover = vec![false; leftover.len()];

  for (cell_x, member_indices) in groups {
    let cell_width = member_indices.iter().map(|&i| placed[i].position.x + placed[i].dimensions.w).fold(0.0, f64::max) - cell_x;
    let mut cell_height = member_indices.iter().map(|&i| placed[i].top_z()).fold(0.0, f64::max);

    if cell_height >= 0.95 * req.container_height {
      continue;
    }

    let fraction_full = if req.container_height > 0.0 { cell_height / req.container_height } else { 0.0 };
    let effective_tau = if fraction_full < 0.50 { tau * 2.0 } else { tau };

    // Smallest-height-first candidate order.
    let mut candidate_order: Vec<usize> = (0..leftover.len()).filter(|&i| !used_leftover[i]).collect();
    candidate_order.sort_by(|&a, &b| min_orientation_height(&leftover[a]).partial_cmp(&min_orientation_height(&leftover[b])).unwrap());

    for cand_idx in candidate_order {
      if used_leftover[cand_idx] {
        continue;
      }
      let pending = &leftover[cand_idx];
      let remaining_height = req.container_height - cell_height;

      let fit = orientations(pending.dimensions, pending.packing_method)
        .into_iter()
        .filter(|o| length_match_score(o.l, req.dominant, effective_tau).is_some())
        .filter(|o| o.h <= remaining_height && o.w <= cell_width)
        .min_by(|a, b| a.h.partial_cmp(&b.h).unwrap());

      if let Some(orientation) = fit {
        let placed_box = pending.place(orientation, crate::geometry::Position::new(cell_x, req.row_y, cell_height));
        cell_height += orientation.h;
        placed.push(placed_box);
        used_leftover[cand_idx] = true;
        if cell_height >= 0.95 * req.container_height {
          break;
        }
      }
    }
  }
}

fn min_orientation_height(pending: &PendingBox) -> f64 {
  orientations(pending.dimensions, pending.packing_method).into_iter().map(|o| o.h).fold(f64::INFINITY, f64::min)
}

/// §4.4 "Width-gap fill": if the row stopped short, pull boxes from the
/// cross-group remainder irrespective of their length.
fn width_gap_fill(placed: &mut Vec<PlacedBox>, req: &RowPackRequest) {
  let Some(remainder) = req.remainder else {
    return;
  };

  let max_x = placed.iter().map(|b| b.position.x + b.dimensions.w).fold(0.0, f64::max);
  let gap = req.container_width - max_x;
  if gap < 5.0 {
    return;
  }
  let outcome_width_utilization = if req.container_width > 0.0 { max_x / req.container_width } else { 0.0 };
  if outcome_width_utilization >= 0.90 {
    return;
  }

  // `remainder` is a snapshot taken before this row's own main loop ran, so
  // it still carries full quantities for box types this row already placed
  // from. Net those out first or this pass could place more units of a type
  // than actually remain (violating §3 invariant 4).
  let mut already_placed_in_row: std::collections::HashMap<crate::boxes::BoxGroupKey, u32> = std::collections::HashMap::new();
  for box_ in placed.iter() {
    *already_placed_in_row.entry(box_.group_key()).or_insert(0) += 1;
  }

  let pool: Vec<BoxType> = remainder
    .iter()
    .map(|box_type| {
      let already = already_placed_in_row.get(&box_type.group_key()).copied().unwrap_or(0);
      let mut reduced = box_type.clone();
      reduced.quantity = box_type.quantity.saturating_sub(already);
      reduced
    })
    .filter(|box_type| box_type.quantity > 0)
    .collect();

  fill_width_gap(placed, &pool, req.container_width, req.container_height, req.row_y, max_x);
}

/// Shared gap-filling core (§4.4, and reused by the scheduler's row-gap-fill
/// helper at §4.5 step 3): widen a row into its unused width using whatever
/// pool is handed in, widest-fitting-orientation first, length tolerance
/// waived entirely.
fn fill_width_gap(placed: &mut Vec<PlacedBox>, pool: &[BoxType], container_width: f64, container_height: f64, row_y: f64, start_x: f64) {
  let mut max_x = start_x;

  let mut candidates: Vec<(PendingBox, f64)> = Vec::new();
  for box_type in pool {
    let pending = PendingBox::from(box_type);
    let remaining_gap = container_width - max_x;
    let best_width = orientations(pending.dimensions, pending.packing_method)
      .into_iter()
      .filter(|o| o.w <= remaining_gap && o.h <= container_height)
      .map(|o| o.w)
      .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |a| a.max(w))));
    if let Some(best_width) = best_width {
      for _ in 0..box_type.quantity {
        candidates.push((pending.clone(), best_width));
      }
    }
  }
  candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

  for (pending, _) in candidates {
    let remaining_gap = container_width - max_x;
    if remaining_gap < 1.0 {
      break;
    }
    let orientation = orientations(pending.dimensions, pending.packing_method)
      .into_iter()
      .filter(|o| o.w <= remaining_gap && o.h <= container_height)
      .max_by(|a, b| a.w.partial_cmp(&b.w).unwrap());
    if let Some(orientation) = orientation {
      let placed_box = pending.place(orientation, crate::geometry::Position::new(max_x, row_y, 0.0));
      max_x += orientation.w;
      placed.push(placed_box);
    }
  }
}

/// §4.5 step 3: when a finished row's width utilization falls short, the
/// scheduler borrows up to `max_units` boxes from *other* `sort_order`
/// groups and slots them into the row's existing width gap — never opening
/// a new row.
pub fn row_gap_fill(placed: &mut Vec<PlacedBox>, donors: &[BoxType], container_width: f64, container_height: f64, row_y: f64, max_units: u32) {
  let max_x = placed.iter().map(|b| b.position.x + b.dimensions.w).fold(0.0, f64::max);
  if container_width - max_x < 1.0 {
    return;
  }

  let mut remaining = max_units;
  let mut pool: Vec<BoxType> = Vec::new();
  for box_type in donors {
    if remaining == 0 {
      break;
    }
    let take = box_type.quantity.min(remaining);
    if take == 0 {
      continue;
    }
    let mut capped = box_type.clone();
    capped.quantity = take;
    remaining -= take;
    pool.push(capped);
  }

  fill_width_gap(placed, &pool, container_width, container_height, row_y, max_x);
}

#[cfg(test)]
#[path = "row_packer_test.rs"]
mod row_packer_test;
