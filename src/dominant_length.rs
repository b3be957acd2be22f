//! Dominant-length selector (C4, §4.3).
//!
//! Chooses the Y-extent `L*` every box in the next row must conform to,
//! scoring candidate lengths by a blend of estimated width utilization and
//! total matching quantity, and surfacing a secondary length to widen the
//! row packer's pool when useful.

use std::collections::HashMap;

use crate::boxes::PendingBox;
use crate::config::DominantLengthWeights;
use crate::orientation::orientations;

/// Bucket float lengths to two decimal places so near-equal floating point
/// results land in the same candidate.
fn bucket(length: f64) -> i64 {
  (length * 100.0).round() as i64
}

#[derive(Clone, Debug)]
pub struct LengthCandidate {
  pub length: f64,
  pub quantity: usize,
  pub distinct_codes: usize,
  pub width_utilization: f64,
  pub score: f64,
}

#[derive(Clone, Debug)]
pub struct DominantLengthSelection {
  pub primary: f64,
  pub secondary: Option<f64>,
  /// Top-3 candidates by score, for the scheduler's retry logic (§4.5 step 4).
  pub top3: Vec<LengthCandidate>,
}

/// Select the dominant length for a pool of pending box slots.
///
/// Falls back to `34.0` (the documented default) when the pool is empty.
pub fn select_dominant_length(boxes: &[PendingBox], container_width: f64, weights: DominantLengthWeights) -> DominantLengthSelection {
  select_dominant_length_with_gap(boxes, container_width, weights, 3.0, 0.30)
}

pub fn select_dominant_length_with_gap(
  boxes: &[PendingBox],
  container_width: f64,
  weights: DominantLengthWeights,
  secondary_gap: f64,
  secondary_min_share: f64,
) -> DominantLengthSelection {
  if boxes.is_empty() {
    return DominantLengthSelection {
      primary: 34.0,
      secondary: None,
      top3: Vec::new(),
    };
  }

  struct Stat {
    length: f64,
    quantity: usize,
    codes: std::collections::HashSet<String>,
    width_sum: f64,
  }

  let mut stats: HashMap<i64, Stat> = HashMap::new();

  for box_ in boxes {
    // Per box, keep the narrowest orientation for each distinct length so a
    // box with two orientations sharing a length isn't double-counted.
    let mut best_width_per_length: HashMap<i64, f64> = HashMap::new();
    for orientation in orientations(box_.dimensions, box_.packing_method) {
      let key = bucket(orientation.l);
      let entry = best_width_per_length.entry(key).or_insert(f64::INFINITY);
      if orientation.w < *entry {
        *entry = orientation.w;
      }
    }
    for (key, width) in best_width_per_length {
      let length = key as f64 / 100.0;
      let stat = stats.entry(key).or_insert_with(|| Stat {
        length,
        quantity: 0,
        codes: std::collections::HashSet::new(),
        width_sum: 0.0,
      });
      stat.quantity += 1;
      stat.codes.insert(box_.code.clone());
      stat.width_sum += width;
    }
  }

  let total_quantity = boxes.len() as f64;

  let mut candidates: Vec<LengthCandidate> = stats
    .values()
    .map(|stat| {
      let width_utilization = (stat.width_sum / container_width).min(1.0);
      let normalized_quantity = stat.quantity as f64 / total_quantity;
      let score = weights.width_utilization * width_utilization + weights.quantity * normalized_quantity;
      LengthCandidate {
        length: stat.length,
        quantity: stat.quantity,
        distinct_codes: stat.codes.len(),
        width_utilization,
        score,
      }
    })
    .collect();

  candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());

  let primary = candidates
    .iter()
    .find(|c| c.width_utilization >= 0.70)
    .or_else(|| candidates.iter().max_by_key(|c| c.quantity))
    .map(|c| c.length)
    .unwrap_or(34.0);

  let top3: Vec<LengthCandidate> = candidates.iter().take(3).cloned().collect();

  let secondary = top3
    .iter()
    .find(|c| (c.length - primary).abs() > secondary_gap && (c.quantity as f64 / total_quantity) >= secondary_min_share)
    .map(|c| c.length);

  DominantLengthSelection { primary, secondary, top3 }
}

#[cfg(test)]
#[path = "dominant_length_test.rs"]
mod dominant_length_test;
