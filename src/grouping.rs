//! Tolerance-based grouping shared by the row packer, post-processing passes,
//! and the output formatter — all three derive rows/cells the same way
//! (§3: "within a tolerance of 0.5").

/// Group item indices by a scalar key, using first-seen-wins bucketing: the
/// first item to land in a bucket defines that bucket's representative key,
/// and later items join it if they're within `tolerance` of that
/// representative (not of each other pairwise). This mirrors the grouping
/// dictionaries built in the source material's row/cell detection.
pub fn group_indices_by<T>(items: &[T], key: impl Fn(&T) -> f64, tolerance: f64) -> Vec<(f64, Vec<usize>)> {
  let mut groups: Vec<(f64, Vec<usize>)> = Vec::new();
  for (idx, item) in items.iter().enumerate() {
    let k = key(item);
    if let Some(group) = groups.iter_mut().find(|(rep, _)| (*rep - k).abs() <= tolerance) {
      group.1.push(idx);
    } else {
      groups.push((k, vec![idx]));
    }
  }
  groups
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn groups_values_within_tolerance() {
    let values = [0.0, 0.3, 20.0, 20.4, 40.0];
    let groups = group_indices_by(&values, |v| *v, 0.5);
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].1, vec![0, 1]);
    assert_eq!(groups[1].1, vec![2, 3]);
    assert_eq!(groups[2].1, vec![4]);
  }

  #[test]
  fn empty_input_yields_no_groups() {
    let values: [f64; 0] = [];
    assert!(group_indices_by(&values, |v| *v, 0.5).is_empty());
  }
}
