use super::*;

#[test]
fn carton_has_exactly_two_orientations() {
  let dims = Dimensions::new(10.0, 20.0, 30.0);
  let result = orientations(dims, PackingMethod::Carton);
  assert_eq!(result.len(), 2);
  assert!(result.contains(&Dimensions::new(10.0, 20.0, 30.0)));
  assert!(result.contains(&Dimensions::new(20.0, 10.0, 30.0)));
  // (10,30,20) — length and height swapped onto the floor — must never appear.
  assert!(!result.contains(&Dimensions::new(10.0, 30.0, 20.0)));
}

#[test]
fn pre_pack_without_tall_end_has_two_orientations() {
  // h == l: the end-standing swap is not unlocked.
  let dims = Dimensions::new(10.0, 10.0, 10.0);
  let result = orientations(dims, PackingMethod::PrePack);
  assert_eq!(result.len(), 2);
}

#[test]
fn pre_pack_with_tall_end_has_four_orientations() {
  // h (40) > l (30): end-standing orientations unlock.
  let dims = Dimensions::new(20.0, 30.0, 40.0);
  let result = orientations(dims, PackingMethod::PrePack);
  assert_eq!(result.len(), 4);
  assert!(result.contains(&Dimensions::new(20.0, 30.0, 40.0)));
  assert!(result.contains(&Dimensions::new(30.0, 20.0, 40.0)));
  assert!(result.contains(&Dimensions::new(30.0, 40.0, 20.0)));
  assert!(result.contains(&Dimensions::new(40.0, 30.0, 20.0)));
}

#[test]
fn smallest_fitting_orientation_picks_narrowest() {
  let dims = Dimensions::new(20.0, 10.0, 5.0);
  let space = Dimensions::new(100.0, 100.0, 100.0);
  let best = smallest_fitting_orientation(dims, PackingMethod::Carton, space).unwrap();
  assert_eq!(best.w, 10.0);
}

#[test]
fn smallest_fitting_orientation_returns_none_when_nothing_fits() {
  let dims = Dimensions::new(20.0, 20.0, 20.0);
  let space = Dimensions::new(5.0, 5.0, 5.0);
  assert!(smallest_fitting_orientation(dims, PackingMethod::Carton, space).is_none());
}

#[test]
fn fits_envelope_true_when_some_orientation_fits() {
  let dims = Dimensions::new(20.0, 30.0, 10.0);
  assert!(fits_envelope(dims, PackingMethod::Carton, 30.0, 20.0, 10.0));
}

#[test]
fn fits_envelope_false_when_every_axis_exceeds_the_container_in_every_orientation() {
  let dims = Dimensions::new(50.0, 50.0, 50.0);
  assert!(!fits_envelope(dims, PackingMethod::Carton, 30.0, 30.0, 30.0));
}
