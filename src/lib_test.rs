use super::*;

#[test]
fn rejects_non_positive_container() {
  let container = Container::new(0.0, 100.0, 50.0);
  let box_type = BoxType::new("A", Dimensions::new(10.0, 10.0, 10.0), 1, PackingMethod::Carton);

  let err = pack(Algorithm::ZFirst, &container, &[box_type], &PackingConfig::default()).unwrap_err();
  assert!(matches!(err, PackingError::InvalidInput(_)));
}

#[test]
fn rejects_zero_quantity() {
  let container = Container::new(100.0, 100.0, 50.0);
  let box_type = BoxType::new("A", Dimensions::new(10.0, 10.0, 10.0), 0, PackingMethod::Carton);

  let err = pack(Algorithm::ZFirst, &container, &[box_type], &PackingConfig::default()).unwrap_err();
  assert!(matches!(err, PackingError::InvalidInput(_)));
}

#[test]
fn z_first_dispatch_places_uniform_cartons() {
  let container = Container::new(92.5, 473.0, 106.0);
  let box_type = BoxType::new("A", Dimensions::new(20.0, 30.0, 40.0), 20, PackingMethod::Carton);

  let report = pack(Algorithm::ZFirst, &container, &[box_type], &PackingConfig::default()).unwrap();

  assert_eq!(report.containers.len(), 1);
  assert_eq!(report.containers[0].boxes.len(), 20);
  assert!(report.oversized.is_empty());
}

#[test]
fn simple_index_dispatch_reports_unplaced() {
  let container = Container::new(20.0, 40.0, 20.0);
  let box_type = BoxType::new("A", Dimensions::new(20.0, 20.0, 20.0), 5, PackingMethod::Carton);

  let report = pack(Algorithm::SimpleIndex, &container, &[box_type], &PackingConfig::default()).unwrap();

  assert_eq!(report.containers.len(), 1);
  assert_eq!(report.containers[0].boxes.len() + report.unplaced.len(), 5);
}

#[test]
fn guided_dispatch_is_unsupported() {
  let container = Container::new(100.0, 100.0, 100.0);
  let box_type = BoxType::new("A", Dimensions::new(10.0, 10.0, 10.0), 1, PackingMethod::Carton);

  let err = pack(Algorithm::Guided, &container, &[box_type], &PackingConfig::default()).unwrap_err();
  assert!(matches!(err, PackingError::Unsupported(Algorithm::Guided)));
}

#[test]
fn laff_opens_a_second_container_on_overflow() {
  // A container that fits exactly one box per run, with two requested:
  // LAFF must open a second container rather than reporting one skipped.
  let container = Container::new(10.0, 10.0, 10.0);
  let box_type = BoxType::new("A", Dimensions::new(10.0, 10.0, 10.0), 2, PackingMethod::Carton);

  let report = pack(Algorithm::Laff, &container, &[box_type], &PackingConfig::default().with_door_clearance(0.0)).unwrap();

  assert_eq!(report.containers.len(), 2);
  let total: usize = report.containers.iter().map(|c| c.boxes.len()).sum();
  assert_eq!(total, 2);
}

#[test]
fn laff_reports_oversized_box_even_with_a_fresh_container() {
  let container = Container::new(10.0, 10.0, 10.0);
  let box_type = BoxType::new("BIG", Dimensions::new(20.0, 20.0, 20.0), 1, PackingMethod::Carton);

  let err = pack(Algorithm::Laff, &container, &[box_type], &PackingConfig::default()).unwrap_err();
  assert!(matches!(err, PackingError::OversizedBox { .. }));
}

#[test]
fn pack_many_runs_independent_requests() {
  let requests = vec![
    PackingRequest {
      algorithm: Algorithm::ZFirst,
      container: Container::new(92.5, 200.0, 106.0),
      box_types: vec![BoxType::new("A", Dimensions::new(20.0, 30.0, 40.0), 5, PackingMethod::Carton)],
      config: PackingConfig::default(),
    },
    PackingRequest {
      algorithm: Algorithm::SimpleIndex,
      container: Container::new(92.5, 200.0, 106.0),
      box_types: vec![BoxType::new("B", Dimensions::new(20.0, 20.0, 20.0), 5, PackingMethod::Carton)],
      config: PackingConfig::default(),
    },
  ];

  let results = pack_many(&requests);

  assert_eq!(results.len(), 2);
  for result in &results {
    assert!(result.is_ok());
  }
}
