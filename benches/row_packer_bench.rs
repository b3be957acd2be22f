//! Row packer benchmarks (C5).
//!
//! Compares row-packing throughput across pool shapes: a single uniform
//! box type and a two-type mixed pool, at growing quantities.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use container_packing::boxes::expand_quantity;
use container_packing::dominant_length::select_dominant_length;
use container_packing::row_packer::{pack_row, RowPackRequest};
use container_packing::{BoxType, Dimensions, DominantLengthWeights, PackingConfig, PackingMethod};

fn uniform_pool(quantity: u32) -> Vec<BoxType> {
  vec![BoxType::new("A", Dimensions::new(20.0, 30.0, 40.0), quantity, PackingMethod::Carton)]
}

fn mixed_pool(quantity: u32) -> Vec<BoxType> {
  vec![
    BoxType::new("A", Dimensions::new(20.0, 30.0, 40.0), quantity, PackingMethod::Carton),
    BoxType::new("B", Dimensions::new(24.0, 30.0, 36.0), quantity, PackingMethod::Carton),
  ]
}

fn bench_pack_row(c: &mut Criterion) {
  let mut group = c.benchmark_group("row_packer");
  let config = PackingConfig::default();

  for &quantity in &[8u32, 32, 128] {
    let pool = uniform_pool(quantity);
    let expanded: Vec<_> = pool.iter().flat_map(expand_quantity).collect();
    let dominant = select_dominant_length(&expanded, 92.5, DominantLengthWeights::default());

    group.throughput(Throughput::Elements(quantity as u64));
    group.bench_with_input(BenchmarkId::new("uniform", quantity), &quantity, |b, _| {
      b.iter(|| {
        let request = RowPackRequest {
          candidates: &pool,
          row_y: 0.0,
          container_width: 92.5,
          container_height: 106.0,
          dominant: &dominant,
          remainder: None,
          config: &config,
        };
        black_box(pack_row(&request))
      })
    });
  }

  for &quantity in &[8u32, 32, 128] {
    let pool = mixed_pool(quantity);
    let expanded: Vec<_> = pool.iter().flat_map(expand_quantity).collect();
    let dominant = select_dominant_length(&expanded, 92.5, DominantLengthWeights::default());

    group.throughput(Throughput::Elements((quantity * 2) as u64));
    group.bench_with_input(BenchmarkId::new("mixed", quantity), &quantity, |b, _| {
      b.iter(|| {
        let request = RowPackRequest {
          candidates: &pool,
          row_y: 0.0,
          container_width: 92.5,
          container_height: 106.0,
          dominant: &dominant,
          remainder: None,
          config: &config,
        };
        black_box(pack_row(&request))
      })
    });
  }

  group.finish();
}

criterion_group!(benches, bench_pack_row);
criterion_main!(benches);
