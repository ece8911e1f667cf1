use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quadedge_delaunay::generators::{random, World};
use quadedge_delaunay::point::lexicographic_sort;
use quadedge_delaunay::triangulate;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const COUNTS: &[usize] = &[100, 1_000, 10_000];

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0xdeadbeef);
  let world = World::new(0.0, 1_000.0, 0.0, 1_000.0);

  let mut group = c.benchmark_group("triangulate");
  for &count in COUNTS {
    let mut points = random(count, world, &mut rng);
    lexicographic_sort(&mut points);
    group.bench_function(BenchmarkId::from_parameter(count), |b| {
      b.iter(|| triangulate(&points).unwrap())
    });
  }
  group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
