//! Point generators for benchmarking and test input.
//!
//! These are explicitly out of scope for the triangulation core (see the
//! crate's top-level docs): the core only ever consumes an already-sorted
//! point list. This module is a collaborator built on top of it, grounded
//! in the source program's `generate_values` helpers -- `random` draws
//! uniformly from a bounding box, `lattice` lays points on a grid and trims
//! back to the requested count when it isn't a perfect square.

use crate::point::Point;
use rand::Rng;

/// The rectangular region a generator draws points from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
  pub x_min: f64,
  pub x_max: f64,
  pub y_min: f64,
  pub y_max: f64,
}

impl World {
  pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
    debug_assert!(x_min < x_max, "x_min must be strictly less than x_max");
    debug_assert!(y_min < y_max, "y_min must be strictly less than y_max");
    World {
      x_min,
      x_max,
      y_min,
      y_max,
    }
  }

  pub fn unit_square() -> Self {
    World::new(0.0, 1.0, 0.0, 1.0)
  }
}

/// `num_points` points drawn independently and uniformly from `world`.
///
/// The core requires its input deduplicated and sorted; this function does
/// neither, since a generator is meant to feed
/// [`crate::triangulate_points`] rather than [`crate::triangulate`]
/// directly.
pub fn random(num_points: usize, world: World, rng: &mut impl Rng) -> Vec<Point> {
  (0..num_points)
    .map(|_| {
      Point::new(
        rng.gen_range(world.x_min..world.x_max),
        rng.gen_range(world.y_min..world.y_max),
      )
    })
    .collect()
}

/// A roughly-square lattice of `num_points` points spanning `world`.
///
/// Points are placed on a `ceil(sqrt(num_points))`-by-`ceil(sqrt(num_points))`
/// grid; if that overshoots the requested count (because `num_points` isn't
/// a perfect square), the excess is trimmed by repeatedly removing a
/// uniformly random point, matching the source generator's behavior.
pub fn lattice(num_points: usize, world: World, rng: &mut impl Rng) -> Vec<Point> {
  if num_points == 0 {
    return Vec::new();
  }

  let side = (num_points as f64).sqrt().ceil() as usize;
  let mut points = Vec::with_capacity(side * side);
  for i in 0..side {
    for j in 0..side {
      let x = lerp(world.x_min, world.x_max, i, side);
      let y = lerp(world.y_min, world.y_max, j, side);
      points.push(Point::new(x, y));
    }
  }

  while points.len() > num_points {
    let victim = rng.gen_range(0..points.len());
    points.swap_remove(victim);
  }
  points
}

fn lerp(min: f64, max: f64, step: usize, steps: usize) -> f64 {
  if steps <= 1 {
    min
  } else {
    min + (max - min) * (step as f64) / ((steps - 1) as f64)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  #[test]
  fn random_points_stay_within_the_world() {
    let world = World::new(-5.0, 5.0, 0.0, 100.0);
    let mut rng = SmallRng::seed_from_u64(7);
    let points = random(200, world, &mut rng);
    assert_eq!(points.len(), 200);
    for p in points {
      assert!((world.x_min..world.x_max).contains(&p.x));
      assert!((world.y_min..world.y_max).contains(&p.y));
    }
  }

  #[test]
  fn lattice_returns_exactly_the_requested_count() {
    let world = World::unit_square();
    let mut rng = SmallRng::seed_from_u64(11);
    for n in [0, 1, 4, 10, 25, 30] {
      let points = lattice(n, world, &mut rng);
      assert_eq!(points.len(), n, "n = {n}");
    }
  }

  #[test]
  fn lattice_of_a_perfect_square_is_a_regular_grid() {
    let world = World::unit_square();
    let mut rng = SmallRng::seed_from_u64(3);
    let points = lattice(9, world, &mut rng);
    assert_eq!(points.len(), 9);
    let xs: std::collections::BTreeSet<_> = points.iter().map(|p| p.x.to_bits()).collect();
    assert_eq!(xs.len(), 3);
  }
}
