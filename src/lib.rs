//! A 2D Delaunay triangulation engine implementing the Guibas-Stolfi
//! divide-and-conquer algorithm over a quad-edge subdivision.
//!
//! Given a finite set of points, [`triangulate`] produces the Delaunay
//! triangulation of their convex hull: the planar triangulation in which no
//! point lies strictly inside the circumcircle of any triangle.
//!
//! The crate is organized leaf-first:
//! - [`predicates`] — orientation, in-circle, lexicographic order.
//! - [`quadedge`] — the half-edge arena and its algebraic operators.
//! - [`primitives`] — base subdivisions for groups of 2 or 3 points.
//! - [`splitter`] — partitions a sorted point list into those groups.
//! - [`merge`] — the divide-and-conquer merge that combines them.
//!
//! [`generators`] and [`parallel`] are collaborators built on top of the
//! core rather than part of it: point generation for benchmarking and test
//! input, and a coarse-grained parallel driver that partitions the input
//! into slabs and reuses the same merge engine across them.
//!
//! This crate does not build constrained triangulations, a Voronoi dual, or
//! exact-arithmetic predicates; it does not support incremental
//! insertion or deletion once a subdivision has been built.

use claims::debug_assert_ok;

pub mod generators;
pub mod merge;
pub mod parallel;
pub mod point;
pub mod predicates;
pub mod primitives;
pub mod quadedge;
pub mod splitter;

pub use point::Point;
pub use quadedge::{EdgeId, PointId, Subdivision};

/// Errors the core itself can detect and report. Most input-contract
/// violations listed in the crate's design notes (coincident points,
/// non-finite coordinates passed to [`triangulate`] directly) are caller
/// responsibilities that this type does not cover; use
/// [`triangulate_points`] if you want those checked for you.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
  /// The splitter (or a caller building primitives directly) produced a
  /// group whose size was neither 2 nor 3.
  InvalidGroupSize(usize),
  /// A structural invariant of the quad-edge arena was violated. This
  /// indicates a bug in this crate, not a bad input.
  InvariantViolation,
  /// [`triangulate_points`] rejected a non-finite coordinate.
  NonFiniteCoordinate(Point),
}

/// Run the core triangulation algorithm.
///
/// Precondition: `points` is lexicographically sorted, pairwise distinct,
/// and every coordinate is finite. Violating this is undefined behavior
/// for the merge engine (it may loop or produce a non-planar result); it
/// is checked with [`debug_assert_ok`] in debug builds only. Use
/// [`triangulate_points`] for a checked, convenience entry point that
/// sorts and deduplicates first.
pub fn triangulate(points: &[Point]) -> Result<Subdivision, Error> {
  debug_assert_ok!(validate_core_input(points));

  match points.len() {
    0 => Ok(Subdivision::empty(Vec::new())),
    1 => Ok(Subdivision::empty(points.to_vec())),
    _ => {
      let groups = splitter::split_groups(points);
      let primitives = primitives::make_primitives(groups)?;
      let subdivision = merge::recursive_group_merge(primitives);
      subdivision.check_invariants()?;
      Ok(subdivision)
    }
  }
}

/// Sort, deduplicate, and validate `points`, then triangulate.
///
/// Unlike [`triangulate`], this accepts points in any order and rejects
/// non-finite coordinates. Coincident points are silently dropped (keeping
/// the first occurrence) rather than treated as an error, since the core's
/// precondition is "pairwise distinct" rather than "no duplicates
/// submitted" -- callers that need to know how many points were merged
/// should deduplicate themselves beforehand and compare lengths.
pub fn triangulate_points(mut points: Vec<Point>) -> Result<Subdivision, Error> {
  if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
    return Err(Error::NonFiniteCoordinate(*bad));
  }
  point::lexicographic_sort(&mut points);
  point::dedup_sorted(&mut points);
  triangulate(&points)
}

fn validate_core_input(points: &[Point]) -> Result<(), Error> {
  for (i, p) in points.iter().enumerate() {
    if !p.is_finite() {
      return Err(Error::NonFiniteCoordinate(*p));
    }
    if i > 0 && points[i - 1].lexicographic_cmp(p) != std::cmp::Ordering::Less {
      return Err(Error::InvariantViolation);
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
  }

  #[test]
  fn empty_input_has_no_edges() {
    let sub = triangulate(&[]).unwrap();
    assert_eq!(sub.num_points(), 0);
    assert_eq!(sub.num_edges(), 0);
  }

  #[test]
  fn single_point_has_no_edges() {
    let sub = triangulate(&[p(1.0, 1.0)]).unwrap();
    assert_eq!(sub.num_points(), 1);
    assert_eq!(sub.num_edges(), 0);
  }

  #[test]
  fn s1_triangle() {
    let sub = triangulate(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]).unwrap();
    assert_eq!(sub.edges().count(), 3);
    assert_eq!(sub.triangles().len(), 1);
  }

  #[test]
  fn s2_square_cocircular_tie_break_is_deterministic() {
    let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)];
    let a = triangulate(&points).unwrap();
    let b = triangulate(&points).unwrap();
    assert_eq!(a.triangles().len(), 2);
    assert_eq!(a.edges().count(), 5);
    assert_eq!(a.triangles(), b.triangles());
  }

  #[test]
  fn s3_collinear_triple_has_no_triangles() {
    let sub = triangulate(&[p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]).unwrap();
    assert_eq!(sub.edges().count(), 2);
    assert_eq!(sub.triangles().len(), 0);
  }

  #[test]
  fn triangulate_points_sorts_and_dedups() {
    let points = vec![p(1.0, 0.0), p(0.0, 0.0), p(0.0, 0.0), p(0.0, 1.0)];
    let sub = triangulate_points(points).unwrap();
    assert_eq!(sub.num_points(), 3);
  }

  #[test]
  fn triangulate_points_rejects_non_finite() {
    let points = vec![p(0.0, 0.0), p(f64::NAN, 0.0)];
    assert!(matches!(
      triangulate_points(points),
      Err(Error::NonFiniteCoordinate(_))
    ));
  }
}
