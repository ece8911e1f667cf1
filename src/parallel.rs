//! Coarse-grained parallel driver.
//!
//! The merge engine in [`crate::merge`] is associative over disjoint
//! x-ranges (see the merge engine's step D), so it doubles as a reduction
//! for triangulations computed independently elsewhere. This module
//! partitions an already-sorted point list into disjoint x-slabs,
//! triangulates each slab on its own OS thread, and folds the per-slab
//! subdivisions back together with the same [`crate::merge::recursive_group_merge`]
//! the sequential core runs over primitives. No core changes are required
//! for this; it plays the role the source program's MPI worker split
//! played, minus the message-passing layer, which this crate does not
//! specify (see the system design's concurrency notes).

use crate::merge::recursive_group_merge;
use crate::point::Point;
use crate::quadedge::Subdivision;
use crate::{triangulate, Error};

/// Split a lexicographically sorted point list into `num_slabs` contiguous
/// runs of roughly equal size. Each returned slab is, by construction,
/// disjoint in x-range from its neighbors (its points form a contiguous
/// window of the sorted input).
///
/// `num_slabs` is clamped to `points.len()` so every slab is non-empty.
/// Slab sizes differ by at most one point: the first `points.len() %
/// num_slabs` slabs get one extra point.
pub fn partition_slabs(points: &[Point], num_slabs: usize) -> Vec<Vec<Point>> {
  if points.is_empty() || num_slabs == 0 {
    return Vec::new();
  }

  let num_slabs = num_slabs.min(points.len());
  let base = points.len() / num_slabs;
  let extra = points.len() % num_slabs;

  let mut slabs = Vec::with_capacity(num_slabs);
  let mut start = 0;
  for slab_index in 0..num_slabs {
    let size = base + usize::from(slab_index < extra);
    slabs.push(points[start..start + size].to_vec());
    start += size;
  }
  slabs
}

/// Triangulate `points` using `num_slabs` worker threads.
///
/// Precondition: `points` is lexicographically sorted, as for
/// [`crate::triangulate`]; additionally every slab [`partition_slabs`]
/// produces must have at least two points, since the merge engine (like
/// the splitter it mirrors) is undefined for a one-point subdivision. With
/// `num_slabs <= points.len() / 2` this always holds.
pub fn triangulate_parallel(points: &[Point], num_slabs: usize) -> Result<Subdivision, Error> {
  let slabs = partition_slabs(points, num_slabs);
  if slabs.is_empty() {
    return Ok(Subdivision::empty(Vec::new()));
  }
  if slabs.len() == 1 {
    return triangulate(&slabs[0]);
  }

  let results: Vec<Result<Subdivision, Error>> = std::thread::scope(|scope| {
    let handles: Vec<_> = slabs
      .iter()
      .map(|slab| scope.spawn(move || triangulate(slab)))
      .collect();
    handles
      .into_iter()
      .map(|handle| handle.join().expect("triangulation worker panicked"))
      .collect()
  });

  let subdivisions = results.into_iter().collect::<Result<Vec<_>, Error>>()?;
  Ok(recursive_group_merge(subdivisions))
}
