//! The divide-and-conquer merge: lowest common tangent, candidate search,
//! and the zip that stitches two disjoint triangulations into one.

use crate::point::Point;
use crate::predicates::{in_circle, on_left, on_right};
use crate::quadedge::{EdgeId, PointId, Subdivision};

/// Step A. Find the base edge of the lower tangent between `l`'s hull and
/// `r`'s hull, returning `(le, re)` as edge indices local to `l` and `r`
/// respectively (not yet merged into a single arena).
pub fn lowest_common_tangent(l: &Subdivision, r: &Subdivision) -> (EdgeId, EdgeId) {
  let mut le = l.outer().expect("left subdivision has an outer boundary");
  let mut re = r.inner().expect("right subdivision has an inner boundary");

  loop {
    if on_right(l.org_point(le), l.dest_point(le), r.dest_point(re)) {
      le = l.onext(l.sym(le));
    } else if on_left(r.org_point(re), r.dest_point(re), l.org_point(le)) {
      re = r.oprev(r.sym(re));
    } else {
      break;
    }
  }
  (le, re)
}

/// Step B. Absorb `r` into `l`, connect the tangent found by
/// [`lowest_common_tangent`], and correct the extreme-edge bookkeeping.
/// Returns the combined subdivision and the new base edge.
pub fn combine(l: Subdivision, r: Subdivision, le: EdgeId, re: EdgeId) -> (Subdivision, EdgeId) {
  let l_inner = l.inner().expect("left subdivision has an inner boundary");
  let r_outer = r.outer().expect("right subdivision has an outer boundary");

  let mut combined = l;
  let shift = combined.merge(r);
  let re = shift.shift(re);
  let r_outer = shift.shift(r_outer);

  let base = combined.connect(combined.sym(le), re);

  let leftmost = PointId(0);
  let rightmost = PointId(combined.num_points() - 1);

  let mut inner = l_inner;
  let mut outer = r_outer;
  if combined.org(le) == leftmost {
    inner = base;
  }
  if combined.org(re) == rightmost {
    outer = combined.sym(base);
  }
  combined.set_extreme_edges(inner, outer);

  (combined, base)
}

/// Search from `start`, advancing via `step` as long as the next edge is
/// still a valid candidate and the current one fails the Delaunay test
/// against it, killing each candidate it outgrows. Returns the final
/// candidate and whether it is valid at all (the caller must still check
/// this even when the search never advances, since the first candidate
/// might already be invalid).
fn advance_candidate(
  sub: &mut Subdivision,
  b1: Point,
  b2: Point,
  mut cand: EdgeId,
  step: impl Fn(&Subdivision, EdgeId) -> EdgeId,
) -> (EdgeId, bool) {
  if !on_right(b1, b2, sub.dest_point(cand)) {
    return (cand, false);
  }
  loop {
    let next = step(sub, cand);
    if !on_right(b1, b2, sub.dest_point(next)) {
      break;
    }
    if !in_circle(b2, b1, sub.dest_point(cand), sub.dest_point(next)) {
      break;
    }
    let dead = cand;
    cand = next;
    sub.kill_edge(dead);
  }
  (cand, true)
}

/// Step C. Zip the base edge upward until neither side offers a valid
/// candidate, leaving a fully Delaunay bridge between the two halves.
/// Returns the final base edge (the topmost rung of the zip).
pub fn zip(sub: &mut Subdivision, mut base: EdgeId) -> EdgeId {
  loop {
    let b1 = sub.org_point(base);
    let b2 = sub.dest_point(base);

    let rcand_start = sub.onext(sub.sym(base));
    let (rcand, rcand_valid) = advance_candidate(sub, b1, b2, rcand_start, |sub, e| sub.onext(e));

    let lcand_start = sub.oprev(base);
    let (lcand, lcand_valid) = advance_candidate(sub, b1, b2, lcand_start, |sub, e| sub.oprev(e));

    if !rcand_valid && !lcand_valid {
      break;
    }

    let use_right = if !lcand_valid {
      true
    } else if !rcand_valid {
      false
    } else {
      !in_circle(
        sub.dest_point(rcand),
        sub.org_point(rcand),
        sub.org_point(lcand),
        sub.dest_point(lcand),
      )
    };

    base = if use_right {
      sub.connect(sub.sym(base), sub.sym(rcand))
    } else {
      sub.connect(lcand, sub.sym(base))
    };
  }
  base
}

/// Merge two disjoint subdivisions (`l` strictly left of `r` in x) into
/// one Delaunay triangulation, running Steps A through C.
pub fn merge_pair(l: Subdivision, r: Subdivision) -> Subdivision {
  let (le, re) = lowest_common_tangent(&l, &r);
  let (mut combined, base) = combine(l, r, le, re);
  zip(&mut combined, base);
  combined
}

/// Step D. Reduce a left-to-right sequence of primitive subdivisions to a
/// single triangulation by repeatedly merging adjacent pairs.
pub fn recursive_group_merge(subs: Vec<Subdivision>) -> Subdivision {
  let mut level = subs;
  while level.len() > 1 {
    let mut next = Vec::with_capacity(level.len().div_ceil(2));
    let mut iter = level.into_iter();
    while let Some(a) = iter.next() {
      match iter.next() {
        Some(b) => next.push(merge_pair(a, b)),
        None => next.push(a),
      }
    }
    level = next;
  }
  level.into_iter().next().expect("at least one primitive")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::primitives::{line_primitive, triangle_primitive};

  fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
  }

  #[test]
  fn merging_two_lines_into_a_square_gives_two_triangles() {
    let left = line_primitive([p(0.0, 0.0), p(0.0, 1.0)]);
    let right = line_primitive([p(1.0, 0.0), p(1.0, 1.0)]);
    let merged = merge_pair(left, right);
    assert_eq!(merged.num_points(), 4);
    assert_eq!(merged.triangles().len(), 2);
    assert_eq!(merged.edges().count(), 5);
  }

  #[test]
  fn merging_triangle_and_point_extends_the_hull() {
    let left = triangle_primitive([p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]);
    let right = line_primitive([p(2.0, 0.0), p(2.0, 1.0)]);
    let merged = merge_pair(left, right);
    assert_eq!(merged.num_points(), 5);
    assert!(merged.triangles().len() >= 2);
  }
}
