//! Geometric predicates: orientation, in-circle, and the lexicographic
//! point order the merge engine and the splitter rely on.
//!
//! Every predicate here is a pure function of its inputs. The sign
//! conventions match the divide-and-conquer triangulator verbatim: `on_right`
//! and `on_left` are named for the algebraic sign of the determinant, not
//! for a claim about which geometric side a point falls on, and the merge
//! engine is only correct when every call site agrees with that convention.
//!
//! Orientation and in-circle are backed by `geometry_predicates`, an
//! adaptive-precision translation of Shewchuk's robust predicates. Naive
//! floating-point formulas are kept alongside as `*_naive` for testing and
//! documentation: they are what the source algorithm used directly, and the
//! robust versions compute the same determinants, just without catastrophic
//! cancellation near the zero boundary (see the numerical robustness design
//! note).

use crate::point::Point;
use std::cmp::Ordering;

/// `(p1.x - p3.x)(p2.y - p3.y) - (p1.y - p3.y)(p2.x - p3.x)`
///
/// This is the signed-area determinant the rest of this module is built on.
/// Ties (`sigma == 0.0`) mean `p1`, `p2`, `p3` are collinear.
pub fn signed_area_naive(p1: Point, p2: Point, p3: Point) -> f64 {
  (p1.x - p3.x) * (p2.y - p3.y) - (p1.y - p3.y) * (p2.x - p3.x)
}

fn signed_area(p1: Point, p2: Point, p3: Point) -> f64 {
  geometry_predicates::orient2d(p1.array(), p2.array(), p3.array())
}

/// True iff `p3` lies on the side of the directed line `p1 -> p2` for which
/// the signed-area determinant is positive.
pub fn on_right(p1: Point, p2: Point, p3: Point) -> bool {
  signed_area(p1, p2, p3) > 0.0
}

/// True iff `p3` lies on the side of the directed line `p1 -> p2` for which
/// the signed-area determinant is negative.
pub fn on_left(p1: Point, p2: Point, p3: Point) -> bool {
  signed_area(p1, p2, p3) < 0.0
}

/// Exact tie: `p1`, `p2`, `p3` are collinear.
pub fn collinear(p1: Point, p2: Point, p3: Point) -> bool {
  signed_area(p1, p2, p3) == 0.0
}

/// The 4x4 lifted-paraboloid in-circle determinant, expanded to avoid
/// materializing the homogeneous matrix:
///
/// ```text
/// ci = pi.x - q.x, ui = pi.y - q.y, vi = ci^2 + ui^2
/// det = c1(u2 v3 - v2 u3) - c2(u1 v3 - v1 u3) + c3(u1 v2 - v1 u2)
/// ```
///
/// True iff `det < 0`, per the source algorithm's sign convention (see
/// module docs: this is *not* independently re-derived from "CCW implies
/// positive", it is transcribed as specified).
pub fn in_circle_naive(p1: Point, p2: Point, p3: Point, q: Point) -> bool {
  let c1 = p1.x - q.x;
  let c2 = p2.x - q.x;
  let c3 = p3.x - q.x;

  let u1 = p1.y - q.y;
  let u2 = p2.y - q.y;
  let u3 = p3.y - q.y;

  let v1 = c1 * c1 + u1 * u1;
  let v2 = c2 * c2 + u2 * u2;
  let v3 = c3 * c3 + u3 * u3;

  let det = c1 * (u2 * v3 - v2 * u3) - c2 * (u1 * v3 - v1 * u3) + c3 * (u1 * v2 - v1 * u2);
  det < 0.0
}

pub fn in_circle(p1: Point, p2: Point, p3: Point, q: Point) -> bool {
  geometry_predicates::incircle(p1.array(), p2.array(), p3.array(), q.array()) < 0.0
}

/// Compare two points by x, breaking ties by y.
pub fn lexicographic_cmp(p: Point, q: Point) -> Ordering {
  p.lexicographic_cmp(&q)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
  }

  #[test]
  fn naive_and_robust_orientation_agree() {
    let cases = [
      (p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)),
      (p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)),
      (p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)),
    ];
    for (a, b, c) in cases {
      let naive = signed_area_naive(a, b, c);
      let robust_positive = on_right(a, b, c);
      let robust_negative = on_left(a, b, c);
      assert_eq!(naive > 0.0, robust_positive);
      assert_eq!(naive < 0.0, robust_negative);
      assert_eq!(naive == 0.0, collinear(a, b, c));
    }
  }

  #[test]
  fn naive_and_robust_incircle_agree() {
    let (a, b, c) = (p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    let inside = p(0.1, 0.1);
    let outside = p(10.0, 10.0);
    assert_eq!(in_circle_naive(a, b, c, inside), in_circle(a, b, c, inside));
    assert_eq!(
      in_circle_naive(a, b, c, outside),
      in_circle(a, b, c, outside)
    );
  }

  #[test]
  fn collinear_triple_is_neither_right_nor_left() {
    let a = p(0.0, 0.0);
    let b = p(1.0, 0.0);
    let c = p(2.0, 0.0);
    assert!(!on_right(a, b, c));
    assert!(!on_left(a, b, c));
    assert!(collinear(a, b, c));
  }

  #[test]
  fn lexicographic_order_breaks_ties_on_y() {
    assert_eq!(lexicographic_cmp(p(0.0, 1.0), p(0.0, 2.0)), Ordering::Less);
    assert_eq!(
      lexicographic_cmp(p(1.0, 0.0), p(0.0, 5.0)),
      Ordering::Greater
    );
  }
}
