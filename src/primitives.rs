//! Base subdivisions built directly from a group of 2 or 3 points, the
//! leaves the merge engine folds pairwise into the final triangulation.

use crate::predicates::{collinear, on_left, on_right};
use crate::quadedge::{PointId, Subdivision};
use crate::point::Point;
use crate::Error;

type Result<T> = std::result::Result<T, Error>;

/// One edge between two points. `inner` is the half-edge from `p0`;
/// `outer` is its sym.
pub fn line_primitive(points: [Point; 2]) -> Subdivision {
  let mut sub = Subdivision::empty(points.to_vec());
  let e = sub.setup_edge(PointId(0), PointId(1));
  sub.set_extreme_edges(e, sub.sym(e));
  sub
}

/// A triangle (or, for collinear input, a two-edge polyline) from three
/// points `p0, p1, p2`.
pub fn triangle_primitive(points: [Point; 3]) -> Subdivision {
  let [p0, p1, p2] = points;
  let mut sub = Subdivision::empty(points.to_vec());

  let e1 = sub.setup_edge(PointId(0), PointId(1));
  let e2 = sub.setup_edge(PointId(1), PointId(2));
  sub.splice(sub.sym(e1), e2);

  if on_right(p0, p1, p2) {
    sub.connect(e2, e1);
    sub.set_extreme_edges(e1, sub.sym(e2));
  } else if on_left(p0, p1, p2) {
    let c = sub.connect(e2, e1);
    sub.set_extreme_edges(sub.sym(c), c);
  } else {
    debug_assert!(collinear(p0, p1, p2));
    sub.set_extreme_edges(e1, sub.sym(e2));
  }
  sub
}

/// Build one primitive subdivision per group.
///
/// Precondition: every group has size 2 or 3 (the splitter's contract). A
/// group of any other size is a programmer error, not a data error — the
/// splitter must never produce one.
pub fn make_primitives(groups: Vec<Vec<Point>>) -> Result<Vec<Subdivision>> {
  groups
    .into_iter()
    .map(|group| match group.len() {
      2 => Ok(line_primitive([group[0], group[1]])),
      3 => Ok(triangle_primitive([group[0], group[1], group[2]])),
      _ => Err(Error::InvalidGroupSize(group.len())),
    })
    .collect()
}
