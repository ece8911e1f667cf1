//! The quad-edge topological substrate: an arena of half-edge records plus
//! the algebraic operators (`splice`, `connect`, `kill_edge`) that keep a
//! planar subdivision consistent under local mutation.
//!
//! This is a simplified quad-edge: the classical Guibas-Stolfi structure has
//! four records per undirected edge (two dual pairs, to also carry the
//! Voronoi dual). Since the core never materializes the dual, two half-edge
//! records per undirected edge are sufficient. They are always allocated as
//! a consecutive pair `(k, k+1)`.

use crate::point::Point;
use crate::Error;
use claims::debug_assert_ok;

type Result<T> = std::result::Result<T, Error>;

/// Index into a [`Subdivision`]'s point vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub usize);

/// Index into a [`Subdivision`]'s edge arena.
///
/// Two `EdgeId`s form an undirected edge iff they are `sym` of each other;
/// by construction those are always the two elements of a consecutive pair
/// allocated by [`Subdivision::setup_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A single directed half-edge, one half of an undirected quad-edge.
#[derive(Debug, Clone, Copy)]
struct HalfEdge {
  /// Stable self-index, kept alongside the position in the arena so that
  /// records can be validated against where they actually live.
  index: EdgeId,
  org: PointId,
  dest: PointId,
  sym: EdgeId,
  onext: EdgeId,
  oprev: EdgeId,
  deactivated: bool,
}

/// A planar subdivision: the points it triangulates, the half-edge arena
/// that carries its topology, and the two boundary half-edges used to zip
/// subdivisions together during a merge.
#[derive(Debug, Clone)]
pub struct Subdivision {
  points: Vec<Point>,
  edges: Vec<HalfEdge>,
  /// Half-edge incident to the lexicographically smallest point, oriented
  /// outward on the hull's lower chain. `None` only for subdivisions of
  /// fewer than two points.
  inner: Option<EdgeId>,
  /// Half-edge incident to the lexicographically largest point, oriented
  /// outward on the hull's upper chain.
  outer: Option<EdgeId>,
}

impl Subdivision {
  /// An empty subdivision over the given points, with no edges. Used for
  /// the degenerate 0- and 1-point cases; every other subdivision is built
  /// up from primitives (see [`crate::primitives`]).
  pub fn empty(points: Vec<Point>) -> Self {
    Subdivision {
      points,
      edges: Vec::new(),
      inner: None,
      outer: None,
    }
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn point(&self, id: PointId) -> Point {
    self.points[id.0]
  }

  pub fn num_points(&self) -> usize {
    self.points.len()
  }

  pub fn num_edges(&self) -> usize {
    self.edges.len()
  }

  pub fn inner(&self) -> Option<EdgeId> {
    self.inner
  }

  pub fn outer(&self) -> Option<EdgeId> {
    self.outer
  }

  pub fn org(&self, e: EdgeId) -> PointId {
    self.edges[e.0].org
  }

  pub fn dest(&self, e: EdgeId) -> PointId {
    self.edges[e.0].dest
  }

  pub fn org_point(&self, e: EdgeId) -> Point {
    self.point(self.org(e))
  }

  pub fn dest_point(&self, e: EdgeId) -> Point {
    self.point(self.dest(e))
  }

  pub fn sym(&self, e: EdgeId) -> EdgeId {
    self.edges[e.0].sym
  }

  pub fn onext(&self, e: EdgeId) -> EdgeId {
    self.edges[e.0].onext
  }

  pub fn oprev(&self, e: EdgeId) -> EdgeId {
    self.edges[e.0].oprev
  }

  pub fn is_deactivated(&self, e: EdgeId) -> bool {
    self.edges[e.0].deactivated
  }

  /// Append a half-edge to the arena. The caller must have already built
  /// `edge.index` to equal the arena's current length.
  fn push_back(&mut self, edge: HalfEdge) {
    debug_assert!(edge.index.0 == self.edges.len());
    self.edges.push(edge);
  }

  /// Allocate a fresh undirected edge `org -> dest` as a pair of half-edges
  /// at the next two free arena slots. Both half-edges start out as
  /// self-loops (`onext == oprev == own index`) -- the edge is not yet
  /// stitched into any ring.
  pub fn setup_edge(&mut self, org: PointId, dest: PointId) -> EdgeId {
    let k = self.edges.len();
    let e = EdgeId(k);
    let e_sym = EdgeId(k + 1);

    self.push_back(HalfEdge {
      index: e,
      org,
      dest,
      sym: e_sym,
      onext: e,
      oprev: e,
      deactivated: false,
    });
    self.push_back(HalfEdge {
      index: e_sym,
      org: dest,
      dest: org,
      sym: e,
      onext: e_sym,
      oprev: e_sym,
      deactivated: false,
    });
    e
  }

  /// The Guibas-Stolfi `splice` primitive: simultaneously join or split the
  /// `onext` orbits at `org(a)` and `org(b)`.
  ///
  /// If the two origins were in distinct orbits, the orbits merge. If they
  /// were in the same orbit, it splits in two. `splice` is its own inverse:
  /// applying it twice in a row is the identity on ring structure.
  pub fn splice(&mut self, a: EdgeId, b: EdgeId) {
    let a_onext = self.edges[a.0].onext;
    let b_onext = self.edges[b.0].onext;

    self.edges[a_onext.0].oprev = b;
    self.edges[b_onext.0].oprev = a;

    self.edges[a.0].onext = b_onext;
    self.edges[b.0].onext = a_onext;
  }

  /// Create a new edge from `dest(a)` to `org(b)`, stitched into the
  /// subdivision so that it lies in the face to the left of both `a` and
  /// `b`. Returns the half-edge oriented `dest(a) -> org(b)`.
  pub fn connect(&mut self, a: EdgeId, b: EdgeId) -> EdgeId {
    let new_edge = self.setup_edge(self.dest(a), self.org(b));
    let a_sym_oprev = self.oprev(self.sym(a));
    self.splice(new_edge, a_sym_oprev);
    self.splice(self.sym(new_edge), b);
    new_edge
  }

  /// Remove `e` and its `sym` from their rings and mark both deactivated.
  /// The arena slots remain (sparse deletion); callers must not retain or
  /// traverse to a deactivated index afterwards. A no-op if `e` is already
  /// deactivated, which happens if its ring has already collapsed to a
  /// self-loop pointing at itself (see the source ambiguity this resolves:
  /// killing an edge twice used to be unguarded).
  pub fn kill_edge(&mut self, e: EdgeId) {
    if self.is_deactivated(e) {
      return;
    }
    let e_oprev = self.oprev(e);
    self.splice(e, e_oprev);

    let sym = self.sym(e);
    let sym_oprev = self.oprev(sym);
    self.splice(sym, sym_oprev);

    self.edges[e.0].deactivated = true;
    self.edges[sym.0].deactivated = true;
  }

  pub fn set_extreme_edges(&mut self, inner: EdgeId, outer: EdgeId) {
    self.inner = Some(inner);
    self.outer = Some(outer);
  }

  /// Absorb `other` into `self`, renumbering `other`'s edge indices by this
  /// subdivision's current edge count and its point indices by this
  /// subdivision's current point count, then appending both arenas.
  ///
  /// Precondition: `self` and `other` are geometrically disjoint along x,
  /// with `self` strictly to the left. This is the only place two
  /// subdivisions' arenas are combined; it consumes `other`.
  pub fn merge(&mut self, other: Subdivision) -> EdgeShift {
    let edge_shift = self.edges.len();
    let point_shift = self.points.len();

    self.points.extend(other.points);
    self.edges.extend(other.edges.into_iter().map(|edge| HalfEdge {
      index: EdgeId(edge.index.0 + edge_shift),
      org: PointId(edge.org.0 + point_shift),
      dest: PointId(edge.dest.0 + point_shift),
      sym: EdgeId(edge.sym.0 + edge_shift),
      onext: EdgeId(edge.onext.0 + edge_shift),
      oprev: EdgeId(edge.oprev.0 + edge_shift),
      deactivated: edge.deactivated,
    }));

    EdgeShift(edge_shift)
  }

  // ---------------------------- read-side API ----------------------------

  /// Enumerate the unique undirected edges: one half-edge per pair, chosen
  /// as the one whose index is smaller than its sym's.
  pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
    self.edges.iter().enumerate().filter_map(|(i, e)| {
      if e.deactivated {
        return None;
      }
      let id = EdgeId(i);
      if id.0 < e.sym.0 {
        Some(id)
      } else {
        None
      }
    })
  }

  /// Walk the `onext` ring starting at `e`, including `e` itself.
  pub fn onext_ring(&self, e: EdgeId) -> impl Iterator<Item = EdgeId> + '_ {
    let mut current = Some(e);
    std::iter::from_fn(move || {
      let this = current?;
      let next = self.onext(this);
      current = if next == e { None } else { Some(next) };
      Some(this)
    })
  }

  /// Enumerate the triangular faces of the subdivision as point-index
  /// triples. Each bounded triangular face is visited from its
  /// smallest-origin half-edge; degenerate (non-closing, or repeated-vertex)
  /// walks are skipped, which is what happens when the subdivision has no
  /// triangulated interior yet (the polyline case, S3).
  ///
  /// Every interior face's three-edge Lnext walk can be started from up to
  /// two of its half-edges with `org < dest`, and the same walk also closes
  /// around the unbounded outer face whenever it happens to be a 3-cycle. A
  /// face is kept only when its origin is the minimum of the three visited
  /// points (so each face is visited once, from a single representative
  /// half-edge) and only when it is wound counterclockwise (so the outer
  /// face, always wound the opposite way from its bounded neighbor, is
  /// excluded).
  pub fn triangles(&self) -> Vec<(PointId, PointId, PointId)> {
    let mut out = Vec::new();
    for (i, e) in self.edges.iter().enumerate() {
      if e.deactivated {
        continue;
      }
      let e_id = EdgeId(i);
      if !(e.org.0 < e.dest.0) {
        continue;
      }
      let e1 = self.onext(self.sym(e_id));
      let e2 = self.onext(self.sym(e1));
      let e3 = self.onext(self.sym(e2));
      if e3 != e_id {
        continue;
      }
      let (a, b, c) = (self.org(e_id), self.org(e1), self.org(e2));
      if a == b || b == c || a == c {
        continue;
      }
      if a.0 > b.0 || a.0 > c.0 {
        continue;
      }
      if !crate::predicates::on_right(self.point(a), self.point(b), self.point(c)) {
        continue;
      }
      out.push((a, b, c));
    }
    out
  }

  /// One representative half-edge per point index `0..n`: the first
  /// half-edge encountered in arena order with that origin.
  pub fn get_unique(&self, n: usize) -> Vec<Option<EdgeId>> {
    let mut unique = vec![None; n];
    for (i, e) in self.edges.iter().enumerate() {
      if e.deactivated {
        continue;
      }
      let slot = &mut unique[e.org.0];
      if slot.is_none() {
        *slot = Some(EdgeId(i));
      }
    }
    unique
  }

  /// Drop deactivated edges from the arena and compact the remaining
  /// indices. Callers must not hold onto `EdgeId`s obtained before this
  /// call; `inner`/`outer` and every stored `sym`/`onext`/`oprev` are
  /// remapped consistently.
  pub fn filter_deactivated(&mut self) {
    let mut remap = vec![None; self.edges.len()];
    let mut kept = Vec::with_capacity(self.edges.len());
    for (old_idx, edge) in self.edges.iter().enumerate() {
      if !edge.deactivated {
        remap[old_idx] = Some(EdgeId(kept.len()));
        kept.push(*edge);
      }
    }
    let remap_id = |id: EdgeId| remap[id.0].expect("live edge references a deactivated edge");
    for edge in kept.iter_mut() {
      edge.index = remap_id(edge.index);
      edge.sym = remap_id(edge.sym);
      edge.onext = remap_id(edge.onext);
      edge.oprev = remap_id(edge.oprev);
    }
    self.inner = self.inner.map(remap_id);
    self.outer = self.outer.map(remap_id);
    self.edges = kept;
  }

  // --------------------------- invariant checks ---------------------------

  /// Check the structural invariants from the subdivision's data-model
  /// section: sym involution, onext/oprev duality. Only run in debug
  /// builds, where a violation indicates a bug in this module rather than
  /// a caller contract violation.
  #[cfg(debug_assertions)]
  pub fn check_invariants(&self) -> Result<()> {
    for (i, e) in self.edges.iter().enumerate() {
      if e.deactivated {
        continue;
      }
      let id = EdgeId(i);
      let sym = e.sym;
      if self.sym(sym) != id {
        return Err(Error::InvariantViolation);
      }
      if sym == id {
        return Err(Error::InvariantViolation);
      }
      if self.org(id) != self.dest(sym) {
        return Err(Error::InvariantViolation);
      }
      if self.onext(self.oprev(id)) != id {
        return Err(Error::InvariantViolation);
      }
      if self.oprev(self.onext(id)) != id {
        return Err(Error::InvariantViolation);
      }
    }
    Ok(())
  }

  #[cfg(not(debug_assertions))]
  pub fn check_invariants(&self) -> Result<()> {
    Ok(())
  }
}

/// How far an edge index must be shifted after it was absorbed by
/// [`Subdivision::merge`]. Callers that held onto `EdgeId`s from the
/// absorbed subdivision must shift them through this before use.
#[derive(Debug, Clone, Copy)]
pub struct EdgeShift(pub usize);

impl EdgeShift {
  pub fn shift(&self, e: EdgeId) -> EdgeId {
    EdgeId(e.0 + self.0)
  }
}

/// Assert the structural invariants in debug builds; a no-op in release.
pub fn debug_check_invariants(sub: &Subdivision) {
  debug_assert_ok!(sub.check_invariants());
}
