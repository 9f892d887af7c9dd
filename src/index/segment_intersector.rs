use crate::algorithm::{LineIntersection, LineIntersector};
use crate::geom::Coordinate;
use crate::graph::Edge;

/// Receives candidate segment pairs from an edge-set intersector, computes
/// their intersections, records them on the edges involved, and accumulates
/// summary flags about what was found.
///
/// One instance lives for the duration of one intersection pass.
#[derive(Clone, Debug)]
pub struct SegmentIntersector {
    li: LineIntersector,
    include_proper: bool,
    record_isolated: bool,
    has_intersection: bool,
    has_proper: bool,
    has_proper_interior: bool,
    proper_intersection_point: Option<Coordinate>,
    // Boundary coordinates of each geometry argument, for telling proper
    // interior intersections from ones at a boundary node.
    boundary_points: Option<[Vec<Coordinate>; 2]>,
    num_tests: usize,
    num_intersections: usize,
}

impl SegmentIntersector {
    pub fn new(li: LineIntersector, include_proper: bool, record_isolated: bool) -> SegmentIntersector {
        SegmentIntersector {
            li,
            include_proper,
            record_isolated,
            has_intersection: false,
            has_proper: false,
            has_proper_interior: false,
            proper_intersection_point: None,
            boundary_points: None,
            num_tests: 0,
            num_intersections: 0,
        }
    }

    pub fn set_boundary_nodes(&mut self, boundary0: Vec<Coordinate>, boundary1: Vec<Coordinate>) {
        self.boundary_points = Some([boundary0, boundary1]);
    }

    /// Tests one segment of `e0` against one segment of `e1` (distinct
    /// edges) and records any intersection on both.
    pub fn add_intersections(&mut self, e0: &mut Edge, seg0: usize, e1: &mut Edge, seg1: usize) {
        self.num_tests += 1;
        let p = e0.pts();
        let q = e1.pts();
        let li = self
            .li
            .compute_intersection(p[seg0], p[seg0 + 1], q[seg1], q[seg1 + 1]);

        if !li.has_intersection() {
            return;
        }
        if self.record_isolated {
            e0.set_isolated(false);
            e1.set_isolated(false);
        }
        self.num_intersections += 1;

        self.has_intersection = true;
        if self.include_proper || !li.is_proper() {
            e0.add_line_intersection(&li, seg0, 0);
            e1.add_line_intersection(&li, seg1, 1);
        }
        self.record_proper(&li);
    }

    /// Tests two segments of the same edge. Intersections that are just the
    /// edge's own connectivity (adjacent segments meeting at a vertex, or a
    /// closed edge's wraparound) are discarded.
    pub fn add_self_intersections(&mut self, edge: &mut Edge, seg0: usize, seg1: usize) {
        if seg0 == seg1 {
            return;
        }
        self.num_tests += 1;
        let p = edge.pts();
        let li = self
            .li
            .compute_intersection(p[seg0], p[seg0 + 1], p[seg1], p[seg1 + 1]);

        if !li.has_intersection() {
            return;
        }
        if self.record_isolated {
            edge.set_isolated(false);
        }
        self.num_intersections += 1;
        if Self::is_trivial(edge, seg0, seg1, &li) {
            return;
        }

        self.has_intersection = true;
        if self.include_proper || !li.is_proper() {
            edge.add_line_intersection(&li, seg0, 0);
            edge.add_line_intersection(&li, seg1, 1);
        }
        self.record_proper(&li);
    }

    fn is_trivial(edge: &Edge, seg0: usize, seg1: usize, li: &LineIntersection) -> bool {
        if li.count() != 1 {
            return false;
        }
        if seg0.abs_diff(seg1) == 1 {
            return true;
        }
        if edge.is_closed() {
            let max_index = edge.num_points() - 1;
            if (seg0 == 0 && seg1 == max_index) || (seg1 == 0 && seg0 == max_index) {
                return true;
            }
        }
        false
    }

    fn record_proper(&mut self, li: &LineIntersection) {
        if !li.is_proper() {
            return;
        }
        self.proper_intersection_point = Some(li.point(0));
        self.has_proper = true;
        if !self.is_boundary_point(li) {
            self.has_proper_interior = true;
        }
    }

    fn is_boundary_point(&self, li: &LineIntersection) -> bool {
        let Some(boundary) = &self.boundary_points else {
            return false;
        };
        boundary
            .iter()
            .flatten()
            .any(|&pt| (0..li.count()).any(|i| li.point(i) == pt))
    }

    pub fn has_intersection(&self) -> bool {
        self.has_intersection
    }

    /// Whether any intersection was in the interior of both segments.
    pub fn has_proper_intersection(&self) -> bool {
        self.has_proper
    }

    /// Whether any proper intersection was away from every boundary node of
    /// both arguments.
    pub fn has_proper_interior_intersection(&self) -> bool {
        self.has_proper_interior
    }

    pub fn proper_intersection_point(&self) -> Option<Coordinate> {
        self.proper_intersection_point
    }

    pub fn num_tests(&self) -> usize {
        self.num_tests
    }

    pub fn num_intersections(&self) -> usize {
        self.num_intersections
    }
}
