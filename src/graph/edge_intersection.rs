use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::geom::Coordinate;

/// A point where something crosses or touches an edge, located along the
/// edge's vertex chain.
///
/// Ordering is lexicographic by (segment index, distance along segment),
/// which is the edge's traversal order; it decides the order split edges are
/// emitted in. Two intersections at the same position are the same
/// intersection, whatever coordinate arithmetic produced them.
#[derive(Clone, Copy, Debug)]
pub struct EdgeIntersection {
    pub coord: Coordinate,
    pub segment_index: usize,
    pub dist: f64,
}

impl EdgeIntersection {
    pub fn new(coord: Coordinate, segment_index: usize, dist: f64) -> EdgeIntersection {
        EdgeIntersection {
            coord,
            segment_index,
            dist,
        }
    }
}

impl Ord for EdgeIntersection {
    fn cmp(&self, other: &EdgeIntersection) -> Ordering {
        self.segment_index
            .cmp(&other.segment_index)
            .then_with(|| self.dist.total_cmp(&other.dist))
    }
}

impl PartialOrd for EdgeIntersection {
    fn partial_cmp(&self, other: &EdgeIntersection) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EdgeIntersection {
    fn eq(&self, other: &EdgeIntersection) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EdgeIntersection {}

impl fmt::Display for EdgeIntersection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} seg{} dist{}", self.coord, self.segment_index, self.dist)
    }
}

/// The ordered set of intersections recorded along one edge.
#[derive(Clone, Debug, Default)]
pub struct EdgeIntersectionList {
    list: BTreeSet<EdgeIntersection>,
}

impl EdgeIntersectionList {
    pub fn new() -> EdgeIntersectionList {
        EdgeIntersectionList::default()
    }

    /// Records an intersection. Inserting the same position twice is a
    /// no-op.
    pub fn add(&mut self, coord: Coordinate, segment_index: usize, dist: f64) {
        self.list.insert(EdgeIntersection::new(coord, segment_index, dist));
    }

    /// Whether any recorded intersection lies at `coord`.
    pub fn is_intersection(&self, coord: &Coordinate) -> bool {
        self.list.iter().any(|ei| ei.coord == *coord)
    }

    /// Marks the edge's own endpoints as intersections, so split edges cover
    /// the whole vertex chain.
    pub fn add_endpoints(&mut self, pts: &[Coordinate]) {
        let max_seg_index = pts.len() - 1;
        self.add(pts[0], 0, 0.0);
        self.add(pts[max_seg_index], max_seg_index, 0.0);
    }

    /// Intersections in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &EdgeIntersection> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
