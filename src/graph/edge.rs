use itertools::Itertools;

use crate::algorithm::LineIntersection;
use crate::geom::{Coordinate, Envelope};

use super::edge_intersection::EdgeIntersectionList;
use super::label::Label;

pub type EdgeId = u32;

/// One linear component of a geometry: a chain of segments with a topology
/// label and the intersections discovered along it.
///
/// The coordinate sequence is duplicate-free and immutable after
/// construction. The label and the intersection list keep changing as the
/// intersection phase runs; the edge itself is never deleted, only split
/// into sub-edges when downstream code asks for them.
#[derive(Clone, Debug)]
pub struct Edge {
    pts: Box<[Coordinate]>,
    pub label: Label,
    intersections: EdgeIntersectionList,
    isolated: bool,
}

impl Edge {
    /// `pts` must already have consecutive duplicates removed; zero-length
    /// segments would break the sweep machinery.
    pub fn new(pts: Box<[Coordinate]>, label: Label) -> Edge {
        debug_assert!(pts.len() >= 2);
        debug_assert!(pts.iter().tuple_windows().all(|(a, b)| a != b));
        Edge {
            pts,
            label,
            intersections: EdgeIntersectionList::new(),
            isolated: true,
        }
    }

    pub fn pts(&self) -> &[Coordinate] {
        &self.pts
    }

    pub fn num_points(&self) -> usize {
        self.pts.len()
    }

    pub fn num_segments(&self) -> usize {
        self.pts.len() - 1
    }

    pub fn is_closed(&self) -> bool {
        self.pts.first() == self.pts.last()
    }

    pub fn envelope(&self) -> Envelope {
        Envelope::from_coordinates(&self.pts)
    }

    pub fn intersections(&self) -> &EdgeIntersectionList {
        &self.intersections
    }

    /// Whether the intersection phase found this edge touching anything.
    pub fn is_isolated(&self) -> bool {
        self.isolated
    }

    pub fn set_isolated(&mut self, isolated: bool) {
        self.isolated = isolated;
    }

    /// Records one intersection point on segment `segment_index` at distance
    /// `dist` along it.
    ///
    /// An intersection landing exactly on the next vertex is normalized onto
    /// the following segment at distance 0, so each position has one
    /// canonical encoding.
    pub fn add_intersection(&mut self, int_pt: Coordinate, segment_index: usize, dist: f64) {
        let mut seg = segment_index;
        let mut d = dist;

        let next = segment_index + 1;
        if next < self.pts.len() && int_pt == self.pts[next] {
            seg = next;
            d = 0.0;
        }
        self.intersections.add(int_pt, seg, d);
    }

    /// Records every point of a computed intersection. `input_index` says
    /// which of the intersection's two input segments belongs to this edge,
    /// so distances are measured along the right one.
    pub fn add_line_intersection(
        &mut self,
        li: &LineIntersection,
        segment_index: usize,
        input_index: usize,
    ) {
        for i in 0..li.count() {
            let dist = li.edge_distance(input_index, i);
            self.add_intersection(li.point(i), segment_index, dist);
        }
    }

    /// Appends the sub-edges implied by the recorded intersections, in
    /// traversal order. This is the handoff to overlay construction.
    pub fn add_split_edges(&mut self, out: &mut Vec<Edge>) {
        self.intersections.add_endpoints(&self.pts);

        let splits: Vec<Edge> = self
            .intersections
            .iter()
            .tuple_windows()
            .map(|(ei0, ei1)| {
                // Vertices strictly between the two intersections, bracketed
                // by the intersection coordinates themselves.
                let mut pts: Vec<Coordinate> =
                    Vec::with_capacity(ei1.segment_index - ei0.segment_index + 2);
                pts.push(ei0.coord);
                pts.extend_from_slice(&self.pts[ei0.segment_index + 1..=ei1.segment_index]);

                let last_seg_start = self.pts[ei1.segment_index];
                if ei1.dist > 0.0 || ei1.coord != last_seg_start {
                    pts.push(ei1.coord);
                }

                Edge::new(pts.into_boxed_slice(), self.label.clone())
            })
            .collect();
        out.extend(splits);
    }
}
