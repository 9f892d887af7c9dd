use crate::geom::{Coordinate, Envelope, Geometry, Location, Polygon, Ring};
use crate::graph::BoundaryNodeRule;

use super::line_intersector::orientation_index;

/// Point-in-ring test state, fed one segment at a time.
///
/// Counts how often a ray from the query point toward +x crosses the
/// segments it is shown. Odd count means inside. Landing exactly on a
/// segment short-circuits to Boundary. Feeding it an arbitrary subset of a
/// ring's segments is fine as long as the subset contains every segment
/// whose y-range covers the query point; that is what lets a spatial index
/// drive it.
#[derive(Clone, Copy, Debug)]
pub struct RayCrossingCounter {
    p: Coordinate,
    crossing_count: usize,
    on_segment: bool,
}

impl RayCrossingCounter {
    pub fn new(p: Coordinate) -> RayCrossingCounter {
        RayCrossingCounter {
            p,
            crossing_count: 0,
            on_segment: false,
        }
    }

    pub fn count_segment(&mut self, p1: Coordinate, p2: Coordinate) {
        let p = self.p;

        // Entirely left of the ray origin.
        if p1.x < p.x && p2.x < p.x {
            return;
        }
        if p == p2 {
            self.on_segment = true;
            return;
        }
        if p1.y == p.y && p2.y == p.y {
            // Horizontal at ray height: on it or not, never a crossing.
            let min_x = p1.x.min(p2.x);
            let max_x = p1.x.max(p2.x);
            if p.x >= min_x && p.x <= max_x {
                self.on_segment = true;
            }
            return;
        }
        // Straddles the ray height. Half-open on y so a vertex exactly at
        // ray height is counted by only one of its two segments.
        if (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y) {
            let mut orient = orientation_index(p1, p2, p);
            if orient == 0 {
                self.on_segment = true;
                return;
            }
            if p2.y < p1.y {
                orient = -orient;
            }
            if orient == 1 {
                self.crossing_count += 1;
            }
        }
    }

    pub fn location(&self) -> Location {
        if self.on_segment {
            Location::Boundary
        } else if self.crossing_count % 2 == 1 {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}

/// Locates a point within one ring.
pub fn locate_point_in_ring(p: Coordinate, ring: &Ring) -> Location {
    let mut counter = RayCrossingCounter::new(p);
    let pts = ring.coordinates();
    for w in pts.windows(2) {
        counter.count_segment(w[0], w[1]);
    }
    counter.location()
}

/// Locates a point relative to a full geometry, combining the locations the
/// point takes in each component under a [`BoundaryNodeRule`].
///
/// A point can sit on the boundary of several components at once; whether
/// that combination is Boundary or Interior is exactly the rule's call.
#[derive(Clone, Debug, Default)]
pub struct PointLocator {
    rule: BoundaryNodeRule,
    is_in: bool,
    num_boundaries: usize,
}

impl PointLocator {
    pub fn new() -> PointLocator {
        PointLocator::default()
    }

    pub fn with_rule(rule: BoundaryNodeRule) -> PointLocator {
        PointLocator {
            rule,
            ..PointLocator::default()
        }
    }

    pub fn locate(&mut self, p: Coordinate, geometry: &Geometry) -> Location {
        self.is_in = false;
        self.num_boundaries = 0;
        self.compute_location(p, geometry);

        if self.rule.is_in_boundary(self.num_boundaries) {
            Location::Boundary
        } else if self.num_boundaries > 0 || self.is_in {
            Location::Interior
        } else {
            Location::Exterior
        }
    }

    fn compute_location(&mut self, p: Coordinate, geometry: &Geometry) {
        match geometry {
            Geometry::Point(c) => {
                let loc = if p == *c {
                    Location::Interior
                } else {
                    Location::Exterior
                };
                self.update(loc);
            }
            Geometry::MultiPoint(cs) => {
                for c in cs.iter() {
                    self.compute_location(p, &Geometry::Point(*c));
                }
            }
            Geometry::LineString(pts) => {
                let loc = Self::locate_on_line(p, pts);
                self.update(loc);
            }
            Geometry::MultiLineString(lines) => {
                for pts in lines.iter() {
                    let loc = Self::locate_on_line(p, pts);
                    self.update(loc);
                }
            }
            Geometry::Polygon(poly) => {
                let loc = Self::locate_in_polygon(p, poly);
                self.update(loc);
            }
            Geometry::MultiPolygon(polys) => {
                for poly in polys.iter() {
                    let loc = Self::locate_in_polygon(p, poly);
                    self.update(loc);
                }
            }
            Geometry::Collection(gs) => {
                for g in gs.iter() {
                    self.compute_location(p, g);
                }
            }
        }
    }

    fn update(&mut self, loc: Location) {
        match loc {
            Location::Interior => self.is_in = true,
            Location::Boundary => self.num_boundaries += 1,
            Location::Exterior => {}
        }
    }

    fn locate_on_line(p: Coordinate, pts: &[Coordinate]) -> Location {
        if pts.len() < 2 {
            return Location::Exterior;
        }
        if !Envelope::from_coordinates(pts).contains(p) {
            return Location::Exterior;
        }
        // An open line's endpoints are its boundary; a closed line has none.
        let closed = pts.first() == pts.last();
        if !closed && (p == pts[0] || p == pts[pts.len() - 1]) {
            return Location::Boundary;
        }
        for w in pts.windows(2) {
            if Self::point_on_segment(p, w[0], w[1]) {
                return Location::Interior;
            }
        }
        Location::Exterior
    }

    fn point_on_segment(p: Coordinate, p0: Coordinate, p1: Coordinate) -> bool {
        Envelope::from_segment(p0, p1).contains(p) && orientation_index(p0, p1, p) == 0
    }

    fn locate_in_polygon(p: Coordinate, poly: &Polygon) -> Location {
        let shell_loc = locate_point_in_ring(p, &poly.shell);
        if shell_loc != Location::Interior {
            return shell_loc;
        }
        for hole in poly.holes.iter() {
            match locate_point_in_ring(p, hole) {
                // Inside a hole is outside the polygon.
                Location::Interior => return Location::Exterior,
                Location::Boundary => return Location::Boundary,
                Location::Exterior => {}
            }
        }
        Location::Interior
    }
}
