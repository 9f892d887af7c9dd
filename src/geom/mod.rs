use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Itertools;

mod geometry;
mod location;

pub use geometry::{Geometry, Polygon, Ring};
pub use location::{Location, Position};

/// A coordinate in the plane.
///
/// Equality, ordering and hashing are **bit-exact**: two coordinates are the
/// same node key only if their f64 bit patterns match. The whole graph relies
/// on this for node merging -- a tolerance comparison here would merge nodes
/// that the intersection machinery later tells apart, and the topology would
/// come out inconsistent.
#[derive(Clone, Copy, Debug)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Coordinate {
        Coordinate { x, y }
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Coordinate) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

/// Coordinates are comparable so the node map can iterate nodes in a
/// deterministic left-to-right, bottom-to-top order.
impl Ord for Coordinate {
    fn cmp(&self, other: &Coordinate) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Coordinate) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// An axis-aligned bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Envelope {
    /// The envelope of the segment `p0`-`p1` (either point order).
    pub fn from_segment(p0: Coordinate, p1: Coordinate) -> Envelope {
        Envelope {
            min_x: p0.x.min(p1.x),
            min_y: p0.y.min(p1.y),
            max_x: p0.x.max(p1.x),
            max_y: p0.y.max(p1.y),
        }
    }

    /// The envelope of a non-empty coordinate sequence.
    pub fn from_coordinates(pts: &[Coordinate]) -> Envelope {
        let mut env = Envelope::from_segment(pts[0], pts[0]);
        for p in &pts[1..] {
            env.expand_to_include(*p);
        }
        env
    }

    pub fn expand_to_include(&mut self, p: Coordinate) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn intersects(&self, other: &Envelope) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    pub fn contains(&self, p: Coordinate) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindingOrder {
    Clockwise,
    CounterClockwise,
}

/// Returns 2*area, signed: positive iff the ring is counter-clockwise on
/// math axes (y grows upward).
///
/// Assumes the first and last coordinates are identical.
pub fn signed_area2<'a, T: IntoIterator<Item = &'a Coordinate>>(pts: T) -> f64 {
    // https://en.wikipedia.org/wiki/Shoelace_formula
    let mut a = 0.0;

    for (p1, p2) in pts.into_iter().tuple_windows() {
        a += p1.x * p2.y - p2.x * p1.y;
    }

    a
}

/// Returns 2*area and winding order.
///
/// A zero-area ring is considered to be Clockwise.
///
/// Assumes the first and last coordinates are identical.
pub fn area2_and_winding_order<'a, T: IntoIterator<Item = &'a Coordinate>>(
    pts: T,
) -> (f64, WindingOrder) {
    let a = signed_area2(pts);

    if a > 0.0 {
        (a, WindingOrder::CounterClockwise)
    } else {
        (-a, WindingOrder::Clockwise)
    }
}

/// Returns winding order.
///
/// A zero-area ring is considered to be Clockwise.
///
/// Assumes the first and last coordinates are identical.
pub fn winding_order<'a, T: IntoIterator<Item = &'a Coordinate>>(pts: T) -> WindingOrder {
    area2_and_winding_order(pts).1
}

/// Copies `pts`, dropping each coordinate that is bit-identical to its
/// predecessor.
///
/// Every sequence that becomes an Edge passes through here first: the sweep
/// machinery assumes no zero-length segments exist.
pub fn remove_repeated_points(pts: &[Coordinate]) -> Box<[Coordinate]> {
    let mut out: Vec<Coordinate> = Vec::with_capacity(pts.len());
    for &p in pts {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    out.into_boxed_slice()
}
