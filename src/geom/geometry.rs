use std::fmt;

use super::{winding_order, Coordinate, WindingOrder};

/// A closed coordinate sequence: the first and last coordinates are
/// identical.
///
/// Clockwise rings enclose positive space; counter-clockwise rings are holes
/// when used as a polygon shell's inner boundary. The graph does not assume
/// rings are non-self-intersecting -- discovering where they do intersect is
/// its job.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring(pub Box<[Coordinate]>);

impl Ring {
    pub fn new(pts: Vec<Coordinate>) -> Ring {
        Ring(pts.into_boxed_slice())
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn winding_order(&self) -> WindingOrder {
        winding_order(self.0.iter())
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "]")
    }
}

/// An area bounded by one shell and any number of holes.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub shell: Ring,
    pub holes: Box<[Ring]>,
}

impl Polygon {
    pub fn new(shell: Ring, holes: Vec<Ring>) -> Polygon {
        Polygon {
            shell,
            holes: holes.into_boxed_slice(),
        }
    }

    /// The shell followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.shell).chain(self.holes.iter())
    }
}

/// Every geometry kind the graph can decompose.
///
/// An exhaustive sum type: the "unsupported geometry subtype" failure mode of
/// a dynamic-dispatch design cannot happen here, the compiler rejects it.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    LineString(Box<[Coordinate]>),
    Polygon(Polygon),
    MultiPoint(Box<[Coordinate]>),
    MultiLineString(Box<[Box<[Coordinate]>]>),
    MultiPolygon(Box<[Polygon]>),
    Collection(Box<[Geometry]>),
}

impl Geometry {
    pub fn line_string(pts: Vec<Coordinate>) -> Geometry {
        Geometry::LineString(pts.into_boxed_slice())
    }

    /// Whether this geometry is purely area-valued (a Polygon or
    /// MultiPolygon). Collections are not polygonal even if every element
    /// is.
    pub fn is_polygonal(&self) -> bool {
        matches!(self, Geometry::Polygon(_) | Geometry::MultiPolygon(_))
    }

    /// The number of atomic geometries, counting through collections.
    pub fn component_count(&self) -> usize {
        match self {
            Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_) => 1,
            Geometry::MultiPoint(cs) => cs.len(),
            Geometry::MultiLineString(ls) => ls.len(),
            Geometry::MultiPolygon(ps) => ps.len(),
            Geometry::Collection(gs) => gs.iter().map(Geometry::component_count).sum(),
        }
    }

    /// Visits every polygon in this geometry, in order.
    pub fn each_polygon<'a, F: FnMut(&'a Polygon)>(&'a self, f: &mut F) {
        match self {
            Geometry::Polygon(p) => f(p),
            Geometry::MultiPolygon(ps) => {
                for p in ps.iter() {
                    f(p);
                }
            }
            Geometry::Collection(gs) => {
                for g in gs.iter() {
                    g.each_polygon(f);
                }
            }
            Geometry::Point(_)
            | Geometry::LineString(_)
            | Geometry::MultiPoint(_)
            | Geometry::MultiLineString(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn square(x0: f64, y0: f64, size: f64) -> Ring {
        Ring::new(vec![
            c(x0, y0),
            c(x0 + size, y0),
            c(x0 + size, y0 + size),
            c(x0, y0 + size),
            c(x0, y0),
        ])
    }

    #[test]
    fn polygonal_kinds() {
        let poly = Geometry::Polygon(Polygon::new(square(0.0, 0.0, 1.0), vec![]));
        assert!(poly.is_polygonal());
        assert!(!Geometry::Point(c(0.0, 0.0)).is_polygonal());
        assert!(!Geometry::Collection(vec![poly].into_boxed_slice()).is_polygonal());
    }

    #[test]
    fn component_count_recurses() {
        let polys: Vec<Polygon> = (0..3)
            .map(|i| Polygon::new(square(i as f64 * 10.0, 0.0, 1.0), vec![]))
            .collect();
        let multi = Geometry::MultiPolygon(polys.into_boxed_slice());
        assert_eq!(multi.component_count(), 3);

        let nested = Geometry::Collection(
            vec![multi.clone(), Geometry::Point(c(0.0, 0.0))].into_boxed_slice(),
        );
        assert_eq!(nested.component_count(), 4);
    }

    #[test]
    fn each_polygon_sees_collection_members() {
        let g = Geometry::Collection(
            vec![
                Geometry::Polygon(Polygon::new(square(0.0, 0.0, 1.0), vec![])),
                Geometry::Point(c(5.0, 5.0)),
                Geometry::Polygon(Polygon::new(square(10.0, 0.0, 1.0), vec![])),
            ]
            .into_boxed_slice(),
        );
        let mut n = 0;
        g.each_polygon(&mut |_| n += 1);
        assert_eq!(n, 2);
    }
}
