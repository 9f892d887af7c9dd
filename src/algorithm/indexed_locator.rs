use itertools::Itertools;

use crate::geom::{Coordinate, Geometry, Location};

use super::point_locator::RayCrossingCounter;

/// A point-in-area locator that indexes the geometry's ring segments once,
/// then answers each query by testing only the segments whose y-range covers
/// the query point.
///
/// Gives the same answers as the direct ring walk; worth building only when
/// the same polygonal geometry will be queried repeatedly.
#[derive(Clone, Debug)]
pub struct IndexedPointInAreaLocator {
    index: IntervalIndex,
}

impl IndexedPointInAreaLocator {
    /// Indexes every ring of every polygon in `geometry`. Non-polygonal
    /// parts contribute nothing.
    pub fn new(geometry: &Geometry) -> IndexedPointInAreaLocator {
        let mut segments: Vec<Segment> = Vec::new();
        geometry.each_polygon(&mut |poly| {
            for ring in poly.rings() {
                for (&p0, &p1) in ring.coordinates().iter().tuple_windows() {
                    segments.push(Segment {
                        lo: p0.y.min(p1.y),
                        hi: p0.y.max(p1.y),
                        p0,
                        p1,
                    });
                }
            }
        });
        IndexedPointInAreaLocator {
            index: IntervalIndex::build(segments),
        }
    }

    pub fn locate(&self, p: Coordinate) -> Location {
        let mut counter = RayCrossingCounter::new(p);
        self.index.query(p.y, &mut |seg| counter.count_segment(seg.p0, seg.p1));
        counter.location()
    }
}

#[derive(Clone, Copy, Debug)]
struct Segment {
    lo: f64,
    hi: f64,
    p0: Coordinate,
    p1: Coordinate,
}

/// A static interval tree over segment y-ranges: leaves sorted by interval
/// midpoint, parents holding the merged range of their children. Built once,
/// never updated.
#[derive(Clone, Debug)]
struct IntervalIndex {
    segments: Vec<Segment>,
    // levels[0] holds one (lo, hi) per segment; each higher level merges
    // pairs from the one below, up to a single root.
    levels: Vec<Vec<(f64, f64)>>,
}

impl IntervalIndex {
    fn build(mut segments: Vec<Segment>) -> IntervalIndex {
        segments.sort_by(|a, b| (a.lo + a.hi).total_cmp(&(b.lo + b.hi)));

        let mut levels: Vec<Vec<(f64, f64)>> = Vec::new();
        if !segments.is_empty() {
            levels.push(segments.iter().map(|s| (s.lo, s.hi)).collect());
            while levels.last().unwrap().len() > 1 {
                let below = levels.last().unwrap();
                let merged: Vec<(f64, f64)> = below
                    .chunks(2)
                    .map(|pair| {
                        let lo = pair.iter().map(|iv| iv.0).fold(f64::INFINITY, f64::min);
                        let hi = pair.iter().map(|iv| iv.1).fold(f64::NEG_INFINITY, f64::max);
                        (lo, hi)
                    })
                    .collect();
                levels.push(merged);
            }
        }
        IntervalIndex { segments, levels }
    }

    /// Visits every segment whose y-range contains `y`.
    fn query<F: FnMut(&Segment)>(&self, y: f64, visit: &mut F) {
        if self.segments.is_empty() {
            return;
        }
        self.query_node(self.levels.len() - 1, 0, y, visit);
    }

    fn query_node<F: FnMut(&Segment)>(&self, level: usize, i: usize, y: f64, visit: &mut F) {
        let (lo, hi) = self.levels[level][i];
        if y < lo || y > hi {
            return;
        }
        if level == 0 {
            visit(&self.segments[i]);
            return;
        }
        let child = 2 * i;
        self.query_node(level - 1, child, y, visit);
        if child + 1 < self.levels[level - 1].len() {
            self.query_node(level - 1, child + 1, y, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::PointLocator;
    use crate::geom::{Polygon, Ring};

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
    fn basic_locations() {
        let geom = Geometry::Polygon(Polygon::new(
            square(0.0, 0.0, 10.0),
            vec![square(3.0, 3.0, 4.0)],
        ));
        let locator = IndexedPointInAreaLocator::new(&geom);

        assert_eq!(locator.locate(c(1.0, 1.0)), Location::Interior);
        assert_eq!(locator.locate(c(5.0, 5.0)), Location::Exterior);
        assert_eq!(locator.locate(c(0.0, 5.0)), Location::Boundary);
        assert_eq!(locator.locate(c(20.0, 5.0)), Location::Exterior);
    }

    #[test]
    fn empty_index_is_all_exterior() {
        let geom = Geometry::Point(c(1.0, 1.0));
        let locator = IndexedPointInAreaLocator::new(&geom);
        assert_eq!(locator.locate(c(1.0, 1.0)), Location::Exterior);
    }

    #[test]
    fn agrees_with_direct_locator_on_a_grid() {
        // A multipolygon with enough pieces that the index prunes for real.
        let polys: Vec<Polygon> = (0..8)
            .map(|i| {
                let y = i as f64 * 5.0;
                let holes = if i % 2 == 0 {
                    vec![square(1.0, y + 1.0, 1.0)]
                } else {
                    vec![]
                };
                Polygon::new(square(0.0, y, 3.0), holes)
            })
            .collect();
        let geom = Geometry::MultiPolygon(polys.into_boxed_slice());

        let indexed = IndexedPointInAreaLocator::new(&geom);
        let mut direct = PointLocator::new();

        for xi in -2..12 {
            for yi in -2..90 {
                let p = c(xi as f64 * 0.5, yi as f64 * 0.5);
                assert_eq!(
                    indexed.locate(p),
                    direct.locate(p, &geom),
                    "disagreement at {}",
                    p
                );
            }
        }
    }
}
