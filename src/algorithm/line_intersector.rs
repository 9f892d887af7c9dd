use crate::geom::{Coordinate, Envelope};

/// The side of the directed line `p1`->`p2` that `q` lies on: 1 for left
/// (counter-clockwise), -1 for right, 0 for collinear.
pub fn orientation_index(p1: Coordinate, p2: Coordinate, q: Coordinate) -> i32 {
    let det = (p2.x - p1.x) * (q.y - p1.y) - (p2.y - p1.y) * (q.x - p1.x);
    if det > 0.0 {
        1
    } else if det < 0.0 {
        -1
    } else {
        0
    }
}

/// Distance metric for ordering intersection points along a segment
/// `p0`->`p1`.
///
/// Projects onto the dominant axis instead of taking the Euclidean distance,
/// so values for points on the same segment order correctly even when the
/// points are nearly coincident. Only comparisons between distances on the
/// same segment are meaningful.
pub fn compute_edge_distance(p: Coordinate, p0: Coordinate, p1: Coordinate) -> f64 {
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();

    if p == p0 {
        return 0.0;
    }
    if p == p1 {
        return if dx > dy { dx } else { dy };
    }
    let pdx = (p.x - p0.x).abs();
    let pdy = (p.y - p0.y).abs();
    let mut dist = if dx > dy { pdx } else { pdy };
    // Rounding can zero the dominant-axis offset of a distinct point.
    if dist == 0.0 {
        dist = pdx.max(pdy);
    }
    dist
}

/// Computes segment/segment intersections.
///
/// Stateless: every call returns a fresh [`LineIntersection`]. The orientation
/// predicate behind it is the seam to swap in an exact-arithmetic version.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineIntersector;

impl LineIntersector {
    pub fn new() -> LineIntersector {
        LineIntersector
    }

    /// Intersects segment `p1`->`p2` with segment `q1`->`q2`.
    pub fn compute_intersection(
        &self,
        p1: Coordinate,
        p2: Coordinate,
        q1: Coordinate,
        q2: Coordinate,
    ) -> LineIntersection {
        let mut result = LineIntersection::none([p1, p2], [q1, q2]);

        let pq1 = orientation_index(p1, p2, q1);
        let pq2 = orientation_index(p1, p2, q2);
        if (pq1 > 0 && pq2 > 0) || (pq1 < 0 && pq2 < 0) {
            return result;
        }

        let qp1 = orientation_index(q1, q2, p1);
        let qp2 = orientation_index(q1, q2, p2);
        if (qp1 > 0 && qp2 > 0) || (qp1 < 0 && qp2 < 0) {
            return result;
        }

        if pq1 == 0 && pq2 == 0 && qp1 == 0 && qp2 == 0 {
            return Self::collinear_intersection(p1, p2, q1, q2);
        }

        // Exactly one crossing point. When an endpoint of one segment lies
        // on the other segment, that endpoint coordinate is returned
        // verbatim so downstream node merging sees the original bits.
        if pq1 == 0 || pq2 == 0 || qp1 == 0 || qp2 == 0 {
            let pt = if p1 == q1 || p1 == q2 {
                p1
            } else if p2 == q1 || p2 == q2 {
                p2
            } else if pq1 == 0 {
                q1
            } else if pq2 == 0 {
                q2
            } else if qp1 == 0 {
                p1
            } else {
                p2
            };
            result.set_point(pt, false);
        } else {
            result.set_point(Self::interior_intersection(p1, p2, q1, q2), true);
        }
        result
    }

    fn collinear_intersection(
        p1: Coordinate,
        p2: Coordinate,
        q1: Coordinate,
        q2: Coordinate,
    ) -> LineIntersection {
        let mut result = LineIntersection::none([p1, p2], [q1, q2]);
        let env_p = Envelope::from_segment(p1, p2);
        let env_q = Envelope::from_segment(q1, q2);

        let q1_in = env_p.contains(q1);
        let q2_in = env_p.contains(q2);
        let p1_in = env_q.contains(p1);
        let p2_in = env_q.contains(p2);

        if q1_in && q2_in {
            result.set_collinear(q1, q2);
        } else if p1_in && p2_in {
            result.set_collinear(p1, p2);
        } else if q1_in && p1_in {
            result.set_collinear(q1, p1);
        } else if q1_in && p2_in {
            result.set_collinear(q1, p2);
        } else if q2_in && p1_in {
            result.set_collinear(q2, p1);
        } else if q2_in && p2_in {
            result.set_collinear(q2, p2);
        }
        result
    }

    /// The crossing point of two segments known to properly intersect.
    fn interior_intersection(
        p1: Coordinate,
        p2: Coordinate,
        q1: Coordinate,
        q2: Coordinate,
    ) -> Coordinate {
        let px = p2.x - p1.x;
        let py = p2.y - p1.y;
        let qx = q2.x - q1.x;
        let qy = q2.y - q1.y;

        let denom = qy * px - qx * py;
        let t = (qx * (p1.y - q1.y) - qy * (p1.x - q1.x)) / denom;
        Coordinate::new(p1.x + t * px, p1.y + t * py)
    }
}

/// The result of one segment/segment intersection test.
#[derive(Clone, Copy, Debug)]
pub struct LineIntersection {
    count: usize,
    pts: [Coordinate; 2],
    proper: bool,
    input: [[Coordinate; 2]; 2],
}

impl LineIntersection {
    fn none(input0: [Coordinate; 2], input1: [Coordinate; 2]) -> LineIntersection {
        LineIntersection {
            count: 0,
            pts: [input0[0]; 2],
            proper: false,
            input: [input0, input1],
        }
    }

    fn set_point(&mut self, pt: Coordinate, proper: bool) {
        self.count = 1;
        self.pts[0] = pt;
        self.proper = proper;
    }

    fn set_collinear(&mut self, pt0: Coordinate, pt1: Coordinate) {
        if pt0 == pt1 {
            self.set_point(pt0, false);
        } else {
            self.count = 2;
            self.pts = [pt0, pt1];
            self.proper = false;
        }
    }

    pub fn has_intersection(&self) -> bool {
        self.count > 0
    }

    /// Number of intersection points: 0, 1, or 2 (collinear overlap).
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn point(&self, i: usize) -> Coordinate {
        self.pts[i]
    }

    /// Whether the intersection is a single point in the interior of both
    /// segments.
    pub fn is_proper(&self) -> bool {
        self.proper
    }

    /// Where intersection point `i` falls along input segment `input_index`,
    /// for ordering points on that segment.
    pub fn edge_distance(&self, input_index: usize, i: usize) -> f64 {
        let [p0, p1] = self.input[input_index];
        compute_edge_distance(self.pts[i], p0, p1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn li() -> LineIntersector {
        LineIntersector::new()
    }

    #[test]
    fn orientation_signs() {
        let p1 = c(0.0, 0.0);
        let p2 = c(10.0, 0.0);
        assert_eq!(orientation_index(p1, p2, c(5.0, 1.0)), 1);
        assert_eq!(orientation_index(p1, p2, c(5.0, -1.0)), -1);
        assert_eq!(orientation_index(p1, p2, c(20.0, 0.0)), 0);
    }

    #[test]
    fn disjoint_segments() {
        let r = li().compute_intersection(c(0.0, 0.0), c(1.0, 0.0), c(0.0, 1.0), c(1.0, 1.0));
        assert!(!r.has_intersection());
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn proper_crossing() {
        let r = li().compute_intersection(c(0.0, 0.0), c(10.0, 10.0), c(0.0, 10.0), c(10.0, 0.0));
        assert!(r.has_intersection());
        assert!(r.is_proper());
        assert_eq!(r.count(), 1);
        assert_relative_eq!(r.point(0).x, 5.0);
        assert_relative_eq!(r.point(0).y, 5.0);
    }

    #[test]
    fn endpoint_touch_is_not_proper_and_is_bit_exact() {
        // q's endpoint lies in p's interior; awkward fraction on purpose
        let touch = c(0.1 + 0.2, 0.0);
        let r = li().compute_intersection(c(0.0, 0.0), c(1.0, 0.0), touch, c(0.5, 7.0));
        assert!(r.has_intersection());
        assert!(!r.is_proper());
        // exactly the input endpoint's bits, no re-derivation
        assert_eq!(r.point(0), touch);
    }

    #[test]
    fn shared_endpoint() {
        let shared = c(3.0, 4.0);
        let r = li().compute_intersection(c(0.0, 0.0), shared, shared, c(9.0, 1.0));
        assert!(r.has_intersection());
        assert!(!r.is_proper());
        assert_eq!(r.count(), 1);
        assert_eq!(r.point(0), shared);
    }

    #[test]
    fn collinear_overlap() {
        let r = li().compute_intersection(c(0.0, 0.0), c(10.0, 0.0), c(4.0, 0.0), c(15.0, 0.0));
        assert!(r.has_intersection());
        assert_eq!(r.count(), 2);
        assert!(!r.is_proper());
        let mut pts = [r.point(0), r.point(1)];
        pts.sort();
        assert_eq!(pts, [c(4.0, 0.0), c(10.0, 0.0)]);
    }

    #[test]
    fn collinear_containment() {
        let r = li().compute_intersection(c(0.0, 0.0), c(10.0, 0.0), c(2.0, 0.0), c(5.0, 0.0));
        assert_eq!(r.count(), 2);
        let mut pts = [r.point(0), r.point(1)];
        pts.sort();
        assert_eq!(pts, [c(2.0, 0.0), c(5.0, 0.0)]);
    }

    #[test]
    fn collinear_endpoint_touch_collapses_to_point() {
        let r = li().compute_intersection(c(0.0, 0.0), c(5.0, 0.0), c(5.0, 0.0), c(9.0, 0.0));
        assert_eq!(r.count(), 1);
        assert_eq!(r.point(0), c(5.0, 0.0));
    }

    #[test]
    fn collinear_disjoint() {
        let r = li().compute_intersection(c(0.0, 0.0), c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0));
        assert!(!r.has_intersection());
    }

    #[test]
    fn edge_distance_orders_points_along_segment() {
        let p0 = c(0.0, 0.0);
        let p1 = c(10.0, 1.0);
        let near = compute_edge_distance(c(2.0, 0.2), p0, p1);
        let far = compute_edge_distance(c(8.0, 0.8), p0, p1);
        assert!(near < far);
        assert_eq!(compute_edge_distance(p0, p0, p1), 0.0);
        assert_eq!(compute_edge_distance(p1, p0, p1), 10.0);
    }

    #[test]
    fn vertical_segment_uses_y_axis_distance() {
        let p0 = c(3.0, 0.0);
        let p1 = c(3.0, 10.0);
        assert_eq!(compute_edge_distance(c(3.0, 4.0), p0, p1), 4.0);
    }
}
