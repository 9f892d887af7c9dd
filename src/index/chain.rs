use crate::geom::{Coordinate, Envelope};

/// The quadrant of a direction vector: 0 = +x+y, 1 = -x+y, 2 = -x-y,
/// 3 = +x-y. Axis-aligned directions belong to the quadrant they border
/// counter-clockwise.
pub fn quadrant(dx: f64, dy: f64) -> usize {
    if dx >= 0.0 {
        if dy >= 0.0 {
            0
        } else {
            3
        }
    } else if dy >= 0.0 {
        1
    } else {
        2
    }
}

/// The partition of an edge's vertex chain into monotone chains: maximal
/// runs whose segments all point into the same quadrant.
///
/// A monotone chain's envelope is spanned by its two end vertices alone,
/// and two monotone chains can cross at most once per direction pair. Both
/// properties make chains much cheaper to intersect than raw segment lists.
#[derive(Clone, Debug)]
pub struct MonotoneChains {
    // Vertex indices opening each chain; the final entry closes the last
    // chain, so chain i spans vertices starts[i]..=starts[i+1].
    starts: Box<[usize]>,
}

impl MonotoneChains {
    pub fn of(pts: &[Coordinate]) -> MonotoneChains {
        debug_assert!(pts.len() >= 2);
        let mut starts = vec![0];
        let mut start = 0;
        while start < pts.len() - 1 {
            let end = Self::chain_end(pts, start);
            starts.push(end);
            start = end;
        }
        MonotoneChains {
            starts: starts.into_boxed_slice(),
        }
    }

    fn chain_end(pts: &[Coordinate], start: usize) -> usize {
        let chain_quad = quadrant(pts[start + 1].x - pts[start].x, pts[start + 1].y - pts[start].y);
        let mut last = start + 1;
        while last < pts.len() - 1 {
            let quad = quadrant(pts[last + 1].x - pts[last].x, pts[last + 1].y - pts[last].y);
            if quad != chain_quad {
                break;
            }
            last += 1;
        }
        last
    }

    /// Number of chains; at least 1 for any valid edge.
    pub fn len(&self) -> usize {
        self.starts.len() - 1
    }

    /// The (first, last) vertex indices of chain `i`.
    pub fn bounds(&self, i: usize) -> (usize, usize) {
        (self.starts[i], self.starts[i + 1])
    }

    /// Chain envelopes come from the end vertices only; monotonicity
    /// guarantees nothing in between sticks out.
    pub fn envelope(&self, i: usize, pts: &[Coordinate]) -> Envelope {
        let (start, end) = self.bounds(i);
        Envelope::from_segment(pts[start], pts[end])
    }
}

/// Collects every segment pair of two monotone chains whose envelopes
/// overlap, by recursive bisection. `(s0, s1)` in the output are segment
/// indices into `pts0` and `pts1`.
pub fn collect_overlaps(
    pts0: &[Coordinate],
    (start0, end0): (usize, usize),
    pts1: &[Coordinate],
    (start1, end1): (usize, usize),
    out: &mut Vec<(usize, usize)>,
) {
    if end0 - start0 == 1 && end1 - start1 == 1 {
        out.push((start0, start1));
        return;
    }
    let env0 = Envelope::from_segment(pts0[start0], pts0[end0]);
    let env1 = Envelope::from_segment(pts1[start1], pts1[end1]);
    if !env0.intersects(&env1) {
        return;
    }

    let mid0 = (start0 + end0) / 2;
    let mid1 = (start1 + end1) / 2;
    if start0 < mid0 {
        if start1 < mid1 {
            collect_overlaps(pts0, (start0, mid0), pts1, (start1, mid1), out);
        }
        if mid1 < end1 {
            collect_overlaps(pts0, (start0, mid0), pts1, (mid1, end1), out);
        }
    }
    if mid0 < end0 {
        if start1 < mid1 {
            collect_overlaps(pts0, (mid0, end0), pts1, (start1, mid1), out);
        }
        if mid1 < end1 {
            collect_overlaps(pts0, (mid0, end0), pts1, (mid1, end1), out);
        }
    }
}
