use crate::geom::Envelope;
use crate::graph::Edge;

use super::chain::{collect_overlaps, MonotoneChains};
use super::segment_intersector::SegmentIntersector;

/// Finds intersecting segment pairs within one edge set, or between two
/// edge sets, feeding each candidate pair to a [`SegmentIntersector`].
pub trait EdgeSetIntersector {
    /// Intersects every edge of `edges` with every other. When
    /// `test_all_segments` is false, segments are not tested against their
    /// own edge; callers use that for polygon rings assumed valid.
    fn compute_self_intersections(
        &self,
        edges: &mut [Edge],
        si: &mut SegmentIntersector,
        test_all_segments: bool,
    );

    /// Intersects every edge of `edges0` with every edge of `edges1`.
    /// Pairs within one set are not tested.
    fn compute_cross_intersections(
        &self,
        edges0: &mut [Edge],
        edges1: &mut [Edge],
        si: &mut SegmentIntersector,
    );
}

/// Gets both halves of a distinct index pair mutably.
fn two_mut<T>(v: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (a, b) = v.split_at_mut(j);
        (&mut a[i], &mut b[0])
    } else {
        let (b, a) = v.split_at_mut(i);
        (&mut a[0], &mut b[j])
    }
}

/// A candidate segment pair, identified by (set, edge, segment) on each
/// side. Pairs are normalized so the lexicographically smaller side comes
/// first, making results independent of discovery order.
type SegmentPair = ((usize, usize, usize), (usize, usize, usize));

fn apply_pairs(
    pairs: Vec<SegmentPair>,
    edges0: &mut [Edge],
    edges1: Option<&mut [Edge]>,
    si: &mut SegmentIntersector,
) {
    match edges1 {
        None => {
            for ((_, e0, s0), (_, e1, s1)) in pairs {
                if e0 == e1 {
                    si.add_self_intersections(&mut edges0[e0], s0, s1);
                } else {
                    let (a, b) = two_mut(edges0, e0, e1);
                    si.add_intersections(a, s0, b, s1);
                }
            }
        }
        Some(edges1) => {
            for ((set0, e0, s0), (_, e1, s1)) in pairs {
                debug_assert_eq!(set0, 0);
                si.add_intersections(&mut edges0[e0], s0, &mut edges1[e1], s1);
            }
        }
    }
}

fn normalize(a: (usize, usize, usize), b: (usize, usize, usize)) -> SegmentPair {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Brute force: tests every segment pair. Quadratic, but with no indexing
/// machinery to mistrust; the sweep implementation is checked against it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleEdgeSetIntersector;

impl SimpleEdgeSetIntersector {
    pub fn new() -> SimpleEdgeSetIntersector {
        SimpleEdgeSetIntersector
    }
}

impl EdgeSetIntersector for SimpleEdgeSetIntersector {
    fn compute_self_intersections(
        &self,
        edges: &mut [Edge],
        si: &mut SegmentIntersector,
        test_all_segments: bool,
    ) {
        let mut pairs: Vec<SegmentPair> = Vec::new();
        for e0 in 0..edges.len() {
            for e1 in e0..edges.len() {
                if e0 == e1 && !test_all_segments {
                    continue;
                }
                for s0 in 0..edges[e0].num_segments() {
                    let s1_from = if e0 == e1 { s0 + 1 } else { 0 };
                    for s1 in s1_from..edges[e1].num_segments() {
                        pairs.push(normalize((0, e0, s0), (0, e1, s1)));
                    }
                }
            }
        }
        apply_pairs(pairs, edges, None, si);
    }

    fn compute_cross_intersections(
        &self,
        edges0: &mut [Edge],
        edges1: &mut [Edge],
        si: &mut SegmentIntersector,
    ) {
        let mut pairs: Vec<SegmentPair> = Vec::new();
        for e0 in 0..edges0.len() {
            for e1 in 0..edges1.len() {
                for s0 in 0..edges0[e0].num_segments() {
                    for s1 in 0..edges1[e1].num_segments() {
                        pairs.push(((0, e0, s0), (1, e1, s1)));
                    }
                }
            }
        }
        apply_pairs(pairs, edges0, Some(edges1), si);
    }
}

#[derive(Clone, Copy, Debug)]
struct Chain {
    set: usize,
    edge: usize,
    start: usize,
    end: usize,
    env: Envelope,
}

#[derive(Clone, Copy, Debug)]
struct SweepEvent {
    x: f64,
    // inserts sort before deletes at equal x
    is_insert: bool,
    chain: usize,
}

/// Sweep-line edge-set intersector over monotone chains.
///
/// Each edge is cut into monotone chains; each chain contributes an insert
/// event at its envelope's min x and a delete event at its max x. A chain
/// can only intersect chains whose insert falls between its own insert and
/// delete, so the sweep compares each chain against that window only, and
/// overlapping chain pairs are refined down to segment pairs by envelope
/// bisection.
#[derive(Clone, Copy, Debug, Default)]
pub struct SweepLineIntersector;

impl SweepLineIntersector {
    pub fn new() -> SweepLineIntersector {
        SweepLineIntersector
    }

    fn chains_of(edges: &[Edge], set: usize, out: &mut Vec<Chain>) {
        for (edge_index, edge) in edges.iter().enumerate() {
            let chains = MonotoneChains::of(edge.pts());
            for i in 0..chains.len() {
                let (start, end) = chains.bounds(i);
                out.push(Chain {
                    set,
                    edge: edge_index,
                    start,
                    end,
                    env: chains.envelope(i, edge.pts()),
                });
            }
        }
    }

    /// Runs the sweep and returns candidate chain pairs whose x-ranges
    /// overlap. `exclude` prunes pairs the caller knows cannot matter.
    fn chain_pairs<F: Fn(&Chain, &Chain) -> bool>(
        chains: &[Chain],
        exclude: F,
    ) -> Vec<(usize, usize)> {
        let mut events: Vec<SweepEvent> = Vec::with_capacity(chains.len() * 2);
        for (i, chain) in chains.iter().enumerate() {
            events.push(SweepEvent {
                x: chain.env.min_x,
                is_insert: true,
                chain: i,
            });
            events.push(SweepEvent {
                x: chain.env.max_x,
                is_insert: false,
                chain: i,
            });
        }
        events.sort_by(|a, b| {
            a.x.total_cmp(&b.x)
                .then_with(|| b.is_insert.cmp(&a.is_insert))
        });

        let mut delete_position = vec![0usize; chains.len()];
        for (pos, ev) in events.iter().enumerate() {
            if !ev.is_insert {
                delete_position[ev.chain] = pos;
            }
        }

        let mut pairs = Vec::new();
        for (pos, ev) in events.iter().enumerate() {
            if !ev.is_insert {
                continue;
            }
            let c0 = &chains[ev.chain];
            for later in &events[pos + 1..delete_position[ev.chain]] {
                if !later.is_insert {
                    continue;
                }
                let c1 = &chains[later.chain];
                if exclude(c0, c1) {
                    continue;
                }
                pairs.push((ev.chain, later.chain));
            }
        }
        pairs
    }

    fn segment_pairs(
        chains: &[Chain],
        chain_pairs: &[(usize, usize)],
        edges0: &[Edge],
        edges1: Option<&[Edge]>,
    ) -> Vec<SegmentPair> {
        let mut out = Vec::new();
        let mut seg_buf = Vec::new();
        for &(a, b) in chain_pairs {
            let (c0, c1) = (&chains[a], &chains[b]);
            let pts0 = match c0.set {
                0 => edges0[c0.edge].pts(),
                _ => edges1.unwrap()[c0.edge].pts(),
            };
            let pts1 = match c1.set {
                0 => edges0[c1.edge].pts(),
                _ => edges1.unwrap()[c1.edge].pts(),
            };
            seg_buf.clear();
            collect_overlaps(pts0, (c0.start, c0.end), pts1, (c1.start, c1.end), &mut seg_buf);
            for &(s0, s1) in &seg_buf {
                out.push(normalize((c0.set, c0.edge, s0), (c1.set, c1.edge, s1)));
            }
        }
        out
    }
}

impl EdgeSetIntersector for SweepLineIntersector {
    fn compute_self_intersections(
        &self,
        edges: &mut [Edge],
        si: &mut SegmentIntersector,
        test_all_segments: bool,
    ) {
        let mut chains = Vec::new();
        Self::chains_of(edges, 0, &mut chains);

        let chain_pairs = Self::chain_pairs(&chains, |c0, c1| {
            c0.edge == c1.edge && !test_all_segments
        });
        let pairs = Self::segment_pairs(&chains, &chain_pairs, edges, None);
        apply_pairs(pairs, edges, None, si);
    }

    fn compute_cross_intersections(
        &self,
        edges0: &mut [Edge],
        edges1: &mut [Edge],
        si: &mut SegmentIntersector,
    ) {
        let mut chains = Vec::new();
        Self::chains_of(edges0, 0, &mut chains);
        Self::chains_of(edges1, 1, &mut chains);

        let chain_pairs = Self::chain_pairs(&chains, |c0, c1| c0.set == c1.set);
        let pairs = Self::segment_pairs(&chains, &chain_pairs, edges0, Some(edges1));
        apply_pairs(pairs, edges0, Some(edges1), si);
    }
}
