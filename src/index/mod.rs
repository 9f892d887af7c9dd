//! Edge-set intersection: monotone chains, the sweep line over them, and
//! the segment intersector they feed.

mod chain;
mod segment_intersector;
mod sweep;

pub use chain::{collect_overlaps, quadrant, MonotoneChains};
pub use segment_intersector::SegmentIntersector;
pub use sweep::{EdgeSetIntersector, SimpleEdgeSetIntersector, SweepLineIntersector};
