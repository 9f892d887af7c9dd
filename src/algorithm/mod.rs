//! Geometric predicates: segment intersection and point location.

mod indexed_locator;
mod line_intersector;
mod point_locator;

pub use indexed_locator::IndexedPointInAreaLocator;
pub use line_intersector::{
    compute_edge_distance, orientation_index, LineIntersection, LineIntersector,
};
pub use point_locator::{locate_point_in_ring, PointLocator, RayCrossingCounter};
