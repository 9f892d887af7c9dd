//! The topology graph built from a geometry: labelled nodes and edges, plus
//! the machinery that discovers where edges intersect.

mod boundary;
mod edge;
mod edge_intersection;
mod error;
mod geometry_graph;
mod label;
mod node;
mod planar;

pub use boundary::BoundaryNodeRule;
pub use edge::{Edge, EdgeId};
pub use edge_intersection::{EdgeIntersection, EdgeIntersectionList};
pub use error::TopologyError;
pub use geometry_graph::{ComponentId, GeometryGraph, MAX_SIMPLE_LOCATE_COMPONENTS};
pub use label::Label;
pub use node::{Node, NodeId, NodeMap};
pub use planar::PlanarGraph;
