//! Planar topology graphs for geometries.
//!
//! A [`graph::GeometryGraph`] decomposes a geometry into labelled nodes and
//! edges, then discovers every point where edges cross or touch, within one
//! geometry or between two. The discovered structure is what spatial
//! predicates and overlays are computed from.
//!
//! - [`geom`] holds the coordinate, envelope and geometry types the graph is
//!   built over.
//! - [`graph`] is the graph itself: labels, nodes, edges, boundary rules.
//! - [`algorithm`] has the geometric primitives: segment intersection and
//!   point location.
//! - [`index`] accelerates the all-pairs segment tests with a monotone-chain
//!   sweep line.

pub mod algorithm;
pub mod geom;
pub mod graph;
pub mod index;

pub use geom::{Coordinate, Envelope, Geometry, Location, Polygon, Position, Ring};
pub use graph::{BoundaryNodeRule, GeometryGraph, Label, TopologyError};
