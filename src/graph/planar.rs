use crate::geom::{Coordinate, Location};

use super::edge::{Edge, EdgeId};
use super::node::{NodeId, NodeMap};

/// The node/edge container underlying a GeometryGraph: a node arena keyed by
/// coordinate plus a flat edge arena.
#[derive(Clone, Debug, Default)]
pub struct PlanarGraph {
    nodes: NodeMap,
    edges: Vec<Edge>,
}

impl PlanarGraph {
    pub fn new() -> PlanarGraph {
        PlanarGraph::default()
    }

    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = self.edges.len() as EdgeId;
        self.edges.push(edge);
        id
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id as usize]
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id as usize]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    pub fn add_node(&mut self, coord: Coordinate) -> NodeId {
        self.nodes.add_node(coord)
    }

    pub fn find_node(&self, coord: &Coordinate) -> Option<NodeId> {
        self.nodes.find(coord)
    }

    pub fn nodes(&self) -> &NodeMap {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut NodeMap {
        &mut self.nodes
    }

    /// Whether a node exists at `coord` and is in the boundary of argument
    /// `arg_index`.
    pub fn is_boundary_node(&self, arg_index: usize, coord: &Coordinate) -> bool {
        match self.nodes.find(coord) {
            Some(id) => {
                self.nodes.node(id).label().on_location(arg_index) == Some(Location::Boundary)
            }
            None => false,
        }
    }
}
