use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::geom::{Coordinate, Location};

use super::label::Label;

// Like the rest of the graph, nodes are addressed by index into an arena
// rather than by reference. Edges point at nodes and nodes are discovered
// from edge endpoints; ids keep that cycle simple and safe.
pub type NodeId = u32;

/// A graph vertex. Its coordinate is its identity key within a NodeMap.
#[derive(Clone, Debug)]
pub struct Node {
    coord: Coordinate,
    label: Label,
}

impl Node {
    pub fn new(coord: Coordinate) -> Node {
        Node {
            coord,
            label: Label::default(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coord
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn set_on_location(&mut self, arg_index: usize, loc: Location) {
        self.label.set_on_location(arg_index, loc);
    }

    pub fn merge_label(&mut self, other: &Label) {
        self.label.merge(other);
    }

    /// Whether this node is in the boundary of argument `arg_index`.
    pub fn is_boundary(&self, arg_index: usize) -> bool {
        self.label.on_location(arg_index) == Some(Location::Boundary)
    }
}

/// The coordinate-keyed collection of all Nodes in one graph.
///
/// Inserting a coordinate that is already present merges into the existing
/// node rather than creating a duplicate; the BTreeMap's Entry API gives us
/// insert-or-get in one lookup. Keying on the totally-ordered Coordinate
/// makes node iteration deterministic.
#[derive(Clone, Debug, Default)]
pub struct NodeMap {
    nodes: Vec<Node>,
    index: BTreeMap<Coordinate, NodeId>,
}

impl NodeMap {
    pub fn new() -> NodeMap {
        NodeMap::default()
    }

    /// Returns the node at `coord`, creating it if this is the first
    /// reference to that coordinate.
    pub fn add_node(&mut self, coord: Coordinate) -> NodeId {
        let next_id = self.nodes.len() as NodeId;
        match self.index.entry(coord) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                self.nodes.push(Node::new(coord));
                entry.insert(next_id);
                next_id
            }
        }
    }

    pub fn find(&self, coord: &Coordinate) -> Option<NodeId> {
        self.index.get(coord).copied()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.index.values().map(|&id| (id, &self.nodes[id as usize]))
    }

    /// The ids of all nodes in the boundary of argument `arg_index`, in
    /// coordinate order.
    pub fn boundary_nodes(&self, arg_index: usize) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, n)| n.is_boundary(arg_index))
            .map(|(id, _)| id)
            .collect()
    }
}
