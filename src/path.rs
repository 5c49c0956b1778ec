use std::fmt;

use crate::graph::{Graph, NodeId};

/// A walk through a graph, stored as the sequence of nodes it passes
/// through.  A path always contains at least its start node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// Creates a path consisting only of `start`.
    pub fn new(start: NodeId) -> Self {
        Self { nodes: vec![start] }
    }

    /// Wraps a node sequence, or returns `None` if it is empty.
    pub fn from_nodes(nodes: Vec<NodeId>) -> Option<Self> {
        if nodes.is_empty() {
            None
        } else {
            Some(Self { nodes })
        }
    }

    /// Returns a copy of this path with `node` appended.
    pub fn extended(&self, node: NodeId) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(node);
        Self { nodes }
    }

    pub fn start(&self) -> NodeId {
        self.nodes[0]
    }

    /// The last node of the path.
    pub fn goal(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of steps along the path, one less than the number of nodes.
    pub fn num_edges(&self) -> usize {
        self.nodes.len() - 1
    }

    /// The consecutive node pairs the path steps across.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// True if every node is in `graph` and every step follows one of its
    /// edges.
    pub fn is_walk_in(&self, graph: &Graph) -> bool {
        self.nodes.iter().all(|&node| graph.contains_node(node))
            && self.edges().all(|(u, v)| graph.has_edge(u, v))
    }

    /// Sum of the weights of the edges along the path, or `None` if some step
    /// is not an edge of `graph`.
    pub fn total_weight(&self, graph: &Graph) -> Option<u64> {
        self.edges()
            .map(|(u, v)| graph.weight(u, v).map(u64::from))
            .sum()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, "]")
    }
}
