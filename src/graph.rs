//! An undirected, weighted graph over the node ids `0..n`.
//!
//! Nodes are implicit: a graph with `n` nodes always contains every id in
//! `0..n`, and nodes without edges are simply isolated.  Edges are stored in
//! insertion order, and each node's neighbor list follows the order in which
//! its edges were added.  That order is what the searches in
//! [`crate::search`] follow, so a graph built the same way always produces the
//! same search results.
//!
//! With the `pathfinding` feature, [`Graph::connected_components`] and
//! [`Graph::reachable_from`] are also available.

use std::collections::HashMap;
#[cfg(feature = "pathfinding")]
use std::collections::HashSet;
use std::ops::Range;

use crate::error::InvalidArgument;

/// Identifier of a node; valid ids of a graph with `n` nodes are `0..n`.
pub type NodeId = usize;

/// Weight attached to an edge.
pub type Weight = u32;

/// An undirected edge between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    a: NodeId,
    b: NodeId,
    weight: Weight,
}

impl Edge {
    /// The two ends of the edge, in the order they were given when the edge
    /// was added.
    pub fn ends(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the end opposite `node`, or `None` if `node` is not an end of
    /// this edge.
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

fn edge_key(u: NodeId, v: NodeId) -> (NodeId, NodeId) {
    if u <= v { (u, v) } else { (v, u) }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<NodeId>>,
    edges: Vec<Edge>,
    edge_index: HashMap<(NodeId, NodeId), usize>,
}

impl Graph {
    /// Creates a graph with `node_count` isolated nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }

    /// Builds a graph from a list of `(u, v, weight)` triples.  A pair that
    /// appears more than once keeps the weight of its first occurrence.
    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (NodeId, NodeId, Weight)>,
    ) -> Result<Self, InvalidArgument> {
        let mut graph = Self::new(node_count);
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Adds an undirected edge between `u` and `v`.  Returns `Ok(false)`
    /// without changing anything if the two nodes are already connected.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: Weight) -> Result<bool, InvalidArgument> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(InvalidArgument::SelfLoop(u));
        }
        let key = edge_key(u, v);
        if self.edge_index.contains_key(&key) {
            return Ok(false);
        }
        self.edge_index.insert(key, self.edges.len());
        self.edges.push(Edge { a: u, b: v, weight });
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        Ok(true)
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn node_ids(&self) -> Range<NodeId> {
        0..self.num_nodes()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        node < self.num_nodes()
    }

    /// Returns an error naming `node` if it is not part of the graph.
    pub fn check_node(&self, node: NodeId) -> Result<(), InvalidArgument> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(InvalidArgument::UnknownNode(node))
        }
    }

    /// Neighbors of `node` in the order their edges were added.  Unknown
    /// nodes have no neighbors.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.get(node).into_iter().flatten().copied()
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(node).map_or(0, Vec::len)
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edge_index.contains_key(&edge_key(u, v))
    }

    /// Weight of the edge between `u` and `v`, if there is one.
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<Weight> {
        self.edge_index
            .get(&edge_key(u, v))
            .map(|&index| self.edges[index].weight)
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Partitions the nodes into connected components.
    #[cfg(feature = "pathfinding")]
    pub fn connected_components(&self) -> Vec<HashSet<NodeId>> {
        pathfinding::prelude::connected_components(&self.node_ids().collect::<Vec<_>>(), |&node| {
            self.neighbors(node).collect::<Vec<_>>()
        })
    }

    /// Every node reachable from `start`, including `start` itself.
    #[cfg(feature = "pathfinding")]
    pub fn reachable_from(&self, start: NodeId) -> Result<HashSet<NodeId>, InvalidArgument> {
        self.check_node(start)?;
        Ok(pathfinding::prelude::bfs_reach(start, |&node| self.neighbors(node)).collect())
    }
}
