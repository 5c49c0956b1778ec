use std::io;

use crate::graph::NodeId;

/// A caller-supplied value that the operation cannot work with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    /// More edges were requested than distinct node pairs exist.
    #[error("cannot place {requested} edges among {nodes} nodes (at most {max} are possible)")]
    TooManyEdges {
        nodes: usize,
        requested: usize,
        max: usize,
    },
    /// Fewer nodes than an operation needs, such as picking distinct start
    /// and goal nodes.
    #[error("need at least {required} nodes, got {nodes}")]
    TooFewNodes { nodes: usize, required: usize },
    /// The graph has no nodes.
    #[error("graph has no nodes")]
    EmptyGraph,
    /// The node id is outside the graph.
    #[error("node {0} is not in the graph")]
    UnknownNode(NodeId),
    /// An edge from a node to itself was requested.
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A name that is not a valid Graphviz identifier.
    #[error("invalid DOT identifier: {0}")]
    InvalidDotId(String),
}

pub type Result<T> = std::result::Result<T, Error>;
