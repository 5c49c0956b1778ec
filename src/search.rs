//! Breadth-first and depth-first search for a path between two nodes.
//!
//! Both searches keep a frontier of `(node, path so far)` entries seeded with
//! `(start, [start])`.  Each step removes one entry and counts it.  Reaching
//! `goal` ends the search with the entry's path.  Otherwise, a node that has
//! not been expanded yet is marked visited and every neighbor is added to the
//! frontier with the path extended by that neighbor.
//!
//! The visited check happens when an entry is removed, not when it is added,
//! so a node can sit in the frontier several times and every removal counts
//! towards [`SearchOutcome::visited`].  Reports comparing the two strategies
//! depend on that count.

use std::collections::VecDeque;
use std::fmt;

use crate::error::InvalidArgument;
use crate::graph::{Graph, NodeId};
use crate::path::Path;
use crate::tracing_support::{debug, debug_span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// First-in-first-out frontier; finds a path with the fewest edges.
    BreadthFirst,
    /// Last-in-first-out frontier; finds some path, not necessarily short.
    DepthFirst,
}

impl Strategy {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// The result of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The path found from start to goal, if any.
    pub path: Option<Path>,
    /// How many entries were removed from the frontier, revisits included.
    pub visited: usize,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Searches for a path from `start` to `goal` using breadth-first order.
pub fn bfs(graph: &Graph, start: NodeId, goal: NodeId) -> Result<SearchOutcome, InvalidArgument> {
    search(graph, Strategy::BreadthFirst, start, goal)
}

/// Searches for a path from `start` to `goal` using depth-first order.
pub fn dfs(graph: &Graph, start: NodeId, goal: NodeId) -> Result<SearchOutcome, InvalidArgument> {
    search(graph, Strategy::DepthFirst, start, goal)
}

/// Searches for a path from `start` to `goal` with the given strategy.
///
/// Fails if the graph is empty or either node is not in it.  A goal that
/// cannot be reached is not an error; the outcome then has no path.
pub fn search(
    graph: &Graph,
    strategy: Strategy,
    start: NodeId,
    goal: NodeId,
) -> Result<SearchOutcome, InvalidArgument> {
    if graph.is_empty() {
        return Err(InvalidArgument::EmptyGraph);
    }
    graph.check_node(start)?;
    graph.check_node(goal)?;

    let _span = debug_span!("search", %strategy, start, goal).entered();
    let outcome = match strategy {
        Strategy::BreadthFirst => run::<VecDeque<_>>(graph, start, goal),
        Strategy::DepthFirst => run::<Vec<_>>(graph, start, goal),
    };
    debug!(visited = outcome.visited, found = outcome.found(), "search finished");
    Ok(outcome)
}

/// Removal order is what distinguishes the two strategies.
trait Frontier<T>: Default {
    fn put(&mut self, item: T);
    fn take(&mut self) -> Option<T>;
}

impl<T> Frontier<T> for VecDeque<T> {
    fn put(&mut self, item: T) {
        self.push_back(item);
    }

    fn take(&mut self) -> Option<T> {
        self.pop_front()
    }
}

impl<T> Frontier<T> for Vec<T> {
    fn put(&mut self, item: T) {
        self.push(item);
    }

    fn take(&mut self) -> Option<T> {
        self.pop()
    }
}

#[cfg(feature = "bitvec")]
struct VisitedSet(bitvec::vec::BitVec);

#[cfg(feature = "bitvec")]
impl VisitedSet {
    fn new(num_nodes: usize) -> Self {
        Self(bitvec::bitvec![0; num_nodes])
    }

    /// Marks `node`, returning true if it was not marked before.
    fn insert(&mut self, node: NodeId) -> bool {
        !self.0.replace(node, true)
    }
}

#[cfg(not(feature = "bitvec"))]
struct VisitedSet(std::collections::HashSet<NodeId>);

#[cfg(not(feature = "bitvec"))]
impl VisitedSet {
    fn new(num_nodes: usize) -> Self {
        Self(std::collections::HashSet::with_capacity(num_nodes))
    }

    fn insert(&mut self, node: NodeId) -> bool {
        self.0.insert(node)
    }
}

fn run<F>(graph: &Graph, start: NodeId, goal: NodeId) -> SearchOutcome
where
    F: Frontier<(NodeId, Path)>,
{
    let mut frontier = F::default();
    frontier.put((start, Path::new(start)));
    let mut visited = VisitedSet::new(graph.num_nodes());
    let mut removed = 0;

    while let Some((node, path)) = frontier.take() {
        removed += 1;
        if node == goal {
            return SearchOutcome {
                path: Some(path),
                visited: removed,
            };
        }
        if visited.insert(node) {
            for neighbor in graph.neighbors(node) {
                frontier.put((neighbor, path.extended(neighbor)));
            }
        }
    }

    SearchOutcome {
        path: None,
        visited: removed,
    }
}
