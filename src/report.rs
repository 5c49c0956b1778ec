use std::fmt;

use crate::error::InvalidArgument;
use crate::graph::{Graph, NodeId};
use crate::search::{SearchOutcome, Strategy, search};

/// Breadth-first and depth-first results for the same start and goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub start: NodeId,
    pub goal: NodeId,
    pub bfs: SearchOutcome,
    pub dfs: SearchOutcome,
}

/// Runs both searches from `start` to `goal`.
pub fn compare(graph: &Graph, start: NodeId, goal: NodeId) -> Result<Comparison, InvalidArgument> {
    Ok(Comparison {
        start,
        goal,
        bfs: search(graph, Strategy::BreadthFirst, start, goal)?,
        dfs: search(graph, Strategy::DepthFirst, start, goal)?,
    })
}

impl Comparison {
    /// Title used for rendered comparisons.
    pub fn title(&self) -> String {
        format!("BFS and DFS comparison ({} → {})", self.start, self.goal)
    }

    pub fn outcomes(&self) -> [(Strategy, &SearchOutcome); 2] {
        [
            (Strategy::BreadthFirst, &self.bfs),
            (Strategy::DepthFirst, &self.dfs),
        ]
    }

    /// Formats the comparison for printing.  The graph supplies path weights.
    pub fn display<'a>(&'a self, graph: &'a Graph) -> ComparisonDisplay<'a> {
        ComparisonDisplay {
            comparison: self,
            graph,
        }
    }
}

pub struct ComparisonDisplay<'a> {
    comparison: &'a Comparison,
    graph: &'a Graph,
}

impl fmt::Display for ComparisonDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comparison = self.comparison;
        writeln!(
            f,
            "Search results from {} to {}:",
            comparison.start, comparison.goal
        )?;
        for (strategy, outcome) in comparison.outcomes() {
            writeln!(f)?;
            match &outcome.path {
                Some(path) => {
                    write!(f, "{strategy} path: {path} ({} edges", path.num_edges())?;
                    if let Some(weight) = path.total_weight(self.graph) {
                        write!(f, ", weight {weight}")?;
                    }
                    writeln!(f, ")")?;
                }
                None => writeln!(f, "{strategy} path: no path")?,
            }
            writeln!(f, "{strategy} visited nodes: {}", outcome.visited)?;
        }

        #[cfg(feature = "pathfinding")]
        if !comparison.bfs.found() {
            if let Ok(reachable) = self.graph.reachable_from(comparison.start) {
                let components = self.graph.connected_components().len();
                writeln!(f)?;
                writeln!(
                    f,
                    "{} is unreachable: only {} nodes are connected to {} (the graph has {} connected components)",
                    comparison.goal,
                    reachable.len(),
                    comparison.start,
                    components
                )?;
            }
        }
        Ok(())
    }
}
