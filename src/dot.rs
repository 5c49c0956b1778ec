//! Graphviz DOT rendering of a search comparison.
//!
//! A comparison is written as three undirected graphs in one file: the plain
//! graph, the graph with the BFS path highlighted in green and the graph with
//! the DFS path highlighted in red.  Every panel repeats all nodes and edges
//! so the layouts can be compared directly; `dot -Tsvg` renders one image per
//! panel.

use std::collections::HashSet;
use std::io;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, NodeId};
use crate::path::Path;

const NODE_COLOR: &str = "lightblue";

/// One rendered copy of the graph, optionally with a path highlighted.
struct Panel<'g> {
    graph: &'g Graph,
    name: &'static str,
    highlight: HashSet<(NodeId, NodeId)>,
    color: &'static str,
}

impl<'g> Panel<'g> {
    fn new(graph: &'g Graph, name: &'static str, path: Option<&Path>, color: &'static str) -> Result<Self> {
        ::dot::Id::new(name).map_err(|()| Error::InvalidDotId(name.to_string()))?;
        let highlight = path
            .map(|path| path.edges().map(|(u, v)| (u.min(v), u.max(v))).collect())
            .unwrap_or_default();
        Ok(Self {
            graph,
            name,
            highlight,
            color,
        })
    }

    fn is_highlighted(&self, edge: &Edge) -> bool {
        let (u, v) = edge.ends();
        self.highlight.contains(&(u.min(v), u.max(v)))
    }
}

impl<'a, 'g: 'a> ::dot::Labeller<'a, NodeId, Edge> for Panel<'g> {
    fn graph_id(&'a self) -> ::dot::Id<'a> {
        ::dot::Id::new(self.name).expect("panel name was validated in Panel::new")
    }

    fn node_id(&'a self, n: &NodeId) -> ::dot::Id<'a> {
        ::dot::Id::new(format!("n{n}")).expect("n followed by digits is a valid identifier")
    }

    fn node_label(&'a self, n: &NodeId) -> ::dot::LabelText<'a> {
        ::dot::LabelText::LabelStr(n.to_string().into())
    }

    fn node_style(&'a self, _n: &NodeId) -> ::dot::Style {
        ::dot::Style::Filled
    }

    fn node_color(&'a self, _n: &NodeId) -> Option<::dot::LabelText<'a>> {
        Some(::dot::LabelText::LabelStr(NODE_COLOR.into()))
    }

    fn edge_label(&'a self, e: &Edge) -> ::dot::LabelText<'a> {
        ::dot::LabelText::LabelStr(e.weight().to_string().into())
    }

    fn edge_style(&'a self, e: &Edge) -> ::dot::Style {
        if self.is_highlighted(e) {
            ::dot::Style::Bold
        } else {
            ::dot::Style::None
        }
    }

    fn edge_color(&'a self, e: &Edge) -> Option<::dot::LabelText<'a>> {
        self.is_highlighted(e)
            .then(|| ::dot::LabelText::LabelStr(self.color.into()))
    }

    fn kind(&self) -> ::dot::Kind {
        ::dot::Kind::Graph
    }
}

impl<'a, 'g: 'a> ::dot::GraphWalk<'a, NodeId, Edge> for Panel<'g> {
    fn nodes(&'a self) -> ::dot::Nodes<'a, NodeId> {
        self.graph.node_ids().collect::<Vec<_>>().into()
    }

    fn edges(&'a self) -> ::dot::Edges<'a, Edge> {
        self.graph.edges().collect::<Vec<_>>().into()
    }

    fn source(&'a self, edge: &Edge) -> NodeId {
        edge.ends().0
    }

    fn target(&'a self, edge: &Edge) -> NodeId {
        edge.ends().1
    }
}

/// Writes the comparison of `bfs_path` and `dfs_path` on `graph` to `output`
/// as the graphs `initial_graph`, `bfs_path` and `dfs_path`, preceded by
/// `title` as a comment.
pub fn write_dot(
    graph: &Graph,
    bfs_path: Option<&Path>,
    dfs_path: Option<&Path>,
    title: &str,
    output: &mut impl io::Write,
) -> Result<()> {
    let panels = [
        Panel::new(graph, "initial_graph", None, "black")?,
        Panel::new(graph, "bfs_path", bfs_path, "green")?,
        Panel::new(graph, "dfs_path", dfs_path, "red")?,
    ];

    writeln!(output, "// {}", title.replace(['\n', '\r'], " "))?;
    for panel in &panels {
        ::dot::render(panel, output)?;
    }
    Ok(())
}

/// Renders the comparison into a string.
pub fn render_dot(
    graph: &Graph,
    bfs_path: Option<&Path>,
    dfs_path: Option<&Path>,
    title: &str,
) -> Result<String> {
    let mut output = Vec::new();
    write_dot(graph, bfs_path, dfs_path, title, &mut output)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
