//! Graphviz DOT output

use crate::{edge_color, node_color, GraphRenderer, RenderError};
use async_trait::async_trait;
use doubtgraph_domain::{GraphSnapshot, Player, PlayerId, RelationKind};
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default artifact file name
pub const DEFAULT_FILE_NAME: &str = "figure.dot";

const GRAPH_ATTRIBUTES: &str = "    layout=fdp;
    node [shape=circle, style=filled, width=0.8, fontsize=14];
    edge [penwidth=2, arrowhead=normal, arrowsize=1.2];
";

/// Writes the graph as a DOT file, overwriting the previous one
#[derive(Debug, Clone)]
pub struct DotRenderer {
    output_dir: PathBuf,
    file_name: String,
}

impl DotRenderer {
    /// Create a renderer writing `figure.dot` into `output_dir`
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Use a different file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Full path of the artifact
    pub fn artifact_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

#[async_trait]
impl GraphRenderer for DotRenderer {
    async fn render(&self, snapshot: &GraphSnapshot) -> Result<PathBuf, RenderError> {
        let path = self.artifact_path();
        tokio::fs::create_dir_all(&self.output_dir).await?;
        tokio::fs::write(&path, to_dot(snapshot)).await?;

        tracing::debug!(
            path = %path.display(),
            nodes = snapshot.players.len(),
            edges = snapshot.relations.len(),
            "Wrote graph artifact"
        );

        Ok(path)
    }
}

/// Render a snapshot as DOT source
///
/// Nodes are numbered in snapshot order so output is stable for equal snapshots.
pub fn to_dot(snapshot: &GraphSnapshot) -> String {
    let mut graph: DiGraph<&Player, RelationKind> = DiGraph::new();
    let index: HashMap<PlayerId, NodeIndex> = snapshot
        .players
        .iter()
        .map(|p| (p.id, graph.add_node(p)))
        .collect();

    for relation in &snapshot.relations {
        let endpoints = (index.get(&relation.source), index.get(&relation.target));
        if let (Some(&s), Some(&t)) = endpoints {
            graph.add_edge(s, t, relation.kind);
        }
    }

    let content = Dot::with_attr_getters(
        &graph,
        &[Config::GraphContentOnly, Config::EdgeNoLabel],
        &|_, edge| format!("color=\"{}\" ", edge_color(*edge.weight())),
        &|_, (_, player)| format!("fillcolor=\"{}\" ", node_color(&player.color_tag)),
    );

    format!("digraph relations {{\n{}{}}}\n", GRAPH_ATTRIBUTES, content)
}
