//! doubtgraph Rendering Adapter
//!
//! Turns a [`GraphSnapshot`](doubtgraph_domain::GraphSnapshot) into a
//! visual artifact. The bundled [`DotRenderer`] writes a Graphviz DOT file;
//! layout and rasterization are left to Graphviz (`fdp -Tpng figure.dot`).

#![warn(missing_docs)]

pub mod color;
pub mod dot;

pub use color::{edge_color, node_color};
pub use dot::{to_dot, DotRenderer, DEFAULT_FILE_NAME};

use async_trait::async_trait;
use doubtgraph_domain::GraphSnapshot;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the artifact failed
    #[error("Failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// Produces an artifact from a graph snapshot and returns its location
#[async_trait]
pub trait GraphRenderer: Send + Sync {
    /// Render `snapshot`, returning a handle to the artifact
    async fn render(&self, snapshot: &GraphSnapshot) -> Result<PathBuf, RenderError>;
}
