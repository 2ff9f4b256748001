use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use pipegraph_core::{ErrorKind, ExecutionConfig, GraphError};

use super::node::Node;

/// Frozen view of a graph definition, taken at compile time.
pub(crate) struct CompiledGraph<T> {
    pub(crate) nodes: HashMap<String, Node<T>>,
    /// Source node -> target of its first-declared edge.
    pub(crate) successors: HashMap<String, String>,
    pub(crate) entry_point: String,
}

/// Compiled, executable handle over a graph.
///
/// Holds its own snapshot of the definition, so later edits to the
/// `GraphDefinition` are not observed and clones may run concurrently.
pub struct Runnable<T> {
    pub(crate) graph: Arc<CompiledGraph<T>>,
    pub(crate) config: ExecutionConfig,
}

impl<T> Runnable<T> {
    pub fn entry_point(&self) -> &str {
        &self.graph.entry_point
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Where a run leaves `node`, if anywhere.
    pub fn successor(&self, node: &str) -> Option<&str> {
        self.graph.successors.get(node).map(String::as_str)
    }
}

impl<T> Clone for Runnable<T> {
    fn clone(&self) -> Self {
        Self {
            graph: Arc::clone(&self.graph),
            config: self.config.clone(),
        }
    }
}

impl<T> fmt::Debug for Runnable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runnable")
            .field("entry_point", &self.graph.entry_point)
            .field("nodes", &self.graph.nodes.len())
            .field("config", &self.config)
            .finish()
    }
}

/// A failed run: the error plus whatever state was current when it stopped.
///
/// For a step failure the state is the one the step handed back, if any.
/// For every other failure it is the most recent state.
pub struct Interrupted<T> {
    pub error: GraphError,
    pub state: Option<T>,
}

impl<T> Interrupted<T> {
    pub(crate) fn new(error: GraphError, state: Option<T>) -> Self {
        Self { error, state }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    pub fn into_parts(self) -> (GraphError, Option<T>) {
        (self.error, self.state)
    }
}

impl<T> From<Interrupted<T>> for GraphError {
    fn from(interrupted: Interrupted<T>) -> Self {
        interrupted.error
    }
}

impl<T> fmt::Debug for Interrupted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interrupted")
            .field("error", &self.error)
            .field("has_state", &self.state.is_some())
            .finish()
    }
}

impl<T> fmt::Display for Interrupted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T> std::error::Error for Interrupted<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_parts() {
        let interrupted = Interrupted::new(GraphError::NoOutgoingEdge("n".into()), Some(3u8));
        assert_eq!(interrupted.kind(), ErrorKind::NoOutgoingEdge);
        assert_eq!(interrupted.to_string(), "no outgoing edge found for node: n");

        let (error, state) = interrupted.into_parts();
        assert!(matches!(error, GraphError::NoOutgoingEdge(ref n) if n == "n"));
        assert_eq!(state, Some(3));
    }

    #[test]
    fn test_interrupted_into_graph_error() {
        let interrupted: Interrupted<()> =
            Interrupted::new(GraphError::NodeNotFound("x".into()), None);
        let err: GraphError = interrupted.into();
        assert_eq!(err.to_string(), "node not found: x");
    }
}
