use std::sync::Arc;

use tracing::debug;

use pipegraph_core::{ExecutionConfig, GraphError, Result};

use super::definition::GraphDefinition;
use super::edge::first_successors;
use super::runnable::{CompiledGraph, Runnable};

impl<T> GraphDefinition<T> {
    /// Compile with default execution settings.
    ///
    /// Only checks that an entry point is set. Unknown names, missing edges
    /// and cycles are left for the run to discover.
    pub fn compile(&self) -> Result<Runnable<T>> {
        self.compile_with_config(ExecutionConfig::default())
    }

    pub fn compile_with_config(&self, config: ExecutionConfig) -> Result<Runnable<T>> {
        if self.entry_point.is_empty() {
            return Err(GraphError::EntryPointNotSet);
        }

        let graph = CompiledGraph {
            nodes: self.nodes.clone(),
            successors: first_successors(&self.edges),
            entry_point: self.entry_point.clone(),
        };

        debug!(
            entry_point = %graph.entry_point,
            nodes = graph.nodes.len(),
            edges = self.edges.len(),
            max_steps = ?config.max_steps,
            "Compiled graph"
        );

        Ok(Runnable {
            graph: Arc::new(graph),
            config,
        })
    }
}
