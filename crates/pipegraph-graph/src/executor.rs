use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use pipegraph_core::{GraphError, Result, RunContext};

use super::definition::END;
use super::runnable::{Interrupted, Runnable};

impl<T> Runnable<T>
where
    T: Send + 'static,
{
    /// Run the graph from the entry point until [`END`] is reached.
    ///
    /// On failure the in-flight state is dropped; use [`Runnable::run`] to
    /// get it back.
    pub async fn invoke(&self, ctx: RunContext, initial: T) -> Result<T> {
        self.run(ctx, initial).await.map_err(GraphError::from)
    }

    /// Run the graph, returning the in-flight state alongside any error.
    ///
    /// Each iteration looks up the current node, moves the state into its
    /// step, and follows the first-declared edge out of it. `END` is checked
    /// before any lookup, so its registered step never runs. The context is
    /// handed to every step but never inspected here.
    pub async fn run(
        &self,
        ctx: RunContext,
        initial: T,
    ) -> std::result::Result<T, Interrupted<T>> {
        let graph = &self.graph;
        let start = Instant::now();
        let mut state = initial;
        let mut current = graph.entry_point.clone();
        let mut steps: usize = 0;

        loop {
            if current == END {
                let total_elapsed_ms = millis(start.elapsed());
                info!(steps, total_elapsed_ms, "Graph run complete");
                return Ok(state);
            }

            if let Some(limit) = self.config.max_steps {
                if steps >= limit {
                    warn!(node = %current, limit, "Step limit reached, aborting graph run");
                    return Err(Interrupted::new(
                        GraphError::StepLimitExceeded(limit),
                        Some(state),
                    ));
                }
            }

            let Some(node) = graph.nodes.get(&current) else {
                warn!(node = %current, "Node not found in graph");
                return Err(Interrupted::new(GraphError::NodeNotFound(current), Some(state)));
            };

            debug!(node = %current, "Executing graph node");
            let node_start = Instant::now();
            let result = node.step().run(ctx.clone(), state).await;
            let elapsed_ms = millis(node_start.elapsed());
            steps += 1;

            state = match result {
                Ok(next) => next,
                Err(e) => {
                    let (returned, source) = e.into_parts();
                    warn!(node = %current, error = %source, elapsed_ms, "Graph node failed");
                    return Err(Interrupted::new(
                        GraphError::StepFailure {
                            node: current,
                            source,
                        },
                        returned,
                    ));
                }
            };

            match graph.successors.get(&current) {
                Some(next) => {
                    debug!(from = %current, to = %next, elapsed_ms, "Following edge");
                    current = next.clone();
                }
                None => {
                    warn!(node = %current, "No outgoing edge, aborting graph run");
                    return Err(Interrupted::new(GraphError::NoOutgoingEdge(current), Some(state)));
                }
            }
        }
    }
}

fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
