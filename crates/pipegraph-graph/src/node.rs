use std::fmt;
use std::sync::Arc;

use pipegraph_core::Step;

/// A named step in the graph.
pub struct Node<T> {
    name: String,
    step: Arc<dyn Step<T>>,
}

impl<T> Node<T> {
    pub fn new(name: impl Into<String>, step: impl Step<T>) -> Self {
        Self {
            name: name.into(),
            step: Arc::new(step),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn step(&self) -> &dyn Step<T> {
        self.step.as_ref()
    }
}

// Manual impl: cloning shares the step, so `T` need not be `Clone`.
impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            step: Arc::clone(&self.step),
        }
    }
}

impl<T> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("name", &self.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pipegraph_core::{RunContext, StepError};

    use super::*;

    #[tokio::test]
    async fn test_node_runs_its_step() {
        let node = Node::new("inc", |_ctx: RunContext, n: i64| async move {
            Ok::<_, StepError<i64>>(n + 1)
        });
        assert_eq!(node.name(), "inc");
        let out = node.step().run(RunContext::new(), 1).await.unwrap();
        assert_eq!(out, 2);
    }

    #[tokio::test]
    async fn test_clone_shares_step() {
        let node = Node::new("neg", |_ctx: RunContext, n: i64| async move {
            Ok::<_, StepError<i64>>(-n)
        });
        let clone = node.clone();
        assert_eq!(clone.name(), "neg");
        assert_eq!(clone.step().run(RunContext::new(), 3).await.unwrap(), -3);
        assert_eq!(format!("{:?}", clone), "Node { name: \"neg\", .. }");
    }
}
