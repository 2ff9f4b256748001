//! Embeddable execution engine for statically-wired, single-path pipelines.
//!
//! Register named steps, wire them with unconditional edges, pick an entry
//! point, compile, and invoke with an initial state:
//!
//! ```
//! use pipegraph::{GraphDefinition, RunContext, StepError, END};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), pipegraph::GraphError> {
//! let mut graph = GraphDefinition::new();
//! graph
//!     .add_node("greet", |_ctx: RunContext, mut msgs: Vec<String>| async move {
//!         msgs.push("hello".to_string());
//!         Ok::<_, StepError<Vec<String>>>(msgs)
//!     })
//!     .add_edge("greet", END)
//!     .set_entry_point("greet");
//!
//! let runnable = graph.compile()?;
//! let out = runnable.invoke(RunContext::new(), vec![]).await?;
//! assert_eq!(out, vec!["hello"]);
//! # Ok(())
//! # }
//! ```

pub mod telemetry;

pub use pipegraph_core::{
    BoxError, ErrorKind, ExecutionConfig, GraphError, LogConfig, PipegraphConfig, Result,
    RunContext, Step, StepError, StepResult,
};
pub use pipegraph_graph::{Edge, GraphDefinition, Interrupted, Node, Runnable, END};
