//! Graph execution engine: single-path pipelines of named steps.
//!
//! A [`GraphDefinition`] collects nodes, ordered edges, and an entry point.
//! `compile` checks that an entry point is set and freezes the definition
//! into a [`Runnable`]. `Runnable::invoke` walks from the entry point,
//! running each node's step and following the first-declared edge out of
//! it, until the reserved [`END`] node is reached.

mod compiler;
pub mod definition;
pub mod edge;
mod executor;
pub mod node;
pub mod runnable;

pub use definition::{GraphDefinition, END};
pub use edge::Edge;
pub use node::Node;
pub use runnable::{Interrupted, Runnable};
