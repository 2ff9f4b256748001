use std::collections::HashMap;
use std::fmt;

use pipegraph_core::{RunContext, Step, StepResult};

use super::edge::Edge;
use super::node::Node;

/// Reserved name of the terminal node. Reaching it ends a run.
pub const END: &str = "END";

/// Mutable graph builder: nodes, ordered edges, and an entry point.
///
/// Nothing is checked while building. Names used by edges or the entry
/// point need not exist yet; problems surface when a run reaches them.
pub struct GraphDefinition<T> {
    pub(crate) nodes: HashMap<String, Node<T>>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) entry_point: String,
}

async fn identity<T>(_ctx: RunContext, state: T) -> StepResult<T> {
    Ok(state)
}

impl<T> Default for GraphDefinition<T>
where
    T: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GraphDefinition<T>
where
    T: Send + 'static,
{
    /// Create an empty graph with the terminal node pre-registered.
    pub fn new() -> Self {
        let mut graph = Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
            entry_point: String::new(),
        };
        graph.add_node(END, identity::<T>);
        graph
    }

    /// Register a step under `name`, replacing any node already registered there.
    pub fn add_node(&mut self, name: impl Into<String>, step: impl Step<T>) -> &mut Self {
        let name = name.into();
        self.nodes.insert(name.clone(), Node::new(name, step));
        self
    }

    /// Append an edge. Declaration order matters: only the first edge out of
    /// a node is ever followed.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.edges.push(Edge::new(from, to));
        self
    }

    /// Set the node a run starts at. Last call wins.
    pub fn set_entry_point(&mut self, name: impl Into<String>) -> &mut Self {
        self.entry_point = name.into();
        self
    }
}

impl<T> GraphDefinition<T> {
    /// The configured entry point, or `None` while unset.
    pub fn entry_point(&self) -> Option<&str> {
        if self.entry_point.is_empty() {
            None
        } else {
            Some(&self.entry_point)
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, name: &str) -> Option<&Node<T>> {
        self.nodes.get(name)
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Registered node names, in no particular order. Includes [`END`].
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Number of registered nodes, including [`END`].
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the terminal node is registered at construction.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T> fmt::Debug for GraphDefinition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("GraphDefinition")
            .field("nodes", &names)
            .field("edges", &self.edges)
            .field("entry_point", &self.entry_point)
            .finish()
    }
}
