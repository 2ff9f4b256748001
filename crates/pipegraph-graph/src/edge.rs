use std::collections::HashMap;

/// A directed, unconditional transition between two node names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Source node name.
    pub from: String,
    /// Target node name.
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Map each source node to the target of its first-declared edge.
///
/// Later edges from the same source are never followed.
pub(crate) fn first_successors(edges: &[Edge]) -> HashMap<String, String> {
    let mut successors = HashMap::with_capacity(edges.len());
    for edge in edges {
        successors
            .entry(edge.from.clone())
            .or_insert_with(|| edge.to.clone());
    }
    successors
}
