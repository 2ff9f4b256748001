use thiserror::Error;

/// Boxed error produced by a step.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum GraphError {
    // Compile errors
    #[error("entry point not set")]
    EntryPointNotSet,

    // Execution errors
    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("no outgoing edge found for node: {0}")]
    NoOutgoingEdge(String),

    #[error("error in node {node}: {source}")]
    StepFailure {
        node: String,
        #[source]
        source: BoxError,
    },

    #[error("step limit exceeded: {0}")]
    StepLimitExceeded(usize),

    // Config errors
    #[error("config error: {0}")]
    Config(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),
}

/// Stable, matchable discriminant of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EntryPointNotSet,
    NodeNotFound,
    NoOutgoingEdge,
    StepFailure,
    StepLimitExceeded,
    Config,
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::EntryPointNotSet => ErrorKind::EntryPointNotSet,
            GraphError::NodeNotFound(_) => ErrorKind::NodeNotFound,
            GraphError::NoOutgoingEdge(_) => ErrorKind::NoOutgoingEdge,
            GraphError::StepFailure { .. } => ErrorKind::StepFailure,
            GraphError::StepLimitExceeded(_) => ErrorKind::StepLimitExceeded,
            GraphError::Config(_) | GraphError::ConfigNotFound(_) => ErrorKind::Config,
        }
    }

    /// Whether this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }

    /// Name of the node the error originated from, if any.
    pub fn node(&self) -> Option<&str> {
        match self {
            GraphError::NodeNotFound(name) | GraphError::NoOutgoingEdge(name) => Some(name),
            GraphError::StepFailure { node, .. } => Some(node),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[derive(Debug, Error)]
    #[error("upstream timed out")]
    struct Upstream;

    #[test]
    fn test_messages() {
        assert_eq!(GraphError::EntryPointNotSet.to_string(), "entry point not set");
        assert_eq!(
            GraphError::NodeNotFound("node3".into()).to_string(),
            "node not found: node3"
        );
        assert_eq!(
            GraphError::NoOutgoingEdge("node1".into()).to_string(),
            "no outgoing edge found for node: node1"
        );
    }

    #[test]
    fn test_step_failure_wraps_cause() {
        let err = GraphError::StepFailure {
            node: "fetch".into(),
            source: Box::new(Upstream),
        };
        assert_eq!(err.to_string(), "error in node fetch: upstream timed out");
        assert!(err.is(ErrorKind::StepFailure));
        assert_eq!(err.node(), Some("fetch"));

        let cause = err.source().expect("cause present");
        assert!(cause.downcast_ref::<Upstream>().is_some());
    }

    #[test]
    fn test_kind_ignores_payload() {
        let a = GraphError::NodeNotFound("a".into());
        let b = GraphError::NodeNotFound("b".into());
        assert_eq!(a.kind(), b.kind());
        assert!(!a.is(ErrorKind::NoOutgoingEdge));
        assert!(GraphError::ConfigNotFound("x.toml".into()).is(ErrorKind::Config));
        assert_eq!(GraphError::EntryPointNotSet.node(), None);
    }
}
