use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;

use crate::context::RunContext;
use crate::error::BoxError;

/// Outcome of a single step.
pub type StepResult<T> = std::result::Result<T, StepError<T>>;

/// Step — one state transformation in a pipeline.
///
/// Any `Fn(RunContext, T) -> impl Future<Output = StepResult<T>>` closure is a
/// step, so most callers never implement this trait by hand.
pub trait Step<T>: Send + Sync + 'static {
    /// Consume the current state and produce the next one.
    fn run(&self, ctx: RunContext, state: T) -> BoxFuture<'_, StepResult<T>>;
}

impl<T, F, Fut> Step<T> for F
where
    T: Send + 'static,
    F: Fn(RunContext, T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = StepResult<T>> + Send + 'static,
{
    fn run(&self, ctx: RunContext, state: T) -> BoxFuture<'_, StepResult<T>> {
        Box::pin(self(ctx, state))
    }
}

/// Failure reported by a step.
///
/// The state was moved into the step, so the step decides what (if anything)
/// travels back with the error: the prior state, a partial result, or nothing.
pub struct StepError<T> {
    state: Option<T>,
    source: BoxError,
}

impl<T> StepError<T> {
    /// A failure that hands no state back.
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            state: None,
            source: source.into(),
        }
    }

    /// A failure that hands `state` back to the caller.
    pub fn with_state(state: T, source: impl Into<BoxError>) -> Self {
        Self {
            state: Some(state),
            source: source.into(),
        }
    }

    pub fn state(&self) -> Option<&T> {
        self.state.as_ref()
    }

    pub fn source(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn into_parts(self) -> (Option<T>, BoxError) {
        (self.state, self.source)
    }
}

// Lets `?` lift any concrete error inside a step body.
impl<T, E> From<E> for StepError<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self::new(err)
    }
}

impl<T> fmt::Debug for StepError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepError")
            .field("has_state", &self.state.is_some())
            .field("source", &self.source)
            .finish()
    }
}

impl<T> fmt::Display for StepError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}
