//! Reusable steps for exercising graphs in tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pipegraph_core::{RunContext, Step, StepError};

/// Error raised by the failing fixtures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct FixtureError(pub String);

/// Appends `label` to a message list.
pub fn append(label: &'static str) -> impl Step<Vec<String>> {
    move |_ctx: RunContext, mut state: Vec<String>| async move {
        state.push(label.to_string());
        Ok::<_, StepError<Vec<String>>>(state)
    }
}

/// Returns the state unchanged.
pub fn identity<T: Send + 'static>() -> impl Step<T> {
    |_ctx: RunContext, state: T| async move { Ok::<_, StepError<T>>(state) }
}

/// Fails without handing any state back.
pub fn fail_with<T: Send + 'static>(message: &'static str) -> impl Step<T> {
    move |_ctx: RunContext, _state: T| async move {
        Err::<T, _>(StepError::new(FixtureError(message.to_string())))
    }
}

/// Fails but hands the incoming state back.
pub fn fail_keeping_state<T: Send + 'static>(message: &'static str) -> impl Step<T> {
    move |_ctx: RunContext, state: T| async move {
        Err::<T, _>(StepError::with_state(state, FixtureError(message.to_string())))
    }
}

/// Passes the state through and counts invocations.
pub fn counting<T: Send + 'static>(counter: Arc<AtomicUsize>) -> impl Step<T> {
    move |_ctx: RunContext, state: T| {
        counter.fetch_add(1, Ordering::SeqCst);
        async move { Ok::<_, StepError<T>>(state) }
    }
}

/// Waits for cancellation (or `timeout`), failing with the state kept if cancelled.
pub fn wait_for_cancel<T: Send + 'static>(timeout: Duration) -> impl Step<T> {
    move |ctx: RunContext, state: T| async move {
        tokio::select! {
            _ = ctx.cancelled() => {
                Err(StepError::with_state(state, FixtureError("cancelled".to_string())))
            }
            _ = tokio::time::sleep(timeout) => Ok(state),
        }
    }
}
