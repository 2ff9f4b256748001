pub mod config;
pub mod context;
pub mod error;
pub mod traits;

pub use config::{ExecutionConfig, LogConfig, PipegraphConfig};
pub use context::RunContext;
pub use error::{BoxError, ErrorKind, GraphError, Result};
pub use traits::{Step, StepError, StepResult};
