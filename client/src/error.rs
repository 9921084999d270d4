use thiserror::Error;

use dcs_shared::{NotFoundError, ValidationError};

/// Misuse of the sync context's lifecycle. Always fatal, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Router sync may run once per context
    #[error("dcs-route-sync: \"run_router_sync\" should be called only once")]
    AlreadyInitialized,

    /// Components were wrapped before router sync was started
    #[error("dcs-route-sync: please call \"run_router_sync\" before using \"wrap\"")]
    NotInitialized,

    /// The context has been disposed
    #[error("dcs-route-sync: the sync context has been disposed")]
    Disposed,
}

/// Any failure surfaced by the route sync.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Route error: {0}")]
    NotFound(#[from] NotFoundError),

    /// The executor refused a task, usually because it was shut down
    #[error("Executor refused to spawn {task}")]
    ExecutorShutdown {
        task: &'static str,
    },
}
