//! Errors surfaced by the registry service.
//!
//! A missing id is not an error: mutations report it through a
//! [`Receipt`](collection_framework::Receipt) and lookups through `None`. What
//! remains are failures of the plumbing itself.

use collection_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// A collection actor could not be reached or did not answer.
    #[error("Collection unavailable: {0}")]
    Collection(#[from] FrameworkError),

    /// Binding or serving the listener failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection actor task panicked or was cancelled.
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}
