//! # Framework Errors
//!
//! Failures of the actor plumbing itself. Domain outcomes such as an unknown id are
//! not errors; they travel back as [`Receipt`](crate::Receipt)s or `None`.

/// Errors that can occur within the collection framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Collection actor closed")]
    ActorClosed,
    #[error("Collection actor dropped response channel")]
    ActorDropped,
}
