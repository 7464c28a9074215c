//! Domain-level error type used across the engine.
//!
//! This error type is adapter-agnostic. A host embedding the engine (HTTP
//! handler, CLI, UI) converts `DomainError` into its own error surface;
//! nothing here knows about transports or status codes.

use thiserror::Error;

/// Validation kinds for rejected rolls and malformed input (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Pin-fall count outside 0..=10
    InvalidPinCount,
    /// Roll would fell more pins than are standing on the current rack
    FrameOverflow,
    /// Roll into a frame that already reached its terminal state
    FrameComplete,
    /// Roll with an empty roster
    NoPlayers,
    Other(String),
}

/// Lifecycle conflict kinds (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Roster change after the first roll was recorded
    GameStarted,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or game rule violation
    #[error("validation {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict with the game lifecycle
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
}
