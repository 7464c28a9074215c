#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;

// Re-exports for public API
pub use domain::frame::{Frame, FrameState};
pub use domain::game::{Game, RollOutcome};
pub use domain::player::Player;
pub use domain::roll::Roll;
pub use domain::snapshot::{snapshot, FrameSnapshot, GameSnapshot, PlayerSnapshot};
pub use errors::domain::{ConflictKind, DomainError, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
