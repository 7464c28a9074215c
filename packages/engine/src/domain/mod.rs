//! Domain layer: pure scoring logic types and helpers.

pub mod frame;
pub mod game;
pub mod player;
pub mod roll;
pub mod rules;
pub mod scoring;
pub mod snapshot;

#[cfg(test)]
mod tests_frame;

// Re-exports for ergonomics
pub use frame::{Frame, FrameState};
pub use game::{Game, RollOutcome};
pub use player::{FrameProgress, Player};
pub use roll::Roll;
pub use rules::{next_seat, valid_pin_range, FRAMES, LAST_FRAME, PINS};
pub use scoring::{cumulative_scores, frame_scores, running_total};
pub use snapshot::{snapshot, FrameSnapshot, GameSnapshot, PlayerSnapshot};
