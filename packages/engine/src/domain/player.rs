//! Player turn logic: ten frames and a cursor over the one accepting rolls.

use crate::domain::frame::Frame;
use crate::domain::rules::{FRAMES, LAST_FRAME};
use crate::domain::scoring;
use crate::errors::domain::DomainError;

/// What one delivery changed for a player, for the orchestrator to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameProgress {
    /// Whether the delivery closed the active frame.
    pub frame_completed: bool,
    /// Whether the player's tenth frame is now terminal.
    pub game_complete: bool,
}

/// One player's score sheet: exactly ten frames, created up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    frames: [Frame; FRAMES],
    active_frame: usize,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: std::array::from_fn(|i| Frame::new(i == LAST_FRAME)),
            active_frame: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &[Frame; FRAMES] {
        &self.frames
    }

    /// Index of the frame currently accepting rolls.
    pub fn active_frame_index(&self) -> usize {
        self.active_frame
    }

    pub fn has_rolled(&self) -> bool {
        self.frames.iter().any(|f| !f.rolls().is_empty())
    }

    /// True once the cursor sits on the tenth frame and that frame is done.
    pub fn is_game_complete(&self) -> bool {
        self.active_frame == LAST_FRAME && self.frames[LAST_FRAME].is_complete()
    }

    /// Running total: the latest resolved cumulative score, 0 before any
    /// frame resolves.
    pub fn total_score(&self) -> u16 {
        scoring::running_total(&self.frames)
    }

    /// Record a delivery against the active frame.
    ///
    /// Silently ignored once the player's game is complete. The cursor
    /// advances when a frame other than the tenth closes.
    pub(crate) fn roll(&mut self, pins: u8) -> Result<FrameProgress, DomainError> {
        if self.is_game_complete() {
            return Ok(FrameProgress {
                frame_completed: false,
                game_complete: true,
            });
        }

        let frame = &mut self.frames[self.active_frame];
        frame.add_roll(pins)?;

        let frame_completed = frame.is_complete();
        if frame_completed && self.active_frame < LAST_FRAME {
            self.active_frame += 1;
        }

        Ok(FrameProgress {
            frame_completed,
            game_complete: self.is_game_complete(),
        })
    }
}
