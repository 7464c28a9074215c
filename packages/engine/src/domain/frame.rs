//! Frame state machine: one turn's rolls and their derived completion state.

use serde::{Deserialize, Serialize};

use crate::domain::roll::Roll;
use crate::domain::rules::PINS;
use crate::errors::domain::{DomainError, ValidationKind};

/// Completion state of a frame, derived from the recorded rolls alone.
///
/// Nothing stores this; every query recomputes it from the roll sequence so
/// "is this frame done" has exactly one answer everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameState {
    /// No rolls yet.
    Open,
    /// One roll, frame still owed more.
    OneRoll,
    /// Last frame only: first two rolls reached 10, a bonus ball is owed.
    NeedsBonusRoll,
    /// Frame accepts no further rolls.
    Complete,
}

/// An append-only sequence of rolls for one turn of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rolls: Vec<Roll>,
    is_last: bool,
}

impl Frame {
    pub fn new(is_last: bool) -> Self {
        Self {
            rolls: Vec::with_capacity(3),
            is_last,
        }
    }

    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// Recorded cells, placeholders included, as an immutable view.
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// Real pin-falls in delivery order, placeholders skipped.
    pub fn real_rolls(&self) -> impl Iterator<Item = u8> + '_ {
        self.rolls.iter().filter_map(|r| r.pins())
    }

    /// Sum of the real pin-falls recorded so far.
    pub fn pin_total(&self) -> u16 {
        self.real_rolls().map(u16::from).sum()
    }

    /// All ten pins felled on the first real roll.
    pub fn is_strike(&self) -> bool {
        self.real_rolls().next() == Some(PINS)
    }

    /// All ten pins felled across the first two real rolls, not a strike.
    pub fn is_spare(&self) -> bool {
        let mut rolls = self.real_rolls();
        match (rolls.next(), rolls.next()) {
            (Some(first), Some(second)) => first != PINS && first + second == PINS,
            _ => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == FrameState::Complete
    }

    /// Derive the completion state from the real rolls.
    pub fn state(&self) -> FrameState {
        let pins: Vec<u8> = self.real_rolls().collect();
        if self.is_last {
            match pins.as_slice() {
                [] => FrameState::Open,
                [_] => FrameState::OneRoll,
                &[first, second] if first + second >= PINS => FrameState::NeedsBonusRoll,
                [_, _] => FrameState::Complete,
                _ => FrameState::Complete,
            }
        } else {
            match pins.as_slice() {
                [] => FrameState::Open,
                [PINS] => FrameState::Complete,
                [_] => FrameState::OneRoll,
                _ => FrameState::Complete,
            }
        }
    }

    /// Pins still standing on the rack the next roll is thrown at.
    ///
    /// In the last frame the rack resets after a strike, after a second-ball
    /// strike, and after a spare; otherwise consecutive rolls share a rack.
    fn standing(&self) -> u8 {
        let pins: Vec<u8> = self.real_rolls().collect();
        if self.is_last {
            match pins.as_slice() {
                [] => PINS,
                [PINS] => PINS,
                &[first] => PINS - first,
                [PINS, PINS] => PINS,
                &[PINS, second] => PINS - second,
                &[first, second] if first + second == PINS => PINS,
                _ => 0,
            }
        } else {
            match pins.as_slice() {
                [] => PINS,
                &[first] => PINS - first,
                _ => 0,
            }
        }
    }

    /// Record a roll, rejecting anything the rack cannot legally absorb.
    ///
    /// A rejected roll leaves the frame untouched.
    pub(crate) fn add_roll(&mut self, pins: u8) -> Result<(), DomainError> {
        if self.is_complete() {
            return Err(DomainError::validation(
                ValidationKind::FrameComplete,
                "Frame already complete",
            ));
        }
        let standing = self.standing();
        if pins > standing {
            return Err(DomainError::validation(
                ValidationKind::FrameOverflow,
                format!("Only {standing} pins standing, cannot fell {pins}"),
            ));
        }
        self.rolls.push(Roll::Pins(pins));
        Ok(())
    }

    /// Append a raw cell without validation, for constructing fixtures.
    #[cfg(test)]
    pub(crate) fn push_raw(&mut self, roll: Roll) {
        self.rolls.push(roll);
    }
}
