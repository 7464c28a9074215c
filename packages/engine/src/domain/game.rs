//! Game orchestration: roster, turn rotation, and the single mutation entry
//! point.

use tracing::{debug, info};

use crate::domain::player::Player;
use crate::domain::rules::{next_seat, valid_pin_range};
use crate::domain::snapshot::{self, PlayerSnapshot};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// What one call to [`Game::roll`] changed, for callers that react to
/// edge-triggered facts rather than re-deriving them from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    /// Whether the delivery closed the active player's frame.
    pub frame_completed: bool,
    /// Seat the turn rotated to, if the frame closed.
    pub next_player: Option<usize>,
    /// Game-over status after this call.
    pub game_over: bool,
}

/// A scoring session for one or more players.
///
/// The game exclusively owns its players; the only mutation entry points are
/// [`Game::add_player`] and [`Game::roll`]. Every read accessor hands out
/// independent snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    players: Vec<Player>,
    active_player: usize,
    over: bool,
}

impl Game {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            active_player: 0,
            over: false,
        }
    }

    /// Add a player with ten empty frames.
    ///
    /// Rejected once any roll has been recorded: joining mid-game would make
    /// the turn rotation ambiguous for everyone already on the sheet.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        if self.players.iter().any(Player::has_rolled) {
            return Err(DomainError::conflict(
                ConflictKind::GameStarted,
                "Cannot add a player once rolling has begun",
            ));
        }
        let player = Player::new(name);
        debug!(player = player.name(), seat = self.players.len(), "Player joined");
        self.players.push(player);
        Ok(())
    }

    /// Record one delivery for the active player.
    ///
    /// Validation happens before any mutation, so a rejected roll has zero
    /// observable side effects. Rolling after the game is over is a silent
    /// no-op, not an error.
    pub fn roll(&mut self, pins: u8) -> Result<RollOutcome, DomainError> {
        if !valid_pin_range().contains(&pins) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPinCount,
                format!("Pin count must be in {:?}", valid_pin_range()),
            ));
        }
        if self.over {
            debug!(pins, "Roll ignored, game is over");
            return Ok(RollOutcome {
                frame_completed: false,
                next_player: None,
                game_over: true,
            });
        }
        if self.players.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::NoPlayers,
                "No players in the game",
            ));
        }

        let seat = self.active_player;
        let progress = self.players[seat].roll(pins)?;
        debug!(
            pins,
            seat,
            frame_completed = progress.frame_completed,
            "Roll recorded"
        );

        let mut next = None;
        if progress.frame_completed {
            let next_up = next_seat(seat, self.players.len());
            self.active_player = next_up;
            next = Some(next_up);

            // Game over is only re-evaluated when the rotation wraps: that is
            // the earliest point at which every player can have finished.
            if next_up == 0 && self.players.iter().all(Player::is_game_complete) {
                self.over = true;
                info!(players = self.players.len(), "Game complete");
            }
        }

        Ok(RollOutcome {
            frame_completed: progress.frame_completed,
            next_player: next,
            game_over: self.over,
        })
    }

    /// Independent snapshots of every player, in seat order.
    pub fn players(&self) -> Vec<PlayerSnapshot> {
        self.players.iter().map(snapshot::player_snapshot).collect()
    }

    pub fn active_player_index(&self) -> usize {
        self.active_player
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub(crate) fn roster(&self) -> &[Player] {
        &self.players
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
