//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::frame::{Frame, FrameState};
use crate::domain::game::Game;
use crate::domain::player::Player;
use crate::domain::scoring;

/// One frame as it appears on the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Real pin-falls in delivery order.
    pub rolls: Vec<u8>,
    pub is_last: bool,
    pub state: FrameState,
    /// This frame's score, once its bonus has resolved.
    pub score: Option<u16>,
    /// Running total through this frame, once every frame up to it resolved.
    pub cumulative_score: Option<u16>,
}

/// One player's full score sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub frames: Vec<FrameSnapshot>,
    pub total_score: u16,
    pub game_complete: bool,
}

/// Top-level snapshot of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub active_player: usize,
    pub over: bool,
}

/// Entry point: produce an independent snapshot of the current game state.
///
/// The snapshot owns all of its data; mutating it cannot touch the engine.
pub fn snapshot(game: &Game) -> GameSnapshot {
    GameSnapshot {
        players: game.roster().iter().map(player_snapshot).collect(),
        active_player: game.active_player_index(),
        over: game.is_over(),
    }
}

pub(crate) fn player_snapshot(player: &Player) -> PlayerSnapshot {
    let scores = scoring::frame_scores(player.frames());
    let cumulative = scoring::cumulative_scores(player.frames());
    let frames = player
        .frames()
        .iter()
        .enumerate()
        .map(|(i, frame)| frame_snapshot(frame, scores[i], cumulative[i]))
        .collect();

    PlayerSnapshot {
        name: player.name().to_string(),
        frames,
        total_score: player.total_score(),
        game_complete: player.is_game_complete(),
    }
}

fn frame_snapshot(frame: &Frame, score: Option<u16>, cumulative: Option<u16>) -> FrameSnapshot {
    FrameSnapshot {
        rolls: frame.real_rolls().collect(),
        is_last: frame.is_last(),
        state: frame.state(),
        score,
        cumulative_score: cumulative,
    }
}
