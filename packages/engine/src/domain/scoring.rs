//! Bonus-aware scoring: pure functions from a frame sequence to per-frame
//! cumulative scores.
//!
//! Everything here recomputes from scratch; there is no running total carried
//! roll to roll, so recomputation after any roll is idempotent by
//! construction.

use crate::domain::frame::Frame;
use crate::domain::rules::{FRAMES, LAST_FRAME, PINS};

/// Per-frame scores; `None` while a frame's bonus is still unresolved.
///
/// A frame resolves once it is complete and, for a strike or spare, the
/// bonus rolls it draws on have been recorded. Resolved values never change
/// as further rolls arrive.
pub fn frame_scores(frames: &[Frame; FRAMES]) -> [Option<u16>; FRAMES] {
    std::array::from_fn(|i| score_frame(frames, i))
}

/// Cumulative per-frame scores over the resolved prefix.
///
/// Entries after the first unresolved frame are `None`; the final entry is
/// the game total once every frame has resolved.
pub fn cumulative_scores(frames: &[Frame; FRAMES]) -> [Option<u16>; FRAMES] {
    let mut cumulative = [None; FRAMES];
    let mut running = 0u16;
    for (i, score) in frame_scores(frames).into_iter().enumerate() {
        match score {
            Some(s) => {
                running += s;
                cumulative[i] = Some(running);
            }
            None => break,
        }
    }
    cumulative
}

/// Latest resolved cumulative score, 0 before any frame resolves.
pub fn running_total(frames: &[Frame; FRAMES]) -> u16 {
    cumulative_scores(frames)
        .into_iter()
        .flatten()
        .last()
        .unwrap_or(0)
}

fn score_frame(frames: &[Frame; FRAMES], index: usize) -> Option<u16> {
    let frame = &frames[index];
    if !frame.is_complete() {
        return None;
    }
    // The tenth frame is self-contained: its 2 or 3 rolls, no lookahead.
    if index == LAST_FRAME {
        return Some(frame.pin_total());
    }
    if frame.is_strike() {
        Some(u16::from(PINS) + bonus_rolls(frames, index, 2)?)
    } else if frame.is_spare() {
        Some(u16::from(PINS) + bonus_rolls(frames, index, 1)?)
    } else {
        Some(frame.pin_total())
    }
}

/// Sum of the next `count` real rolls after `index` in pin-fall order,
/// scanning forward across frames; `None` until enough rolls exist.
fn bonus_rolls(frames: &[Frame; FRAMES], index: usize, count: usize) -> Option<u16> {
    let mut taken = 0;
    let mut sum = 0u16;
    for frame in &frames[index + 1..] {
        for pins in frame.real_rolls() {
            sum += u16::from(pins);
            taken += 1;
            if taken == count {
                return Some(sum);
            }
        }
    }
    None
}
