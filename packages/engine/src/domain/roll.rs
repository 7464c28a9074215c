/// A single cell on the score sheet.
///
/// `Placeholder` is the typed replacement for sentinel pin counts: a cell
/// that occupies a slot but never contributes to pin arithmetic. The public
/// rolling path only ever records `Pins`, but every consumer must treat
/// placeholders as non-scoring rather than special-casing magic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roll {
    /// Pins felled by a real delivery (0..=10).
    Pins(u8),
    /// Non-scoring bookkeeping cell, skipped by all pin arithmetic.
    Placeholder,
}

impl Roll {
    /// Pin-fall of a real delivery, `None` for a placeholder.
    pub fn pins(self) -> Option<u8> {
        match self {
            Roll::Pins(n) => Some(n),
            Roll::Placeholder => None,
        }
    }

    pub fn is_placeholder(self) -> bool {
        matches!(self, Roll::Placeholder)
    }
}
