use serde::{Deserialize, Serialize};

/// Player-visible state of a single card.
///
/// `Matched` is terminal: a matched card stays permanently face-up and is never
/// demoted by later flips or restore passes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    Down,
    Up,
    Matched,
}

impl CardFace {
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Up | Self::Matched)
    }

    pub const fn is_matched(self) -> bool {
        matches!(self, Self::Matched)
    }
}

impl Default for CardFace {
    fn default() -> Self {
        Self::Down
    }
}
