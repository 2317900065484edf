//! End-of-game results reported by the server.

/// How a game finished, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    CatTrapped,
    CatEscaped,
    TimeUp,
}

impl Outcome {
    /// Maps the server's `endgame` reason code. `1` is a trapped cat, `2` an
    /// escape; every other code means the cat ran out of time.
    pub const fn from_reason(reason: i64) -> Self {
        match reason {
            1 => Self::CatTrapped,
            2 => Self::CatEscaped,
            _ => Self::TimeUp,
        }
    }

    pub const fn is_win(self) -> bool {
        !matches!(self, Self::CatEscaped)
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::CatTrapped => "The cat is trapped! You Win!",
            Self::CatEscaped => "The cat escaped! You Lose!",
            Self::TimeUp => "The cat ran out of time! You Win!",
        }
    }
}
