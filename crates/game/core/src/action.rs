//! Requests a player can submit to the game server.
//!
//! Every request carries the full grid as the client currently sees it; the
//! server treats it as authoritative for the computation it performs.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::grid::{Grid, TilePos};

/// Search strategy the server uses to pick the cat's reply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Strategy {
    Random,
    #[default]
    Minimax,
    /// Depth-limited search.
    Limited,
    /// Iterative deepening.
    Iterative,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Random,
        Strategy::Minimax,
        Strategy::Limited,
        Strategy::Iterative,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Minimax => "minimax",
            Self::Limited => "limited",
            Self::Iterative => "iterative",
        }
    }

    /// Next strategy in [`Strategy::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown strategy `{0}`")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}

/// Player move: block `clicked_tile` and let the cat answer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRequest {
    pub clicked_tile: TilePos,
    /// Time budget for the cat's search, in seconds.
    pub deadline: f64,
    pub strategy: Strategy,
    pub depth: u32,
    pub alpha_beta_pruning: bool,
    pub grid: Grid,
}

/// Direct board mutation available in edit mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum EditAction {
    Block,
    Unblock,
    PlaceCat,
}

impl EditAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Unblock => "unblock",
            Self::PlaceCat => "place_cat",
        }
    }
}

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditRequest {
    pub action: EditAction,
    pub tile: TilePos,
    pub grid: Grid,
}

/// A request that occupies the server until it answers with a new grid.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    Move(MoveRequest),
    Edit(EditRequest),
}

impl Request {
    pub fn grid(&self) -> &Grid {
        match self {
            Self::Move(request) => &request.grid,
            Self::Edit(request) => &request.grid,
        }
    }

    pub fn tile(&self) -> TilePos {
        match self {
            Self::Move(request) => request.clicked_tile,
            Self::Edit(request) => request.tile,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Move(_) => "move",
            Self::Edit(request) => request.action.as_str(),
        }
    }
}

impl From<MoveRequest> for Request {
    fn from(request: MoveRequest) -> Self {
        Self::Move(request)
    }
}

impl From<EditRequest> for Request {
    fn from(request: EditRequest) -> Self {
        Self::Edit(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_cycles_through_all_variants() {
        let mut strategy = Strategy::Random;
        let mut seen = Vec::new();
        for _ in 0..Strategy::ALL.len() {
            seen.push(strategy);
            strategy = strategy.next();
        }
        assert_eq!(seen, Strategy::ALL);
        assert_eq!(strategy, Strategy::Random);
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("Iterative".parse(), Ok(Strategy::Iterative));
        assert_eq!(" limited ".parse(), Ok(Strategy::Limited));
        let error = "alphabeta".parse::<Strategy>().unwrap_err();
        assert_eq!(error, UnknownStrategy("alphabeta".into()));
        assert_eq!(error.to_string(), "unknown strategy `alphabeta`");
    }

    #[test]
    fn request_reports_target_tile() {
        let edit = Request::from(EditRequest {
            action: EditAction::PlaceCat,
            tile: TilePos::new(2, 1),
            grid: Grid::empty(3),
        });
        assert_eq!(edit.tile(), TilePos::new(2, 1));
        assert_eq!(edit.label(), "place_cat");
        assert_eq!(edit.grid().row_count(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn move_request_uses_snake_case_fields() {
        let request = MoveRequest {
            clicked_tile: TilePos::new(1, 2),
            deadline: 1.5,
            strategy: Strategy::Iterative,
            depth: 4,
            alpha_beta_pruning: true,
            grid: Grid::empty(1),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "clicked_tile": [1, 2],
                "deadline": 1.5,
                "strategy": "iterative",
                "depth": 4,
                "alpha_beta_pruning": true,
                "grid": [[0]],
            })
        );
        assert_eq!(
            serde_json::to_value(EditAction::PlaceCat).unwrap(),
            serde_json::json!("place_cat")
        );
    }
}
