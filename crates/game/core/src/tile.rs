//! Tile codes as exchanged with the game server.

use crate::error::GridError;

/// State of a single board cell.
///
/// The discriminants are the wire codes; anything else is rejected when a
/// grid is decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Empty = 0,
    Blocked = 1,
    Cat = 6,
}

impl Tile {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_cat(self) -> bool {
        matches!(self, Self::Cat)
    }
}

impl TryFrom<u8> for Tile {
    type Error = GridError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Blocked),
            6 => Ok(Self::Cat),
            other => Err(GridError::UnknownTileCode(other)),
        }
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> Self {
        tile.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_wire_values() {
        assert_eq!(Tile::Empty.code(), 0);
        assert_eq!(Tile::Blocked.code(), 1);
        assert_eq!(Tile::Cat.code(), 6);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(Tile::try_from(6), Ok(Tile::Cat));
        assert_eq!(Tile::try_from(2), Err(GridError::UnknownTileCode(2)));
    }
}
