//! JSON wire format spoken with the game server.
//!
//! Frames are text messages carrying an object with a `command` discriminator.
//! Outbound commands use snake_case names and fields; the server answers with
//! camelCase command names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use game_core::{EditRequest, Grid, MoveRequest, Request};

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed frame")]
    Malformed(#[from] serde_json::Error),

    #[error("grid payload is not a valid grid")]
    EncodedGrid(#[source] serde_json::Error),
}

/// Client → server messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Sent on every (re)connect with the last known board, empty if none.
    RequestGrid { grid: Grid },
    NewGame { size: usize },
    Move(MoveRequest),
    Edit(EditRequest),
}

impl ClientMessage {
    pub fn encode(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestGrid { .. } => "request_grid",
            Self::NewGame { .. } => "new_game",
            Self::Move(_) => "move",
            Self::Edit(_) => "edit",
        }
    }
}

impl From<Request> for ClientMessage {
    fn from(request: Request) -> Self {
        match request {
            Request::Move(request) => Self::Move(request),
            Request::Edit(request) => Self::Edit(request),
        }
    }
}

/// Server → client messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum ServerMessage {
    UpdateGrid { data: GridPayload },
    Endgame { reason: i64 },
    GameStatus { status: String },
}

impl ServerMessage {
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// `updateGrid` data: servers send the grid either inline or as a JSON string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GridPayload {
    Inline(Grid),
    Encoded(String),
}

impl GridPayload {
    pub fn into_grid(self) -> Result<Grid, ProtocolError> {
        match self {
            Self::Inline(grid) => Ok(grid),
            Self::Encoded(text) => serde_json::from_str(&text).map_err(ProtocolError::EncodedGrid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EditAction, Strategy, Tile, TilePos};
    use serde_json::json;

    #[test]
    fn request_grid_carries_an_empty_board_when_none_is_known() {
        let frame = ClientMessage::RequestGrid {
            grid: Grid::default(),
        }
        .encode()
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value, json!({"command": "request_grid", "grid": []}));
    }

    #[test]
    fn move_frame_flattens_request_fields() {
        let message = ClientMessage::from(Request::Move(MoveRequest {
            clicked_tile: TilePos::new(0, 1),
            deadline: 2.0,
            strategy: Strategy::Limited,
            depth: 3,
            alpha_beta_pruning: false,
            grid: Grid::from_rows(vec![vec![Tile::Cat, Tile::Blocked]]),
        }));
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({
                "command": "move",
                "clicked_tile": [0, 1],
                "deadline": 2.0,
                "strategy": "limited",
                "depth": 3,
                "alpha_beta_pruning": false,
                "grid": [[6, 1]],
            })
        );
        assert_eq!(message.name(), "move");
    }

    #[test]
    fn edit_and_new_game_frames() {
        let edit = ClientMessage::Edit(EditRequest {
            action: EditAction::PlaceCat,
            tile: TilePos::new(2, 0),
            grid: Grid::empty(1),
        });
        assert_eq!(
            serde_json::to_value(&edit).unwrap(),
            json!({"command": "edit", "action": "place_cat", "tile": [2, 0], "grid": [[0]]})
        );
        assert_eq!(
            serde_json::to_value(ClientMessage::NewGame { size: 9 }).unwrap(),
            json!({"command": "new_game", "size": 9})
        );
    }

    #[test]
    fn update_grid_accepts_inline_and_encoded_payloads() {
        let inline = ServerMessage::decode(r#"{"command":"updateGrid","data":[[0,6],[1,0]]}"#)
            .unwrap();
        let encoded =
            ServerMessage::decode(r#"{"command":"updateGrid","data":"[[0,6],[1,0]]"}"#).unwrap();

        let grids: Vec<Grid> = [inline, encoded]
            .into_iter()
            .map(|message| match message {
                ServerMessage::UpdateGrid { data } => data.into_grid().unwrap(),
                other => panic!("unexpected message {other:?}"),
            })
            .collect();
        assert_eq!(grids[0], grids[1]);
        assert_eq!(grids[0].cat_position(), Some(TilePos::new(0, 1)));
    }

    #[test]
    fn decodes_endgame_and_status() {
        assert_eq!(
            ServerMessage::decode(r#"{"command":"endgame","reason":2}"#).unwrap(),
            ServerMessage::Endgame { reason: 2 }
        );
        assert_eq!(
            ServerMessage::decode(r#"{"command":"gameStatus","status":"cat is thinking"}"#)
                .unwrap(),
            ServerMessage::GameStatus {
                status: "cat is thinking".into()
            }
        );
    }

    #[test]
    fn rejects_unknown_commands_and_bad_grids() {
        assert!(ServerMessage::decode(r#"{"command":"teleport"}"#).is_err());
        assert!(ServerMessage::decode("not json").is_err());

        let message =
            ServerMessage::decode(r#"{"command":"updateGrid","data":"[[0,7]]"}"#).unwrap();
        let ServerMessage::UpdateGrid { data } = message else {
            panic!("expected updateGrid");
        };
        assert!(matches!(data.into_grid(), Err(ProtocolError::EncodedGrid(_))));

        // Unknown tile codes inline fail both untagged variants.
        assert!(ServerMessage::decode(r#"{"command":"updateGrid","data":[[0,7]]}"#).is_err());
    }
}
