//! Board click interpretation and the edit-mode state machine.
//!
//! The interpreter turns a tile click into at most one outbound request.
//! It owns nothing but its mode; the board and gate state are passed in so
//! the caller stays the single owner of renderer state.
use std::fmt;

use thiserror::Error;

use game_core::{EditAction, EditRequest, Grid, Request, Tile, TilePos};

use crate::controls::GameControls;

/// Mode of the click interpreter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    /// Clicks on empty tiles are moves.
    #[default]
    Normal,
    /// Clicks toggle blocked tiles or pick up the cat.
    EditIdle,
    /// The cat was picked up; the next click drops it.
    AwaitingCatPlacement,
}

impl EditState {
    pub fn is_edit_mode(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// Why a click produced no request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A previous request is still unanswered.
    Waiting,
    /// No server link.
    Disconnected,
    /// The click was outside every tile.
    NoTile,
    /// Moves only target empty tiles.
    Occupied,
}

impl IgnoreReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting for server response",
            Self::Disconnected => "not connected",
            Self::NoTile => "no tile under cursor",
            Self::Occupied => "tile is not empty",
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of interpreting one click.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Send this request; the caller marks itself waiting.
    Dispatch(Request),
    Ignored(IgnoreReason),
}

/// Edit mode cannot be switched while the cat is being relocated.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("place the cat before leaving edit mode")]
pub struct EditToggleLocked;

/// Gate inputs sampled at click time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickGate {
    pub waiting: bool,
    pub connected: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ClickInterpreter {
    state: EditState,
}

impl ClickInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_edit_mode(&self) -> bool {
        self.state.is_edit_mode()
    }

    /// Whether the edit-mode toggle is enabled.
    pub fn can_toggle_edit(&self) -> bool {
        self.state != EditState::AwaitingCatPlacement
    }

    /// Flip edit mode, returning whether it is now on.
    pub fn toggle_edit(&mut self) -> Result<bool, EditToggleLocked> {
        self.state = match self.state {
            EditState::Normal => EditState::EditIdle,
            EditState::EditIdle => EditState::Normal,
            EditState::AwaitingCatPlacement => return Err(EditToggleLocked),
        };
        Ok(self.is_edit_mode())
    }

    /// Back to normal mode with the toggle enabled (new game).
    pub fn reset(&mut self) {
        self.state = EditState::Normal;
    }

    /// Return to `state` after a click whose request never left.
    pub(crate) fn restore(&mut self, state: EditState) {
        self.state = state;
    }

    /// Interpret a click on `tile` against the current `board`.
    ///
    /// In normal mode a move optimistically blocks the clicked tile on
    /// `board` before the request snapshot is taken.
    pub fn click(
        &mut self,
        tile: Option<TilePos>,
        board: &mut Grid,
        gate: ClickGate,
        controls: &GameControls,
    ) -> ClickOutcome {
        if gate.waiting {
            return ClickOutcome::Ignored(IgnoreReason::Waiting);
        }
        if !gate.connected {
            return ClickOutcome::Ignored(IgnoreReason::Disconnected);
        }
        let Some((tile, current)) = tile.and_then(|tile| Some((tile, board.get(tile)?))) else {
            return ClickOutcome::Ignored(IgnoreReason::NoTile);
        };

        match self.state {
            EditState::Normal => {
                if !current.is_empty() {
                    return ClickOutcome::Ignored(IgnoreReason::Occupied);
                }
                if board.set(tile, Tile::Blocked).is_err() {
                    return ClickOutcome::Ignored(IgnoreReason::NoTile);
                }
                ClickOutcome::Dispatch(controls.move_request(tile, board.clone()).into())
            }
            EditState::EditIdle => {
                let action = match current {
                    Tile::Cat => {
                        self.state = EditState::AwaitingCatPlacement;
                        EditAction::Unblock
                    }
                    Tile::Blocked => EditAction::Unblock,
                    Tile::Empty => EditAction::Block,
                };
                ClickOutcome::Dispatch(edit(action, tile, board))
            }
            EditState::AwaitingCatPlacement => {
                self.state = EditState::EditIdle;
                ClickOutcome::Dispatch(edit(EditAction::PlaceCat, tile, board))
            }
        }
    }
}

fn edit(action: EditAction, tile: TilePos, board: &Grid) -> Request {
    EditRequest {
        action,
        tile,
        grid: board.clone(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: ClickGate = ClickGate {
        waiting: false,
        connected: true,
    };

    fn board() -> Grid {
        let mut grid = Grid::empty(3);
        grid.set(TilePos::new(1, 1), Tile::Cat).unwrap();
        grid.set(TilePos::new(0, 0), Tile::Blocked).unwrap();
        grid
    }

    fn dispatched(outcome: ClickOutcome) -> Request {
        match outcome {
            ClickOutcome::Dispatch(request) => request,
            ClickOutcome::Ignored(reason) => panic!("click ignored: {reason}"),
        }
    }

    #[test]
    fn normal_click_blocks_tile_and_sends_move() {
        let mut interpreter = ClickInterpreter::new();
        let mut grid = board();
        let controls = GameControls::default();

        let request = dispatched(interpreter.click(
            Some(TilePos::new(2, 1)),
            &mut grid,
            OPEN,
            &controls,
        ));

        assert_eq!(grid.get(TilePos::new(2, 1)), Some(Tile::Blocked));
        let Request::Move(request) = request else {
            panic!("expected a move");
        };
        assert_eq!(request.clicked_tile, TilePos::new(2, 1));
        assert_eq!(request.grid, grid);
        assert_eq!(request.depth, controls.depth);
    }

    #[test]
    fn normal_click_on_occupied_tile_is_a_noop() {
        let mut interpreter = ClickInterpreter::new();
        let mut grid = board();
        let before = grid.clone();

        for tile in [TilePos::new(0, 0), TilePos::new(1, 1)] {
            assert_eq!(
                interpreter.click(Some(tile), &mut grid, OPEN, &GameControls::default()),
                ClickOutcome::Ignored(IgnoreReason::Occupied)
            );
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn gate_suppresses_clicks_without_marking() {
        let mut interpreter = ClickInterpreter::new();
        let mut grid = board();
        let before = grid.clone();
        let tile = Some(TilePos::new(2, 2));
        let controls = GameControls::default();

        let waiting = ClickGate {
            waiting: true,
            connected: true,
        };
        assert_eq!(
            interpreter.click(tile, &mut grid, waiting, &controls),
            ClickOutcome::Ignored(IgnoreReason::Waiting)
        );

        let offline = ClickGate {
            waiting: false,
            connected: false,
        };
        assert_eq!(
            interpreter.click(tile, &mut grid, offline, &controls),
            ClickOutcome::Ignored(IgnoreReason::Disconnected)
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn clicks_outside_the_board_are_ignored() {
        let mut interpreter = ClickInterpreter::new();
        let mut grid = board();
        let controls = GameControls::default();

        assert_eq!(
            interpreter.click(None, &mut grid, OPEN, &controls),
            ClickOutcome::Ignored(IgnoreReason::NoTile)
        );
        assert_eq!(
            interpreter.click(Some(TilePos::new(9, 0)), &mut grid, OPEN, &controls),
            ClickOutcome::Ignored(IgnoreReason::NoTile)
        );
    }

    #[test]
    fn edit_idle_toggles_blocked_tiles() {
        let mut interpreter = ClickInterpreter::new();
        assert_eq!(interpreter.toggle_edit(), Ok(true));
        let mut grid = board();
        let controls = GameControls::default();

        let Request::Edit(block) = dispatched(interpreter.click(
            Some(TilePos::new(2, 2)),
            &mut grid,
            OPEN,
            &controls,
        )) else {
            panic!("expected an edit");
        };
        assert_eq!(block.action, EditAction::Block);
        assert_eq!(grid.get(TilePos::new(2, 2)), Some(Tile::Empty));

        let Request::Edit(unblock) = dispatched(interpreter.click(
            Some(TilePos::new(0, 0)),
            &mut grid,
            OPEN,
            &controls,
        )) else {
            panic!("expected an edit");
        };
        assert_eq!(unblock.action, EditAction::Unblock);
        assert_eq!(interpreter.state(), EditState::EditIdle);
    }

    #[test]
    fn cat_relocation_locks_the_edit_toggle() {
        let mut interpreter = ClickInterpreter::new();
        interpreter.toggle_edit().unwrap();
        let mut grid = board();
        let controls = GameControls::default();

        let Request::Edit(pick_up) = dispatched(interpreter.click(
            Some(TilePos::new(1, 1)),
            &mut grid,
            OPEN,
            &controls,
        )) else {
            panic!("expected an edit");
        };
        assert_eq!(pick_up.action, EditAction::Unblock);
        assert_eq!(pick_up.tile, TilePos::new(1, 1));
        assert_eq!(interpreter.state(), EditState::AwaitingCatPlacement);
        assert!(!interpreter.can_toggle_edit());
        assert_eq!(interpreter.toggle_edit(), Err(EditToggleLocked));

        // Any tile works as the drop target, blocked ones included.
        let Request::Edit(drop) = dispatched(interpreter.click(
            Some(TilePos::new(0, 0)),
            &mut grid,
            OPEN,
            &controls,
        )) else {
            panic!("expected an edit");
        };
        assert_eq!(drop.action, EditAction::PlaceCat);
        assert_eq!(drop.tile, TilePos::new(0, 0));
        assert_eq!(interpreter.state(), EditState::EditIdle);
        assert!(interpreter.can_toggle_edit());
        assert_eq!(interpreter.toggle_edit(), Ok(false));
    }

    #[test]
    fn waiting_click_keeps_cat_placement_pending() {
        let mut interpreter = ClickInterpreter::new();
        interpreter.toggle_edit().unwrap();
        let mut grid = board();
        let controls = GameControls::default();
        interpreter.click(Some(TilePos::new(1, 1)), &mut grid, OPEN, &controls);

        let waiting = ClickGate {
            waiting: true,
            connected: true,
        };
        interpreter.click(Some(TilePos::new(2, 0)), &mut grid, waiting, &controls);
        assert_eq!(interpreter.state(), EditState::AwaitingCatPlacement);
    }

    #[test]
    fn reset_unlocks_and_leaves_edit_mode() {
        let mut interpreter = ClickInterpreter::new();
        interpreter.toggle_edit().unwrap();
        let mut grid = board();
        interpreter.click(
            Some(TilePos::new(1, 1)),
            &mut grid,
            OPEN,
            &GameControls::default(),
        );

        interpreter.reset();
        assert_eq!(interpreter.state(), EditState::Normal);
        assert!(interpreter.can_toggle_edit());
    }
}
