//! Renderer-side state mirrored from host events.
//!
//! [`ViewModel`] is owned by the frontend event loop. Host events are folded
//! in with [`ViewModel::apply`]; local input goes through [`ViewModel::click`]
//! and the control adjusters. Each mutation reports an [`UpdateScope`] so the
//! caller knows what to redraw.
use bitflags::bitflags;

use game_core::{Grid, Outcome, TilePos};
use runtime::{ConnectionStatus, Dispatch, Event, SessionSnapshot, Theme};

use crate::controls::GameControls;
use crate::interaction::{ClickGate, ClickInterpreter, ClickOutcome, EditState, EditToggleLocked};

bitflags! {
    /// Parts of the view touched by an update.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct UpdateScope: u8 {
        const CONNECTION = 1 << 0;
        const WAITING = 1 << 1;
        const BOARD = 1 << 2;
        const THEME = 1 << 3;
        const DIALOG = 1 << 4;
        const CONTROLS = 1 << 5;
    }
}

impl UpdateScope {
    /// Whether the board grid changed and must be reported back to the host.
    pub fn board_changed(self) -> bool {
        self.contains(Self::BOARD)
    }
}

#[derive(Clone, Debug)]
pub struct ViewModel {
    pub status: ConnectionStatus,
    pub waiting: bool,
    pub grid: Grid,
    pub theme: Theme,
    /// Pending endgame dialog.
    pub endgame: Option<Outcome>,
    pub controls: GameControls,
    interaction: ClickInterpreter,
    /// State before the last dispatched click, kept until the host answers.
    pending: Option<PendingClick>,
}

#[derive(Clone, Debug)]
struct PendingClick {
    grid: Grid,
    state: EditState,
}

impl ViewModel {
    pub fn new(controls: GameControls) -> Self {
        Self {
            status: ConnectionStatus::default(),
            waiting: false,
            grid: Grid::default(),
            theme: Theme::default(),
            endgame: None,
            controls,
            interaction: ClickInterpreter::new(),
            pending: None,
        }
    }

    pub fn interaction(&self) -> &ClickInterpreter {
        &self.interaction
    }

    pub fn gate(&self) -> ClickGate {
        ClickGate {
            waiting: self.waiting,
            connected: self.status.is_connected(),
        }
    }

    /// Adopt the host's current session, used once at startup.
    pub fn apply_snapshot(&mut self, snapshot: SessionSnapshot) -> UpdateScope {
        let mut scope = UpdateScope::CONNECTION | UpdateScope::WAITING;
        self.status = snapshot.status;
        self.waiting = snapshot.waiting;
        if let Some(grid) = snapshot.grid {
            self.grid = grid;
            scope |= UpdateScope::BOARD;
        }
        if self.theme.kind != snapshot.theme {
            self.theme = snapshot.theme.palette();
            scope |= UpdateScope::THEME;
        }
        scope
    }

    pub fn apply(&mut self, event: &Event) -> UpdateScope {
        match event {
            Event::ServerStatus(status) => {
                self.status = *status;
                UpdateScope::CONNECTION
            }
            Event::Waiting { is_waiting } => {
                self.waiting = *is_waiting;
                UpdateScope::WAITING
            }
            Event::GridUpdated { grid } => {
                self.grid = grid.clone();
                UpdateScope::BOARD
            }
            Event::Endgame(outcome) => {
                self.endgame = Some(*outcome);
                UpdateScope::DIALOG
            }
            Event::GameStatus { .. } => UpdateScope::empty(),
            Event::Theme(theme) => {
                self.theme = theme.clone();
                UpdateScope::THEME
            }
        }
    }

    /// Interpret a board click. A dispatched request marks the view waiting
    /// before it leaves, so a second click cannot slip through.
    pub fn click(&mut self, tile: Option<TilePos>) -> (ClickOutcome, UpdateScope) {
        let gate = self.gate();
        let before = self.interaction.state();
        let grid_before = self.grid.clone();
        let outcome = self
            .interaction
            .click(tile, &mut self.grid, gate, &self.controls);

        let mut scope = UpdateScope::empty();
        if let ClickOutcome::Dispatch(request) = &outcome {
            self.pending = Some(PendingClick {
                grid: grid_before,
                state: before,
            });
            self.waiting = true;
            scope |= UpdateScope::WAITING;
            if matches!(request, game_core::Request::Move(_)) {
                scope |= UpdateScope::BOARD;
            }
        }
        if self.interaction.state() != before {
            scope |= UpdateScope::CONTROLS;
        }
        (outcome, scope)
    }

    /// Resolve the last dispatched click with the host's answer.
    ///
    /// A click the host did not send is undone: the optimistic mark is
    /// removed and the edit state goes back to where it was, so the user can
    /// issue it again. `Busy` leaves the view waiting.
    pub fn settle(&mut self, dispatch: Dispatch) -> UpdateScope {
        let Some(pending) = self.pending.take() else {
            return UpdateScope::empty();
        };
        if dispatch.is_sent() {
            return UpdateScope::empty();
        }

        let mut scope = UpdateScope::WAITING;
        self.waiting = dispatch == Dispatch::Busy;
        if self.grid != pending.grid {
            self.grid = pending.grid;
            scope |= UpdateScope::BOARD;
        }
        if self.interaction.state() != pending.state {
            self.interaction.restore(pending.state);
            scope |= UpdateScope::CONTROLS;
        }
        scope
    }

    pub fn toggle_edit(&mut self) -> Result<bool, EditToggleLocked> {
        self.interaction.toggle_edit()
    }

    /// Local part of starting a new game: edit mode off, dialog closed.
    pub fn begin_new_game(&mut self) -> UpdateScope {
        self.interaction.reset();
        self.pending = None;
        self.endgame = None;
        UpdateScope::CONTROLS | UpdateScope::DIALOG
    }

    /// Close the endgame dialog. Returns `false` if none was open.
    pub fn dismiss_endgame(&mut self) -> bool {
        self.endgame.take().is_some()
    }
}
