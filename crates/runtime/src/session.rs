//! Host-side session state machine.
//!
//! [`Session`] performs no I/O. Every transition returns [`Effects`]: the
//! events to publish and at most one frame to send. The connection worker
//! executes them in that order.

use game_core::{Grid, Outcome, Request};

use crate::events::{ConnectionStatus, Event};
use crate::protocol::{ClientMessage, ProtocolError, ServerMessage};
use crate::theme::ThemeKind;

/// Result of trying to hand a request to the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// Frame written; the waiting flag is now set.
    Sent,
    /// Another request is still outstanding; nothing was sent.
    Busy,
    /// No open connection; nothing was sent.
    Offline,
}

impl Dispatch {
    pub const fn is_sent(self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Read-only view of the session, returned by `query_status`.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub status: ConnectionStatus,
    pub waiting: bool,
    pub grid: Option<Grid>,
    pub theme: ThemeKind,
}

#[derive(Debug, Default, PartialEq)]
pub struct Effects {
    pub events: Vec<Event>,
    pub outbound: Option<ClientMessage>,
}

impl Effects {
    fn publish(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            outbound: None,
        }
    }

    fn send(mut self, message: ClientMessage) -> Self {
        self.outbound = Some(message);
        self
    }
}

#[derive(Debug, Default)]
pub struct Session {
    status: ConnectionStatus,
    waiting: bool,
    last_grid: Option<Grid>,
    theme: ThemeKind,
}

impl Session {
    pub fn new(theme: ThemeKind) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    pub fn last_grid(&self) -> Option<&Grid> {
        self.last_grid.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            waiting: self.waiting,
            grid: self.last_grid.clone(),
            theme: self.theme,
        }
    }

    pub fn connecting(&mut self) -> Effects {
        self.status = ConnectionStatus::Connecting;
        Effects::publish([Event::ServerStatus(self.status)])
    }

    /// Socket is open: clear the gate and ask for the board we last knew.
    pub fn opened(&mut self) -> Effects {
        self.status = ConnectionStatus::Connected;
        self.waiting = false;
        Effects::publish([
            Event::ServerStatus(self.status),
            Event::Waiting { is_waiting: false },
        ])
        .send(ClientMessage::RequestGrid {
            grid: self.last_grid.clone().unwrap_or_default(),
        })
    }

    /// Socket closed or failed. The waiting flag survives until the next open.
    pub fn closed(&mut self) -> Effects {
        self.status = ConnectionStatus::Disconnected;
        Effects::publish([Event::ServerStatus(self.status)])
    }

    pub fn receive(&mut self, message: ServerMessage) -> Result<Effects, ProtocolError> {
        let effects = match message {
            ServerMessage::UpdateGrid { data } => {
                let grid = data.into_grid()?;
                self.waiting = false;
                self.last_grid = Some(grid.clone());
                Effects::publish([
                    Event::Waiting { is_waiting: false },
                    Event::GridUpdated { grid },
                ])
            }
            ServerMessage::Endgame { reason } => {
                Effects::publish([Event::Endgame(Outcome::from_reason(reason))])
            }
            ServerMessage::GameStatus { status } => {
                Effects::publish([Event::GameStatus { status }])
            }
        };
        Ok(effects)
    }

    /// Move and edit requests share one gate: sent only while connected and
    /// not already waiting. Setting the flag happens together with the send.
    pub fn submit(&mut self, request: Request) -> (Dispatch, Effects) {
        if !self.status.is_connected() {
            return (Dispatch::Offline, Effects::default());
        }
        if self.waiting {
            return (Dispatch::Busy, Effects::default());
        }

        self.waiting = true;
        let effects = Effects::publish([Event::Waiting { is_waiting: true }])
            .send(ClientMessage::from(request));
        (Dispatch::Sent, effects)
    }

    /// Install a locally generated board and request a new game of its size.
    pub fn start_game(&mut self, grid: Grid) -> (Dispatch, Effects) {
        let size = grid.row_count();
        self.waiting = false;
        self.last_grid = Some(grid.clone());

        let effects = Effects::publish([
            Event::Waiting { is_waiting: false },
            Event::GridUpdated { grid },
        ]);
        if self.status.is_connected() {
            (Dispatch::Sent, effects.send(ClientMessage::NewGame { size }))
        } else {
            (Dispatch::Offline, effects)
        }
    }

    pub fn sync_grid(&mut self, grid: Grid) {
        self.last_grid = Some(grid);
    }

    pub fn set_theme(&mut self, theme: ThemeKind) -> Effects {
        self.theme = theme;
        self.theme_effects()
    }

    pub fn theme_effects(&self) -> Effects {
        Effects::publish([Event::Theme(self.theme.palette())])
    }
}
