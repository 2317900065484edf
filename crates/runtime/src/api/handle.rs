//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! submitting requests to the game server or streaming host events.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{EditRequest, Grid, MoveRequest};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus};
use crate::session::{Dispatch, SessionSnapshot};
use crate::theme::ThemeKind;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Seed a fresh `size × size` board locally and ask the server for a new game.
    ///
    /// Not gated by the waiting flag; a new game supersedes any in-flight move.
    pub async fn start_game(&self, size: usize) -> Result<Dispatch> {
        self.request(|reply| Command::StartGame { size, reply }).await?
    }

    /// Send a move unless another request is still outstanding.
    pub async fn submit_move(&self, request: MoveRequest) -> Result<Dispatch> {
        self.request(|reply| Command::Move { request, reply }).await
    }

    /// Send an edit-mode mutation. Shares the move gate.
    pub async fn submit_edit(&self, request: EditRequest) -> Result<Dispatch> {
        self.request(|reply| Command::Edit { request, reply }).await
    }

    /// Store the renderer's grid as the last known board (no network traffic).
    pub async fn sync_grid(&self, grid: Grid) -> Result<()> {
        self.request(|reply| Command::SyncGrid { grid, reply }).await
    }

    /// Switch the active theme and publish the new palette.
    pub async fn set_theme(&self, theme: ThemeKind) -> Result<()> {
        self.request(|reply| Command::SetTheme { theme, reply }).await
    }

    /// Read-only snapshot of the host session.
    pub async fn query_status(&self) -> Result<SessionSnapshot> {
        self.request(|reply| Command::QueryStatus { reply }).await
    }

    /// Stop the connection worker, cancelling any pending reconnect.
    pub async fn shutdown(&self) -> Result<()> {
        self.request(|reply| Command::Shutdown { reply }).await
    }

    /// Subscribe to host events.
    ///
    /// All events share one channel so their relative order is preserved.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe()
    }
}
