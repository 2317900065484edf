//! Broadcast event bus implementation.

use tokio::sync::broadcast;

use game_core::{Grid, Outcome};

use super::types::ConnectionStatus;
use crate::theme::Theme;

/// Events published by the connection worker.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ServerStatus(ConnectionStatus),
    Waiting { is_waiting: bool },
    GridUpdated { grid: Grid },
    Endgame(Outcome),
    GameStatus { status: String },
    Theme(Theme),
}

/// Single-channel event bus.
///
/// Publishing never blocks; slow subscribers lag and are told how many events
/// they missed.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn publish(&self, event: Event) {
        if let Err(broadcast::error::SendError(event)) = self.tx.send(event) {
            // No subscribers yet - this is normal, not an error
            tracing::trace!(?event, "no subscribers for event");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}
