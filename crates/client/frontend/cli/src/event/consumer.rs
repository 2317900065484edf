//! Maintains the CLI message log in response to host events.
use runtime::{ConnectionStatus, Event};

use client_frontend_core::{
    event::{EventConsumer, EventImpact},
    message::MessageLog,
};

pub struct CliEventConsumer {
    log: MessageLog,
    /// Last status that produced a message; repeated failures stay quiet.
    announced: Option<ConnectionStatus>,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self {
            log,
            announced: None,
        }
    }

    fn on_status(&mut self, status: ConnectionStatus) {
        if self.announced == Some(status) {
            return;
        }
        match status {
            ConnectionStatus::Connected => self.log.info("Connected to server."),
            ConnectionStatus::Disconnected => {
                self.log.warn("Disconnected from server. Retrying...")
            }
            ConnectionStatus::Connecting => return,
        }
        self.announced = Some(status);
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::ServerStatus(status) => self.on_status(*status),
            Event::Endgame(outcome) => self.log.info(outcome.message()),
            Event::GameStatus { status } => self.log.info(status.clone()),
            Event::Waiting { .. } | Event::GridUpdated { .. } | Event::Theme(_) => {}
        }
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}
