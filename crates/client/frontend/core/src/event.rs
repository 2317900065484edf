//! Utilities for reacting to host events inside UI layers.
use runtime::Event;

use crate::message::MessageLog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}
