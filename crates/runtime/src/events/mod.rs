//! Host → renderer event stream.
//!
//! Every event the connection worker emits goes through one broadcast channel,
//! so subscribers observe them in the order they were produced.

mod bus;
mod types;

pub use bus::{Event, EventBus};
pub use types::ConnectionStatus;
