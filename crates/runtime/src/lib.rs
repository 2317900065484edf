//! Host-side controller for a Cat Trap session.
//!
//! This crate owns the WebSocket link to the game server and the session
//! state around it (connection status, waiting flag, last known board).
//! Consumers embed [`Runtime`], subscribe to [`Event`]s and issue requests
//! through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the ordered event bus towards the renderer
//! - [`session`] is the I/O-free state machine behind the worker
//! - [`protocol`] and [`transport`] describe the wire and the link
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod config;
pub mod events;
pub mod protocol;
pub mod runtime;
pub mod session;
pub mod theme;
pub mod transport;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use config::RuntimeConfig;
pub use events::{ConnectionStatus, Event, EventBus};
pub use protocol::{ClientMessage, GridPayload, ProtocolError, ServerMessage};
pub use runtime::{Runtime, RuntimeBuilder};
pub use session::{Dispatch, SessionSnapshot};
pub use theme::{Theme, ThemeKind, UnknownTheme};
pub use transport::{ConnectionError, Connector, Transport, WsConnector};
