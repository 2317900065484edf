//! Worker tasks that back the runtime orchestration.
//!
//! The connection worker owns the session and the server link; everything
//! else talks to it through [`Command`]s.

mod connection;

pub use connection::{Command, ConnectionWorker};
