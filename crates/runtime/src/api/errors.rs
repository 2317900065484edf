//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and board construction so clients
//! can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::GridError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("connection worker command channel closed")]
    CommandChannelClosed,

    #[error("connection worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("connection worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("cannot generate a board")]
    Grid(#[from] GridError),
}
