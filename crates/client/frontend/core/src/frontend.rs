//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the host via [`RuntimeHandle`]:
/// - Subscribe to host events (connection, board, notices)
/// - Submit moves, edits and new games
/// - Report the rendered board back with `sync_grid`
///
/// Frontends do NOT own the Runtime; they receive a handle for communication only.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::RuntimeHandle;
/// use anyhow::Result;
///
/// struct MyFrontend;
///
/// #[async_trait]
/// impl Frontend for MyFrontend {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let mut events = handle.subscribe();
///
///         while let Ok(event) = events.recv().await {
///             // Render the board, handle input, etc.
///             let _ = event;
///         }
///
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
