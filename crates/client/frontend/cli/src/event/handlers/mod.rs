//! Event handler implementations for EventLoop.
//!
//! This module contains handler methods organized by responsibility:
//! - `input`: Keyboard and mouse input
//! - `dispatch`: Requests sent to the host
//! - `rendering`: Terminal rendering and grid reporting
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files,
//! and are automatically available to the EventLoop through Rust's module system.

mod dispatch;
mod input;
mod rendering;
