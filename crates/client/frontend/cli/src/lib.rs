//! Terminal UI frontend for Cat Trap.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait for pure UI rendering.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a RuntimeHandle for communication
//! - Does NOT own the Runtime
//! - Subscribes to host events and submits requests via the handle

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
