//! Cross-frontend primitives for presenting a Cat Trap session.
//!
//! Houses the click interpreter, player controls, message logging, event
//! handling and the view model that terminal and future graphical clients
//! can reuse.
pub mod config;
pub mod controls;
pub mod event;
pub mod frontend;
pub mod interaction;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use controls::GameControls;
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use interaction::{
    ClickGate, ClickInterpreter, ClickOutcome, EditState, EditToggleLocked, IgnoreReason,
};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{UpdateScope, ViewModel};
