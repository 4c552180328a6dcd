//! Core UI functionality for the demo.
//!
//! # Module Components
//!
//! - [`actions`] - What a key or mouse press asks the app to do
//! - [`event_handler`] - Terminal input polling on the tokio runtime

pub mod actions;
pub mod event_handler;

pub use actions::UiAction;
pub use event_handler::{EventHandler, EventType};
