//! Reusable UI components

pub mod dialogs;
pub mod grid;
pub mod status_bar;

pub use dialogs::{ErrorDialog, LogsDialog};
pub use grid::{DetailLine, GridView};
pub use status_bar::StatusBar;
