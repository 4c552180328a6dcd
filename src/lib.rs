//! slotgrid - slot-addressed interactive containers
//!
//! This library models a fixed-size grid of slots shown to one or more
//! viewers. Every slot holds an optional icon and a set of actions that run
//! when a viewer interacts with it. On top of that it provides a paginated
//! grid that lays a list of elements out over designated content cells, with
//! page navigation and a filler for empty pages. The host environment that
//! actually displays the grid sits behind the [`host::Host`] trait.
//!
//! # Modules
//!
//! * [`graphic`] - Containers, actions, events and grid handles
//! * [`paged`] - Paginated graphics, elements and the empty-page filler
//! * [`host`] - The boundary to the displaying host, plus an in-memory host
//! * [`error`] - Error types
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal demo host

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types shared by every graphic
pub mod error;

/// Slot grids, action bindings and interaction events
pub mod graphic;

/// Host boundary: viewers, subscriptions and notices
pub mod host;

/// Icon definitions for the navigation controls and placeholders
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Paginated graphics
pub mod paged;

/// Terminal user interface components and rendering
pub mod ui;

pub use error::{GraphicError, Result};
pub use graphic::{Action, Graphic, Icon, InteractionEvent, InventoryGraphic, Rows, ViewerId};
pub use paged::{BlankItem, Element, PagedGraphic};
