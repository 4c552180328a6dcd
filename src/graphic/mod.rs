//! Slot-addressed interactive containers.
//!
//! # Module Components
//!
//! - [`actions`] - Typed action bindings and the slot-scoped registry
//! - [`container`] - Grid lifecycle, viewers, resize/retitle and dispatch
//! - [`event`] - Normalized interaction events and event-kind sets
//! - [`handle`] - Grid storage replaced on every resize or retitle
//! - [`icon`] - Opaque slot content
//! - [`inventory`] - The plain graphic
//! - [`rows`] - Valid grid sizes

pub mod actions;
pub mod container;
pub mod event;
pub mod handle;
pub mod icon;
pub mod inventory;
pub mod rows;

pub use actions::{Action, ActionCallback, ActionId, ActionKind, ActionRegistry, ActionSet};
pub use container::{Container, DispatchReport, Graphic};
pub use event::{EventKind, EventKinds, InteractionEvent, ViewerId};
pub use handle::{GridHandle, HandleId};
pub use icon::Icon;
pub use inventory::InventoryGraphic;
pub use rows::Rows;
