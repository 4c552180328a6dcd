//! Normalized interaction events delivered by a host adapter.

use std::fmt;

use bitflags::bitflags;
use uuid::Uuid;

use super::handle::HandleId;

/// Identity of a human viewing one or more graphics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewerId(Uuid);

impl ViewerId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ViewerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Concrete kind of an [`InteractionEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Open,
    Close,
    /// Generic interaction that is neither a click nor a drag
    Interact,
    Click,
    Drag,
    /// Slot edit performed from a creative-mode inventory; a kind of click
    CreativeEdit,
}

impl EventKind {
    /// The single flag matching this kind
    #[must_use]
    pub fn flag(self) -> EventKinds {
        match self {
            Self::Open => EventKinds::OPEN,
            Self::Close => EventKinds::CLOSE,
            Self::Interact => EventKinds::INTERACT,
            Self::Click => EventKinds::CLICK,
            Self::Drag => EventKinds::DRAG,
            Self::CreativeEdit => EventKinds::CREATIVE_EDIT,
        }
    }

    /// Whether an action may cancel the host's default handling of this kind
    #[must_use]
    pub fn is_cancellable(self) -> bool {
        !matches!(self, Self::Close)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Interact => "interact",
            Self::Click => "click",
            Self::Drag => "drag",
            Self::CreativeEdit => "creative edit",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Set of event kinds an action accepts.
    ///
    /// The composite sets mirror the event family tree: a creative edit is a
    /// click, and clicks, drags and creative edits are all interactions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventKinds: u8 {
        const OPEN = 1;
        const CLOSE = 1 << 1;
        const INTERACT = 1 << 2;
        const CLICK = 1 << 3;
        const DRAG = 1 << 4;
        const CREATIVE_EDIT = 1 << 5;

        const ANY_CLICK = Self::CLICK.bits() | Self::CREATIVE_EDIT.bits();
        const ANY_INTERACT = Self::INTERACT.bits()
            | Self::CLICK.bits()
            | Self::DRAG.bits()
            | Self::CREATIVE_EDIT.bits();
    }
}

impl EventKinds {
    /// Whether an event of `kind` belongs to this set
    #[must_use]
    pub fn accepts(self, kind: EventKind) -> bool {
        self.contains(kind.flag())
    }
}

/// An interaction on a grid handle, as delivered by the host adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEvent {
    kind: EventKind,
    handle: HandleId,
    slot: Option<usize>,
    viewer: ViewerId,
    cancelled: bool,
}

impl InteractionEvent {
    fn new(kind: EventKind, handle: HandleId, slot: Option<usize>, viewer: ViewerId) -> Self {
        Self {
            kind,
            handle,
            slot,
            viewer,
            cancelled: false,
        }
    }

    #[must_use]
    pub fn open(handle: HandleId, viewer: ViewerId) -> Self {
        Self::new(EventKind::Open, handle, None, viewer)
    }

    #[must_use]
    pub fn close(handle: HandleId, viewer: ViewerId) -> Self {
        Self::new(EventKind::Close, handle, None, viewer)
    }

    #[must_use]
    pub fn interact(handle: HandleId, viewer: ViewerId) -> Self {
        Self::new(EventKind::Interact, handle, None, viewer)
    }

    #[must_use]
    pub fn click(handle: HandleId, viewer: ViewerId, slot: usize) -> Self {
        Self::new(EventKind::Click, handle, Some(slot), viewer)
    }

    /// Drags span several slots and are only delivered to global actions.
    #[must_use]
    pub fn drag(handle: HandleId, viewer: ViewerId) -> Self {
        Self::new(EventKind::Drag, handle, None, viewer)
    }

    #[must_use]
    pub fn creative_edit(handle: HandleId, viewer: ViewerId, slot: usize) -> Self {
        Self::new(EventKind::CreativeEdit, handle, Some(slot), viewer)
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Handle the event targets
    #[must_use]
    pub fn handle(&self) -> HandleId {
        self.handle
    }

    #[must_use]
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    #[must_use]
    pub fn viewer(&self) -> ViewerId {
        self.viewer
    }

    #[must_use]
    pub fn is_cancellable(&self) -> bool {
        self.kind.is_cancellable()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Set the cancel flag. Ignored for kinds that cannot be cancelled.
    pub fn set_cancelled(&mut self, cancelled: bool) {
        if self.is_cancellable() {
            self.cancelled = cancelled;
        } else {
            log::debug!("Ignoring cancel request on a {} event", self.kind);
        }
    }

    pub fn cancel(&mut self) {
        self.set_cancelled(true);
    }
}
