//! Boundary between graphics and the platform that shows them.
//!
//! A [`Host`] opens and closes grid handles for viewers, tells whether the
//! caller runs on the primary execution context, keeps the set of graphics
//! subscribed to its event stream, and relays notices to viewers.
//!
//! Opening or closing a view is synchronous and returns the events the view
//! change causes (for instance, the close of whatever the viewer had open and
//! the open of the new handle). The graphic feeds those back through
//! [`Graphic::handle_event`](crate::graphic::Graphic::handle_event), which is
//! where the noise of an internal re-open gets swallowed.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::thread::{self, ThreadId};

use uuid::Uuid;

use crate::constants::{NOTICE_NOTHING_HERE, NOTICE_NO_NEXT_PAGE};
use crate::graphic::{GridHandle, HandleId, InteractionEvent, ViewerId};

/// Subscription key of a graphic. Stable for the graphic's whole life,
/// unlike its grid handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something a viewer should be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The next-page control was used on the last page
    NoNextPage,
    /// The filler of an empty page was clicked
    NothingHere,
    Message(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoNextPage => f.write_str(NOTICE_NO_NEXT_PAGE),
            Self::NothingHere => f.write_str(NOTICE_NOTHING_HERE),
            Self::Message(message) => f.write_str(message),
        }
    }
}

/// Platform services a graphic relies on.
pub trait Host {
    /// Whether the caller runs on the host's primary execution context.
    fn is_primary_thread(&self) -> bool;

    /// Show `handle` to `viewer`, replacing whatever they were viewing.
    fn open_view(&self, viewer: ViewerId, handle: &GridHandle) -> Vec<InteractionEvent>;

    /// Close whatever `viewer` is viewing.
    fn close_view(&self, viewer: ViewerId) -> Vec<InteractionEvent>;

    /// The handle `viewer` currently sees, if any.
    fn viewing(&self, viewer: ViewerId) -> Option<HandleId>;

    fn subscribe(&self, listener: ListenerId);

    fn unsubscribe(&self, listener: ListenerId);

    fn notify(&self, viewer: ViewerId, notice: Notice);
}

/// Remembers the thread it was created on.
#[derive(Debug, Clone, Copy)]
pub struct ThreadAffinity {
    primary: ThreadId,
}

impl ThreadAffinity {
    /// Bind to the calling thread
    #[must_use]
    pub fn current() -> Self {
        Self {
            primary: thread::current().id(),
        }
    }

    #[must_use]
    pub fn is_primary(&self) -> bool {
        thread::current().id() == self.primary
    }
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

/// Call recorded by [`MemoryHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Opened { viewer: ViewerId, handle: HandleId },
    Closed { viewer: ViewerId, handle: HandleId },
    Subscribed(ListenerId),
    Unsubscribed(ListenerId),
    Notified { viewer: ViewerId, notice: Notice },
}

/// In-memory host. Tracks which handle each viewer sees, records every call
/// and emits the open/close events a real adapter would.
#[derive(Debug, Default)]
pub struct MemoryHost {
    affinity: ThreadAffinity,
    primary_override: Cell<Option<bool>>,
    views: RefCell<HashMap<ViewerId, HandleId>>,
    subscriptions: RefCell<HashSet<ListenerId>>,
    calls: RefCell<Vec<HostCall>>,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the primary-context check; `None` goes back to the thread check.
    pub fn set_primary_thread(&self, primary: Option<bool>) {
        self.primary_override.set(primary);
    }

    #[must_use]
    pub fn is_subscribed(&self, listener: ListenerId) -> bool {
        self.subscriptions.borrow().contains(&listener)
    }

    #[must_use]
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls matching `predicate`
    pub fn count(&self, predicate: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    /// Notices sent to `viewer`, oldest first
    #[must_use]
    pub fn notices(&self, viewer: ViewerId) -> Vec<Notice> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::Notified { viewer: to, notice } if *to == viewer => Some(notice.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: HostCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Host for MemoryHost {
    fn is_primary_thread(&self) -> bool {
        self.primary_override
            .get()
            .unwrap_or_else(|| self.affinity.is_primary())
    }

    fn open_view(&self, viewer: ViewerId, handle: &GridHandle) -> Vec<InteractionEvent> {
        let mut events = Vec::new();
        let previous = self.views.borrow_mut().insert(viewer, handle.id());
        if let Some(previous) = previous {
            self.record(HostCall::Closed {
                viewer,
                handle: previous,
            });
            events.push(InteractionEvent::close(previous, viewer));
        }

        self.record(HostCall::Opened {
            viewer,
            handle: handle.id(),
        });
        events.push(InteractionEvent::open(handle.id(), viewer));
        events
    }

    fn close_view(&self, viewer: ViewerId) -> Vec<InteractionEvent> {
        let previous = self.views.borrow_mut().remove(&viewer);
        match previous {
            Some(handle) => {
                self.record(HostCall::Closed { viewer, handle });
                vec![InteractionEvent::close(handle, viewer)]
            }
            None => Vec::new(),
        }
    }

    fn viewing(&self, viewer: ViewerId) -> Option<HandleId> {
        self.views.borrow().get(&viewer).copied()
    }

    fn subscribe(&self, listener: ListenerId) {
        self.subscriptions.borrow_mut().insert(listener);
        self.record(HostCall::Subscribed(listener));
    }

    fn unsubscribe(&self, listener: ListenerId) {
        self.subscriptions.borrow_mut().remove(&listener);
        self.record(HostCall::Unsubscribed(listener));
    }

    fn notify(&self, viewer: ViewerId, notice: Notice) {
        self.record(HostCall::Notified { viewer, notice });
    }
}
