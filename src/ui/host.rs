//! Terminal implementation of the host boundary.
//!
//! One local viewer looks at one grid at a time. The renderer reads the slots
//! straight from the graphic's current handle; this host only tracks which
//! handle is on screen, whether a listener wants input, and the notices that
//! still have to be shown.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};

use crate::graphic::{GridHandle, HandleId, InteractionEvent, ViewerId};
use crate::host::{Host, ListenerId, Notice, ThreadAffinity};

pub struct TerminalHost {
    affinity: ThreadAffinity,
    viewer: ViewerId,
    showing: Cell<Option<HandleId>>,
    listeners: RefCell<HashSet<ListenerId>>,
    notices: RefCell<VecDeque<Notice>>,
}

impl TerminalHost {
    pub fn new(viewer: ViewerId) -> Self {
        Self {
            affinity: ThreadAffinity::current(),
            viewer,
            showing: Cell::new(None),
            listeners: RefCell::new(HashSet::new()),
            notices: RefCell::new(VecDeque::new()),
        }
    }

    pub fn viewer(&self) -> ViewerId {
        self.viewer
    }

    /// Handle currently on screen
    pub fn showing(&self) -> Option<HandleId> {
        self.showing.get()
    }

    /// Input is only translated into events while something is on screen
    /// and a listener is subscribed.
    pub fn is_delivering(&self) -> bool {
        self.showing.get().is_some() && !self.listeners.borrow().is_empty()
    }

    /// Pop every pending notice, oldest first
    pub fn take_notices(&self) -> Vec<Notice> {
        self.notices.borrow_mut().drain(..).collect()
    }
}

impl Host for TerminalHost {
    fn is_primary_thread(&self) -> bool {
        self.affinity.is_primary()
    }

    fn open_view(&self, viewer: ViewerId, handle: &GridHandle) -> Vec<InteractionEvent> {
        if viewer != self.viewer {
            log::warn!("Unknown viewer {viewer}, ignoring open");
            return Vec::new();
        }

        let mut events = Vec::new();
        if let Some(previous) = self.showing.replace(Some(handle.id())) {
            events.push(InteractionEvent::close(previous, viewer));
        }
        events.push(InteractionEvent::open(handle.id(), viewer));
        events
    }

    fn close_view(&self, viewer: ViewerId) -> Vec<InteractionEvent> {
        if viewer != self.viewer {
            return Vec::new();
        }

        match self.showing.take() {
            Some(handle) => vec![InteractionEvent::close(handle, viewer)],
            None => Vec::new(),
        }
    }

    fn viewing(&self, viewer: ViewerId) -> Option<HandleId> {
        if viewer == self.viewer {
            self.showing.get()
        } else {
            None
        }
    }

    fn subscribe(&self, listener: ListenerId) {
        log::debug!("Listener {listener} subscribed");
        self.listeners.borrow_mut().insert(listener);
    }

    fn unsubscribe(&self, listener: ListenerId) {
        log::debug!("Listener {listener} unsubscribed");
        self.listeners.borrow_mut().remove(&listener);
    }

    fn notify(&self, viewer: ViewerId, notice: Notice) {
        if viewer == self.viewer {
            self.notices.borrow_mut().push_back(notice);
        }
    }
}
