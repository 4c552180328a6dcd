//! Slot grid container with viewers, lifecycle and action dispatch.
//!
//! ## Lifecycle
//!
//! `created → open → [resize | retitle]* → closed`. Opening is lazy about its
//! host subscription: the container subscribes on the first open with at
//! least one viewer and unsubscribes when its last viewer leaves or when it is
//! closed. [`Graphic::close`] is terminal and idempotent; every mutating call
//! on a closed container fails with [`GraphicError::Closed`].
//!
//! ## Resize and retitle
//!
//! Both allocate a new [`GridHandle`], copy the overlapping slots, re-open the
//! new handle to every viewer with `listening` turned off (so the open/close
//! events this causes are swallowed) and finally swap the handle in. They must
//! run on the host's primary execution context.
//!
//! ## Dispatch
//!
//! [`Graphic::dispatch`] snapshots the applicable actions before invoking any
//! of them. A failing action never stops the others: the event is cancelled
//! when its kind allows it and the failure is logged and reported.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use super::actions::{Action, ActionKind, ActionRegistry, ActionSet};
use super::event::{EventKind, InteractionEvent, ViewerId};
use super::handle::GridHandle;
use super::icon::Icon;
use super::rows::Rows;
use crate::error::{GraphicError, Result};
use crate::host::{Host, ListenerId};

/// Grid storage, viewers, lifecycle flags and actions of one graphic.
///
/// `G` is the graphic type the actions are invoked with, see [`Graphic`].
pub struct Container<G> {
    host: Rc<dyn Host>,
    listener: ListenerId,
    handle: GridHandle,
    actions: ActionRegistry<G>,
    viewers: BTreeSet<ViewerId>,
    closed: bool,
    listening: bool,
    listener_active: bool,
}

impl<G> Container<G> {
    #[must_use]
    pub fn new(host: Rc<dyn Host>, title: Option<String>, rows: Rows) -> Self {
        Self {
            host,
            listener: ListenerId::new(),
            handle: GridHandle::new(title, rows),
            actions: ActionRegistry::new(),
            viewers: BTreeSet::new(),
            closed: false,
            listening: true,
            listener_active: false,
        }
    }

    /// Create a container from a raw slot count.
    pub fn with_size(host: Rc<dyn Host>, title: Option<String>, size: usize) -> Result<Self> {
        Ok(Self::new(host, title, Rows::from_slots(size)?))
    }

    #[must_use]
    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }

    #[must_use]
    pub fn listener_id(&self) -> ListenerId {
        self.listener
    }

    /// The current grid handle
    #[must_use]
    pub fn handle(&self) -> &GridHandle {
        &self.handle
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.handle.title()
    }

    #[must_use]
    pub fn rows(&self) -> Rows {
        self.handle.rows()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.handle.size()
    }

    pub fn viewers(&self) -> impl Iterator<Item = ViewerId> + '_ {
        self.viewers.iter().copied()
    }

    #[must_use]
    pub fn is_viewing(&self, viewer: ViewerId) -> bool {
        self.viewers.contains(&viewer)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// `false` only while a resize or retitle re-opens the new handle
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Whether the container is currently subscribed to its host
    #[must_use]
    pub fn is_listener_active(&self) -> bool {
        self.listener_active
    }

    /// Content of `slot`, `None` when empty
    #[must_use]
    pub fn item(&self, slot: usize) -> Option<&Icon> {
        self.handle.get(slot)
    }

    /// Write `icon` into every slot of `slots`, binding `action` to each of them.
    ///
    /// Passing `None` as the icon clears the slots. All slots are checked
    /// before anything is written.
    pub fn set_item(&mut self, icon: Option<Icon>, action: Option<Action<G>>, slots: &[usize]) -> Result<()> {
        self.ensure_open()?;

        let size = self.size();
        if let Some(&slot) = slots.iter().find(|&&slot| slot >= size) {
            return Err(GraphicError::SlotOutOfRange { slot, size });
        }

        for &slot in slots {
            self.handle.set(slot, icon.clone())?;
            if let Some(action) = &action {
                self.actions.entry(Some(slot)).add(action.clone());
            }
        }
        Ok(())
    }

    pub fn set_icon(&mut self, icon: Icon, slots: &[usize]) -> Result<()> {
        self.set_item(Some(icon), None, slots)
    }

    /// Empty the given slots. Their actions are left untouched.
    pub fn clear(&mut self, slots: &[usize]) -> Result<()> {
        self.set_item(None, None, slots)
    }

    #[must_use]
    pub fn actions(&self) -> &ActionRegistry<G> {
        &self.actions
    }

    /// The live action set of `slot` (`None` for global), created on demand.
    pub fn actions_mut(&mut self, slot: Option<usize>) -> Result<&mut ActionSet<G>> {
        self.ensure_open()?;
        Ok(self.actions.entry(slot))
    }

    /// Cancel every click on this container. Installed at most once.
    pub fn cancel_on_click(&mut self) -> Result<()> {
        let actions = self.actions_mut(None)?;
        if !actions.contains_kind(ActionKind::CancelClick) {
            actions.add(Action::cancel_clicks());
        }
        Ok(())
    }

    /// Cancel every drag on this container. Installed at most once.
    pub fn cancel_on_drag(&mut self) -> Result<()> {
        let actions = self.actions_mut(None)?;
        if !actions.contains_kind(ActionKind::CancelDrag) {
            actions.add(Action::cancel_drags());
        }
        Ok(())
    }

    pub(crate) fn registry_mut(&mut self) -> &mut ActionRegistry<G> {
        &mut self.actions
    }

    pub(crate) fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(GraphicError::Closed);
        }
        Ok(())
    }

    fn subscribe_if_needed(&mut self) {
        if !self.closed && !self.listener_active {
            self.host.subscribe(self.listener);
            self.listener_active = true;
        }
    }

    fn unsubscribe(&mut self) {
        if self.listener_active {
            self.host.unsubscribe(self.listener);
            self.listener_active = false;
        }
    }

    fn viewer_left(&mut self, viewer: ViewerId) {
        if self.viewers.remove(&viewer) && self.viewers.is_empty() {
            self.unsubscribe();
        }
    }

    /// Whether the host still shows this container's handle to `viewer`
    fn shows(&self, viewer: ViewerId) -> bool {
        self.host.viewing(viewer) == Some(self.handle.id())
    }

    /// Drop viewers that moved to another view without this container
    /// seeing their close event.
    fn release_departed(&mut self) {
        let departed: Vec<ViewerId> = self.viewers().filter(|&viewer| !self.shows(viewer)).collect();
        for viewer in departed {
            log::debug!("Viewer {viewer} no longer sees handle {}, releasing", self.handle.id());
            self.viewer_left(viewer);
        }
    }
}

impl<G> fmt::Debug for Container<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("listener", &self.listener)
            .field("handle", &self.handle)
            .field("actions", &self.actions)
            .field("viewers", &self.viewers)
            .field("closed", &self.closed)
            .field("listening", &self.listening)
            .field("listener_active", &self.listener_active)
            .finish_non_exhaustive()
    }
}

/// Outcome of dispatching one event.
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Actions whose callback ran
    pub invoked: usize,
    /// One [`GraphicError::ActionFailed`] per failing action
    pub failures: Vec<GraphicError>,
}

impl DispatchReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A graphic owns a [`Container`] whose actions are invoked with the graphic
/// itself, so an action can reach every part of it, including the pagination
/// state of a [`PagedGraphic`](crate::paged::PagedGraphic).
pub trait Graphic: Sized {
    fn container(&self) -> &Container<Self>;

    fn container_mut(&mut self) -> &mut Container<Self>;

    /// Show the current handle to every viewer in `viewers`.
    fn open(&mut self, viewers: &[ViewerId]) -> Result<()> {
        let container = self.container_mut();
        container.ensure_open()?;
        if !viewers.is_empty() {
            container.subscribe_if_needed();
        }

        let host = Rc::clone(&container.host);
        for &viewer in viewers {
            self.container_mut().viewers.insert(viewer);
            let events = host.open_view(viewer, self.container().handle());
            for mut event in events {
                self.handle_event(&mut event);
            }
        }
        Ok(())
    }

    /// Close the view of the given viewers only. The container stays usable.
    fn close_viewers(&mut self, viewers: &[ViewerId]) {
        self.container_mut().release_departed();
        let host = Rc::clone(&self.container().host);
        for &viewer in viewers {
            if !self.container().is_viewing(viewer) {
                log::debug!("Viewer {viewer} is not viewing this graphic, nothing to close");
                continue;
            }

            let events = host.close_view(viewer);
            for mut event in events {
                self.handle_event(&mut event);
            }
            self.container_mut().viewer_left(viewer);
        }
    }

    /// Close every view and unsubscribe. Terminal; later calls do nothing.
    fn close(&mut self) {
        if self.container().closed {
            return;
        }
        self.container_mut().closed = true;

        let viewers: Vec<ViewerId> = self.container().viewers().collect();
        self.close_viewers(&viewers);
        self.container_mut().unsubscribe();
        log::debug!("Closed graphic {}", self.container().listener);
    }

    fn set_title(&mut self, title: Option<String>) -> Result<()> {
        let container = self.container();
        container.ensure_open()?;
        if container.title() == title.as_deref() {
            return Ok(());
        }

        let rows = container.rows();
        swap_handle(self, title, rows, "set_title")
    }

    /// Resize to `size` slots, keeping the content of the overlapping slots.
    fn set_size(&mut self, size: usize) -> Result<()> {
        let rows = Rows::from_slots(size)?;
        resize(self, rows).map(|_| ())
    }

    fn set_rows(&mut self, rows: Rows) -> Result<()> {
        self.set_size(rows.slots())
    }

    /// Entry point for host adapters.
    ///
    /// Ignores events aimed at another handle, and open/close events while a
    /// resize or retitle is in flight. Tracks viewers and the lazy host
    /// subscription, then dispatches.
    fn handle_event(&mut self, event: &mut InteractionEvent) -> DispatchReport {
        let container = self.container_mut();
        if event.handle() != container.handle.id() {
            return DispatchReport::default();
        }

        match event.kind() {
            EventKind::Open | EventKind::Close if !container.listening => {
                return DispatchReport::default();
            }
            EventKind::Open => {
                container.viewers.insert(event.viewer());
                container.subscribe_if_needed();
            }
            EventKind::Close => container.viewer_left(event.viewer()),
            _ => {}
        }

        self.dispatch(event)
    }

    /// Invoke every action bound to the event's slot or to the global scope
    /// that accepts the event's kind.
    fn dispatch(&mut self, event: &mut InteractionEvent) -> DispatchReport {
        let snapshot = self.container().actions.snapshot(event.slot());
        let mut report = DispatchReport::default();

        for (slot, action) in snapshot {
            if !action.accepts(event.kind()) {
                continue;
            }

            report.invoked += 1;
            if let Err(source) = action.call(self, event) {
                let cancelled = event.is_cancellable();
                if cancelled {
                    event.cancel();
                }

                let detail = format!("{source:#}");
                let error = GraphicError::ActionFailed {
                    action: action.id(),
                    slot,
                    kind: event.kind(),
                    cancelled,
                    source: source.into(),
                };
                log::error!("{error}: {detail}");
                report.failures.push(error);
            }
        }

        report
    }
}

/// Resize `graphic` to `rows`. Returns whether the size changed.
pub(crate) fn resize<G: Graphic>(graphic: &mut G, rows: Rows) -> Result<bool> {
    let container = graphic.container();
    container.ensure_open()?;
    if container.rows() == rows {
        return Ok(false);
    }

    let title = container.title().map(str::to_owned);
    swap_handle(graphic, title, rows, "set_size")?;
    Ok(true)
}

fn swap_handle<G: Graphic>(graphic: &mut G, title: Option<String>, rows: Rows, operation: &'static str) -> Result<()> {
    let container = graphic.container();
    if !container.host.is_primary_thread() {
        return Err(GraphicError::ThreadAffinity { operation });
    }

    graphic.container_mut().release_departed();
    let container = graphic.container();
    let old_size = container.size();
    let newly = container.handle.migrate(title, rows);
    let host = Rc::clone(&container.host);
    let viewers: Vec<ViewerId> = container.viewers().collect();

    graphic.container_mut().listening = false;
    for viewer in viewers {
        let events = host.open_view(viewer, &newly);
        for mut event in events {
            graphic.handle_event(&mut event);
        }
    }

    let container = graphic.container_mut();
    container.listening = true;
    container.handle = newly;
    log::debug!(
        "{operation}: swapped to handle {} ({} -> {} slots)",
        container.handle.id(),
        old_size,
        container.size()
    );
    Ok(())
}
