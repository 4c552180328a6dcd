//! Actions bound to slots and the registry that stores them.
//!
//! An [`Action`] pairs a set of accepted [`EventKinds`] with a callback. The
//! [`ActionRegistry`] maps a slot (or `None` for the global scope) to an
//! insertion-ordered [`ActionSet`]. Dispatch works on an owned snapshot taken
//! with [`ActionRegistry::snapshot`], so callbacks are free to add or remove
//! actions on the very registry that is being dispatched; those changes are
//! visible from the next event on.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use super::event::{EventKind, EventKinds, InteractionEvent};

/// Callback invoked with the owning graphic and the event being dispatched.
pub type ActionCallback<G> = dyn Fn(&mut G, &mut InteractionEvent) -> anyhow::Result<()>;

/// Identity of one action binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(Uuid);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What installed an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Installed by user code
    Custom,
    CancelClick,
    CancelDrag,
    PreviousPage,
    NextPage,
    /// Fans a click out to the actions of the element shown in the slot
    Element,
    /// Belongs to the filler shown on empty pages
    Filler,
}

impl ActionKind {
    /// Actions rebuilt by every pagination sync
    #[must_use]
    pub fn is_paged(self) -> bool {
        matches!(self, Self::PreviousPage | Self::NextPage | Self::Element)
    }
}

/// An event-kind filter plus a callback.
///
/// Cloning is cheap and keeps the identity: clones compare equal and are
/// deduplicated by [`ActionSet`].
pub struct Action<G> {
    id: ActionId,
    kind: ActionKind,
    accepts: EventKinds,
    callback: Rc<ActionCallback<G>>,
}

impl<G> Action<G> {
    /// Create a custom action accepting every kind in `accepts`.
    pub fn new<F>(accepts: EventKinds, callback: F) -> Self
    where
        F: Fn(&mut G, &mut InteractionEvent) -> anyhow::Result<()> + 'static,
    {
        Self::with_kind(ActionKind::Custom, accepts, callback)
    }

    /// Action for clicks, creative edits included.
    pub fn on_click<F>(callback: F) -> Self
    where
        F: Fn(&mut G, &mut InteractionEvent) -> anyhow::Result<()> + 'static,
    {
        Self::new(EventKinds::ANY_CLICK, callback)
    }

    pub fn on_drag<F>(callback: F) -> Self
    where
        F: Fn(&mut G, &mut InteractionEvent) -> anyhow::Result<()> + 'static,
    {
        Self::new(EventKinds::DRAG, callback)
    }

    pub fn on_open<F>(callback: F) -> Self
    where
        F: Fn(&mut G, &mut InteractionEvent) -> anyhow::Result<()> + 'static,
    {
        Self::new(EventKinds::OPEN, callback)
    }

    pub fn on_close<F>(callback: F) -> Self
    where
        F: Fn(&mut G, &mut InteractionEvent) -> anyhow::Result<()> + 'static,
    {
        Self::new(EventKinds::CLOSE, callback)
    }

    pub(crate) fn with_kind<F>(kind: ActionKind, accepts: EventKinds, callback: F) -> Self
    where
        F: Fn(&mut G, &mut InteractionEvent) -> anyhow::Result<()> + 'static,
    {
        Self {
            id: ActionId(Uuid::new_v4()),
            kind,
            accepts,
            callback: Rc::new(callback),
        }
    }

    pub(crate) fn cancel_clicks() -> Self {
        Self::with_kind(ActionKind::CancelClick, EventKinds::ANY_CLICK, |_, event| {
            event.cancel();
            Ok(())
        })
    }

    pub(crate) fn cancel_drags() -> Self {
        Self::with_kind(ActionKind::CancelDrag, EventKinds::DRAG, |_, event| {
            event.cancel();
            Ok(())
        })
    }

    #[must_use]
    pub fn id(&self) -> ActionId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    #[must_use]
    pub fn accepted(&self) -> EventKinds {
        self.accepts
    }

    #[must_use]
    pub fn accepts(&self, kind: EventKind) -> bool {
        self.accepts.accepts(kind)
    }

    /// Run the callback if the action accepts the event's kind.
    pub fn call(&self, target: &mut G, event: &mut InteractionEvent) -> anyhow::Result<()> {
        if !self.accepts(event.kind()) {
            return Ok(());
        }
        (self.callback)(target, event)
    }
}

impl<G> Clone for Action<G> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            accepts: self.accepts,
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<G> PartialEq for Action<G> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<G> Eq for Action<G> {}

impl<G> fmt::Debug for Action<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("accepts", &self.accepts)
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered set of actions, unique by [`ActionId`].
pub struct ActionSet<G> {
    actions: Vec<Action<G>>,
}

impl<G> ActionSet<G> {
    #[must_use]
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    /// Append an action. Returns `false` if it was already present.
    pub fn add(&mut self, action: Action<G>) -> bool {
        if self.contains(action.id()) {
            return false;
        }
        self.actions.push(action);
        true
    }

    /// Remove the action with `id`. Returns whether it was present.
    pub fn remove(&mut self, id: ActionId) -> bool {
        let before = self.actions.len();
        self.actions.retain(|action| action.id() != id);
        before != self.actions.len()
    }

    /// Remove every action in `actions`
    pub fn remove_all(&mut self, actions: &[Action<G>]) {
        self.actions.retain(|action| !actions.contains(action));
    }

    pub fn retain(&mut self, keep: impl FnMut(&Action<G>) -> bool) {
        self.actions.retain(keep);
    }

    #[must_use]
    pub fn contains(&self, id: ActionId) -> bool {
        self.actions.iter().any(|action| action.id() == id)
    }

    #[must_use]
    pub fn contains_kind(&self, kind: ActionKind) -> bool {
        self.actions.iter().any(|action| action.kind() == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action<G>> {
        self.actions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}

impl<G> Default for ActionSet<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> fmt::Debug for ActionSet<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.actions.iter()).finish()
    }
}

impl<G> Extend<Action<G>> for ActionSet<G> {
    fn extend<I: IntoIterator<Item = Action<G>>>(&mut self, iter: I) {
        for action in iter {
            self.add(action);
        }
    }
}

/// Slot-scoped action storage. `None` is the global scope, which receives
/// every event regardless of its slot.
pub struct ActionRegistry<G> {
    sets: BTreeMap<Option<usize>, ActionSet<G>>,
}

impl<G> ActionRegistry<G> {
    #[must_use]
    pub fn new() -> Self {
        Self { sets: BTreeMap::new() }
    }

    /// The set bound to `slot`, if one was ever created
    #[must_use]
    pub fn get(&self, slot: Option<usize>) -> Option<&ActionSet<G>> {
        self.sets.get(&slot)
    }

    /// The live set bound to `slot`, created on demand.
    pub fn entry(&mut self, slot: Option<usize>) -> &mut ActionSet<G> {
        self.sets.entry(slot).or_default()
    }

    /// Keep only the actions of `slot` matching `keep`. No set is created.
    pub fn retain_in(&mut self, slot: Option<usize>, keep: impl FnMut(&Action<G>) -> bool) {
        if let Some(set) = self.sets.get_mut(&slot) {
            set.retain(keep);
        }
    }

    /// Scopes that currently hold a set, global first
    pub fn scopes(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.sets.keys().copied()
    }

    /// Total number of actions across every scope
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.values().map(ActionSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy out every action that applies to an event at `slot`, global
    /// actions first, each scope in insertion order.
    #[must_use]
    pub fn snapshot(&self, slot: Option<usize>) -> Vec<(Option<usize>, Action<G>)> {
        self.sets
            .iter()
            .filter(|(scope, _)| scope.is_none() || **scope == slot)
            .flat_map(|(scope, set)| set.iter().map(move |action| (*scope, action.clone())))
            .collect()
    }
}

impl<G> Default for ActionRegistry<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> fmt::Debug for ActionRegistry<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.sets.iter()).finish()
    }
}
