//! The grid storage a container exposes to its viewers.

use std::fmt;

use uuid::Uuid;

use super::icon::Icon;
use super::rows::Rows;
use crate::error::{GraphicError, Result};

/// Identity of one grid handle. A resize or retitle produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(Uuid);

impl HandleId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed-size slot storage with a title.
///
/// Handles are never resized in place: [`GridHandle::migrate`] allocates a new
/// handle and copies the overlapping slots, the old one is dropped by its owner.
#[derive(Debug, Clone)]
pub struct GridHandle {
    id: HandleId,
    title: Option<String>,
    rows: Rows,
    slots: Vec<Option<Icon>>,
}

impl GridHandle {
    #[must_use]
    pub fn new(title: Option<String>, rows: Rows) -> Self {
        Self {
            id: HandleId::new(),
            title,
            rows,
            slots: vec![None; rows.slots()],
        }
    }

    #[must_use]
    pub fn id(&self) -> HandleId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn rows(&self) -> Rows {
        self.rows
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Content of a slot, `None` for empty or out-of-range slots
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Icon> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn set(&mut self, slot: usize, icon: Option<Icon>) -> Result<()> {
        let size = self.size();
        let cell = self
            .slots
            .get_mut(slot)
            .ok_or(GraphicError::SlotOutOfRange { slot, size })?;
        *cell = icon;
        Ok(())
    }

    /// All slots in index order
    #[must_use]
    pub fn slots(&self) -> &[Option<Icon>] {
        &self.slots
    }

    /// Allocate a new handle with the given title and size, carrying over
    /// slots `[0, min(old, new))`.
    #[must_use]
    pub fn migrate(&self, title: Option<String>, rows: Rows) -> Self {
        let mut newly = Self::new(title, rows);
        let overlap = self.size().min(newly.size());
        newly.slots[..overlap].clone_from_slice(&self.slots[..overlap]);
        newly
    }
}

impl PartialEq for GridHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GridHandle {}
