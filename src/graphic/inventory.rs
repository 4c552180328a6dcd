//! The plain, non-paginated graphic.

use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use super::container::{Container, Graphic};
use super::rows::Rows;
use crate::error::Result;
use crate::host::Host;

/// A slot grid with actions and nothing else.
///
/// Two graphics are equal when they expose the same grid handle.
#[derive(Debug)]
pub struct InventoryGraphic {
    container: Container<InventoryGraphic>,
}

impl InventoryGraphic {
    #[must_use]
    pub fn new(host: Rc<dyn Host>, title: Option<String>, rows: Rows) -> Self {
        Self {
            container: Container::new(host, title, rows),
        }
    }

    pub fn with_size(host: Rc<dyn Host>, title: Option<String>, size: usize) -> Result<Self> {
        Ok(Self {
            container: Container::with_size(host, title, size)?,
        })
    }
}

impl Graphic for InventoryGraphic {
    fn container(&self) -> &Container<Self> {
        &self.container
    }

    fn container_mut(&mut self) -> &mut Container<Self> {
        &mut self.container
    }
}

impl Deref for InventoryGraphic {
    type Target = Container<InventoryGraphic>;

    fn deref(&self) -> &Self::Target {
        &self.container
    }
}

impl DerefMut for InventoryGraphic {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.container
    }
}

impl PartialEq for InventoryGraphic {
    fn eq(&self, other: &Self) -> bool {
        self.container.handle() == other.container.handle()
    }
}

impl Eq for InventoryGraphic {}
