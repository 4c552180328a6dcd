//! Paginated graphics.
//!
//! A [`PagedGraphic`] lays an ordered list of [`Element`]s out over a set of
//! content cells (its *bounds*), one page at a time, with a previous and a
//! next control on two dedicated slots. Every structural setter ends with
//! [`PagedGraphic::sync`], which rebuilds the visible page from scratch:
//!
//! 1. clamp the page to `0..available_pages`
//! 2. drop every pagination-owned action (navigation and element cells)
//! 3. render both navigation controls
//! 4. render the element window of the current page, or the filler of a
//!    [`BlankItem`] when that window is empty
//!
//! Bounds are kept as given. A shrink does not remove the ones that no longer
//! fit; they are only filtered out when read through
//! [`PagedGraphic::available_bounds`], so they come back after a later grow.

pub mod blank;
pub mod element;

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use crate::config::Config;
use crate::constants::{NEXT_PAGE_HINT, NEXT_PAGE_NAME, PREVIOUS_PAGE_HINT, PREVIOUS_PAGE_NAME};
use crate::error::{GraphicError, Result};
use crate::graphic::container::resize;
use crate::graphic::{Action, ActionKind, Container, EventKinds, Graphic, Icon, Rows};
use crate::host::{Host, Notice};
use crate::icons::{IconService, IconTheme};

pub use blank::BlankItem;
pub use element::Element;

/// What a navigation supplier gets to look at when it is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Zero-based current page
    pub page: usize,
    pub available_pages: usize,
    pub theme: IconTheme,
}

impl PageInfo {
    /// "The actual page is 2/3."
    #[must_use]
    pub fn describe(&self) -> String {
        format!("The actual page is {}/{}.", self.page + 1, self.available_pages)
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.available_pages
    }
}

/// Produces the icon of a navigation control on every sync. `None` leaves the
/// control's slot empty.
pub type IconSupplier = dyn Fn(PageInfo) -> Option<Icon>;

/// Default supplier of the previous-page control.
#[must_use]
pub fn previous_page_icon(info: PageInfo) -> Option<Icon> {
    let glyph = IconService::new(info.theme).previous_page();
    Some(Icon::new(glyph).name(PREVIOUS_PAGE_NAME).lore([PREVIOUS_PAGE_HINT.to_string(), info.describe()]))
}

/// Default supplier of the next-page control.
#[must_use]
pub fn next_page_icon(info: PageInfo) -> Option<Icon> {
    let glyph = IconService::new(info.theme).next_page();
    Some(Icon::new(glyph).name(NEXT_PAGE_NAME).lore([NEXT_PAGE_HINT.to_string(), info.describe()]))
}

/// The filler currently written into the grid.
#[derive(Debug)]
struct BlankCache {
    slot: usize,
    icon: Icon,
    actions: Vec<Action<PagedGraphic>>,
}

impl BlankCache {
    fn matches(&self, item: &BlankItem) -> bool {
        self.slot == item.slot() && &self.icon == item.icon()
    }
}

/// A graphic showing a list of elements one page at a time.
pub struct PagedGraphic {
    container: Container<PagedGraphic>,
    bounds: Vec<usize>,
    page: usize,
    elements: Vec<Element>,
    previous_item: Rc<IconSupplier>,
    next_item: Rc<IconSupplier>,
    previous_slot: usize,
    next_slot: usize,
    theme: IconTheme,
    blank_item: Option<BlankItem>,
    blank_cache: Option<BlankCache>,
}

impl PagedGraphic {
    /// Create an empty paged graphic. Nothing is rendered until the first
    /// setter or an explicit [`sync`](Self::sync).
    #[must_use]
    pub fn new(host: Rc<dyn Host>, title: Option<String>, rows: Rows, previous_slot: usize, next_slot: usize) -> Self {
        Self {
            container: Container::new(host, title, rows),
            bounds: Vec::new(),
            page: 0,
            elements: Vec::new(),
            previous_item: Rc::new(previous_page_icon),
            next_item: Rc::new(next_page_icon),
            previous_slot,
            next_slot,
            theme: IconTheme::default(),
            blank_item: None,
            blank_cache: None,
        }
    }

    pub fn with_size(
        host: Rc<dyn Host>,
        title: Option<String>,
        size: usize,
        previous_slot: usize,
        next_slot: usize,
    ) -> Result<Self> {
        Ok(Self::new(host, title, Rows::from_slots(size)?, previous_slot, next_slot))
    }

    /// Build and render a graphic from the `[graphic]`, `[pagination]` and
    /// `[display]` sections.
    pub fn from_config(host: Rc<dyn Host>, config: &Config) -> Result<Self> {
        let pagination = &config.pagination;
        let mut graphic = Self::with_size(
            host,
            config.graphic.title.clone(),
            config.graphic.size,
            pagination.previous_slot,
            pagination.next_slot,
        )?;

        graphic.theme = config.display.icon_theme;
        graphic.blank_item = pagination
            .blank_slot
            .map(|slot| BlankItem::themed(slot, graphic.theme))
            .transpose()?;
        graphic.set_bounds(pagination.bounds.iter().copied())?;
        Ok(graphic)
    }

    // Elements

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Batch access. Call [`sync`](Self::sync) afterwards.
    pub fn elements_mut(&mut self) -> &mut Vec<Element> {
        &mut self.elements
    }

    pub fn add_element(&mut self, element: Element) -> Result<()> {
        self.container.ensure_open()?;
        self.elements.push(element);
        self.sync()
    }

    pub fn add_elements(&mut self, elements: impl IntoIterator<Item = Element>) -> Result<()> {
        self.container.ensure_open()?;
        self.elements.extend(elements);
        self.sync()
    }

    /// Remove the element at `index`, `None` if there is none.
    pub fn remove_element(&mut self, index: usize) -> Result<Option<Element>> {
        self.container.ensure_open()?;
        if index >= self.elements.len() {
            return Ok(None);
        }

        let removed = self.elements.remove(index);
        self.sync()?;
        Ok(Some(removed))
    }

    pub fn clear_elements(&mut self) -> Result<()> {
        self.set_elements(Vec::new())
    }

    pub fn set_elements(&mut self, elements: Vec<Element>) -> Result<()> {
        self.container.ensure_open()?;
        self.elements = elements;
        self.sync()
    }

    /// Elements shown on `page`: skips `page * available_bounds().len()`
    /// elements and takes at most one per available cell.
    #[must_use]
    pub fn elements_on_page(&self, page: usize) -> &[Element] {
        let per_page = self.available_bounds().len();
        let start = page.saturating_mul(per_page).min(self.elements.len());
        let end = start.saturating_add(per_page).min(self.elements.len());
        &self.elements[start..end]
    }

    // Pages

    /// `ceil(elements / available cells)`, at least 1. Always 1 without
    /// available cells.
    #[must_use]
    pub fn available_pages(&self) -> usize {
        let per_page = self.available_bounds().len();
        if per_page == 0 {
            return 1;
        }
        self.elements.len().div_ceil(per_page).max(1)
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Move to `page`. Out of range pages are clamped by the sync.
    pub fn set_page(&mut self, page: usize) -> Result<()> {
        self.container.ensure_open()?;
        if self.page == page {
            return Ok(());
        }

        self.page = page;
        self.sync()
    }

    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            page: self.page,
            available_pages: self.available_pages(),
            theme: self.theme,
        }
    }

    // Bounds

    /// Every configured content cell, including the ones beyond the current size
    #[must_use]
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    /// Content cells that fit the current size, in order
    #[must_use]
    pub fn available_bounds(&self) -> Vec<usize> {
        available_bounds(&self.bounds, self.container.size())
    }

    /// Replace the content cells. Every slot must fit the current size.
    pub fn set_bounds(&mut self, slots: impl IntoIterator<Item = usize>) -> Result<()> {
        self.container.ensure_open()?;

        let size = self.container.size();
        let slots: Vec<usize> = slots.into_iter().collect();
        if let Some(&slot) = slots.iter().find(|&&slot| slot >= size) {
            return Err(GraphicError::SlotOutOfRange { slot, size });
        }

        self.bounds = slots;
        self.sync()
    }

    /// Use the first `count` slots as content cells.
    pub fn set_bounds_count(&mut self, count: usize) -> Result<()> {
        self.set_bounds(0..count)
    }

    /// Use `start..end` as content cells.
    pub fn set_bounds_range(&mut self, start: usize, end: usize) -> Result<()> {
        if start > end {
            return Err(GraphicError::InvalidRange { start, end });
        }
        self.set_bounds(start..end)
    }

    /// Absolute element index shown at `slot` on the current page, if `slot`
    /// is an available content cell.
    #[must_use]
    pub fn index_of(&self, slot: usize) -> Option<usize> {
        let bounds = self.available_bounds();
        bounds
            .iter()
            .position(|&bound| bound == slot)
            .map(|position| self.page * bounds.len() + position)
    }

    /// Element shown at `slot`, if any
    #[must_use]
    pub fn element_at(&self, slot: usize) -> Option<&Element> {
        self.index_of(slot).and_then(|index| self.elements.get(index))
    }

    // Navigation

    pub fn set_previous_item<F>(&mut self, supplier: F) -> Result<()>
    where
        F: Fn(PageInfo) -> Option<Icon> + 'static,
    {
        self.container.ensure_open()?;
        self.previous_item = Rc::new(supplier);
        self.sync()
    }

    pub fn set_next_item<F>(&mut self, supplier: F) -> Result<()>
    where
        F: Fn(PageInfo) -> Option<Icon> + 'static,
    {
        self.container.ensure_open()?;
        self.next_item = Rc::new(supplier);
        self.sync()
    }

    #[must_use]
    pub fn previous_slot(&self) -> usize {
        self.previous_slot
    }

    #[must_use]
    pub fn next_slot(&self) -> usize {
        self.next_slot
    }

    /// Move the previous-page control to `slot`.
    pub fn set_previous_slot(&mut self, slot: usize) -> Result<()> {
        self.container.ensure_open()?;
        self.release_navigation(self.previous_slot, ActionKind::PreviousPage)?;
        self.previous_slot = slot;
        self.sync()
    }

    /// Move the next-page control to `slot`.
    pub fn set_next_slot(&mut self, slot: usize) -> Result<()> {
        self.container.ensure_open()?;
        self.release_navigation(self.next_slot, ActionKind::NextPage)?;
        self.next_slot = slot;
        self.sync()
    }

    fn release_navigation(&mut self, slot: usize, kind: ActionKind) -> Result<()> {
        self.container.registry_mut().retain_in(Some(slot), |action| action.kind() != kind);
        if slot < self.container.size() {
            self.container.clear(&[slot])?;
        }
        Ok(())
    }

    // Theme and filler

    #[must_use]
    pub fn icon_theme(&self) -> IconTheme {
        self.theme
    }

    /// Theme handed to the navigation suppliers.
    pub fn set_icon_theme(&mut self, theme: IconTheme) -> Result<()> {
        self.container.ensure_open()?;
        self.theme = theme;
        self.sync()
    }

    #[must_use]
    pub fn blank_item(&self) -> Option<&BlankItem> {
        self.blank_item.as_ref()
    }

    /// Install or remove the filler of empty pages.
    pub fn set_blank_item(&mut self, blank_item: Option<BlankItem>) -> Result<()> {
        self.container.ensure_open()?;
        self.blank_item = blank_item;
        self.sync()
    }

    /// Slot the filler currently occupies
    #[must_use]
    pub fn blank_slot(&self) -> Option<usize> {
        self.blank_cache.as_ref().map(|cache| cache.slot)
    }

    // Rendering

    /// Rebuild the visible page. Idempotent.
    pub fn sync(&mut self) -> Result<()> {
        self.container.ensure_open()?;

        let pages = self.available_pages();
        self.page = self.page.min(pages - 1);

        let size = self.container.size();
        for slot in 0..size {
            self.container.registry_mut().retain_in(Some(slot), |action| !action.kind().is_paged());
        }

        self.render_navigation()?;

        let bounds = self.available_bounds();
        let window: Vec<Element> = self.elements_on_page(self.page).to_vec();

        if window.is_empty() {
            self.render_blank(&bounds)?;
        } else {
            self.remove_blank()?;
            for (position, &slot) in bounds.iter().enumerate() {
                match window.get(position) {
                    Some(element) => {
                        let action = element_action(element);
                        self.container.set_item(Some(element.icon().clone()), Some(action), &[slot])?;
                    }
                    None => self.container.clear(&[slot])?,
                }
            }
        }

        log::debug!(
            "Synced page {}/{} ({} elements, {} cells)",
            self.page + 1,
            pages,
            self.elements.len(),
            bounds.len()
        );
        Ok(())
    }

    fn render_navigation(&mut self) -> Result<()> {
        let info = self.page_info();
        let size = self.container.size();

        let controls = [
            (self.previous_slot, Rc::clone(&self.previous_item), previous_page_action()),
            (self.next_slot, Rc::clone(&self.next_item), next_page_action()),
        ];
        for (slot, supplier, action) in controls {
            if slot >= size {
                continue;
            }

            match supplier(info) {
                Some(icon) => self.container.set_item(Some(icon), Some(action), &[slot])?,
                None if self.blank_slot() == Some(slot) => {}
                None => self.container.clear(&[slot])?,
            }
        }
        Ok(())
    }

    fn render_blank(&mut self, bounds: &[usize]) -> Result<()> {
        let stale = match (&self.blank_cache, &self.blank_item) {
            (Some(cache), Some(item)) => !cache.matches(item),
            (Some(_), None) => true,
            (None, _) => false,
        };
        if stale {
            self.remove_blank()?;
        }

        let filler_slot = self
            .blank_item
            .as_ref()
            .map(BlankItem::slot)
            .filter(|&slot| slot < self.container.size());

        let emptied: Vec<usize> = bounds.iter().copied().filter(|&slot| Some(slot) != filler_slot).collect();
        self.container.clear(&emptied)?;

        let Some(item) = self.blank_item.clone() else {
            return Ok(());
        };
        if filler_slot.is_none() {
            log::debug!("Filler slot {} does not fit {} slots, not shown", item.slot(), self.container.size());
            return Ok(());
        }
        if self.blank_cache.is_some() {
            return Ok(());
        }

        self.container.set_item(Some(item.icon().clone()), None, &[item.slot()])?;
        self.container.actions_mut(Some(item.slot()))?.extend(item.actions().iter().cloned());
        self.blank_cache = Some(BlankCache {
            slot: item.slot(),
            icon: item.icon().clone(),
            actions: item.actions().to_vec(),
        });
        Ok(())
    }

    fn remove_blank(&mut self) -> Result<()> {
        let Some(cache) = self.blank_cache.take() else {
            return Ok(());
        };

        self.container.registry_mut().entry(Some(cache.slot)).remove_all(&cache.actions);
        if cache.slot < self.container.size() {
            self.container.clear(&[cache.slot])?;
        }
        Ok(())
    }
}

fn available_bounds(bounds: &[usize], size: usize) -> Vec<usize> {
    bounds.iter().copied().filter(|&slot| slot < size).collect()
}

fn previous_page_action() -> Action<PagedGraphic> {
    Action::with_kind(ActionKind::PreviousPage, EventKinds::ANY_CLICK, |graphic: &mut PagedGraphic, event| {
        event.cancel();
        graphic.set_page(graphic.page().saturating_sub(1))?;
        Ok(())
    })
}

fn next_page_action() -> Action<PagedGraphic> {
    Action::with_kind(ActionKind::NextPage, EventKinds::ANY_CLICK, |graphic: &mut PagedGraphic, event| {
        event.cancel();
        if graphic.page_info().has_next() {
            graphic.set_page(graphic.page() + 1)?;
        } else {
            graphic.host().notify(event.viewer(), Notice::NoNextPage);
        }
        Ok(())
    })
}

/// Cancels the click and forwards it to every action of `element` accepting
/// it. All of them run; the first failure is returned, later ones are logged.
fn element_action(element: &Element) -> Action<PagedGraphic> {
    let actions = element.actions().to_vec();
    Action::with_kind(ActionKind::Element, EventKinds::ANY_CLICK, move |graphic: &mut PagedGraphic, event| {
        event.cancel();

        let mut failure = None;
        for action in &actions {
            if let Err(error) = action.call(graphic, event) {
                if failure.is_none() {
                    failure = Some(error);
                } else {
                    log::error!("Element action {} failed: {error:#}", action.id());
                }
            }
        }
        failure.map_or(Ok(()), Err)
    })
}

impl Graphic for PagedGraphic {
    fn container(&self) -> &Container<Self> {
        &self.container
    }

    fn container_mut(&mut self) -> &mut Container<Self> {
        &mut self.container
    }

    /// Resize, then drop the element actions of the cells that were
    /// available before, and every pagination action past the new size,
    /// and re-render.
    fn set_size(&mut self, size: usize) -> Result<()> {
        let rows = Rows::from_slots(size)?;
        let old_bounds = self.available_bounds();
        let old_size = self.container.size();

        if resize(self, rows)? {
            let registry = self.container.registry_mut();
            for slot in old_bounds {
                registry.retain_in(Some(slot), |action| action.kind() != ActionKind::Element);
            }
            for slot in size..old_size {
                registry.retain_in(Some(slot), |action| !action.kind().is_paged());
            }
            if self.blank_cache.as_ref().is_some_and(|cache| cache.slot >= size) {
                self.remove_blank()?;
            }
            self.sync()?;
        }
        Ok(())
    }
}

impl Deref for PagedGraphic {
    type Target = Container<PagedGraphic>;

    fn deref(&self) -> &Self::Target {
        &self.container
    }
}

impl DerefMut for PagedGraphic {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.container
    }
}

impl PartialEq for PagedGraphic {
    fn eq(&self, other: &Self) -> bool {
        self.container.handle() == other.container.handle()
    }
}

impl Eq for PagedGraphic {}

impl fmt::Debug for PagedGraphic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedGraphic")
            .field("container", &self.container)
            .field("bounds", &self.bounds)
            .field("page", &self.page)
            .field("elements", &self.elements.len())
            .field("previous_slot", &self.previous_slot)
            .field("next_slot", &self.next_slot)
            .field("theme", &self.theme)
            .field("blank_item", &self.blank_item)
            .field("blank_cache", &self.blank_cache)
            .finish_non_exhaustive()
    }
}
