use super::PagedGraphic;
use crate::constants::{BLANK_LORE, BLANK_NAME, MAX_SLOTS};
use crate::error::{GraphicError, Result};
use crate::graphic::{Action, ActionKind, EventKinds, Icon};
use crate::host::Notice;
use crate::icons::{IconService, IconTheme};

/// Filler shown at `slot` while the current page has no elements.
///
/// Comes with one action that cancels clicks on the filler and tells the
/// viewer there is nothing to explore.
#[derive(Debug, Clone)]
pub struct BlankItem {
    slot: usize,
    icon: Icon,
    actions: Vec<Action<PagedGraphic>>,
}

impl BlankItem {
    /// Filler with the default inert icon of the ASCII theme.
    pub fn new(slot: usize) -> Result<Self> {
        Self::themed(slot, IconTheme::default())
    }

    pub fn themed(slot: usize, theme: IconTheme) -> Result<Self> {
        Self::with_icon(slot, Self::default_icon(theme))
    }

    pub fn with_icon(slot: usize, icon: Icon) -> Result<Self> {
        if slot >= MAX_SLOTS {
            return Err(GraphicError::SlotOutOfRange { slot, size: MAX_SLOTS });
        }

        let nothing_here = Action::with_kind(ActionKind::Filler, EventKinds::ANY_CLICK, |graphic: &mut PagedGraphic, event| {
            event.cancel();
            graphic.host().notify(event.viewer(), Notice::NothingHere);
            Ok(())
        });

        Ok(Self {
            slot,
            icon,
            actions: vec![nothing_here],
        })
    }

    #[must_use]
    pub fn default_icon(theme: IconTheme) -> Icon {
        Icon::new(IconService::new(theme).blank()).name(BLANK_NAME).lore([BLANK_LORE])
    }

    #[must_use]
    pub fn with_action(mut self, action: Action<PagedGraphic>) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn slot(&self) -> usize {
        self.slot
    }

    #[must_use]
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    #[must_use]
    pub fn actions(&self) -> &[Action<PagedGraphic>] {
        &self.actions
    }
}

impl PartialEq for BlankItem {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot && self.icon == other.icon
    }
}
