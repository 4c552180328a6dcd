use super::PagedGraphic;
use crate::graphic::{Action, Icon};

/// One paginated content item: an icon and its own actions.
///
/// Element actions never live in the registry. The cell an element is shown
/// in gets a single fan-out action that cancels the click and forwards it to
/// every element action accepting the event.
#[derive(Debug, Clone)]
pub struct Element {
    icon: Icon,
    actions: Vec<Action<PagedGraphic>>,
}

impl Element {
    #[must_use]
    pub fn new(icon: Icon) -> Self {
        Self {
            icon,
            actions: Vec::new(),
        }
    }

    pub fn with_actions(icon: Icon, actions: impl IntoIterator<Item = Action<PagedGraphic>>) -> Self {
        Self {
            icon,
            actions: actions.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: Action<PagedGraphic>) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    #[must_use]
    pub fn actions(&self) -> &[Action<PagedGraphic>] {
        &self.actions
    }

    /// Changes show up on the next sync
    pub fn actions_mut(&mut self) -> &mut Vec<Action<PagedGraphic>> {
        &mut self.actions
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.icon == other.icon && self.actions == other.actions
    }
}
