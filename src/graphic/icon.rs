//! Icon payloads written into slots.
//!
//! The core never looks inside an [`Icon`]; a slot is either empty (`None`) or
//! holds one. Hosts decide how the glyph, name and lore are rendered.

use serde::{Deserialize, Serialize};

/// Renderable descriptor of a slot's content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Icon {
    glyph: String,
    name: Option<String>,
    lore: Vec<String>,
}

impl Icon {
    /// Create an icon showing `glyph` with no name or lore
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            name: None,
            lore: Vec::new(),
        }
    }

    /// Set the display name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the lore lines
    #[must_use]
    pub fn lore<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lore = lines.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn lore_lines(&self) -> &[String] {
        &self.lore
    }
}
