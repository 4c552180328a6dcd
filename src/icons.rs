//! Icon service for managing different icon themes
//!
//! This module provides the glyphs used for navigation controls, the filler
//! of empty pages and empty slots, supporting emoji, Unicode and ASCII themes.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

/// Page navigation glyphs
#[derive(Debug, Clone)]
pub struct NavigationIcons {
    pub previous: &'static str,
    pub next: &'static str,
}

/// Glyphs for slots without real content
#[derive(Debug, Clone)]
pub struct PlaceholderIcons {
    /// Inert filler shown on empty pages
    pub blank: &'static str,
    pub empty_slot: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub navigation: NavigationIcons,
    pub placeholder: PlaceholderIcons,
    /// Glyphs cycled through by generated elements
    pub elements: &'static [&'static str],
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            navigation: NavigationIcons {
                previous: "⬅️",
                next: "➡️",
            },
            placeholder: PlaceholderIcons {
                blank: "🕸️",
                empty_slot: "  ",
            },
            elements: &["📦", "🧱", "🪵", "💎", "🧪", "📜", "🗝️", "🪙"],
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            navigation: NavigationIcons {
                previous: "◀",
                next: "▶",
            },
            placeholder: PlaceholderIcons {
                blank: "⌗",
                empty_slot: "·",
            },
            elements: &["■", "▲", "●", "◆", "★", "♣", "♠", "♥"],
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            navigation: NavigationIcons {
                previous: "<",
                next: ">",
            },
            placeholder: PlaceholderIcons {
                blank: "#",
                empty_slot: ".",
            },
            elements: &["[]", "()", "{}", "<>", "**", "++", "%%", "&&"],
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn previous_page(&self) -> &'static str {
        self.icons().navigation.previous
    }

    #[must_use]
    pub fn next_page(&self) -> &'static str {
        self.icons().navigation.next
    }

    #[must_use]
    pub fn blank(&self) -> &'static str {
        self.icons().placeholder.blank
    }

    #[must_use]
    pub fn empty_slot(&self) -> &'static str {
        self.icons().placeholder.empty_slot
    }

    /// Element glyph for the `index`-th generated element
    #[must_use]
    pub fn element(&self, index: usize) -> &'static str {
        let elements = self.icons().elements;
        elements[index % elements.len()]
    }
}
