//! Constants used throughout the crate
//!
//! This module centralizes grid geometry, default texts and other constant
//! values to improve maintainability and consistency.

// Grid geometry
/// Slots per grid row
pub const GRID_COLUMNS: usize = 9;
/// Slots of the largest grid
pub const MAX_SLOTS: usize = 54;

// Notices
pub const NOTICE_NO_NEXT_PAGE: &str = "✘ There are no next pages.";
pub const NOTICE_NOTHING_HERE: &str = "✘ There's nothing here to explore!";

// Navigation icons
pub const PREVIOUS_PAGE_NAME: &str = "Previous Page";
pub const PREVIOUS_PAGE_HINT: &str = "Click here to navigate to the previous page.";
pub const NEXT_PAGE_NAME: &str = "Next Page";
pub const NEXT_PAGE_HINT: &str = "Click here to navigate to the next page.";

// Filler icon
pub const BLANK_NAME: &str = "Empty!";
pub const BLANK_LORE: &str = "There's nothing here to explore.";

// Files
pub const APP_DIR_NAME: &str = "slotgrid";
pub const CONFIG_FILE_NAME: &str = "slotgrid.toml";
pub const LOG_FILE_NAME: &str = "slotgrid.log";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Demo
pub const DEMO_ELEMENT_COUNT: usize = 32;
pub const DEMO_TITLES: [&str; 3] = ["Crate Browser", "Storage", "Archive"];
pub const DEMO_HELP: &str =
    "←↑↓→/hjkl move · Enter click · +/- resize · r retitle · t theme · a add · d delete · b filler · q quit";
pub const DIALOG_TITLE_LOGS: &str = "Logs";
