/// A user request decoded from terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    // Navigation
    MoveCursor { columns: isize, rows: isize },
    SelectSlot(usize),

    // Grid operations
    Click,
    Grow,
    Shrink,
    Retitle,
    CycleTheme,

    // Elements
    AddElement,
    DeleteElement,
    ToggleBlank,

    // General
    ToggleLogs,
    Dismiss,
    Quit,
}
