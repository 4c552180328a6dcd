//! Event handling and key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::app::App;
use super::core::{EventType, UiAction};
use super::layout::LayoutManager;

/// Decode a key press
#[must_use]
pub fn key_action(key: KeyEvent, app: &App) -> Option<UiAction> {
    // Error dialog swallows everything but its dismissal
    if app.error_message.is_some() {
        return matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')).then_some(UiAction::Dismiss);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiAction::Quit);
    }

    let action = match key.code {
        KeyCode::Left | KeyCode::Char('h') => UiAction::MoveCursor { columns: -1, rows: 0 },
        KeyCode::Right | KeyCode::Char('l') => UiAction::MoveCursor { columns: 1, rows: 0 },
        KeyCode::Up | KeyCode::Char('k') => UiAction::MoveCursor { columns: 0, rows: -1 },
        KeyCode::Down | KeyCode::Char('j') => UiAction::MoveCursor { columns: 0, rows: 1 },
        KeyCode::Enter | KeyCode::Char(' ') => UiAction::Click,
        KeyCode::Char('+') => UiAction::Grow,
        KeyCode::Char('-') => UiAction::Shrink,
        KeyCode::Char('r') => UiAction::Retitle,
        KeyCode::Char('t') => UiAction::CycleTheme,
        KeyCode::Char('a') => UiAction::AddElement,
        KeyCode::Char('d') => UiAction::DeleteElement,
        KeyCode::Char('b') => UiAction::ToggleBlank,
        KeyCode::Char('G') => UiAction::ToggleLogs,
        KeyCode::Esc => UiAction::Dismiss,
        KeyCode::Char('q') => UiAction::Quit,
        _ => return None,
    };
    Some(action)
}

/// Decode a mouse event. A left click selects and clicks the slot under it.
#[must_use]
pub fn mouse_actions(mouse: MouseEvent, grid: Rect, size: usize) -> Vec<UiAction> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Vec::new();
    }

    match LayoutManager::slot_at(grid, size, mouse.column, mouse.row) {
        Some(slot) => vec![UiAction::SelectSlot(slot), UiAction::Click],
        None => Vec::new(),
    }
}

/// Apply one decoded action to the app
pub fn apply(action: UiAction, app: &mut App) {
    app.status = None;
    let result = match action {
        UiAction::MoveCursor { columns, rows } => {
            app.move_cursor(columns, rows);
            Ok(())
        }
        UiAction::SelectSlot(slot) => {
            app.set_cursor(slot);
            Ok(())
        }
        UiAction::Click => {
            app.click();
            Ok(())
        }
        UiAction::Grow => app.grow(),
        UiAction::Shrink => app.shrink(),
        UiAction::Retitle => app.retitle(),
        UiAction::CycleTheme => app.cycle_icon_theme(),
        UiAction::AddElement => app.add_element(),
        UiAction::DeleteElement => app.delete_element(),
        UiAction::ToggleBlank => app.toggle_blank(),
        UiAction::ToggleLogs => {
            app.toggle_logs();
            Ok(())
        }
        UiAction::Dismiss => {
            app.error_message = None;
            app.show_logs = false;
            Ok(())
        }
        UiAction::Quit => {
            app.quit();
            Ok(())
        }
    };
    app.report(result);
    app.drain_notices();
}

/// Handle all user input events. Returns whether anything was applied.
pub fn handle_events(event: EventType, app: &mut App, grid: Rect) -> bool {
    let actions = match event {
        EventType::Key(key) => key_action(key, app).into_iter().collect(),
        EventType::Mouse(mouse) => mouse_actions(mouse, grid, app.graphic.size()),
        EventType::Resize(_, _) | EventType::Tick | EventType::Other => Vec::new(),
    };

    let handled = !actions.is_empty();
    for action in actions {
        apply(action, app);
    }
    handled
}
