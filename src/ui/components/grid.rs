//! Slot grid component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

/// Renders the handle the viewer is looking at, nine cells per row
pub struct GridView;

impl GridView {
    /// Render the grid and return its inner area, used for mouse hit tests
    pub fn render(f: &mut Frame, area: Rect, app: &App) -> Rect {
        let handle = app.graphic.handle();
        let outer = LayoutManager::grid_rect(area, handle.rows().count());

        let page = app.graphic.page_info();
        let title = format!(
            " {} · page {}/{} ",
            handle.title().unwrap_or("untitled"),
            page.page + 1,
            page.available_pages
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center);
        let inner = block.inner(outer);
        f.render_widget(block, outer);

        let empty_glyph = app.icons.empty_slot();
        for (slot, icon) in handle.slots().iter().enumerate() {
            let cell = LayoutManager::cell_rect(inner, slot);
            if cell.is_empty() {
                continue;
            }

            let text = match icon {
                Some(icon) => icon.glyph().to_string(),
                None if app.show_slot_numbers => slot.to_string(),
                None => empty_glyph.to_string(),
            };

            let mut style = Style::default().fg(if icon.is_some() { Color::White } else { Color::DarkGray });
            let mut border = Style::default().fg(Color::DarkGray);
            if slot == app.cursor {
                style = style.add_modifier(Modifier::BOLD);
                border = Style::default().fg(Color::Yellow);
            }

            let widget = Paragraph::new(Line::from(Span::styled(text, style)))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(border));
            f.render_widget(widget, cell);
        }

        inner
    }
}

/// Name and lore of the icon under the cursor
pub struct DetailLine;

impl DetailLine {
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let lines: Vec<Line> = match app.graphic.item(app.cursor) {
            Some(icon) => {
                let name = icon.display_name().unwrap_or(icon.glyph());
                let mut lines = vec![Line::from(Span::styled(
                    name.to_string(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ))];
                if !icon.lore_lines().is_empty() {
                    lines.push(Line::from(Span::styled(
                        icon.lore_lines().join(" "),
                        Style::default().fg(Color::Gray),
                    )));
                }
                lines
            }
            None => vec![Line::from(Span::styled(
                format!("Slot {} is empty", app.cursor),
                Style::default().fg(Color::DarkGray),
            ))],
        };

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
