//! Dialog components

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use crate::constants::DIALOG_TITLE_LOGS;

/// Error dialog component
pub struct ErrorDialog;

impl ErrorDialog {
    /// Render the error dialog
    pub fn render(f: &mut Frame, app: &App) {
        if let Some(error_msg) = &app.error_message {
            let error_area = LayoutManager::centered_rect(60, 20, f.area());
            f.render_widget(Clear, error_area);
            let error_paragraph = Paragraph::new(error_msg.as_str())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Error")
                        .title_alignment(Alignment::Center),
                )
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(error_paragraph, error_area);
        }
    }
}

/// In-memory log viewer, newest entries first
pub struct LogsDialog;

impl LogsDialog {
    pub fn render(f: &mut Frame, app: &App) {
        let logs_area = LayoutManager::centered_rect(80, 70, f.area());
        f.render_widget(Clear, logs_area);

        let visible = logs_area.height.saturating_sub(2) as usize;
        let lines: Vec<String> = app.logger.get_logs().into_iter().take(visible).collect();
        let content = if lines.is_empty() {
            "No log entries yet".to_string()
        } else {
            lines.join("\n")
        };

        let logs_paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(DIALOG_TITLE_LOGS)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        f.render_widget(logs_paragraph, logs_area);
    }
}
