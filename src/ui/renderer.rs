//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use super::app::App;
use super::components::{DetailLine, ErrorDialog, GridView, LogsDialog, StatusBar};
use super::core::EventHandler;
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::logger::Logger;

/// Run the main TUI application
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    // Create application state before touching the terminal so setup errors stay readable
    let mut app = App::new(&config, logger)?;

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    app.logger.flush();
    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    let mut events = EventHandler::new();
    let mut grid = Rect::default();

    loop {
        terminal.draw(|f| grid = render_ui(f, app))?;

        let event = events.next_event().await?;
        handle_events(event, app, grid);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function. Returns the inner grid area.
fn render_ui(f: &mut ratatui::Frame, app: &App) -> Rect {
    let chunks = LayoutManager::main_layout(f.area());

    let grid = GridView::render(f, chunks[0], app);
    DetailLine::render(f, chunks[1], app);
    StatusBar::render(f, chunks[2], app);

    if app.show_logs {
        LogsDialog::render(f, app);
    }

    // Error messages go on top of everything
    if app.error_message.is_some() {
        ErrorDialog::render(f, app);
    }

    grid
}
