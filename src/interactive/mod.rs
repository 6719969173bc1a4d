//! Interactive terminal dashboard for the supporter survey
//!
//! Five pages of question cards with horizontal bar charts, expandable
//! breakdowns, keyboard focus and scroll affordances.

pub mod app;
pub mod bar_chart;
pub mod breakdown;
pub mod document;
pub mod events;
pub mod messages;
pub mod overview_page;
pub mod question_card;
pub mod scroll;
pub mod stat_card;
pub mod ui;
pub mod utils;

pub use app::App;
pub use events::EventHandler;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::error::SurveyError;
use crate::route::Route;

/// Run the interactive dashboard, opening on `route`
pub fn run_interactive(config: Config, route: Route) -> Result<()> {
    tracing::info!(page = %route, "starting dashboard");

    // Setup terminal
    enable_raw_mode().map_err(|e| SurveyError::Terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, route);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "dashboard exited with error");
    }
    res
}

/// Main application loop
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let event_handler = EventHandler::new();

    loop {
        let (width, height) = ui::body_viewport(terminal.size()?);
        app.set_viewport(width, height);
        app.prune_messages();

        terminal.draw(|f| ui::draw(f, app))?;

        if let Some(event) = event_handler.next()? {
            if !app.handle_event(event) {
                break;
            }
        }
    }

    tracing::info!("dashboard closed");
    Ok(())
}
