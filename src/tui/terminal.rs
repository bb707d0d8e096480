//! Terminal setup and teardown
//!
//! Initializes and restores the terminal state, with a panic hook that
//! restores it before the panic report prints.

use anyhow::Result;
use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::services::Session;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before any panic report prints
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard over an open session until the user quits
pub fn run_tui(session: &mut Session) -> Result<()> {
    let mut terminal = init_terminal()?;

    let today = Local::now().date_naive();
    let mut app = App::new(session, today);

    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &app);
        })?;

        let event = events.next()?;
        handle_event(&mut app, event)?;

        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;

    Ok(())
}
