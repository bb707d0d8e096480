//! Key routing for the TUI
//!
//! An open dialog takes keys first; otherwise keys go to the global
//! bindings and then the active view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }
    handle_view_key(app, key)
}

fn handle_view_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // View switching
        KeyCode::Char('1') => app.switch_view(ActiveView::Overview),
        KeyCode::Char('2') => app.switch_view(ActiveView::Charts),
        KeyCode::Tab => app.switch_view(app.active_view.toggled()),

        // Add works from both views
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.transaction_form = dialogs::transaction::TransactionFormState::new(app.today);
            app.open_dialog(ActiveDialog::AddTransaction);
        }

        KeyCode::Char('r') => match app.session.reload() {
            Ok(()) => {
                app.clamp_selection();
                app.set_status("Ledger reloaded");
            }
            Err(e) => app.set_status(format!("Reload failed: {}", e)),
        },

        _ => {
            if app.active_view == ActiveView::Overview {
                handle_overview_key(app, key);
            }
        }
    }

    Ok(())
}

fn handle_overview_key(app: &mut App, key: KeyEvent) {
    let row_count = app.visible_rows().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(row_count),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') => app.selected_row = 0,
        KeyCode::Char('G') => {
            if row_count > 0 {
                app.selected_row = row_count - 1;
            }
        }

        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(position) = app.selected_position() {
                app.open_dialog(ActiveDialog::ConfirmRemove(position));
            } else {
                app.set_status("No transaction selected");
            }
        }

        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        // Help closes on any key
        ActiveDialog::Help => app.close_dialog(),

        ActiveDialog::AddTransaction => dialogs::transaction::handle_key(app, key),

        ActiveDialog::ConfirmRemove(position) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                remove_transaction(app, position);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },

        ActiveDialog::None => {}
    }

    Ok(())
}

fn remove_transaction(app: &mut App, position: usize) {
    match app.session.remove_transaction(position) {
        Ok(removed) => {
            let line =
                crate::display::format_transaction_line(&removed, app.session.currency_symbol());
            app.clamp_selection();
            app.set_status(format!("Removed: {}", line));
        }
        Err(e) => app.set_status(format!("Remove failed: {}", e)),
    }
}
