//! View composition
//!
//! Renders the tab line, the active view, the status bar and any open dialog.

pub mod charts;
pub mod overview;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the whole frame
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Overview => overview::render(frame, app, layout.main),
        ActiveView::Charts => charts::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::ConfirmRemove(position) => dialogs::confirm::render(frame, app, position),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let tab = |label: &str, active: bool| {
        if active {
            Span::styled(
                label.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label.to_string(), Style::default().fg(Color::DarkGray))
        }
    };

    let line = Line::from(vec![
        Span::styled(
            " saldo ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        tab("[1] Overview", app.active_view == ActiveView::Overview),
        Span::raw("  "),
        tab("[2] Charts", app.active_view == ActiveView::Charts),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
