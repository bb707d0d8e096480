//! Status bar
//!
//! Ledger file, current-month balance, transient messages and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.session.summary(app.today);
    let symbol = app.session.currency_symbol();

    let balance_color = if summary.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let file_name = app
        .session
        .ledger_path()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| app.session.ledger_path().display().to_string());

    let mut spans = vec![
        Span::styled(format!(" {} ", file_name), Style::default().fg(Color::Cyan)),
        Span::raw("│ "),
        Span::styled("Balance: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.balance.format_with_symbol(symbol),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints, right-aligned
    let hints = " a:Add  d:Remove  r:Reload  ?:Help  q:Quit ";
    let left_len: usize = spans.iter().map(|span| span.content.chars().count()).sum();
    let padding = (area.width as usize).saturating_sub(left_len + hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
