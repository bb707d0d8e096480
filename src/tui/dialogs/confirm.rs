//! Remove-confirmation dialog
//!
//! Shows the transaction about to be removed and waits for yes/no.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::format_transaction_line;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the confirmation for removing the given ledger position
pub fn render(frame: &mut Frame, app: &App, position: usize) {
    let area = centered_rect_fixed(58, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let detail = app
        .session
        .ledger()
        .get(position)
        .map(|txn| format_transaction_line(txn, app.session.currency_symbol()))
        .unwrap_or_else(|| format!("position {}", position));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Remove this transaction?",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(detail, Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
