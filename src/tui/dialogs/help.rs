//! Help dialog
//!
//! Keyboard shortcut reference, closed by any key.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        section("Global"),
        Line::from(""),
        key_line("q", "Quit"),
        key_line("?", "Show this help"),
        key_line("1", "Overview"),
        key_line("2", "Charts"),
        key_line("Tab", "Next view"),
        key_line("a", "Add a transaction"),
        key_line("r", "Reload the ledger from disk"),
        Line::from(""),
        section("Overview"),
        Line::from(""),
        key_line("j/k", "Move selection down/up"),
        key_line("g/G", "Jump to first/last row"),
        key_line("d/Del", "Remove the selected transaction"),
        Line::from(""),
        section("Add form"),
        Line::from(""),
        key_line("Tab", "Next field"),
        key_line("Left/Right", "Move the cursor, or cycle a selector"),
        key_line("Enter", "Save"),
        key_line("Esc", "Cancel"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(
            description.to_string(),
            Style::default().fg(Color::White),
        ),
    ])
}
