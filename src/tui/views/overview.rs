//! Overview view
//!
//! Summary cards for the current month above its transaction table.
//! The table shows ledger positions so removals match the CLI numbering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Kind, Month};
use crate::tui::app::App;
use crate::tui::layout::OverviewLayout;

/// Render the overview
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = OverviewLayout::new(area);

    render_summary_cards(frame, app, layout.summary);
    render_transaction_table(frame, app, layout.transactions);
}

fn render_summary_cards(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.session.summary(app.today);
    let symbol = app.session.currency_symbol();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let balance_color = if summary.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    render_card(
        frame,
        columns[0],
        "Income",
        &summary.income.format_with_symbol(symbol),
        Color::Green,
    );
    render_card(
        frame,
        columns[1],
        "Expense",
        &summary.expense.format_with_symbol(symbol),
        Color::Red,
    );
    render_card(
        frame,
        columns[2],
        "Balance",
        &summary.balance.format_with_symbol(symbol),
        balance_color,
    );
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, amount: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new(amount.to_string())
        .block(block)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    frame.render_widget(text, area);
}

fn render_transaction_table(frame: &mut Frame, app: &App, area: Rect) {
    let month = Month::from_date(app.today);

    let block = Block::default()
        .title(format!(" Transactions for {} ", month))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let visible = app.visible_rows();

    if visible.is_empty() {
        let text = Paragraph::new("No transactions this month. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.session.currency_symbol();

    let widths = [
        Constraint::Length(4),  // Position
        Constraint::Length(10), // Date
        Constraint::Min(16),    // Description
        Constraint::Length(8),  // Kind
        Constraint::Length(19), // Subcategory
        Constraint::Length(14), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Date"),
        Cell::from("Description"),
        Cell::from("Kind"),
        Cell::from("Subcategory"),
        Cell::from("Amount"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .height(1);

    let rows: Vec<Row> = visible
        .iter()
        .map(|(position, txn)| {
            let amount_style = match txn.kind {
                Kind::Income => Style::default().fg(Color::Green),
                Kind::Expense => Style::default().fg(Color::Red),
            };

            Row::new(vec![
                Cell::from(position.to_string()),
                Cell::from(txn.date.format("%Y-%m-%d").to_string()),
                Cell::from(txn.description.clone()),
                Cell::from(txn.kind.to_string()),
                Cell::from(txn.subcategory.to_string()),
                Cell::from(txn.amount.format_with_symbol(symbol)).style(amount_style),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_row.min(visible.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
