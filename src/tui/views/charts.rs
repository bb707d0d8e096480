//! Charts view
//!
//! Text bar charts: income and expense per month over the trailing year,
//! and the current month's spending split by subcategory.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::report::{format_bar, format_percentage};
use crate::tui::app::App;
use crate::tui::layout::ChartsLayout;

const BAR_WIDTH: usize = 16;

/// Render the charts
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = ChartsLayout::new(area);

    render_monthly(frame, app, layout.monthly);
    render_breakdown(frame, app, layout.breakdown);
}

fn render_monthly(frame: &mut Frame, app: &App, area: Rect) {
    let series = app.session.monthly(app.today);
    let symbol = app.session.currency_symbol();

    let block = Block::default()
        .title(" Last 12 months ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if series.is_empty() {
        let text = Paragraph::new("No transactions in the last 12 months.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Both bars share one scale so months compare visually
    let scale = series
        .iter()
        .flat_map(|totals| [totals.income.cents(), totals.expense.cents()])
        .max()
        .unwrap_or(0) as f64;

    let lines: Vec<Line> = series
        .iter()
        .map(|totals| {
            let income = totals.income.cents() as f64;
            let expense = totals.expense.cents() as f64;

            Line::from(vec![
                Span::styled(
                    format!("{}  ", totals.month.short_label()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format_bar(income, scale, BAR_WIDTH),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!(" {:>13}  ", totals.income.format_with_symbol(symbol)),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format_bar(expense, scale, BAR_WIDTH),
                    Style::default().fg(Color::Red),
                ),
                Span::styled(
                    format!(" {:>13}", totals.expense.format_with_symbol(symbol)),
                    Style::default().fg(Color::Red),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_breakdown(frame: &mut Frame, app: &App, area: Rect) {
    let entries = app.session.breakdown(app.today);
    let symbol = app.session.currency_symbol();

    let block = Block::default()
        .title(" Spending by subcategory (this month) ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if entries.is_empty() {
        let text = Paragraph::new("No expenses this month.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let scale = entries
        .iter()
        .map(|entry| entry.total.cents())
        .max()
        .unwrap_or(0) as f64;

    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{:<20}", entry.subcategory.to_string()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>13}", entry.total.format_with_symbol(symbol)),
                    Style::default().fg(Color::Red),
                ),
                Span::styled(
                    format!("  {:>7}  ", format_percentage(entry.percentage)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format_bar(entry.total.cents() as f64, scale, BAR_WIDTH),
                    Style::default().fg(Color::Red),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
