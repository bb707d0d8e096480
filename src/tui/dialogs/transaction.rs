//! Add-transaction dialog
//!
//! Modal form with text fields for date, description and amount, plus
//! arrow-cycled selectors for kind and subcategory. Submitting builds a
//! service input and hands it to the session.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Kind, Money, Subcategory};
use crate::services::AddTransactionInput;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Date,
    Description,
    Kind,
    Subcategory,
    Amount,
}

impl FormField {
    /// Next field for Tab navigation
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Description,
            Self::Description => Self::Kind,
            Self::Kind => Self::Subcategory,
            Self::Subcategory => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    /// Previous field for Shift+Tab navigation
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Description => Self::Date,
            Self::Kind => Self::Description,
            Self::Subcategory => Self::Kind,
            Self::Amount => Self::Subcategory,
        }
    }
}

/// State for the add-transaction form
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub focused: FormField,
    pub date: TextInput,
    pub description: TextInput,
    pub kind: Kind,
    /// Index into the subcategories allowed for the current kind
    pub subcategory_index: usize,
    pub amount: TextInput,
    pub error: Option<String>,
}

impl TransactionFormState {
    /// Fresh form prefilled with the given date
    pub fn new(today: NaiveDate) -> Self {
        Self {
            focused: FormField::Date,
            date: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            description: TextInput::new().placeholder("What was it for?"),
            kind: Kind::Expense,
            subcategory_index: 0,
            amount: TextInput::new().placeholder("1200.50"),
            error: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev();
    }

    /// The subcategory currently picked by the selector
    pub fn subcategory(&self) -> Subcategory {
        let allowed = Subcategory::allowed_for(self.kind);
        allowed[self.subcategory_index.min(allowed.len() - 1)]
    }

    /// Flip the kind and reset the subcategory to the first allowed one
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
        self.subcategory_index = 0;
    }

    /// Cycle the subcategory selector through the allowed set
    pub fn cycle_subcategory(&mut self, forward: bool) {
        let len = Subcategory::allowed_for(self.kind).len();
        self.subcategory_index = if forward {
            (self.subcategory_index + 1) % len
        } else {
            (self.subcategory_index + len - 1) % len
        };
    }

    /// The text input under focus, if the focused field is editable
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            FormField::Date => Some(&mut self.date),
            FormField::Description => Some(&mut self.description),
            FormField::Amount => Some(&mut self.amount),
            FormField::Kind | FormField::Subcategory => None,
        }
    }

    /// Check the form and build the service input
    pub fn build_input(&self) -> Result<AddTransactionInput, String> {
        let date = NaiveDate::parse_from_str(self.date.value().trim(), "%Y-%m-%d")
            .map_err(|_| "Invalid date. Use YYYY-MM-DD".to_string())?;

        let amount_str = self.amount.value().trim();
        if amount_str.is_empty() {
            return Err("Enter an amount".to_string());
        }
        let amount = Money::parse(amount_str).map_err(|e| format!("Invalid amount: {}", e))?;
        if !amount.is_positive() {
            return Err("Amount must be greater than zero".to_string());
        }

        Ok(AddTransactionInput {
            date,
            description: self.description.value().trim().to_string(),
            kind: self.kind,
            subcategory: self.subcategory(),
            amount,
        })
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Render the add-transaction dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(62, 13, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Description
            Constraint::Length(1), // Kind
            Constraint::Length(1), // Subcategory
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.transaction_form;

    render_text_field(
        frame,
        chunks[0],
        "Date",
        &form.date,
        form.focused == FormField::Date,
    );
    render_text_field(
        frame,
        chunks[1],
        "Description",
        &form.description,
        form.focused == FormField::Description,
    );
    render_selector_field(
        frame,
        chunks[2],
        "Kind",
        &form.kind.to_string(),
        form.focused == FormField::Kind,
    );
    render_selector_field(
        frame,
        chunks[3],
        "Subcategory",
        &form.subcategory().to_string(),
        form.focused == FormField::Subcategory,
    );
    render_text_field(
        frame,
        chunks[4],
        "Amount",
        &form.amount,
        form.focused == FormField::Amount,
    );

    if let Some(ref error) = form.error {
        let line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), chunks[6]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Shift+Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Prev  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[8]);
}

/// Render a label plus an editable value, with a block cursor when focused
fn render_text_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let mut spans = vec![Span::styled(format!("{:>12}: ", label), label_style(focused))];

    if focused {
        let chars: Vec<char> = input.value().chars().collect();
        let cursor = input.cursor().min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let at = chars.get(cursor).copied().unwrap_or(' ');
        let after: String = chars
            .get(cursor + 1..)
            .map(|rest| rest.iter().collect())
            .unwrap_or_default();

        let value_style = Style::default().fg(Color::White);
        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            at.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(after, value_style));
    } else if input.is_empty() {
        spans.push(Span::styled(
            input.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            input.value().to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a label plus a cycling choice, with arrows when focused
fn render_selector_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let mut spans = vec![Span::styled(format!("{:>12}: ", label), label_style(focused))];

    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            value.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

/// Handle a key while the dialog is open
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.transaction_form.prev_field();
            } else {
                app.transaction_form.next_field();
            }
        }
        KeyCode::BackTab => app.transaction_form.prev_field(),
        KeyCode::Down => app.transaction_form.next_field(),
        KeyCode::Up => app.transaction_form.prev_field(),

        KeyCode::Enter => submit(app),

        KeyCode::Left => {
            let form = &mut app.transaction_form;
            match form.focused {
                FormField::Kind => form.toggle_kind(),
                FormField::Subcategory => form.cycle_subcategory(false),
                _ => {
                    if let Some(input) = form.focused_input() {
                        input.move_left();
                    }
                }
            }
        }
        KeyCode::Right => {
            let form = &mut app.transaction_form;
            match form.focused {
                FormField::Kind => form.toggle_kind(),
                FormField::Subcategory => form.cycle_subcategory(true),
                _ => {
                    if let Some(input) = form.focused_input() {
                        input.move_right();
                    }
                }
            }
        }
        KeyCode::Home => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.move_end();
            }
        }

        KeyCode::Backspace => {
            let form = &mut app.transaction_form;
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            let form = &mut app.transaction_form;
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }

        KeyCode::Char(c) => {
            let form = &mut app.transaction_form;
            form.clear_error();
            match form.focused {
                FormField::Kind => {
                    if c == ' ' {
                        form.toggle_kind();
                    }
                }
                FormField::Subcategory => {
                    if c == ' ' {
                        form.cycle_subcategory(true);
                    }
                }
                _ => {
                    if let Some(input) = form.focused_input() {
                        input.insert(c);
                    }
                }
            }
        }

        _ => {}
    }
}

/// Validate, add through the session and close on success
fn submit(app: &mut App) {
    let input = match app.transaction_form.build_input() {
        Ok(input) => input,
        Err(message) => {
            app.transaction_form.set_error(message);
            return;
        }
    };

    match app.session.add_transaction(input) {
        Ok(position) => {
            app.close_dialog();
            app.select_position(position);
            app.set_status(format!("Added transaction at position {}", position));
        }
        Err(e) => app.transaction_form.set_error(e.to_string()),
    }
}
