//! Application state for the TUI
//!
//! The App struct holds everything rendering and key handling need: the
//! open session, the anchor date, view and dialog state, and the row
//! selection for the overview table.

use chrono::NaiveDate;

use crate::models::Transaction;
use crate::services::Session;

use super::dialogs::transaction::TransactionFormState;

/// Which view fills the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Overview,
    Charts,
}

impl ActiveView {
    /// The other view (for Tab cycling)
    pub fn toggled(self) -> Self {
        match self {
            ActiveView::Overview => ActiveView::Charts,
            ActiveView::Charts => ActiveView::Overview,
        }
    }
}

/// Modal dialog on top of the active view, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    /// Holds the ledger position awaiting confirmation
    ConfirmRemove(usize),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Open ledger session; all reads and mutations go through it
    pub session: &'a mut Session,

    /// Date the dashboard is anchored to, fixed at startup
    pub today: NaiveDate,

    /// Whether the main loop should exit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Index into the current month's row list
    pub selected_row: usize,

    /// Transient message shown in the status bar
    pub status_message: Option<String>,

    /// State for the add-transaction dialog
    pub transaction_form: TransactionFormState,
}

impl<'a> App<'a> {
    pub fn new(session: &'a mut Session, today: NaiveDate) -> Self {
        Self {
            session,
            today,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            selected_row: 0,
            status_message: None,
            transaction_form: TransactionFormState::new(today),
        }
    }

    /// The current month's transactions with their ledger positions
    pub fn visible_rows(&self) -> Vec<(usize, &Transaction)> {
        self.session.current_month(self.today)
    }

    /// Signal the main loop to exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        self.status_message = None;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Set a status message shown until the next dialog opens
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Ledger position of the highlighted row, if any row is visible
    pub fn selected_position(&self) -> Option<usize> {
        let rows = self.visible_rows();
        rows.get(self.selected_row.min(rows.len().saturating_sub(1)))
            .map(|(position, _)| *position)
    }

    /// Move the highlight to the row holding the given ledger position
    pub fn select_position(&mut self, position: usize) {
        let row = self
            .visible_rows()
            .iter()
            .position(|(pos, _)| *pos == position);
        if let Some(row) = row {
            self.selected_row = row;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn move_down(&mut self, max: usize) {
        if self.selected_row + 1 < max {
            self.selected_row += 1;
        }
    }

    /// Keep the highlight inside the row list after the ledger changes
    pub fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
    }
}
