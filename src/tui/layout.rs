//! Layout definitions for the TUI
//!
//! Splits the frame into the tab line, the active view and the status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level regions of the frame
pub struct AppLayout {
    /// View tab line at the top
    pub tabs: Rect,
    /// Active view content
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from the available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab line
                Constraint::Min(3),    // Active view
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Regions of the overview: summary cards above the transaction table
pub struct OverviewLayout {
    pub summary: Rect,
    pub transactions: Rect,
}

impl OverviewLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Summary cards
                Constraint::Min(3),    // Transaction table
            ])
            .split(area);

        Self {
            summary: chunks[0],
            transactions: chunks[1],
        }
    }
}

/// Regions of the charts view: monthly history above the breakdown
pub struct ChartsLayout {
    pub monthly: Rect,
    pub breakdown: Rect,
}

impl ChartsLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),    // Monthly history
                Constraint::Length(7), // Subcategory breakdown
            ])
            .split(area);

        Self {
            monthly: chunks[0],
            breakdown: chunks[1],
        }
    }
}

/// Create a centered rect sized as a percentage of the parent
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
