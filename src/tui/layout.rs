//! Layout definitions for the TUI
//!
//! Header, wizard body and status bar, plus the rectangles the wizard's
//! cards and overlay occupy inside the body.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::wizard::{CardView, OverlayGeometry};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title line
    pub header: Rect,
    /// Where the wizard lives; overlay offsets are measured from its top
    pub body: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Rows a collapsed card takes, borders included
pub fn card_height(card: &CardView) -> u16 {
    if card.detail.is_some() {
        4
    } else {
        3
    }
}

/// Screen area for an overlay placed in `body`
///
/// The geometry may extend past the body when the cards above are tall;
/// the returned rect is clamped so it never leaves the body.
pub fn overlay_rect(body: Rect, geometry: OverlayGeometry) -> Rect {
    let offset = geometry.offset.min(body.height.saturating_sub(1));
    let height = geometry.height.min(body.height.saturating_sub(offset));
    Rect::new(body.x, body.y + offset, body.width, height)
}

/// Create a centered rect for dialogs
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
