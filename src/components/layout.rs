//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the sidebar panel gets; narrower terminals use full width.
const PANEL_MAX_WIDTH: u16 = 52;

/// Sidebar screen layout areas
pub struct SidebarLayout {
    pub panel: Rect,
    pub snackbar: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the sidebar layout: panel column, snackbar line, help bar.
pub fn sidebar_layout(area: Rect) -> SidebarLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let width = chunks[0].width.min(PANEL_MAX_WIDTH);
    let panel = Rect::new(
        chunks[0].x + (chunks[0].width.saturating_sub(width)) / 2,
        chunks[0].y,
        width,
        chunks[0].height,
    );

    SidebarLayout {
        panel,
        snackbar: chunks[1],
        help: chunks[2],
    }
}
