//! Shared sub-screen header
//!
//! Every screen below the root renders the same header: a back hint and
//! the screen title, followed by a blank spacer line.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the header into the top of `area`, returning the remaining
/// content area below it.
pub fn draw_screen_header(frame: &mut Frame, area: Rect, title: &str, back_hint: &str) -> Rect {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(format!("‹ {back_hint}"), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(header, Rect { height: 1.min(area.height), ..area });

    let used = 2.min(area.height);
    Rect {
        y: area.y + used,
        height: area.height.saturating_sub(used),
        ..area
    }
}
