//! Read-only JSON viewer modal
//!
//! Scrollable overlay used for both the theme.json viewer and the
//! custom styles viewer; the two instances differ only in id, title,
//! and content.

use crate::action::Action;
use crate::component::Component;
use crate::model::ModalId;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Read-only JSON viewer modal
pub struct JsonViewerModal {
    id: ModalId,
    title: String,
    lines: Vec<String>,
    pub scroll_offset: usize,
}

impl JsonViewerModal {
    pub fn new(id: ModalId, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            lines: Vec::new(),
            scroll_offset: 0,
        }
    }

    /// Replace the displayed document and reset the scroll position.
    pub fn set_content(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_string).collect();
        self.scroll_offset = 0;
    }
}

impl Component for JsonViewerModal {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal(self.id)),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.scroll_offset + 1 < self.lines.len() {
                    self.scroll_offset += 1;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset =
                    (self.scroll_offset + 20).min(self.lines.len().saturating_sub(1));
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(20);
                None
            }
            KeyCode::Char('g') => {
                self.scroll_offset = 0;
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 2;
        let overlay_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(overlay_area);

        let lines: Vec<Line> = self
            .lines
            .iter()
            .map(|line| Line::from(line.clone()))
            .collect();

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" {} ", self.title))
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, chunks[0]);

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " Esc/q ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Close  "),
            Span::styled(
                " j/k ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Scroll"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(help, chunks[1]);
        Ok(())
    }
}
