//! Reset theme panel
//!
//! Confirmation screen for discarding the pending user style overrides.

use crate::action::Action;
use crate::component::Component;
use crate::components::screen_header::draw_screen_header;
use crate::i18n::Labels;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Reset theme panel
pub struct ResetPanel {
    title: String,
    back_hint: String,
    warning: String,
    confirm_label: String,
    cancel_label: String,
}

impl ResetPanel {
    pub fn new(labels: &Labels) -> Self {
        Self {
            title: labels.translate("reset.title").to_string(),
            back_hint: labels.translate("screen.back").to_string(),
            warning: labels.translate("reset.warning").to_string(),
            confirm_label: labels.translate("reset.confirm_label").to_string(),
            cancel_label: labels.translate("reset.cancel_label").to_string(),
        }
    }
}

impl Component for ResetPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(Action::ResetTheme)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(Action::NavigateBack)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = draw_screen_header(frame, area, &self.title, &self.back_hint);

        let lines = vec![
            Line::from(self.warning.clone()),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{}  ", self.confirm_label)),
                Span::styled(
                    " n/Esc ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(self.cancel_label.clone()),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), content);
        Ok(())
    }
}
