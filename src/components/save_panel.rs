//! Save changes panel
//!
//! Summarizes the pending user style overrides and folds them into the
//! theme on confirmation.

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
    widgets::Paragraph,
    Frame,
};
use serde_json::Value;

/// Save changes panel
pub struct SavePanel {
    title: String,
    back_hint: String,
    intro: String,
    empty_notice: String,
    confirm_hint: String,
    /// Top-level sections touched by the pending overrides
    sections: Vec<String>,
    has_pending: bool,
}

impl SavePanel {
    pub fn new(labels: &Labels) -> Self {
        Self {
            title: labels.translate("save.title").to_string(),
            back_hint: labels.translate("screen.back").to_string(),
            intro: labels.translate("save.intro").to_string(),
            empty_notice: labels.translate("save.no_changes").to_string(),
            confirm_hint: labels.translate("save.confirm_hint").to_string(),
            sections: Vec::new(),
            has_pending: false,
        }
    }

    /// Refresh the summary from the current pending overrides.
    pub fn set_pending(&mut self, pending: Option<&Value>) {
        self.sections.clear();
        self.has_pending = pending.is_some();
        if let Some(Value::Object(map)) = pending {
            self.sections.extend(map.keys().cloned());
        }
    }
}

impl Component for SavePanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter if self.has_pending => Some(Action::SaveChanges),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::NavigateBack),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = draw_screen_header(frame, area, &self.title, &self.back_hint);

        let mut lines = Vec::new();
        if self.has_pending {
            lines.push(Line::from(self.intro.clone()));
            lines.push(Line::from(""));
            for section in &self.sections {
                lines.push(Line::from(Span::styled(
                    format!("  • {}", section),
                    Style::default().fg(Color::Cyan),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                self.confirm_hint.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                self.empty_notice.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }

        frame.render_widget(Paragraph::new(lines), content);
        Ok(())
    }
}
