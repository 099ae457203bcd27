//! Theme create panel
//!
//! Shared by the blank-theme screen and the clone/child create screen.
//! Collects a theme name and emits a single create action; which kind of
//! theme gets produced is the controller's routing concern.

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

/// Theme create panel
pub struct CreatePanel {
    title: String,
    back_hint: String,
    prompt: String,
    name_required: String,
    pub input: String,
    error: Option<String>,
}

impl CreatePanel {
    pub fn new(labels: &Labels) -> Self {
        Self {
            title: String::new(),
            back_hint: labels.translate("screen.back").to_string(),
            prompt: labels.translate("create.prompt").to_string(),
            name_required: labels.translate("create.name_required").to_string(),
            input: String::new(),
            error: None,
        }
    }

    /// Reset the input and set the screen title for this visit.
    pub fn start(&mut self, title: &str) {
        self.title = title.to_string();
        self.input.clear();
        self.error = None;
    }
}

impl Component for CreatePanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter => {
                if self.input.trim().is_empty() {
                    self.error = Some(self.name_required.clone());
                    None
                } else {
                    Some(Action::CreateTheme(self.input.trim().to_string()))
                }
            }
            KeyCode::Esc => Some(Action::NavigateBack),
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.error = None;
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = draw_screen_header(frame, area, &self.title, &self.back_hint);

        let mut lines = vec![
            Line::from(self.prompt.clone()),
            Line::from(""),
            Line::from(Span::styled(
                format!("> {}_", self.input),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(ref error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }

        frame.render_widget(Paragraph::new(lines), content);
        Ok(())
    }
}
