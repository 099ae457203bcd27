//! Clone screen component
//!
//! Asks whether to clone the theme or create a child theme. Either
//! choice records the create type; the controller then navigates to the
//! shared create screen as a follow-up.

use crate::action::Action;
use crate::component::Component;
use crate::components::screen_header::draw_screen_header;
use crate::i18n::Labels;
use crate::model::CloneCreateType;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

struct CloneChoice {
    label: String,
    description: String,
    create_type: CloneCreateType,
}

/// Clone screen component
pub struct ClonePanel {
    title: String,
    back_hint: String,
    question: String,
    choices: [CloneChoice; 2],
    pub selected: usize,
}

impl ClonePanel {
    pub fn new(labels: &Labels) -> Self {
        Self {
            title: labels.translate("clone.title").to_string(),
            back_hint: labels.translate("screen.back").to_string(),
            question: labels.translate("clone.question").to_string(),
            choices: [
                CloneChoice {
                    label: labels.translate("clone.clone_label").to_string(),
                    description: labels.translate("clone.clone_description").to_string(),
                    create_type: CloneCreateType::CreateClone,
                },
                CloneChoice {
                    label: labels.translate("clone.child_label").to_string(),
                    description: labels.translate("clone.child_description").to_string(),
                    create_type: CloneCreateType::CreateChild,
                },
            ],
            selected: 0,
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

impl Component for ClonePanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.choices.len() - 1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Enter => Some(Action::SelectCloneType(
                self.choices[self.selected].create_type,
            )),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::NavigateBack),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = draw_screen_header(frame, area, &self.title, &self.back_hint);

        let mut lines = vec![Line::from(self.question.clone()), Line::from("")];
        for (index, choice) in self.choices.iter().enumerate() {
            let style = if index == self.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(Span::styled(
                format!(" {} ›", choice.label),
                style,
            )));
            lines.push(Line::from(Span::styled(
                choice.description.clone(),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: false }), content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_map_to_create_types() {
        let mut panel = ClonePanel::new(&Labels::default());
        assert_eq!(
            panel.handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap(),
            Some(Action::SelectCloneType(CloneCreateType::CreateClone))
        );

        panel
            .handle_key_event(KeyEvent::from(KeyCode::Down))
            .unwrap();
        assert_eq!(
            panel.handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap(),
            Some(Action::SelectCloneType(CloneCreateType::CreateChild))
        );
    }

    #[test]
    fn test_selection_clamps() {
        let mut panel = ClonePanel::new(&Labels::default());
        for _ in 0..5 {
            panel
                .handle_key_event(KeyEvent::from(KeyCode::Down))
                .unwrap();
        }
        assert_eq!(panel.selected, 1);
        panel.handle_key_event(KeyEvent::from(KeyCode::Up)).unwrap();
        panel.handle_key_event(KeyEvent::from(KeyCode::Up)).unwrap();
        assert_eq!(panel.selected, 0);
    }
}
