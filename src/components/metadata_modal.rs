//! Theme metadata editor modal
//!
//! Field-based editor for the metadata block of theme.json. Typing
//! edits the selected field; Enter writes everything back.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::i18n::Labels;
use crate::model::{ModalId, ThemeMetadata};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Editable metadata fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Description,
    Author,
    Version,
}

const FIELDS: [Field; 4] = [Field::Name, Field::Description, Field::Author, Field::Version];

/// Theme metadata editor modal
pub struct MetadataEditorModal {
    title: String,
    field_labels: [String; 4],
    meta: ThemeMetadata,
    selected: usize,
}

impl MetadataEditorModal {
    pub fn new(labels: &Labels) -> Self {
        Self {
            title: labels.translate("metadata.title").to_string(),
            field_labels: [
                labels.translate("metadata.field_name").to_string(),
                labels.translate("metadata.field_description").to_string(),
                labels.translate("metadata.field_author").to_string(),
                labels.translate("metadata.field_version").to_string(),
            ],
            meta: ThemeMetadata::default(),
            selected: 0,
        }
    }

    /// Load the metadata to edit and reset the field selection.
    pub fn set_metadata(&mut self, meta: ThemeMetadata) {
        self.meta = meta;
        self.selected = 0;
    }

    fn field_value(&self, field: Field) -> &String {
        match field {
            Field::Name => &self.meta.name,
            Field::Description => &self.meta.description,
            Field::Author => &self.meta.author,
            Field::Version => &self.meta.version,
        }
    }

    fn field_value_mut(&mut self) -> &mut String {
        match FIELDS[self.selected] {
            Field::Name => &mut self.meta.name,
            Field::Description => &mut self.meta.description,
            Field::Author => &mut self.meta.author,
            Field::Version => &mut self.meta.version,
        }
    }
}

impl Component for MetadataEditorModal {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal(ModalId::MetadataEditor)),
            KeyCode::Enter => Some(Action::SaveMetadata(self.meta.clone())),
            KeyCode::Down | KeyCode::Tab => {
                self.selected = (self.selected + 1) % FIELDS.len();
                None
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.selected = (self.selected + FIELDS.len() - 1) % FIELDS.len();
                None
            }
            KeyCode::Backspace => {
                self.field_value_mut().pop();
                None
            }
            KeyCode::Char(c) => {
                self.field_value_mut().push(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 60, 14);
        frame.render_widget(Clear, popup_area);

        let mut lines = vec![Line::from("")];
        for (index, field) in FIELDS.iter().enumerate() {
            let focused = index == self.selected;
            let cursor = if focused { "_" } else { "" };
            let value_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:<13}", self.field_labels[index]),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{}{}", self.field_value(*field), cursor), value_style),
            ]));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Save  "),
            Span::styled(
                " Tab ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Next field  "),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel"),
        ]));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(format!(" {} ", self.title))
                .title_style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(modal: &mut MetadataEditorModal, code: KeyCode) -> Option<Action> {
        modal.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    #[test]
    fn test_typing_edits_selected_field() {
        let mut modal = MetadataEditorModal::new(&Labels::default());
        modal.set_metadata(ThemeMetadata {
            name: "Morning".to_string(),
            ..Default::default()
        });

        press(&mut modal, KeyCode::Char('!'));
        assert_eq!(modal.meta.name, "Morning!");

        press(&mut modal, KeyCode::Tab);
        press(&mut modal, KeyCode::Char('x'));
        assert_eq!(modal.meta.description, "x");
        assert_eq!(modal.meta.name, "Morning!");
    }

    #[test]
    fn test_enter_saves_edited_metadata() {
        let mut modal = MetadataEditorModal::new(&Labels::default());
        modal.set_metadata(ThemeMetadata::default());
        press(&mut modal, KeyCode::Char('A'));

        match press(&mut modal, KeyCode::Enter) {
            Some(Action::SaveMetadata(meta)) => assert_eq!(meta.name, "A"),
            other => panic!("expected SaveMetadata, got {:?}", other),
        }
    }

    #[test]
    fn test_escape_closes_without_saving() {
        let mut modal = MetadataEditorModal::new(&Labels::default());
        assert_eq!(
            press(&mut modal, KeyCode::Esc),
            Some(Action::CloseModal(ModalId::MetadataEditor))
        );
    }

    #[test]
    fn test_field_selection_wraps() {
        let mut modal = MetadataEditorModal::new(&Labels::default());
        for _ in 0..4 {
            press(&mut modal, KeyCode::Tab);
        }
        press(&mut modal, KeyCode::Char('n'));
        assert_eq!(modal.meta.name, "n");
    }
}
