//! About / help screen

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

/// About / help screen
pub struct AboutPanel {
    title: String,
    back_hint: String,
    body: String,
    keys: Vec<(String, String)>,
}

impl AboutPanel {
    pub fn new(labels: &Labels) -> Self {
        let key = |combo: &str, label_key: &str| {
            (combo.to_string(), labels.translate(label_key).to_string())
        };
        Self {
            title: labels.translate("about.title").to_string(),
            back_hint: labels.translate("screen.back").to_string(),
            body: labels.translate("about.body").to_string(),
            keys: vec![
                key("j/k", "about.key_move"),
                key("Enter", "about.key_activate"),
                key("Esc", "about.key_back"),
                key("q", "about.key_quit"),
            ],
        }
    }
}

impl Component for AboutPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::NavigateBack),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = draw_screen_header(frame, area, &self.title, &self.back_hint);

        let mut lines = vec![Line::from(self.body.clone()), Line::from("")];
        for (combo, label) in &self.keys {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:<7}", combo),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(label.clone()),
            ]));
        }

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            content,
        );
        Ok(())
    }
}
