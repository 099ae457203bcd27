//! Root sidebar menu component
//!
//! The fixed menu of theme tools. Every entry activates exactly one of:
//! a screen navigation, a modal, or the export action. Navigating
//! entries carry a chevron marker, matching the panel idiom of grouping
//! related entries between dividers.

use crate::action::Action;
use crate::component::Component;
use crate::i18n::Labels;
use crate::model::ModalId;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// What activating a menu item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemKind {
    Screen(&'static str),
    Modal(ModalId),
    Export,
}

#[derive(Debug)]
enum MenuEntry {
    Item { label: String, kind: ItemKind },
    Divider,
}

/// Root menu component
pub struct MenuComponent {
    title: String,
    exporting_label: String,
    entries: Vec<MenuEntry>,
    selected: usize,
    /// Set while an export attempt runs; disables the export entry.
    pub export_in_flight: bool,
}

impl MenuComponent {
    pub fn new(labels: &Labels) -> Self {
        let item = |key: &str, kind: ItemKind| MenuEntry::Item {
            label: labels.translate(key).to_string(),
            kind,
        };
        let entries = vec![
            item("menu.save_changes", ItemKind::Screen("/save")),
            item("menu.create_variation", ItemKind::Screen("/variation")),
            item("menu.edit_metadata", ItemKind::Modal(ModalId::MetadataEditor)),
            item("menu.view_theme_json", ItemKind::Modal(ModalId::ThemeJsonEditor)),
            item("menu.view_custom_styles", ItemKind::Modal(ModalId::GlobalStylesEditor)),
            item("menu.export_zip", ItemKind::Export),
            MenuEntry::Divider,
            item("menu.create_blank", ItemKind::Screen("/blank")),
            item("menu.create_theme", ItemKind::Screen("/clone")),
            MenuEntry::Divider,
            item("menu.reset_theme", ItemKind::Screen("/reset")),
            MenuEntry::Divider,
            item("menu.help", ItemKind::Screen("/about")),
        ];
        Self {
            title: labels.translate("sidebar.title").to_string(),
            exporting_label: labels.translate("menu.exporting").to_string(),
            entries,
            selected: 0,
            export_in_flight: false,
        }
    }

    fn is_item(&self, index: usize) -> bool {
        matches!(self.entries.get(index), Some(MenuEntry::Item { .. }))
    }

    pub fn select_next(&mut self) {
        let mut index = self.selected;
        while index + 1 < self.entries.len() {
            index += 1;
            if self.is_item(index) {
                self.selected = index;
                return;
            }
        }
    }

    pub fn select_prev(&mut self) {
        let mut index = self.selected;
        while index > 0 {
            index -= 1;
            if self.is_item(index) {
                self.selected = index;
                return;
            }
        }
    }

    /// The action for activating the selected entry, if any.
    fn activate(&self) -> Option<Action> {
        match self.entries.get(self.selected)? {
            MenuEntry::Divider => None,
            MenuEntry::Item { kind, .. } => match kind {
                ItemKind::Screen(path) => Some(Action::NavigateTo(path)),
                ItemKind::Modal(id) => Some(Action::OpenModal(*id)),
                ItemKind::Export if self.export_in_flight => None,
                ItemKind::Export => Some(Action::ExportTheme),
            },
        }
    }
}

impl Component for MenuComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(Action::NextItem),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::PrevItem),
            KeyCode::Enter => self.activate(),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let inner_width = area.width.saturating_sub(4) as usize;

        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                MenuEntry::Divider => Line::from(Span::styled(
                    "─".repeat(inner_width),
                    Style::default().fg(Color::DarkGray),
                )),
                MenuEntry::Item { label, kind } => {
                    let exporting =
                        *kind == ItemKind::Export && self.export_in_flight;
                    let label = if exporting {
                        &self.exporting_label
                    } else {
                        label
                    };
                    let chevron = matches!(kind, ItemKind::Screen(_));
                    let pad = inner_width
                        .saturating_sub(label.width() + if chevron { 1 } else { 0 });
                    let marker = if chevron { "›" } else { "" };

                    let style = if index == self.selected {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else if exporting {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default()
                    };
                    Line::from(Span::styled(
                        format!(" {}{}{} ", label, " ".repeat(pad), marker),
                        style,
                    ))
                }
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", self.title))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn press(menu: &mut MenuComponent, code: KeyCode) -> Option<Action> {
        menu.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    fn select_label(menu: &MenuComponent) -> &str {
        match &menu.entries[menu.selected] {
            MenuEntry::Item { label, .. } => label,
            MenuEntry::Divider => "divider",
        }
    }

    #[test]
    fn test_first_entry_navigates_to_save() {
        let mut menu = MenuComponent::new(&Labels::default());
        assert_eq!(press(&mut menu, KeyCode::Enter), Some(Action::NavigateTo("/save")));
    }

    #[test]
    fn test_selection_skips_dividers() {
        let mut menu = MenuComponent::new(&Labels::default());
        for _ in 0..6 {
            menu.select_next();
        }
        // Six steps down from the top lands past the first divider.
        assert_eq!(select_label(&menu), "Create Blank Theme");
        menu.select_prev();
        assert_eq!(select_label(&menu), "Export Zip");
    }

    #[test]
    fn test_each_kind_routes_to_one_action() {
        let mut menu = MenuComponent::new(&Labels::default());
        // metadata entry is third
        menu.select_next();
        menu.select_next();
        assert_eq!(
            press(&mut menu, KeyCode::Enter),
            Some(Action::OpenModal(ModalId::MetadataEditor))
        );
        // export entry is sixth
        menu.select_next();
        menu.select_next();
        menu.select_next();
        assert_eq!(press(&mut menu, KeyCode::Enter), Some(Action::ExportTheme));
    }

    #[test]
    fn test_export_entry_disabled_while_in_flight() {
        let mut menu = MenuComponent::new(&Labels::default());
        for _ in 0..5 {
            menu.select_next();
        }
        menu.export_in_flight = true;
        assert_eq!(press(&mut menu, KeyCode::Enter), None);
        menu.export_in_flight = false;
        assert_eq!(press(&mut menu, KeyCode::Enter), Some(Action::ExportTheme));
    }

    #[test]
    fn test_selection_clamps_at_ends() {
        let mut menu = MenuComponent::new(&Labels::default());
        menu.select_prev();
        assert_eq!(select_label(&menu), "Save Changes to Theme");
        for _ in 0..50 {
            menu.select_next();
        }
        assert_eq!(select_label(&menu), "Help");
    }
}
