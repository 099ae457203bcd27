//! Root application component - the sidebar controller
//!
//! The App owns the screen navigator, the modal visibility flags, the
//! transient clone-create selection, and the export runner. It routes
//! every action to exactly one of a navigation change, a modal toggle,
//! or a service call, and holds no theme logic of its own.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    sidebar_layout, AboutPanel, ClonePanel, CreatePanel, CreateVariationPanel,
    JsonViewerModal, MenuComponent, MetadataEditorModal, ResetPanel, SavePanel,
};
use crate::config::Config;
use crate::i18n::Labels;
use crate::model::{
    CloneCreateType, ExportOutcome, ModalFlags, ModalId, Navigator, RegisterError,
};
use crate::services::{self, theme, ExportRunner, ZipResolver};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How long a snackbar notice stays visible.
const SNACKBAR_CLOSE_DELAY: Duration = Duration::from_secs(4);

/// Content descriptor for each registered screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Menu,
    Save,
    CreateVariation,
    CreateBlank,
    Clone,
    CloneCreate,
    About,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient auto-dismissing notice
#[derive(Debug)]
pub struct Snackbar {
    pub message: String,
    pub kind: NoticeKind,
    shown_at: Instant,
}

/// Main application state - coordinates between components
pub struct App {
    pub config: Config,
    labels: Labels,

    /// Screen registry and cursor
    navigator: Navigator<ScreenId>,

    /// Modal visibility flags
    pub modals: ModalFlags,

    /// Which kind of theme the create screen should produce
    pub clone_create_type: CloneCreateType,

    /// Background export runner
    export_runner: ExportRunner,

    /// Transient notice line
    pub snackbar: Option<Snackbar>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Fatal configuration error (bad theme directory)
    pub error: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub menu: MenuComponent,
    pub save_panel: SavePanel,
    pub create_panel: CreatePanel,
    pub create_variation_panel: CreateVariationPanel,
    pub clone_panel: ClonePanel,
    pub about_panel: AboutPanel,
    pub reset_panel: ResetPanel,
    pub theme_json_modal: JsonViewerModal,
    pub global_styles_modal: JsonViewerModal,
    pub metadata_modal: MetadataEditorModal,
}

/// Register the fixed screen set. Parents before children; a mistake
/// here is a startup failure, not a navigation failure.
fn register_screens() -> Result<Navigator<ScreenId>, RegisterError> {
    let mut navigator = Navigator::new(ScreenId::Menu);
    navigator.register("/save", ScreenId::Save)?;
    navigator.register("/variation", ScreenId::CreateVariation)?;
    navigator.register("/blank", ScreenId::CreateBlank)?;
    navigator.register("/clone", ScreenId::Clone)?;
    navigator.register("/clone/create", ScreenId::CloneCreate)?;
    navigator.register("/about", ScreenId::About)?;
    navigator.register("/reset", ScreenId::Reset)?;
    Ok(navigator)
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config) -> Result<App> {
        let labels = Labels::load(&config.locale);
        let navigator = register_screens()?;

        let error = if config.theme_dir.is_empty()
            || !Path::new(&config.theme_dir).join(theme::THEME_JSON).exists()
        {
            Some(format!(
                "No {} found in theme directory:\n  {}\n\nPass the theme directory as the first argument,\nor set it in ~/.theme-tui/config.json.",
                theme::THEME_JSON,
                config.theme_dir
            ))
        } else {
            None
        };

        let app = App {
            menu: MenuComponent::new(&labels),
            save_panel: SavePanel::new(&labels),
            create_panel: CreatePanel::new(&labels),
            create_variation_panel: CreateVariationPanel::new(&labels),
            clone_panel: ClonePanel::new(&labels),
            about_panel: AboutPanel::new(&labels),
            reset_panel: ResetPanel::new(&labels),
            theme_json_modal: JsonViewerModal::new(
                ModalId::ThemeJsonEditor,
                labels.translate("modal.theme_json_title"),
            ),
            global_styles_modal: JsonViewerModal::new(
                ModalId::GlobalStylesEditor,
                labels.translate("modal.custom_styles_title"),
            ),
            metadata_modal: MetadataEditorModal::new(&labels),
            config,
            labels,
            navigator,
            modals: ModalFlags::new(),
            clone_create_type: CloneCreateType::Unset,
            export_runner: ExportRunner::new(),
            snackbar: None,
            should_quit: false,
            error,
        };
        Ok(app)
    }

    pub fn current_path(&self) -> &str {
        self.navigator.current_path()
    }

    fn theme_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.theme_dir)
    }

    /// New themes land next to the current one.
    fn dest_root(&self) -> PathBuf {
        let theme_dir = self.theme_dir();
        theme_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(theme_dir)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Notification sink
    // ─────────────────────────────────────────────────────────────────────────

    fn show_notice(&mut self, message: String, kind: NoticeKind) {
        self.snackbar = Some(Snackbar {
            message,
            kind,
            shown_at: Instant::now(),
        });
    }

    fn expire_snackbar(&mut self) {
        if let Some(ref snackbar) = self.snackbar {
            if snackbar.shown_at.elapsed() >= SNACKBAR_CLOSE_DELAY {
                self.snackbar = None;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    fn navigate(&mut self, path: &str) {
        let from = self.navigator.current_path().to_string();
        if self.navigator.navigate_to(path).is_err() {
            // Unknown paths are a caller bug; the UI stays where it is.
            return;
        }
        self.after_navigation(&from);
    }

    fn navigate_back(&mut self) {
        let from = self.navigator.current_path().to_string();
        self.navigator.navigate_to_parent();
        self.after_navigation(&from);
    }

    /// Per-screen entry hooks, plus the clone-type reset when leaving
    /// the create screen.
    fn after_navigation(&mut self, from: &str) {
        if from == "/clone/create" && self.navigator.current_path() != "/clone/create" {
            self.clone_create_type = CloneCreateType::Unset;
        }

        let screen = *self.navigator.current();
        match screen {
            ScreenId::Save => {
                let pending = theme::pending_changes(&self.theme_dir()).unwrap_or(None);
                self.save_panel.set_pending(pending.as_ref());
            }
            ScreenId::CreateVariation => self.create_variation_panel.reset(),
            ScreenId::Clone => self.clone_panel.reset(),
            ScreenId::CreateBlank => {
                let title = self.labels.translate("create.title_blank").to_string();
                self.create_panel.start(&title);
            }
            ScreenId::CloneCreate => {
                let title = self
                    .labels
                    .translate(self.clone_create_type.title_key())
                    .to_string();
                self.create_panel.start(&title);
            }
            _ => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────────────────────

    fn start_export(&mut self) {
        if self.export_runner.in_flight() {
            return;
        }
        self.export_runner.spawn(ZipResolver::new(self.theme_dir()));
        self.menu.export_in_flight = true;
    }

    /// Handle a finished export attempt: save the artifact or classify
    /// and surface the failure. Never propagates.
    fn finish_export(&mut self, outcome: ExportOutcome) -> Option<Action> {
        self.menu.export_in_flight = false;
        match outcome {
            ExportOutcome::Done(artifact) => {
                match services::save_artifact(Path::new(&self.config.export_dir), &artifact) {
                    Ok(path) => Some(Action::Notify(format!(
                        "{} {}",
                        self.labels.translate("export.saved"),
                        path.display()
                    ))),
                    Err(e) => Some(Action::NotifyError(e.to_string())),
                }
            }
            ExportOutcome::Failed(error) => {
                let generic = self.labels.translate("export.generic_error");
                Some(Action::NotifyError(error.display_message(generic)))
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Modal content
    // ─────────────────────────────────────────────────────────────────────────

    fn open_modal(&mut self, id: ModalId) {
        let theme_dir = self.theme_dir();
        match id {
            ModalId::ThemeJsonEditor => match theme::theme_json_text(&theme_dir) {
                Ok(text) => self.theme_json_modal.set_content(&text),
                Err(e) => {
                    self.show_notice(e.to_string(), NoticeKind::Error);
                    return;
                }
            },
            ModalId::GlobalStylesEditor => {
                let text = theme::user_changes_text(&theme_dir)
                    .unwrap_or_else(|| self.labels.translate("styles.none").to_string());
                self.global_styles_modal.set_content(&text);
            }
            ModalId::MetadataEditor => match theme::load_metadata(&theme_dir) {
                Ok(meta) => self.metadata_modal.set_metadata(meta),
                Err(e) => {
                    self.show_notice(e.to_string(), NoticeKind::Error);
                    return;
                }
            },
        }
        self.modals.open(id);
    }

    fn help_line(&self) -> String {
        let key = if self.modals.any_open() {
            "help.modal"
        } else if self.navigator.at_root() {
            "help.menu"
        } else {
            "help.screen"
        };
        self.labels.translate(key).to_string()
    }

    fn draw_fatal_error(&self, frame: &mut Frame, area: Rect, message: &str) {
        let paragraph = Paragraph::new(message.to_string())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.error.is_some() {
            return Ok(match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            });
        }

        // The topmost open modal gets the keys first.
        if let Some(top) = self.modals.top() {
            return match top {
                ModalId::ThemeJsonEditor => self.theme_json_modal.handle_key_event(key),
                ModalId::GlobalStylesEditor => self.global_styles_modal.handle_key_event(key),
                ModalId::MetadataEditor => self.metadata_modal.handle_key_event(key),
            };
        }

        let screen = *self.navigator.current();
        match screen {
            ScreenId::Menu => self.menu.handle_key_event(key),
            ScreenId::Save => self.save_panel.handle_key_event(key),
            ScreenId::CreateVariation => self.create_variation_panel.handle_key_event(key),
            ScreenId::CreateBlank | ScreenId::CloneCreate => {
                self.create_panel.handle_key_event(key)
            }
            ScreenId::Clone => self.clone_panel.handle_key_event(key),
            ScreenId::About => self.about_panel.handle_key_event(key),
            ScreenId::Reset => self.reset_panel.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                self.expire_snackbar();
                if let Some(outcome) = self.export_runner.poll() {
                    return Ok(self.finish_export(outcome));
                }
            }
            Action::Resize(_, _) => {}
            Action::Quit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NavigateTo(path) => self.navigate(path),
            Action::NavigateBack => self.navigate_back(),
            Action::NextItem => self.menu.select_next(),
            Action::PrevItem => self.menu.select_prev(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenModal(id) => self.open_modal(id),
            Action::CloseModal(id) => self.modals.close(id),

            // ─────────────────────────────────────────────────────────────────
            // Theme Operations
            // ─────────────────────────────────────────────────────────────────
            Action::ExportTheme => self.start_export(),
            Action::SelectCloneType(create_type) => {
                self.clone_create_type = create_type;
                return Ok(Some(Action::NavigateTo("/clone/create")));
            }
            Action::SaveChanges => match theme::apply_changes(&self.theme_dir()) {
                Ok(true) => {
                    self.show_notice(
                        self.labels.translate("save.done").to_string(),
                        NoticeKind::Info,
                    );
                    return Ok(Some(Action::NavigateBack));
                }
                Ok(false) => {
                    self.show_notice(
                        self.labels.translate("save.nothing").to_string(),
                        NoticeKind::Info,
                    );
                }
                Err(e) => self.show_notice(e.to_string(), NoticeKind::Error),
            },
            Action::ResetTheme => match theme::discard_changes(&self.theme_dir()) {
                Ok(reset) => {
                    let key = if reset { "reset.done" } else { "reset.nothing" };
                    self.show_notice(self.labels.translate(key).to_string(), NoticeKind::Info);
                    return Ok(Some(Action::NavigateBack));
                }
                Err(e) => self.show_notice(e.to_string(), NoticeKind::Error),
            },
            Action::CreateVariation(name) => {
                match theme::create_variation(&self.theme_dir(), &name) {
                    Ok(path) => {
                        self.show_notice(
                            format!(
                                "{} {}",
                                self.labels.translate("variation.done"),
                                path.display()
                            ),
                            NoticeKind::Info,
                        );
                        return Ok(Some(Action::NavigateBack));
                    }
                    Err(e) => self.show_notice(e.to_string(), NoticeKind::Error),
                }
            }
            Action::CreateTheme(name) => {
                let theme_dir = self.theme_dir();
                let dest_root = self.dest_root();
                let screen = *self.navigator.current();
                let result = match screen {
                    ScreenId::CreateBlank => theme::create_blank(&dest_root, &name),
                    _ => match self.clone_create_type {
                        CloneCreateType::CreateChild => {
                            theme::create_child(&theme_dir, &dest_root, &name)
                        }
                        // An unset selection falls back to a plain clone.
                        _ => theme::clone_theme(&theme_dir, &dest_root, &name),
                    },
                };
                match result {
                    Ok(path) => {
                        self.show_notice(
                            format!(
                                "{} {}",
                                self.labels.translate("create.done"),
                                path.display()
                            ),
                            NoticeKind::Info,
                        );
                        return Ok(Some(Action::NavigateTo("/")));
                    }
                    Err(e) => self.show_notice(e.to_string(), NoticeKind::Error),
                }
            }
            Action::SaveMetadata(meta) => match theme::save_metadata(&self.theme_dir(), &meta) {
                Ok(()) => {
                    self.show_notice(
                        self.labels.translate("metadata.done").to_string(),
                        NoticeKind::Info,
                    );
                    return Ok(Some(Action::CloseModal(ModalId::MetadataEditor)));
                }
                Err(e) => self.show_notice(e.to_string(), NoticeKind::Error),
            },

            // ─────────────────────────────────────────────────────────────────
            // Notices
            // ─────────────────────────────────────────────────────────────────
            Action::Notify(message) => self.show_notice(message, NoticeKind::Info),
            Action::NotifyError(message) => self.show_notice(message, NoticeKind::Error),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if let Some(error) = self.error.clone() {
            self.draw_fatal_error(frame, area, &error);
            return Ok(());
        }

        let layout = sidebar_layout(area);

        // Sub-screens share the sidebar frame; the menu draws its own.
        let screen = *self.navigator.current();
        if screen == ScreenId::Menu {
            self.menu.draw(frame, layout.panel)?;
        } else {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan));
            let inner = block.inner(layout.panel);
            frame.render_widget(block, layout.panel);
            match screen {
                ScreenId::Save => self.save_panel.draw(frame, inner)?,
                ScreenId::CreateVariation => {
                    self.create_variation_panel.draw(frame, inner)?
                }
                ScreenId::CreateBlank | ScreenId::CloneCreate => {
                    self.create_panel.draw(frame, inner)?
                }
                ScreenId::Clone => self.clone_panel.draw(frame, inner)?,
                ScreenId::About => self.about_panel.draw(frame, inner)?,
                ScreenId::Reset => self.reset_panel.draw(frame, inner)?,
                ScreenId::Menu => unreachable!(),
            }
        }

        // Open modals draw over the screen, later ids on top.
        for id in self.modals.open_modals() {
            match id {
                ModalId::ThemeJsonEditor => self.theme_json_modal.draw(frame, area)?,
                ModalId::GlobalStylesEditor => self.global_styles_modal.draw(frame, area)?,
                ModalId::MetadataEditor => self.metadata_modal.draw(frame, area)?,
            }
        }

        if let Some(ref snackbar) = self.snackbar {
            let style = match snackbar.kind {
                NoticeKind::Info => Style::default().fg(Color::Black).bg(Color::Green),
                NoticeKind::Error => Style::default().fg(Color::White).bg(Color::Red),
            };
            let notice = Paragraph::new(Line::from(Span::styled(
                format!(" {} ", snackbar.message),
                style,
            )));
            frame.render_widget(notice, layout.snackbar);
        }

        let help = Paragraph::new(self.help_line())
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Artifact, ErrorResponse};
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (App, TempDir, TempDir) {
        let themes = TempDir::new().unwrap();
        let theme_dir = themes.path().join("morning");
        fs::create_dir(&theme_dir).unwrap();
        fs::write(
            theme_dir.join("theme.json"),
            r#"{ "name": "Morning", "settings": { "color": {} } }"#,
        )
        .unwrap();
        fs::write(
            theme_dir.join("user-changes.json"),
            r#"{ "styles": { "spacing": {} } }"#,
        )
        .unwrap();

        let exports = TempDir::new().unwrap();
        let config = Config {
            theme_dir: theme_dir.to_string_lossy().to_string(),
            export_dir: exports.path().to_string_lossy().to_string(),
            locale: "en".to_string(),
        };
        (App::new(config).unwrap(), themes, exports)
    }

    /// Drive an action and its follow-ups, the way the main loop does.
    fn run(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    #[test]
    fn test_menu_activation_navigates() {
        let (mut app, _themes, _exports) = fixture();
        run(&mut app, Action::NavigateTo("/save"));
        assert_eq!(app.current_path(), "/save");
        run(&mut app, Action::NavigateBack);
        assert_eq!(app.current_path(), "/");
    }

    #[test]
    fn test_unknown_path_is_a_noop() {
        let (mut app, _themes, _exports) = fixture();
        run(&mut app, Action::NavigateTo("/save"));
        run(&mut app, Action::NavigateTo("/missing"));
        assert_eq!(app.current_path(), "/save");
    }

    #[test]
    fn test_modal_flags_follow_actions() {
        let (mut app, _themes, _exports) = fixture();
        run(&mut app, Action::OpenModal(ModalId::ThemeJsonEditor));
        run(&mut app, Action::OpenModal(ModalId::MetadataEditor));
        assert!(app.modals.is_open(ModalId::ThemeJsonEditor));
        assert!(app.modals.is_open(ModalId::MetadataEditor));

        run(&mut app, Action::CloseModal(ModalId::ThemeJsonEditor));
        assert!(!app.modals.is_open(ModalId::ThemeJsonEditor));
        assert!(app.modals.is_open(ModalId::MetadataEditor));
    }

    #[test]
    fn test_clone_type_selected_then_reset_on_leave() {
        let (mut app, _themes, _exports) = fixture();
        run(&mut app, Action::NavigateTo("/clone"));
        run(&mut app, Action::SelectCloneType(CloneCreateType::CreateChild));
        assert_eq!(app.current_path(), "/clone/create");
        assert_eq!(app.clone_create_type, CloneCreateType::CreateChild);

        run(&mut app, Action::NavigateBack);
        assert_eq!(app.current_path(), "/clone");
        assert_eq!(app.clone_create_type, CloneCreateType::Unset);
    }

    #[test]
    fn test_save_changes_applies_and_returns_to_menu() {
        let (mut app, _themes, _exports) = fixture();
        let theme_dir = app.theme_dir();
        run(&mut app, Action::NavigateTo("/save"));
        run(&mut app, Action::SaveChanges);

        assert!(!theme_dir.join("user-changes.json").exists());
        assert_eq!(app.current_path(), "/");
        assert_eq!(app.snackbar.as_ref().unwrap().kind, NoticeKind::Info);
    }

    #[test]
    fn test_reset_discards_overrides() {
        let (mut app, _themes, _exports) = fixture();
        let theme_dir = app.theme_dir();
        run(&mut app, Action::NavigateTo("/reset"));
        run(&mut app, Action::ResetTheme);

        assert!(!theme_dir.join("user-changes.json").exists());
        assert_eq!(app.current_path(), "/");
    }

    #[test]
    fn test_create_child_theme_from_create_screen() {
        let (mut app, themes, _exports) = fixture();
        run(&mut app, Action::NavigateTo("/clone"));
        run(&mut app, Action::SelectCloneType(CloneCreateType::CreateChild));
        run(&mut app, Action::CreateTheme("Morning Child".to_string()));

        assert_eq!(app.current_path(), "/");
        let child = themes.path().join("morning-child");
        let meta = theme::load_metadata(&child).unwrap();
        assert_eq!(meta.template.as_deref(), Some("morning"));
    }

    #[test]
    fn test_export_failure_surfaces_classified_message() {
        let (mut app, _themes, _exports) = fixture();
        let follow_up = app.finish_export(ExportOutcome::Failed(ErrorResponse::new(
            "Quota exceeded",
            "quota",
        )));
        run(&mut app, follow_up.unwrap());

        let snackbar = app.snackbar.as_ref().unwrap();
        assert_eq!(snackbar.kind, NoticeKind::Error);
        assert_eq!(snackbar.message, "Quota exceeded");
    }

    #[test]
    fn test_export_failure_falls_back_to_generic_message() {
        let (mut app, _themes, _exports) = fixture();
        let follow_up = app.finish_export(ExportOutcome::Failed(ErrorResponse::new(
            "ignored",
            "unknown_error",
        )));
        run(&mut app, follow_up.unwrap());

        assert_eq!(
            app.snackbar.as_ref().unwrap().message,
            "An error occurred while attempting to export the theme."
        );
    }

    #[test]
    fn test_export_success_saves_artifact_once() {
        let (mut app, _themes, exports) = fixture();
        let follow_up = app.finish_export(ExportOutcome::Done(Artifact {
            bytes: b"PK".to_vec(),
            filename: "morning.zip".to_string(),
        }));
        run(&mut app, follow_up.unwrap());

        assert!(exports.path().join("morning.zip").exists());
        assert_eq!(app.snackbar.as_ref().unwrap().kind, NoticeKind::Info);
        assert!(!app.menu.export_in_flight);
    }

    #[test]
    fn test_missing_theme_json_is_fatal_at_mount() {
        let empty = TempDir::new().unwrap();
        let config = Config {
            theme_dir: empty.path().to_string_lossy().to_string(),
            export_dir: empty.path().to_string_lossy().to_string(),
            locale: "en".to_string(),
        };
        let app = App::new(config).unwrap();
        assert!(app.error.is_some());
    }
}
