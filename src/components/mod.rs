//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod about;
pub mod clone_panel;
pub mod create_panel;
pub mod create_variation_panel;
pub mod json_viewer_modal;
pub mod layout;
pub mod menu;
pub mod metadata_modal;
pub mod reset_panel;
pub mod save_panel;
pub mod screen_header;

pub use about::AboutPanel;
pub use clone_panel::ClonePanel;
pub use create_panel::CreatePanel;
pub use create_variation_panel::CreateVariationPanel;
pub use json_viewer_modal::JsonViewerModal;
pub use layout::{centered_popup, sidebar_layout, SidebarLayout};
pub use menu::MenuComponent;
pub use metadata_modal::MetadataEditorModal;
pub use reset_panel::ResetPanel;
pub use save_panel::SavePanel;
