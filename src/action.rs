//! Action enum - All possible application actions
//!
//! Components emit Actions in response to key events; the App routes
//! each one to exactly one of a navigation change, a modal toggle, or a
//! service call.

use crate::model::{CloneCreateType, ModalId, ThemeMetadata};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for polling background work and expiring notices
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Go to a registered screen path
    NavigateTo(&'static str),
    /// Go to the current screen's parent
    NavigateBack,
    /// Move to next menu item
    NextItem,
    /// Move to previous menu item
    PrevItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open a modal overlay
    OpenModal(ModalId),
    /// Close a modal overlay
    CloseModal(ModalId),

    // ─────────────────────────────────────────────────────────────────────────
    // Theme Operations
    // ─────────────────────────────────────────────────────────────────────────
    /// Start an export attempt
    ExportTheme,
    /// Remember which kind of theme the create screen should produce
    SelectCloneType(CloneCreateType),
    /// Fold pending user overrides into the theme
    SaveChanges,
    /// Discard pending user overrides
    ResetTheme,
    /// Write pending overrides as a named style variation
    CreateVariation(String),
    /// Create a theme (blank, clone, or child per the selected type)
    CreateTheme(String),
    /// Write edited metadata back to the theme
    SaveMetadata(ThemeMetadata),

    // ─────────────────────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────────────────────
    /// Show a transient info notice
    Notify(String),
    /// Show a transient error notice
    NotifyError(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::NavigateTo(path) => write!(f, "NavigateTo({})", path),
            Action::NavigateBack => write!(f, "NavigateBack"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::OpenModal(id) => write!(f, "OpenModal({:?})", id),
            Action::CloseModal(id) => write!(f, "CloseModal({:?})", id),
            Action::ExportTheme => write!(f, "ExportTheme"),
            Action::SelectCloneType(t) => write!(f, "SelectCloneType({:?})", t),
            Action::SaveChanges => write!(f, "SaveChanges"),
            Action::ResetTheme => write!(f, "ResetTheme"),
            Action::CreateVariation(name) => write!(f, "CreateVariation({})", name),
            Action::CreateTheme(name) => write!(f, "CreateTheme({})", name),
            Action::SaveMetadata(meta) => write!(f, "SaveMetadata({})", meta.name),
            Action::Notify(msg) => write!(f, "Notify({})", msg),
            Action::NotifyError(msg) => write!(f, "NotifyError({})", msg),
        }
    }
}
