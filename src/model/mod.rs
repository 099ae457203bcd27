//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Navigator` - path-addressed screen registry with a current cursor
//! - `ModalFlags` - independent modal visibility flags
//! - Theme metadata and export outcome models

pub mod export;
pub mod modal;
pub mod navigator;
pub mod theme;

// Re-export commonly used types
pub use export::{Artifact, ErrorResponse, ExportOutcome};
pub use modal::{ModalFlags, ModalId};
pub use navigator::{NavigateError, Navigator, RegisterError};
pub use theme::{CloneCreateType, ThemeMetadata};
