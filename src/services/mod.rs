//! External service interactions
//!
//! This module contains services for everything outside the UI itself:
//! - Theme directory operations (metadata, overrides, clone/scaffold)
//! - Export resolution (building the archive artifact)
//! - Background export execution
//! - Saving the exported artifact to disk

pub mod download;
pub mod export;
pub mod resolver;
pub mod theme;

pub use download::save_artifact;
pub use export::ExportRunner;
pub use resolver::{ExportResolver, ZipResolver};
