//! Export resolvers
//!
//! A resolver turns the theme into an export artifact. The archive's
//! byte format is entirely the resolver's concern; the rest of the
//! application only sees bytes plus a filename, or a structured error.

use crate::model::{Artifact, ErrorResponse};
use crate::services::theme;
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Produces the export artifact for one attempt.
///
/// Implementations run on a background thread; failures are structured,
/// not panics. The strategy is chosen once at startup.
pub trait ExportResolver: Send + 'static {
    fn fetch_artifact(&self) -> Result<Artifact, ErrorResponse>;
}

/// Resolver that archives the theme directory with the system `zip`.
pub struct ZipResolver {
    theme_dir: PathBuf,
}

impl ZipResolver {
    pub fn new(theme_dir: PathBuf) -> Self {
        Self { theme_dir }
    }

    fn archive_filename(&self) -> String {
        let slug = self
            .theme_dir
            .file_name()
            .map(|n| theme::slugify(&n.to_string_lossy()))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "theme".to_string());
        format!("{}-{}.zip", slug, Local::now().format("%Y%m%d-%H%M%S"))
    }
}

impl ExportResolver for ZipResolver {
    fn fetch_artifact(&self) -> Result<Artifact, ErrorResponse> {
        if !self.theme_dir.is_dir() {
            return Err(ErrorResponse::new(
                format!("Theme directory not found: {}", self.theme_dir.display()),
                "theme_not_found",
            ));
        }

        let filename = self.archive_filename();
        let staging = std::env::temp_dir().join(format!("theme-tui-{}", filename));

        let output = Command::new("zip")
            .arg("-r")
            .arg(&staging)
            .arg(".")
            .current_dir(&self.theme_dir)
            .output()
            .map_err(|e| {
                ErrorResponse::new(format!("Could not run zip: {}", e), "zip_unavailable")
            })?;

        if !output.status.success() {
            let _ = fs::remove_file(&staging);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.is_empty() {
                return Err(ErrorResponse {
                    message: None,
                    code: Some("zip_failed".to_string()),
                });
            }
            return Err(ErrorResponse::new(stderr, "zip_failed"));
        }

        let bytes = fs::read(&staging).map_err(|e| {
            ErrorResponse::new(format!("Could not read archive: {}", e), "zip_failed")
        })?;
        let _ = fs::remove_file(&staging);

        Ok(Artifact { bytes, filename })
    }
}
