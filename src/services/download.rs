//! File-save collaborator
//!
//! The TUI equivalent of a browser download: write the artifact's bytes
//! into the configured export directory.

use crate::model::Artifact;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Save the artifact under `export_dir`, returning the written path.
pub fn save_artifact(export_dir: &Path, artifact: &Artifact) -> Result<PathBuf> {
    fs::create_dir_all(export_dir)
        .with_context(|| format!("Failed to create {}", export_dir.display()))?;
    let path = export_dir.join(&artifact.filename);
    fs::write(&path, &artifact.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_artifact_writes_bytes() {
        let dir = TempDir::new().unwrap();
        let artifact = Artifact {
            bytes: b"PK\x03\x04".to_vec(),
            filename: "morning.zip".to_string(),
        };

        let path = save_artifact(dir.path(), &artifact).unwrap();
        assert_eq!(path, dir.path().join("morning.zip"));
        assert_eq!(fs::read(&path).unwrap(), artifact.bytes);
    }

    #[test]
    fn test_save_artifact_creates_export_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("exports/themes");
        let artifact = Artifact {
            bytes: vec![0],
            filename: "t.zip".to_string(),
        };
        assert!(save_artifact(&nested, &artifact).is_ok());
        assert!(nested.join("t.zip").exists());
    }
}
