//! Theme directory operations
//!
//! A theme lives in a directory with a `theme.json` document, an
//! optional `styles/` directory of variations, and an optional
//! `user-changes.json` holding style overrides the user has made but
//! not yet folded into the theme itself.

use crate::model::ThemeMetadata;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const THEME_JSON: &str = "theme.json";
pub const USER_CHANGES: &str = "user-changes.json";
pub const STYLES_DIR: &str = "styles";

/// Load the metadata block of a theme's theme.json.
pub fn load_metadata(theme_dir: &Path) -> Result<ThemeMetadata> {
    let path = theme_dir.join(THEME_JSON);
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write the metadata block back, preserving all carried-through fields.
pub fn save_metadata(theme_dir: &Path, meta: &ThemeMetadata) -> Result<()> {
    let path = theme_dir.join(THEME_JSON);
    let contents = serde_json::to_string_pretty(meta)?;
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Raw theme.json text for the viewer modal.
pub fn theme_json_text(theme_dir: &Path) -> Result<String> {
    let path = theme_dir.join(THEME_JSON);
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Raw user override text for the viewer modal, if any overrides exist.
pub fn user_changes_text(theme_dir: &Path) -> Option<String> {
    fs::read_to_string(theme_dir.join(USER_CHANGES)).ok()
}

/// Pending user style overrides, parsed. None when there are none.
pub fn pending_changes(theme_dir: &Path) -> Result<Option<Value>> {
    let path = theme_dir.join(USER_CHANGES);
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path)?;
    let value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(value))
}

/// Deep-merge `overlay` into `base`; overlay values win on conflict.
fn merge_value(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                merge_value(base_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

/// Fold pending user overrides into theme.json and remove the override
/// file. Returns false when there was nothing to apply.
pub fn apply_changes(theme_dir: &Path) -> Result<bool> {
    let Some(changes) = pending_changes(theme_dir)? else {
        return Ok(false);
    };
    let theme_path = theme_dir.join(THEME_JSON);
    let contents = fs::read_to_string(&theme_path)
        .with_context(|| format!("Failed to read {}", theme_path.display()))?;
    let mut theme: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", theme_path.display()))?;

    merge_value(&mut theme, &changes);
    fs::write(&theme_path, serde_json::to_string_pretty(&theme)?)?;
    fs::remove_file(theme_dir.join(USER_CHANGES))?;
    Ok(true)
}

/// Remove pending user overrides without applying them. Returns false
/// when there were none.
pub fn discard_changes(theme_dir: &Path) -> Result<bool> {
    let path = theme_dir.join(USER_CHANGES);
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(&path)?;
    Ok(true)
}

/// Write the pending user overrides as a named style variation under
/// `styles/`. The overrides themselves are left in place.
pub fn create_variation(theme_dir: &Path, name: &str) -> Result<PathBuf> {
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(anyhow!("Variation name is empty"));
    }
    let mut variation = pending_changes(theme_dir)?
        .unwrap_or_else(|| Value::Object(Default::default()));
    if let Value::Object(ref mut map) = variation {
        map.insert("title".to_string(), Value::String(name.to_string()));
    }

    let styles_dir = theme_dir.join(STYLES_DIR);
    fs::create_dir_all(&styles_dir)?;
    let path = styles_dir.join(format!("{slug}.json"));
    fs::write(&path, serde_json::to_string_pretty(&variation)?)?;
    Ok(path)
}

/// Scaffold a blank theme directory next to nothing in particular.
pub fn create_blank(dest_root: &Path, name: &str) -> Result<PathBuf> {
    let dest = prepare_dest(dest_root, name)?;
    let meta = ThemeMetadata {
        name: name.to_string(),
        ..Default::default()
    };
    fs::create_dir_all(&dest)?;
    save_metadata(&dest, &meta)?;
    Ok(dest)
}

/// Clone a theme: full copy under a new name with the pending user
/// overrides folded into the clone. The source theme is untouched.
pub fn clone_theme(theme_dir: &Path, dest_root: &Path, name: &str) -> Result<PathBuf> {
    let dest = prepare_dest(dest_root, name)?;
    copy_dir(theme_dir, &dest)?;
    apply_changes(&dest)?;

    let mut meta = load_metadata(&dest)?;
    meta.name = name.to_string();
    save_metadata(&dest, &meta)?;
    Ok(dest)
}

/// Create a child theme: a fresh scaffold that names the current theme
/// as its template, with the pending user overrides as its starting
/// theme.json. The parent is untouched.
pub fn create_child(theme_dir: &Path, dest_root: &Path, name: &str) -> Result<PathBuf> {
    let parent_slug = theme_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| anyhow!("Theme directory has no name"))?;

    let dest = prepare_dest(dest_root, name)?;
    fs::create_dir_all(&dest)?;

    let mut meta = ThemeMetadata {
        name: name.to_string(),
        template: Some(parent_slug),
        ..Default::default()
    };
    if let Some(Value::Object(changes)) = pending_changes(theme_dir)? {
        meta.rest.extend(changes);
    }
    save_metadata(&dest, &meta)?;
    Ok(dest)
}

fn prepare_dest(dest_root: &Path, name: &str) -> Result<PathBuf> {
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(anyhow!("Theme name is empty"));
    }
    let dest = dest_root.join(&slug);
    if dest.exists() {
        return Err(anyhow!("A theme named '{}' already exists", slug));
    }
    Ok(dest)
}

fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Lowercased, hyphen-separated form of a display name, for directory
/// and file names.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if (c.is_whitespace() || c == '-' || c == '_') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn theme_fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(THEME_JSON),
            r##"{
                "name": "Morning",
                "version": "1.2.0",
                "settings": { "color": { "background": "#fff" } }
            }"##,
        )
        .unwrap();
        dir
    }

    fn with_changes(dir: &TempDir) {
        fs::write(
            dir.path().join(USER_CHANGES),
            r##"{ "settings": { "color": { "background": "#000" } } }"##,
        )
        .unwrap();
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My New Theme"), "my-new-theme");
        assert_eq!(slugify("  Dusk -- 2 "), "dusk-2");
        assert_eq!(slugify("___"), "");
    }

    #[test]
    fn test_apply_changes_merges_and_clears() {
        let dir = theme_fixture();
        with_changes(&dir);

        assert!(apply_changes(dir.path()).unwrap());
        let theme: Value =
            serde_json::from_str(&theme_json_text(dir.path()).unwrap()).unwrap();
        assert_eq!(theme["settings"]["color"]["background"], "#000");
        assert_eq!(theme["name"], "Morning");
        assert!(!dir.path().join(USER_CHANGES).exists());

        // Second apply has nothing to do
        assert!(!apply_changes(dir.path()).unwrap());
    }

    #[test]
    fn test_discard_changes() {
        let dir = theme_fixture();
        assert!(!discard_changes(dir.path()).unwrap());

        with_changes(&dir);
        assert!(discard_changes(dir.path()).unwrap());
        assert!(!dir.path().join(USER_CHANGES).exists());
        // theme.json untouched
        let theme: Value =
            serde_json::from_str(&theme_json_text(dir.path()).unwrap()).unwrap();
        assert_eq!(theme["settings"]["color"]["background"], "#fff");
    }

    #[test]
    fn test_create_variation_from_changes() {
        let dir = theme_fixture();
        with_changes(&dir);

        let path = create_variation(dir.path(), "High Contrast").unwrap();
        assert_eq!(path, dir.path().join("styles/high-contrast.json"));
        let variation: Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(variation["title"], "High Contrast");
        assert_eq!(variation["settings"]["color"]["background"], "#000");
        // overrides remain pending
        assert!(dir.path().join(USER_CHANGES).exists());
    }

    #[test]
    fn test_clone_theme_applies_changes_to_clone_only() {
        let dir = theme_fixture();
        with_changes(&dir);
        let dest_root = TempDir::new().unwrap();

        let dest = clone_theme(dir.path(), dest_root.path(), "Evening").unwrap();
        let meta = load_metadata(&dest).unwrap();
        assert_eq!(meta.name, "Evening");
        let cloned: Value =
            serde_json::from_str(&theme_json_text(&dest).unwrap()).unwrap();
        assert_eq!(cloned["settings"]["color"]["background"], "#000");
        assert!(!dest.join(USER_CHANGES).exists());

        // source keeps its overrides and its name
        assert!(dir.path().join(USER_CHANGES).exists());
        assert_eq!(load_metadata(dir.path()).unwrap().name, "Morning");
    }

    #[test]
    fn test_create_child_references_parent() {
        let dir = theme_fixture();
        with_changes(&dir);
        let dest_root = TempDir::new().unwrap();

        let dest = create_child(dir.path(), dest_root.path(), "Morning Child").unwrap();
        let meta = load_metadata(&dest).unwrap();
        assert_eq!(meta.name, "Morning Child");
        assert_eq!(
            meta.template.as_deref(),
            dir.path().file_name().unwrap().to_str()
        );
        assert!(meta.rest.contains_key("settings"));
    }

    #[test]
    fn test_create_blank() {
        let dest_root = TempDir::new().unwrap();
        let dest = create_blank(dest_root.path(), "Fresh Start").unwrap();
        let meta = load_metadata(&dest).unwrap();
        assert_eq!(meta.name, "Fresh Start");
        assert_eq!(meta.version, "1.0.0");
    }

    #[test]
    fn test_create_rejects_existing_slug() {
        let dest_root = TempDir::new().unwrap();
        create_blank(dest_root.path(), "Taken").unwrap();
        assert!(create_blank(dest_root.path(), "Taken").is_err());
    }

    #[test]
    fn test_metadata_save_preserves_settings() {
        let dir = theme_fixture();
        let mut meta = load_metadata(dir.path()).unwrap();
        meta.description = "A calm light theme".to_string();
        save_metadata(dir.path(), &meta).unwrap();

        let theme: Value =
            serde_json::from_str(&theme_json_text(dir.path()).unwrap()).unwrap();
        assert_eq!(theme["description"], "A calm light theme");
        assert_eq!(theme["settings"]["color"]["background"], "#fff");
    }
}
