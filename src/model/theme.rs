//! Theme domain models
//!
//! A theme is a directory holding a `theme.json` document plus optional
//! style variations and a user override file. Only the metadata fields
//! this UI edits are modeled; everything else in theme.json is carried
//! through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Editable metadata block of a theme.json document.
///
/// Unknown fields are preserved across a load/save round trip so that
/// editing the name never strips design configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub version: String,
    /// Parent theme slug, set for child themes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(flatten)]
    pub rest: BTreeMap<String, Value>,
}

impl Default for ThemeMetadata {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            author: String::new(),
            version: "1.0.0".to_string(),
            template: None,
            rest: BTreeMap::new(),
        }
    }
}

/// Which kind of theme the shared create screen should produce.
///
/// Selected on the clone screen before entering the create screen and
/// reset whenever navigation leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloneCreateType {
    #[default]
    Unset,
    CreateClone,
    CreateChild,
}

impl CloneCreateType {
    /// Title key for the create screen under this selection.
    pub fn title_key(&self) -> &'static str {
        match self {
            CloneCreateType::CreateChild => "create.title_child",
            _ => "create.title_clone",
        }
    }
}
