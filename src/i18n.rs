//! Label provider
//!
//! UI strings are looked up by key from an embedded catalog. Lookup is
//! pure and never fails: an unresolved key is returned as-is, which
//! keeps a missing translation visible without crashing anything.

use std::collections::HashMap;

/// Embedded catalogs, one JSON object of key/string pairs per locale.
const EN: &str = include_str!("../locales/en.json");

/// Resolves message keys to localized display strings.
#[derive(Debug)]
pub struct Labels {
    entries: HashMap<String, String>,
}

impl Default for Labels {
    fn default() -> Self {
        Self::load("en")
    }
}

impl Labels {
    /// Load the catalog for `locale`, falling back to English for
    /// locales we do not ship.
    pub fn load(locale: &str) -> Self {
        let catalog = match locale {
            "en" => EN,
            _ => EN,
        };
        // The catalogs are compiled in; a parse failure is a build
        // defect, caught by the catalog test below.
        let entries = serde_json::from_str(catalog).unwrap_or_default();
        Self { entries }
    }

    /// Resolve `key` to its display string, or the key itself when
    /// unresolved.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses_and_resolves() {
        let labels = Labels::load("en");
        assert_eq!(labels.translate("sidebar.title"), "Theme Tools");
        assert_eq!(labels.translate("menu.export_zip"), "Export Zip");
    }

    #[test]
    fn test_unresolved_key_falls_back_to_itself() {
        let labels = Labels::load("en");
        assert_eq!(labels.translate("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let labels = Labels::load("xx");
        assert_eq!(labels.translate("sidebar.title"), "Theme Tools");
    }
}
