//! Screen navigator - path-addressed screen registry
//!
//! Screens are registered up front under path strings ("/", "/save",
//! "/clone/create"). A single cursor tracks the active screen; moving it
//! is the only mutation after registration.

use thiserror::Error;

/// Errors raised while registering screens.
///
/// These indicate a caller bug and are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("screen path already registered: {0}")]
    DuplicatePath(String),
    #[error("parent screen not registered for path: {0}")]
    UnknownParent(String),
}

/// Errors raised while navigating. Recoverable; the caller should treat
/// them as a no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigateError {
    #[error("unknown screen path: {0}")]
    UnknownPath(String),
}

/// A registered screen: its path, derived parent path, and an opaque
/// content descriptor supplied by the caller.
#[derive(Debug)]
struct Screen<C> {
    path: String,
    parent: Option<String>,
    content: C,
}

/// Derive the parent path: all but the last segment, or None for "/".
fn parent_of(path: &str) -> Option<String> {
    if path == "/" {
        return None;
    }
    match path.rfind('/') {
        Some(0) => Some("/".to_string()),
        Some(idx) => Some(path[..idx].to_string()),
        None => Some("/".to_string()),
    }
}

/// Path-addressed screen registry with a single current-path cursor.
///
/// `C` is the content descriptor associated with each screen; the
/// navigator never looks inside it.
#[derive(Debug)]
pub struct Navigator<C> {
    screens: Vec<Screen<C>>,
    current: String,
}

impl<C> Navigator<C> {
    /// Create a navigator with the root screen. The cursor starts at "/".
    pub fn new(root_content: C) -> Self {
        Self {
            screens: vec![Screen {
                path: "/".to_string(),
                parent: None,
                content: root_content,
            }],
            current: "/".to_string(),
        }
    }

    fn find(&self, path: &str) -> Option<&Screen<C>> {
        self.screens.iter().find(|s| s.path == path)
    }

    /// Register a screen under `path`.
    ///
    /// The parent path is derived from the path itself and must already
    /// be registered; misconfiguration fails here, never during
    /// navigation. On error the registry is left untouched.
    pub fn register(&mut self, path: &str, content: C) -> Result<(), RegisterError> {
        if self.find(path).is_some() {
            return Err(RegisterError::DuplicatePath(path.to_string()));
        }
        let parent = parent_of(path);
        if let Some(ref parent_path) = parent {
            if self.find(parent_path).is_none() {
                return Err(RegisterError::UnknownParent(path.to_string()));
            }
        }
        self.screens.push(Screen {
            path: path.to_string(),
            parent,
            content,
        });
        Ok(())
    }

    /// Move the cursor to `path`. On an unknown path the cursor is left
    /// unchanged.
    pub fn navigate_to(&mut self, path: &str) -> Result<(), NavigateError> {
        if self.find(path).is_none() {
            return Err(NavigateError::UnknownPath(path.to_string()));
        }
        self.current = path.to_string();
        Ok(())
    }

    /// Move the cursor to the current screen's parent. No-op at the root.
    pub fn navigate_to_parent(&mut self) {
        let parent = self.find(&self.current).and_then(|s| s.parent.clone());
        if let Some(parent) = parent {
            self.current = parent;
        }
    }

    /// Path of the active screen.
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// Content descriptor of the active screen.
    pub fn current(&self) -> &C {
        // The cursor only ever holds registered paths.
        &self.find(&self.current).expect("cursor on registered path").content
    }

    /// True when the cursor is on the root screen.
    pub fn at_root(&self) -> bool {
        self.current == "/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Navigator<&'static str> {
        let mut nav = Navigator::new("menu");
        nav.register("/save", "save").unwrap();
        nav.register("/clone", "clone").unwrap();
        nav.register("/clone/create", "clone-create").unwrap();
        nav
    }

    #[test]
    fn test_navigate_then_current() {
        let mut nav = sample();
        nav.navigate_to("/save").unwrap();
        assert_eq!(*nav.current(), "save");
        nav.navigate_to("/clone/create").unwrap();
        assert_eq!(*nav.current(), "clone-create");
        assert_eq!(nav.current_path(), "/clone/create");
    }

    #[test]
    fn test_parent_navigation() {
        let mut nav = sample();
        nav.navigate_to("/clone/create").unwrap();
        nav.navigate_to_parent();
        assert_eq!(nav.current_path(), "/clone");
        nav.navigate_to_parent();
        assert_eq!(nav.current_path(), "/");
    }

    #[test]
    fn test_parent_at_root_is_noop() {
        let mut nav = sample();
        nav.navigate_to_parent();
        assert_eq!(nav.current_path(), "/");
        assert!(nav.at_root());
    }

    #[test]
    fn test_unknown_path_leaves_cursor_unchanged() {
        let mut nav = sample();
        nav.navigate_to("/save").unwrap();
        let err = nav.navigate_to("/missing").unwrap_err();
        assert_eq!(err, NavigateError::UnknownPath("/missing".to_string()));
        assert_eq!(nav.current_path(), "/save");
    }

    #[test]
    fn test_duplicate_registration_fails_without_mutation() {
        let mut nav = sample();
        let err = nav.register("/save", "other").unwrap_err();
        assert_eq!(err, RegisterError::DuplicatePath("/save".to_string()));
        nav.navigate_to("/save").unwrap();
        // The original descriptor is still in place.
        assert_eq!(*nav.current(), "save");
    }

    #[test]
    fn test_orphan_parent_rejected_at_registration() {
        let mut nav = Navigator::new("menu");
        let err = nav.register("/a/b", "deep").unwrap_err();
        assert_eq!(err, RegisterError::UnknownParent("/a/b".to_string()));
        // Registration failed fast; navigation still knows nothing of it.
        assert!(nav.navigate_to("/a/b").is_err());
    }

    #[test]
    fn test_parent_derivation() {
        assert_eq!(parent_of("/"), None);
        assert_eq!(parent_of("/save"), Some("/".to_string()));
        assert_eq!(parent_of("/clone/create"), Some("/clone".to_string()));
    }
}
