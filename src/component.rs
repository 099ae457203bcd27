//! Component trait - Interface for UI components
//!
//! Every screen panel and modal implements this trait. Components never
//! mutate each other; they emit Actions and the App routes them.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The flow per input event:
/// 1. `handle_key_event` - Convert the key into a semantic Action
/// 2. `update` - Process the Action, possibly producing a follow-up
/// 3. `draw` - Render the component
pub trait Component {
    /// Initialize the component
    ///
    /// Called once before the event loop starts.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    ///
    /// Purely local: selection moves and text edits happen here, while
    /// anything touching shared state comes back as an Action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Update component state based on an Action
    ///
    /// May return a follow-up Action, which the caller feeds back in
    /// until the chain ends.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component into `area`. Rendering only, no state changes.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
