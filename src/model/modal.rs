//! Modal visibility registry
//!
//! The sidebar's modals are a fixed, closed set of independent overlays.
//! Unlike a modal stack, any combination may be open at once; each flag
//! only ever reflects the most recent open/close call for its own id.

/// The fixed set of modal overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    /// Read-only viewer for the theme's theme.json
    ThemeJsonEditor,
    /// Read-only viewer for the user style overrides
    GlobalStylesEditor,
    /// Theme metadata editor
    MetadataEditor,
}

impl ModalId {
    /// All modal ids in rendering order (later entries draw on top).
    pub fn all() -> [ModalId; 3] {
        [
            ModalId::ThemeJsonEditor,
            ModalId::GlobalStylesEditor,
            ModalId::MetadataEditor,
        ]
    }
}

/// Independent open/closed flags, one per modal id.
#[derive(Debug, Default)]
pub struct ModalFlags {
    theme_json_editor: bool,
    global_styles_editor: bool,
    metadata_editor: bool,
}

impl ModalFlags {
    pub fn new() -> Self {
        Self::default()
    }

    fn flag_mut(&mut self, id: ModalId) -> &mut bool {
        match id {
            ModalId::ThemeJsonEditor => &mut self.theme_json_editor,
            ModalId::GlobalStylesEditor => &mut self.global_styles_editor,
            ModalId::MetadataEditor => &mut self.metadata_editor,
        }
    }

    /// Open a modal. Opening an already-open modal is a no-op.
    pub fn open(&mut self, id: ModalId) {
        *self.flag_mut(id) = true;
    }

    /// Close a modal. Closing an already-closed modal is a no-op.
    pub fn close(&mut self, id: ModalId) {
        *self.flag_mut(id) = false;
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        match id {
            ModalId::ThemeJsonEditor => self.theme_json_editor,
            ModalId::GlobalStylesEditor => self.global_styles_editor,
            ModalId::MetadataEditor => self.metadata_editor,
        }
    }

    /// Ids of all currently open modals, in rendering order.
    pub fn open_modals(&self) -> Vec<ModalId> {
        ModalId::all()
            .into_iter()
            .filter(|id| self.is_open(*id))
            .collect()
    }

    /// The topmost open modal, if any. Key events go here first.
    pub fn top(&self) -> Option<ModalId> {
        self.open_modals().into_iter().last()
    }

    pub fn any_open(&self) -> bool {
        self.top().is_some()
    }
}
