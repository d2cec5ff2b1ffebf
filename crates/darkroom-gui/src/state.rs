use darkroom_core::revision::RevisionId;
use darkroom_core::viewport::Viewport;

/// Display state for one image pane: the uploaded texture plus the
/// zoom/pan viewport. `revision_id` records which revision the texture
/// was decoded from so the texture is only rebuilt on change.
#[derive(Default)]
pub struct PaneState {
    pub texture: Option<egui::TextureHandle>,
    /// Pixel size of the decoded image behind `texture`.
    pub image_size: Option<egui::Vec2>,
    pub revision_id: Option<RevisionId>,
    pub viewport: Viewport,
}

impl PaneState {
    pub fn clear(&mut self) {
        self.texture = None;
        self.image_size = None;
        self.revision_id = None;
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UiState {
    pub generate_prompt: String,
    pub revise_prompt: String,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UiState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
