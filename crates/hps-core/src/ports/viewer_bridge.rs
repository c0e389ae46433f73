use std::path::Path;

use crate::open::ViewerHandle;

/// Camera/selection operator the viewer applies to touch input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Orbit,
    ZoomArea,
    SelectPoint,
    SelectArea,
    Fly,
}

/// Rendering mode toggles exposed on the viewer toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Smooth,
    HiddenLine,
}

/// The native viewer, consumed as an opaque collaborator.
///
/// `load` is blocking and must run off the interactive thread; it is
/// also the only operation with a failure signal. Everything else is
/// one-way. Requesting cancellation of a load does not interrupt it;
/// the call runs to completion.
pub trait ViewerBridgePort: Send + Sync {
    /// Initialize the surface. Nothing may be loaded until this
    /// reports true.
    fn bind(&self) -> bool;

    /// Blocking file load into the bound surface.
    fn load(&self, path: &Path) -> bool;

    /// The opaque state token for save/restore. Owned and interpreted
    /// by the bridge only.
    fn handle(&self) -> ViewerHandle;

    /// Reattach previously held state instead of loading a file.
    fn attach(&self, handle: ViewerHandle);

    /// Whether the optional exchange import library is linked into this
    /// bridge.
    fn supports_exchange_import(&self) -> bool;

    /// Directory the viewer resolves fonts from.
    fn set_font_directory(&self, path: &Path);

    /// Directory the viewer resolves materials from.
    fn set_materials_directory(&self, path: &Path);

    fn set_operator(&self, operator: Operator);

    fn set_render_mode(&self, mode: RenderMode);

    fn set_simple_shadow(&self, enabled: bool);

    fn toggle_frame_rate(&self);

    fn run_user_code(&self, slot: u8);

    fn text_input(&self, text: &str);

    fn clear_touches(&self);
}
