use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};

use hps_core::open::ViewerHandle;
use hps_core::ports::{Operator, RenderMode, ViewerBridgePort};
use log::{debug, info, warn};

static NEXT_HANDLE: AtomicI64 = AtomicI64::new(1);

/// Diagnostic stand-in for the native viewer.
///
/// Logs every call and treats a load as successful when the file can be
/// opened, so the shell runs end to end without the native SDK linked
/// in. Real deployments provide their own `ViewerBridgePort`.
pub struct LoggingViewerBridge {
    handle: AtomicI64,
    exchange_import: bool,
}

impl LoggingViewerBridge {
    pub fn new() -> Self {
        Self {
            handle: AtomicI64::new(0),
            exchange_import: false,
        }
    }

    pub fn with_exchange_import(mut self, enabled: bool) -> Self {
        self.exchange_import = enabled;
        self
    }
}

impl Default for LoggingViewerBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerBridgePort for LoggingViewerBridge {
    fn bind(&self) -> bool {
        if self.handle.load(Ordering::Relaxed) == 0 {
            self.handle
                .store(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed), Ordering::Relaxed);
        }
        info!("viewer surface bound");
        true
    }

    fn load(&self, path: &Path) -> bool {
        match std::fs::File::open(path) {
            Ok(_) => {
                info!("viewer loaded {}", path.display());
                true
            }
            Err(err) => {
                warn!("viewer load of {} failed: {err}", path.display());
                false
            }
        }
    }

    fn handle(&self) -> ViewerHandle {
        ViewerHandle::from_raw(self.handle.load(Ordering::Relaxed))
    }

    fn attach(&self, handle: ViewerHandle) {
        self.handle.store(handle.as_raw(), Ordering::Relaxed);
        info!("viewer reattached to handle {}", handle.as_raw());
    }

    fn supports_exchange_import(&self) -> bool {
        self.exchange_import
    }

    fn set_font_directory(&self, path: &Path) {
        debug!("font directory set to {}", path.display());
    }

    fn set_materials_directory(&self, path: &Path) {
        debug!("materials directory set to {}", path.display());
    }

    fn set_operator(&self, operator: Operator) {
        debug!("operator set to {operator:?}");
    }

    fn set_render_mode(&self, mode: RenderMode) {
        debug!("render mode set to {mode:?}");
    }

    fn set_simple_shadow(&self, enabled: bool) {
        debug!("simple shadow {}", if enabled { "on" } else { "off" });
    }

    fn toggle_frame_rate(&self) {
        debug!("frame rate overlay toggled");
    }

    fn run_user_code(&self, slot: u8) {
        debug!("user code {slot} triggered");
    }

    fn text_input(&self, text: &str) {
        debug!("text input forwarded ({} chars)", text.len());
    }

    fn clear_touches(&self) {
        debug!("touch state cleared");
    }
}
