//! The file-open pipeline's domain types: incoming references, the
//! opaque viewer handle, download tickets, and the per-attempt state
//! machine.

mod reference;
mod state;

pub use reference::FileReference;
pub use state::{DownloadAck, OpenAttempt, OpenState, OpenStateError, ResolveKind};

use serde::{Deserialize, Serialize};

/// Name under which the viewer handle is persisted across screen
/// recreation.
pub const VIEWER_HANDLE_KEY: &str = "mobileSurfaceId";

/// Display name used when a content provider yields no name for its
/// payload.
pub const UNKNOWN_DISPLAY_NAME: &str = "unknown";

/// Opaque state token issued by the viewer bridge.
///
/// The bridge owns its meaning; this side only stores and returns it.
/// The null handle tells the bridge to create fresh state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewerHandle(i64);

impl ViewerHandle {
    pub const NULL: ViewerHandle = ViewerHandle(0);

    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> i64 {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

/// Identifies one enqueued download. Completion notifications are only
/// acted on when their ticket matches, since the notification channel
/// may carry completions for downloads outside this app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DownloadTicket(u64);

impl DownloadTicket {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}
