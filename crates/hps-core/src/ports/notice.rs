/// Transient, dismissible user notices ("x Added to My Documents",
/// "File failed to load"). Fire-and-forget.
pub trait NoticePort: Send + Sync {
    fn notice(&self, message: &str);
}
