use crate::core::geometry::{Rect, Vec2};

/// Opaque handle to a body registered with a physics backend.
///
/// Handles are never reused: a body registered after another was removed
/// always gets a new handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub(crate) u64);

impl BodyHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What the pool needs from a physics backend.
pub trait BodyRegistry {
    /// Create a body matching `bounds` and return its handle.
    fn register_body(&mut self, bounds: &Rect) -> BodyHandle;

    /// Detach the body. Returns `false` for handles that are unknown or
    /// already unregistered.
    fn unregister_body(&mut self, handle: BodyHandle) -> bool;

    /// Bodies the backend currently reports, which may still include
    /// recently unregistered ones.
    fn body_count(&self) -> usize;

    /// Center of a registered body.
    fn body_position(&self, handle: BodyHandle) -> Option<Vec2>;
}
