use crate::core::geometry::Rect;
use crate::systems::physics_world::{BodyHandle, BodyRegistry};

/// Heap record for one collider that currently overlaps the camera.
///
/// Owns its physics body: `spawn` registers it, `release` unregisters it.
/// There is no other way to create or drop the body through this type.
#[derive(Debug, PartialEq)]
pub struct PooledEntity {
    index: usize,
    bounds: Rect,
    body: BodyHandle,
}

impl PooledEntity {
    pub(crate) fn spawn<R: BodyRegistry + ?Sized>(index: usize, bounds: Rect, registry: &mut R) -> Box<Self> {
        let body = registry.register_body(&bounds);
        Box::new(Self { index, bounds, body })
    }

    /// Unregister the body and drop the entity in one step.
    pub(crate) fn release<R: BodyRegistry + ?Sized>(self: Box<Self>, registry: &mut R) {
        if !registry.unregister_body(self.body) {
            console_warn!(
                "pool: slot {} released body {} the physics world no longer knew",
                self.index,
                self.body.id()
            );
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Collider bounds copied when the entity was created
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }

    /// Where to draw the entity: its bounds size centered on the body.
    ///
    /// Falls back to the spawn bounds if the body cannot be resolved.
    pub fn render_rect<R: BodyRegistry + ?Sized>(&self, registry: &R) -> Rect {
        let center = registry
            .body_position(self.body)
            .unwrap_or_else(|| self.bounds.center());
        Rect::centered_at(center.x, center.y, self.bounds.width, self.bounds.height)
    }
}
