//! PhysicsWorld - minimal 2D rigid body world backing the pooled entities
//!
//! Bodies are axis-aligned rectangles integrated with gravity at a fixed step.
//! No contacts and no rotation.
//!
//! Removal is deferred: unregistering a body detaches its handle at once,
//! but the world keeps reporting it until the next `step` reaps it. At most
//! `retire_limit` bodies wait like this; older ones are reaped on the spot,
//! so `body_count()` never trails the live count by more than the limit.

mod registry;
mod system;

pub use registry::{BodyHandle, BodyRegistry};
pub use system::{PhysicsWorld, BODY_VERTEX_COUNT};
