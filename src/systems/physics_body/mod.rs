//! PhysicsBody - a solid rectangle that moves as a unit
//!
//! Bodies keep their center as position and their half extents as shape,
//! so the world-space outline is always recomputed from the current position.

mod body;

pub use body::PhysicsBody;
