//! Geometry primitives shared by the pool, the physics world and rendering

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
