pub mod physics_body;
pub mod physics_world;
