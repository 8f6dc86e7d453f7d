//! Collider Pool Engine - collision-driven entity pool in WASM
//!
//! A camera rectangle follows the pointer over a fixed row of colliders.
//! Every collider it overlaps gets a heap entity with its own physics body;
//! the entity and body go away as soon as the overlap ends.
//!
//! Architecture:
//! - core/        - Geometry and logging utilities
//! - domain/      - Config and error types
//! - systems/     - Physics bodies and the physics world
//! - pool/        - Collision-driven entity slots
//! - simulation/  - Frame orchestration, render buffers, JS facade

// Logging macros (must be first for macro scope!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod pool;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Collider pool engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default sync tolerance, for JS sliders
#[wasm_bindgen]
pub fn default_sync_tolerance() -> usize { domain::DEFAULT_SYNC_TOLERANCE }

/// Largest collider count a scene accepts
#[wasm_bindgen]
pub fn max_colliders() -> usize { domain::MAX_COLLIDERS }

// Re-export main types
pub use crate::core::geometry::{Rect, Vec2};
pub use domain::{ConfigError, PoolError, SceneConfig, SceneError};
pub use pool::{Pool, PoolEvent, PooledEntity, SyncReport, ENTITY_FOOTPRINT};
pub use simulation::{FrameStats, PerfStats, Scene, SceneCore};
pub use systems::physics_world::{BodyHandle, BodyRegistry, PhysicsWorld};
