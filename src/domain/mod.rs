pub mod config;
pub mod error;

pub use config::{PhysicsConfig, SceneConfig, DEFAULT_SYNC_TOLERANCE, MAX_COLLIDERS};
pub use error::{ConfigError, PoolError, SceneError};
