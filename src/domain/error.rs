use thiserror::Error;

/// Scene configuration could not be parsed or is inconsistent.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON did not match the config schema.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A scene needs at least one collider.
    #[error("config has no collider regions")]
    NoRegions,
    /// More colliders than the pool supports.
    #[error("config has {count} regions, at most {max} are supported")]
    TooManyRegions { count: usize, max: usize },
    /// Region with non-finite position or negative size.
    #[error("region {index} is not a valid rectangle")]
    InvalidRegion { index: usize },
    /// Query rectangle with non-finite position or negative size.
    #[error("query rectangle is not valid")]
    InvalidQuery,
    /// Physics parameters that would break integration.
    #[error("invalid physics setting: {0}")]
    InvalidPhysics(&'static str),
}

/// Pool misuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// `sync` was handed a region list of the wrong length.
    #[error("pool has {capacity} slots but {regions} regions were supplied")]
    RegionCountMismatch { capacity: usize, regions: usize },
}

/// Runtime reconfiguration rejected by the scene.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("region index {index} out of range (scene has {count} regions)")]
    RegionOutOfRange { index: usize, count: usize },
    #[error("rectangle ({x}, {y}, {width}, {height}) is not valid")]
    InvalidRect { x: f32, y: f32, width: f32, height: f32 },
    #[error(transparent)]
    Pool(#[from] PoolError),
}
