use crate::domain::{PhysicsConfig, SceneConfig};

use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
    if !enabled {
        scene.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}

pub(super) fn set_gravity(scene: &mut SceneCore, x: f32, y: f32) {
    if !(x.is_finite() && y.is_finite()) {
        console_warn!("scene: ignoring non-finite gravity ({}, {})", x, y);
        return;
    }
    scene.physics.set_gravity(x, y);
}

pub(super) fn set_sync_tolerance(scene: &mut SceneCore, tolerance: usize) {
    scene.pool.set_tolerance(tolerance);
    scene.physics.set_retire_limit(tolerance);
}

pub(super) fn current_config(scene: &SceneCore) -> SceneConfig {
    let gravity = scene.physics.gravity();
    SceneConfig {
        regions: scene.regions.clone(),
        query: scene.query,
        physics: PhysicsConfig {
            gravity_x: gravity.x,
            gravity_y: gravity.y,
            ..scene.config.physics.clone()
        },
        sync_tolerance: scene.pool.tolerance(),
    }
}
