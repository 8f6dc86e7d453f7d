use crate::core::geometry::Rect;
use crate::domain::SceneError;
use crate::pool::{Pool, SyncReport};

use super::SceneCore;

fn invalid(rect: Rect) -> SceneError {
    SceneError::InvalidRect {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
    }
}

pub(super) fn set_region(scene: &mut SceneCore, index: usize, rect: Rect) -> Result<(), SceneError> {
    let count = scene.regions.len();
    let Some(slot) = scene.regions.get_mut(index) else {
        return Err(SceneError::RegionOutOfRange { index, count });
    };
    if !rect.is_valid() {
        return Err(invalid(rect));
    }

    // An entity already in the slot keeps the bounds it was spawned with.
    *slot = rect;
    Ok(())
}

pub(super) fn set_query_size(scene: &mut SceneCore, width: f32, height: f32) -> Result<(), SceneError> {
    let center = scene.query.center();
    let resized = Rect::centered_at(center.x, center.y, width, height);
    if !resized.is_valid() {
        return Err(invalid(resized));
    }
    scene.query = resized;
    Ok(())
}

pub(super) fn reset(scene: &mut SceneCore) {
    let released = scene.pool.teardown(&mut scene.physics);
    scene.physics.clear();

    let gravity = (scene.config.physics.gravity_x, scene.config.physics.gravity_y);
    scene.physics.set_gravity(gravity.0, gravity.1);
    scene.physics.set_retire_limit(scene.config.sync_tolerance);
    // Old pool is empty after teardown; drift warnings restart at zero
    scene.pool = Pool::with_tolerance(scene.config.regions.len(), scene.config.sync_tolerance);
    scene.regions.clone_from(&scene.config.regions);
    scene.query = scene.config.query;

    scene.frame = 0;
    scene.last_report = SyncReport::default();
    scene.constructed_total = 0;
    scene.destroyed_total = 0;
    scene.perf_stats.reset();

    console_log!("scene: reset, released {} entities", released);
}
