use crate::core::geometry::Rect;
use crate::domain::SceneError;

use super::phase_timing::{now_ms, timed};
use super::SceneCore;

pub(super) fn step(scene: &mut SceneCore, pointer_x: f32, pointer_y: f32) -> Result<(), SceneError> {
    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
    }
    let step_start = perf_on.then(now_ms);

    // === PHYSICS ===
    // Bodies retired during last frame's sync (at most the tolerance) are reaped here,
    // so until now they were still counted and drawn.
    let reaped = timed(perf_on, &mut scene.perf_stats.physics_ms, || scene.physics.step());

    // === CAMERA ===
    if pointer_x.is_finite() && pointer_y.is_finite() {
        scene.query = Rect::centered_at(pointer_x, pointer_y, scene.query.width, scene.query.height);
    } else {
        console_warn!(
            "scene: frame {} ignoring non-finite pointer ({}, {})",
            scene.frame,
            pointer_x,
            pointer_y
        );
    }

    // === POOL SYNC ===
    let report = timed(perf_on, &mut scene.perf_stats.sync_ms, || {
        scene.pool.sync(&scene.query, &scene.regions, &mut scene.physics)
    })?;

    let constructed = report.constructed();
    let destroyed = report.destroyed();
    scene.constructed_total += constructed as u64;
    scene.destroyed_total += destroyed as u64;

    if !report.events.is_empty() {
        console_log!(
            "scene: frame {} +{} -{} entities ({} occupied, {} bodies)",
            scene.frame,
            constructed,
            destroyed,
            report.occupied,
            report.physics_bodies
        );
    }

    if perf_on {
        scene.perf_stats.bodies_reaped = reaped as u32;
        scene.perf_stats.entities_constructed = constructed as u32;
        scene.perf_stats.entities_destroyed = destroyed as u32;
        scene.perf_stats.drift = report.drift as u32;
    }

    scene.last_report = report;
    scene.frame += 1;

    if let Some(start) = step_start {
        scene.perf_stats.step_ms = now_ms() - start;
    }
    Ok(())
}
