use crate::domain::SceneConfig;
use crate::pool::{Pool, SyncReport};
use crate::systems::physics_world::PhysicsWorld;

use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::SceneCore;

/// Build a scene. `config` must already be validated.
pub(super) fn create_scene_core(config: SceneConfig) -> SceneCore {
    let count = config.regions.len();
    let mut physics = PhysicsWorld::new(&config.physics);
    // Physics may trail the pool by exactly what the drift check tolerates
    physics.set_retire_limit(config.sync_tolerance);

    SceneCore {
        regions: config.regions.clone(),
        query: config.query,
        pool: Pool::with_tolerance(count, config.sync_tolerance),
        physics,
        frame: 0,
        last_report: SyncReport::default(),
        constructed_total: 0,
        destroyed_total: 0,

        render: RenderBuffers {
            entity_rects: Vec::with_capacity(count * super::ENTITY_RECT_STRIDE),
            debug_vertices: Vec::with_capacity(count * 4 * super::DEBUG_VERTEX_STRIDE),
            debug_body_count: 0,
            region_rects: Vec::with_capacity(count * super::REGION_RECT_STRIDE),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}
