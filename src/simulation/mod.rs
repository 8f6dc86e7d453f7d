//! Scene - per-frame orchestration of camera, collider pool and physics
//!
//! One `step` per rendered frame:
//! 1. physics advances (and reaps bodies retired last frame)
//! 2. camera rectangle re-centers on the pointer
//! 3. pool syncs slots against collider overlap
//! 4. drift between pool and physics is checked
//!
//! Render buffers are filled on demand afterwards and never mutate the pool.

use crate::core::geometry::Rect;
use crate::domain::{ConfigError, SceneConfig, SceneError};
use crate::pool::{Pool, SyncReport};
use crate::systems::physics_world::PhysicsWorld;

#[path = "perf/phase_timing.rs"]
mod phase_timing;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Scene;
pub use frame_stats::FrameStats;
pub use perf_stats::PerfStats;
pub use render_extract::{DEBUG_VERTEX_STRIDE, ENTITY_RECT_STRIDE, REGION_RECT_STRIDE};

/// Flat f32 buffers handed to the host renderer
pub(crate) struct RenderBuffers {
    /// [x, y, w, h, slot] per occupied slot
    entity_rects: Vec<f32>,
    /// [x, y] per vertex, 4 vertices per known body
    debug_vertices: Vec<f32>,
    debug_body_count: usize,
    /// [x, y, w, h] per collider
    region_rects: Vec<f32>,
}

/// The collider scene
pub struct SceneCore {
    config: SceneConfig,
    regions: Vec<Rect>,
    query: Rect,
    pool: Pool,
    physics: PhysicsWorld,

    // State
    frame: u64,
    last_report: SyncReport,
    constructed_total: u64,
    destroyed_total: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore {
    /// Create a scene from a validated config
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(init::create_scene_core(config))
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = SceneConfig::from_json(json)?;
        Ok(init::create_scene_core(config))
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn region_count(&self) -> usize { self.regions.len() }

    pub fn regions(&self) -> &[Rect] { &self.regions }

    pub fn query(&self) -> Rect { self.query }

    pub fn pool(&self) -> &Pool { &self.pool }

    pub fn physics(&self) -> &PhysicsWorld { &self.physics }

    /// Report of the most recent sync pass
    pub fn last_report(&self) -> &SyncReport { &self.last_report }

    /// Advance one frame with the pointer at (pointer_x, pointer_y)
    pub fn step(&mut self, pointer_x: f32, pointer_y: f32) -> Result<&SyncReport, SceneError> {
        step::step(self, pointer_x, pointer_y)?;
        Ok(&self.last_report)
    }

    /// Tear down every entity and restart from the startup config
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    /// Move/resize collider `index` (slider input). Takes effect next frame.
    pub fn set_region(&mut self, index: usize, rect: Rect) -> Result<(), SceneError> {
        commands::set_region(self, index, rect)
    }

    /// Resize the camera rectangle around its current center
    pub fn set_query_size(&mut self, width: f32, height: f32) -> Result<(), SceneError> {
        commands::set_query_size(self, width, height)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn set_sync_tolerance(&mut self, tolerance: usize) {
        settings::set_sync_tolerance(self, tolerance);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Counters for the on-screen overlay
    pub fn stats(&self) -> FrameStats {
        FrameStats::collect(self)
    }

    /// Current live layout and tuning, e.g. to persist slider state
    pub fn current_config(&self) -> SceneConfig {
        settings::current_config(self)
    }

    // === RENDER API ===

    /// Fill the entity rect buffer. Returns number of rects.
    pub fn collect_entity_rects(&mut self) -> usize {
        render_extract::collect_entity_rects(self)
    }

    /// Fill the debug wireframe buffer. Returns number of bodies.
    pub fn collect_debug_vertices(&mut self) -> usize {
        render_extract::collect_debug_vertices(self)
    }

    /// Fill the collider rect buffer. Returns number of rects.
    pub fn collect_region_rects(&mut self) -> usize {
        render_extract::collect_region_rects(self)
    }

    pub fn entity_rects(&self) -> &[f32] { &self.render.entity_rects }

    pub fn debug_vertices(&self) -> &[f32] { &self.render.debug_vertices }

    pub fn debug_body_count(&self) -> usize { self.render.debug_body_count }

    pub fn region_rects(&self) -> &[f32] { &self.render.region_rects }
}

impl Default for SceneCore {
    fn default() -> Self {
        init::create_scene_core(SceneConfig::default())
    }
}

impl Drop for SceneCore {
    fn drop(&mut self) {
        self.pool.teardown(&mut self.physics);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
