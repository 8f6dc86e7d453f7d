use wasm_bindgen::prelude::*;

use crate::systems::physics_world::BodyRegistry;

use super::SceneCore;

/// Overlay counters: objects vs physics bodies, vertices, pool bytes
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    frame: u64,
    objects: u32,
    physics_bodies: u32,
    live_bodies: u32,
    vertices: u32,
    allocated_bytes: u32,
    drift: u32,
    drift_warnings: u32,
    constructed_total: u64,
    destroyed_total: u64,
}

impl FrameStats {
    pub(super) fn collect(scene: &SceneCore) -> Self {
        let pool = &scene.pool;
        let physics = &scene.physics;
        FrameStats {
            frame: scene.frame,
            objects: pool.occupied_count() as u32,
            physics_bodies: physics.body_count() as u32,
            live_bodies: physics.live_body_count() as u32,
            vertices: physics.vertex_count() as u32,
            allocated_bytes: pool.allocated_bytes() as u32,
            drift: scene.last_report.drift as u32,
            drift_warnings: pool.drift_warnings(),
            constructed_total: scene.constructed_total,
            destroyed_total: scene.destroyed_total,
        }
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn objects(&self) -> u32 { self.objects }
    #[wasm_bindgen(getter)]
    pub fn physics_bodies(&self) -> u32 { self.physics_bodies }
    #[wasm_bindgen(getter)]
    pub fn live_bodies(&self) -> u32 { self.live_bodies }
    #[wasm_bindgen(getter)]
    pub fn vertices(&self) -> u32 { self.vertices }
    #[wasm_bindgen(getter)]
    pub fn allocated_bytes(&self) -> u32 { self.allocated_bytes }
    #[wasm_bindgen(getter)]
    pub fn drift(&self) -> u32 { self.drift }
    #[wasm_bindgen(getter)]
    pub fn drift_warnings(&self) -> u32 { self.drift_warnings }
    #[wasm_bindgen(getter)]
    pub fn constructed_total(&self) -> u64 { self.constructed_total }
    #[wasm_bindgen(getter)]
    pub fn destroyed_total(&self) -> u64 { self.destroyed_total }
}
