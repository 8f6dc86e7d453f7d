use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) sync_ms: f64,
    pub(super) bodies_reaped: u32,
    pub(super) entities_constructed: u32,
    pub(super) entities_destroyed: u32,
    pub(super) drift: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn sync_ms(&self) -> f64 { self.sync_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_reaped(&self) -> u32 { self.bodies_reaped }
    #[wasm_bindgen(getter)]
    pub fn entities_constructed(&self) -> u32 { self.entities_constructed }
    #[wasm_bindgen(getter)]
    pub fn entities_destroyed(&self) -> u32 { self.entities_destroyed }
    #[wasm_bindgen(getter)]
    pub fn drift(&self) -> u32 { self.drift }
}
