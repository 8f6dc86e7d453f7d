use wasm_bindgen::prelude::*;

use crate::core::geometry::Rect;
use crate::domain::SceneConfig;

use super::frame_stats::FrameStats;
use super::perf_stats::PerfStats;
use super::SceneCore;

fn to_js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct Scene {
    core: SceneCore,
}

#[wasm_bindgen]
impl Scene {
    /// Create the default four-collider scene
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SceneCore::default(),
        }
    }

    /// Create the five-collider scene
    #[wasm_bindgen(js_name = fiveLane)]
    pub fn five_lane() -> Self {
        // Built-in layout, validated in domain::config tests
        Self {
            core: super::init::create_scene_core(SceneConfig::five_lane()),
        }
    }

    /// Create a scene from a JSON config
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Scene, JsValue> {
        let core = SceneCore::from_json(&json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn region_count(&self) -> usize { self.core.region_count() }

    /// Advance one frame with the pointer at (x, y)
    pub fn step(&mut self, pointer_x: f32, pointer_y: f32) -> Result<(), JsValue> {
        self.core.step(pointer_x, pointer_y).map_err(to_js)?;
        Ok(())
    }

    /// Tear down all entities and restart from the startup config
    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === SLIDER API ===

    pub fn set_region(&mut self, index: usize, x: f32, y: f32, width: f32, height: f32) -> Result<(), JsValue> {
        self.core
            .set_region(index, Rect::new(x, y, width, height))
            .map_err(to_js)
    }

    pub fn set_query_size(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.set_query_size(width, height).map_err(to_js)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_sync_tolerance(&mut self, tolerance: usize) {
        self.core.set_sync_tolerance(tolerance);
    }

    // === STATS ===

    pub fn stats(&self) -> FrameStats {
        self.core.stats()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Live layout as JSON (what the sliders currently show)
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.current_config().to_json().map_err(to_js)
    }

    // === CAMERA ===

    #[wasm_bindgen(getter)]
    pub fn query_x(&self) -> f32 { self.core.query().x }
    #[wasm_bindgen(getter)]
    pub fn query_y(&self) -> f32 { self.core.query().y }
    #[wasm_bindgen(getter)]
    pub fn query_width(&self) -> f32 { self.core.query().width }
    #[wasm_bindgen(getter)]
    pub fn query_height(&self) -> f32 { self.core.query().height }

    // === RENDER API ===

    /// Fill entity rects ([x, y, w, h, slot] per entity). Returns rect count.
    pub fn collect_entity_rects(&mut self) -> usize {
        self.core.collect_entity_rects()
    }

    pub fn entity_rects_ptr(&self) -> *const f32 {
        self.core.entity_rects().as_ptr()
    }

    pub fn entity_rects_len(&self) -> usize {
        self.core.entity_rects().len()
    }

    /// Fill debug wireframe vertices ([x, y], 4 per body). Returns body count.
    pub fn collect_debug_vertices(&mut self) -> usize {
        self.core.collect_debug_vertices()
    }

    pub fn debug_vertices_ptr(&self) -> *const f32 {
        self.core.debug_vertices().as_ptr()
    }

    pub fn debug_vertices_len(&self) -> usize {
        self.core.debug_vertices().len()
    }

    /// Fill collider rects ([x, y, w, h] per collider). Returns rect count.
    pub fn collect_region_rects(&mut self) -> usize {
        self.core.collect_region_rects()
    }

    pub fn region_rects_ptr(&self) -> *const f32 {
        self.core.region_rects().as_ptr()
    }

    pub fn region_rects_len(&self) -> usize {
        self.core.region_rects().len()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Native access to the wrapped scene
    pub fn core(&self) -> &SceneCore {
        &self.core
    }
}
