use super::SceneCore;

/// Floats per entity rect: x, y, w, h, slot
pub const ENTITY_RECT_STRIDE: usize = 5;
/// Floats per debug vertex: x, y
pub const DEBUG_VERTEX_STRIDE: usize = 2;
/// Floats per collider rect: x, y, w, h
pub const REGION_RECT_STRIDE: usize = 4;

pub(super) fn collect_entity_rects(scene: &mut SceneCore) -> usize {
    let buf = &mut scene.render.entity_rects;
    buf.clear();

    for entity in scene.pool.iter_occupied() {
        let r = entity.render_rect(&scene.physics);
        buf.extend_from_slice(&[r.x, r.y, r.width, r.height, entity.index() as f32]);
    }

    buf.len() / ENTITY_RECT_STRIDE
}

/// Wireframes for every body the physics world still knows, including
/// bodies whose slot was cleared this frame and have not been reaped yet.
pub(super) fn collect_debug_vertices(scene: &mut SceneCore) -> usize {
    let buf = &mut scene.render.debug_vertices;
    buf.clear();

    let mut bodies = 0;
    for body in scene.physics.bodies() {
        for v in body.vertices() {
            buf.push(v.x);
            buf.push(v.y);
        }
        bodies += 1;
    }

    scene.render.debug_body_count = bodies;
    bodies
}

pub(super) fn collect_region_rects(scene: &mut SceneCore) -> usize {
    let buf = &mut scene.render.region_rects;
    buf.clear();

    for r in &scene.regions {
        buf.extend_from_slice(&[r.x, r.y, r.width, r.height]);
    }

    scene.regions.len()
}
