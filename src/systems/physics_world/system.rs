use crate::core::geometry::{Rect, Vec2};
use crate::domain::{PhysicsConfig, DEFAULT_SYNC_TOLERANCE};
use crate::systems::physics_body::PhysicsBody;

use super::registry::{BodyHandle, BodyRegistry};

/// Vertices per body (all bodies are rectangles)
pub const BODY_VERTEX_COUNT: usize = 4;

/// Manages all physics bodies in the scene
pub struct PhysicsWorld {
    bodies: Vec<PhysicsBody>,
    next_id: u64,
    /// Most retired bodies kept around before the next step
    retire_limit: usize,
    gravity: Vec2,
    fixed_dt: f32,
    density: f32,
    max_speed: f32,
}

impl PhysicsWorld {
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            retire_limit: DEFAULT_SYNC_TOLERANCE,
            gravity: Vec2::new(config.gravity_x, config.gravity_y),
            fixed_dt: config.fixed_dt,
            density: config.density,
            max_speed: config.max_speed,
        }
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.gravity = Vec2::new(x, y);
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Cap how many unregistered bodies may wait for the next step.
    /// Bodies over the cap are reaped right away, oldest first.
    pub fn set_retire_limit(&mut self, limit: usize) {
        self.retire_limit = limit;
        self.reap_over_limit();
    }

    pub fn retire_limit(&self) -> usize {
        self.retire_limit
    }

    /// Bodies still owned by someone
    pub fn live_body_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.active).count()
    }

    /// Unregistered bodies waiting for the next step
    pub fn retired_body_count(&self) -> usize {
        self.bodies.len() - self.live_body_count()
    }

    /// Every body the world knows about, live or retired, in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = &PhysicsBody> {
        self.bodies.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.bodies.len() * BODY_VERTEX_COUNT
    }

    /// Full body lookup for live handles
    pub fn body(&self, handle: BodyHandle) -> Option<&PhysicsBody> {
        self.bodies.iter().find(|b| b.active && b.id == handle.0)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut PhysicsBody> {
        self.bodies.iter_mut().find(|b| b.active && b.id == handle.0)
    }

    /// Remove all bodies (used by reset). Ids keep counting up.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Drop the oldest retired bodies until at most `retire_limit` remain.
    fn reap_over_limit(&mut self) {
        let mut left = self.retired_body_count().saturating_sub(self.retire_limit);
        if left == 0 {
            return;
        }

        self.bodies.retain(|b| {
            if !b.active && left > 0 {
                left -= 1;
                false
            } else {
                true
            }
        });
    }

    /// Advance one fixed step.
    ///
    /// Retired bodies are reaped first so they never move after their owner let go.
    /// Returns how many were reaped.
    pub fn step(&mut self) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|b| b.active);
        let reaped = before - self.bodies.len();
        if reaped > 0 {
            console_log!("physics: reaped {} retired bodies", reaped);
        }

        for body in self.bodies.iter_mut() {
            body.integrate(self.gravity, self.fixed_dt, self.max_speed);
        }
        reaped
    }
}

impl BodyRegistry for PhysicsWorld {
    fn register_body(&mut self, bounds: &Rect) -> BodyHandle {
        // u64 ids do not run out at any realistic frame rate
        let id = self.next_id;
        self.next_id += 1;
        self.bodies.push(PhysicsBody::new_rect(bounds, self.density, id));
        BodyHandle(id)
    }

    fn unregister_body(&mut self, handle: BodyHandle) -> bool {
        match self.body_mut(handle) {
            Some(body) => {
                body.active = false;
                self.reap_over_limit();
                true
            }
            None => false,
        }
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn body_position(&self, handle: BodyHandle) -> Option<Vec2> {
        self.body(handle).map(|b| b.pos)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(&PhysicsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_world() -> PhysicsWorld {
        PhysicsWorld::new(&PhysicsConfig {
            gravity_x: 0.0,
            gravity_y: 0.0,
            ..PhysicsConfig::default()
        })
    }

    #[test]
    fn register_issues_fresh_handles() {
        let mut world = still_world();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let a = world.register_body(&rect);
        assert!(world.unregister_body(a));
        world.step();
        let b = world.register_body(&rect);
        assert_ne!(a, b);
        assert_eq!(world.body_position(a), None);
        assert_eq!(world.body_position(b), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn unregistered_body_is_counted_until_next_step() {
        let mut world = still_world();
        let h = world.register_body(&Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(world.body_count(), 1);

        assert!(world.unregister_body(h));
        assert_eq!(world.body_count(), 1);
        assert_eq!(world.live_body_count(), 0);
        assert_eq!(world.retired_body_count(), 1);
        assert_eq!(world.body_position(h), None);

        assert_eq!(world.step(), 1);
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn double_unregister_is_harmless() {
        let mut world = still_world();
        let h = world.register_body(&Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(world.unregister_body(h));
        assert!(!world.unregister_body(h));
        assert!(!world.unregister_body(BodyHandle(999)));
    }

    #[test]
    fn step_moves_live_bodies_under_gravity() {
        let mut world = PhysicsWorld::default();
        let h = world.register_body(&Rect::new(0.0, 0.0, 10.0, 10.0));
        world.step();
        let pos = world.body_position(h).expect("body should be live");
        assert_eq!(pos.x, 5.0);
        assert!(pos.y > 5.0);
    }

    #[test]
    fn vertex_count_covers_retired_bodies() {
        let mut world = still_world();
        let a = world.register_body(&Rect::new(0.0, 0.0, 10.0, 10.0));
        world.register_body(&Rect::new(20.0, 0.0, 10.0, 10.0));
        world.unregister_body(a);
        assert_eq!(world.vertex_count(), 2 * BODY_VERTEX_COUNT);
        world.step();
        assert_eq!(world.vertex_count(), BODY_VERTEX_COUNT);
    }

    #[test]
    fn clear_keeps_handles_unique() {
        let mut world = still_world();
        let before = world.register_body(&Rect::new(0.0, 0.0, 1.0, 1.0));
        world.clear();
        assert_eq!(world.body_count(), 0);
        let after = world.register_body(&Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_ne!(before, after);
        assert_eq!(world.body_position(before), None);
    }

    #[test]
    fn retired_bodies_never_exceed_the_limit() {
        let mut world = still_world();
        assert_eq!(world.retire_limit(), DEFAULT_SYNC_TOLERANCE);
        let handles: Vec<_> = (0..5)
            .map(|i| world.register_body(&Rect::new(i as f32 * 20.0, 0.0, 10.0, 10.0)))
            .collect();

        for h in &handles {
            assert!(world.unregister_body(*h));
            assert!(world.retired_body_count() <= 2);
        }
        assert_eq!(world.body_count(), 2);
        assert_eq!(world.live_body_count(), 0);

        // Oldest retirees went first
        let kept: Vec<u64> = world.bodies().map(|b| b.id).collect();
        assert_eq!(kept, vec![handles[3].id(), handles[4].id()]);

        assert_eq!(world.step(), 2);
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn lowering_the_limit_reaps_at_once() {
        let mut world = still_world();
        world.set_retire_limit(4);
        let live = world.register_body(&Rect::new(100.0, 0.0, 10.0, 10.0));
        for i in 0..3 {
            let h = world.register_body(&Rect::new(i as f32 * 20.0, 0.0, 10.0, 10.0));
            world.unregister_body(h);
        }
        assert_eq!(world.retired_body_count(), 3);

        world.set_retire_limit(0);
        assert_eq!(world.retired_body_count(), 0);
        assert_eq!(world.body_count(), 1);
        assert!(world.body_position(live).is_some());
    }
}
