use crate::core::geometry::{Rect, Vec2};

/// Rectangular dynamic body
pub struct PhysicsBody {
    // === Physics State ===
    /// World position (center of mass)
    pub pos: Vec2,
    /// Velocity (units per second)
    pub velocity: Vec2,
    /// Total mass (area * density)
    pub mass: f32,
    /// Unique ID for this body, never reused within a world
    pub id: u64,
    /// Still owned by an entity? Retired bodies wait for the next step to be reaped.
    pub active: bool,

    // === Shape ===
    pub half_width: f32,
    pub half_height: f32,
}

impl PhysicsBody {
    /// Create a rectangular body centered on `rect`
    pub fn new_rect(rect: &Rect, density: f32, id: u64) -> Self {
        // Degenerate rects still get a positive mass
        let mass = (rect.width * rect.height * density).max(f32::EPSILON);

        Self {
            pos: rect.center(),
            velocity: Vec2::zero(),
            mass,
            id,
            active: true,
            half_width: rect.width / 2.0,
            half_height: rect.height / 2.0,
        }
    }

    /// Current bounds in world space
    pub fn bounds(&self) -> Rect {
        Rect::centered_at(
            self.pos.x,
            self.pos.y,
            self.half_width * 2.0,
            self.half_height * 2.0,
        )
    }

    /// Shape vertices in world space, clockwise from top-left
    pub fn vertices(&self) -> [Vec2; 4] {
        self.bounds().corners()
    }

    /// Semi-implicit Euler step with a per-axis speed cap
    pub fn integrate(&mut self, gravity: Vec2, dt: f32, max_speed: f32) {
        self.velocity = (self.velocity + gravity * dt).clamp_axes(max_speed);
        self.pos = self.pos + self.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_body_is_centered_with_area_mass() {
        let body = PhysicsBody::new_rect(&Rect::new(101.0, 350.0, 100.0, 100.0), 12.0, 7);
        assert_eq!(body.pos, Vec2::new(151.0, 400.0));
        assert_eq!(body.mass, 100.0 * 100.0 * 12.0);
        assert_eq!(body.id, 7);
        assert!(body.active);
        assert_eq!(body.bounds(), Rect::new(101.0, 350.0, 100.0, 100.0));
    }

    #[test]
    fn integrate_accelerates_along_gravity() {
        let mut body = PhysicsBody::new_rect(&Rect::new(0.0, 0.0, 10.0, 10.0), 1.0, 1);
        body.integrate(Vec2::new(0.0, 10.0), 0.5, 1000.0);
        assert_eq!(body.velocity, Vec2::new(0.0, 5.0));
        assert_eq!(body.pos, Vec2::new(5.0, 7.5));
    }

    #[test]
    fn integrate_respects_speed_cap() {
        let mut body = PhysicsBody::new_rect(&Rect::new(0.0, 0.0, 10.0, 10.0), 1.0, 1);
        body.velocity = Vec2::new(-500.0, 500.0);
        body.integrate(Vec2::zero(), 1.0, 50.0);
        assert_eq!(body.velocity, Vec2::new(-50.0, 50.0));
    }
}
