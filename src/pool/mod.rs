//! Pool - fixed-capacity, collision-driven entity slots
//!
//! Slot `i` mirrors collider `i`: it holds an entity exactly while the
//! collider overlaps the camera rectangle. `sync` runs once per frame and
//! only touches slots whose overlap state changed, so a stable overlap never
//! churns its entity or its physics body.
//!
//! After each pass the occupied count is compared with the physics world's
//! body count. The two may differ by a few bodies because the world reaps
//! removed bodies one step late; anything past the tolerance is logged and
//! counted, never fatal.

mod entity;

pub use entity::PooledEntity;

use crate::core::geometry::Rect;
use crate::domain::{PoolError, DEFAULT_SYNC_TOLERANCE};
use crate::systems::physics_world::BodyRegistry;

/// Bytes accounted per occupied slot
pub const ENTITY_FOOTPRINT: usize = std::mem::size_of::<PooledEntity>();

/// Slot transition applied during a sync pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolEvent {
    Constructed(usize),
    Destroyed(usize),
}

/// Outcome of one `Pool::sync` pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Transitions in the order they were applied (index order)
    pub events: Vec<PoolEvent>,
    pub occupied: usize,
    /// Registry body count right after the pass
    pub physics_bodies: usize,
    /// |occupied - physics_bodies|
    pub drift: usize,
}

impl SyncReport {
    pub fn within_tolerance(&self, tolerance: usize) -> bool {
        self.drift <= tolerance
    }

    pub fn constructed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PoolEvent::Constructed(_)))
            .count()
    }

    pub fn destroyed(&self) -> usize {
        self.events.len() - self.constructed()
    }
}

pub struct Pool {
    slots: Vec<Option<Box<PooledEntity>>>,
    occupied: usize,
    allocated_bytes: usize,
    tolerance: usize,
    drift_warnings: u32,
}

impl Pool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            occupied: 0,
            allocated_bytes: 0,
            tolerance: DEFAULT_SYNC_TOLERANCE,
            drift_warnings: 0,
        }
    }

    pub fn with_tolerance(capacity: usize, tolerance: usize) -> Self {
        let mut pool = Self::new(capacity);
        pool.tolerance = tolerance;
        pool
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    pub fn allocated_bytes(&self) -> usize {
        self.allocated_bytes
    }

    pub fn tolerance(&self) -> usize {
        self.tolerance
    }

    pub fn set_tolerance(&mut self, tolerance: usize) {
        self.tolerance = tolerance;
    }

    /// Passes whose drift exceeded the tolerance
    pub fn drift_warnings(&self) -> u32 {
        self.drift_warnings
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    pub fn get(&self, index: usize) -> Option<&PooledEntity> {
        self.slots.get(index)?.as_deref()
    }

    /// Occupied entities in slot order
    pub fn iter_occupied(&self) -> impl Iterator<Item = &PooledEntity> {
        self.slots.iter().filter_map(|s| s.as_deref())
    }

    /// Bring every slot in line with the current overlap state.
    pub fn sync<R: BodyRegistry + ?Sized>(
        &mut self,
        query: &Rect,
        regions: &[Rect],
        registry: &mut R,
    ) -> Result<SyncReport, PoolError> {
        if regions.len() != self.slots.len() {
            return Err(PoolError::RegionCountMismatch {
                capacity: self.slots.len(),
                regions: regions.len(),
            });
        }

        let mut events = Vec::new();
        for (index, region) in regions.iter().enumerate() {
            let overlapping = query.overlaps(region);
            match (overlapping, self.slots[index].is_some()) {
                (true, false) => {
                    self.slots[index] = Some(PooledEntity::spawn(index, *region, registry));
                    self.occupied += 1;
                    self.allocated_bytes += ENTITY_FOOTPRINT;
                    events.push(PoolEvent::Constructed(index));
                }
                (false, true) => {
                    self.clear_slot(index, registry);
                    events.push(PoolEvent::Destroyed(index));
                }
                // Stable overlap state: nothing to do
                _ => {}
            }
        }

        let physics_bodies = registry.body_count();
        let report = SyncReport {
            events,
            occupied: self.occupied,
            physics_bodies,
            drift: self.occupied.abs_diff(physics_bodies),
        };

        if !report.within_tolerance(self.tolerance) {
            self.drift_warnings = self.drift_warnings.saturating_add(1);
            console_warn!(
                "pool: {} entities vs {} physics bodies (drift {} > tolerance {})",
                report.occupied,
                report.physics_bodies,
                report.drift,
                self.tolerance
            );
        }

        Ok(report)
    }

    /// Release the entity in `index`, if any.
    ///
    /// Returns `false` when the slot was already empty or out of range.
    pub fn clear_slot<R: BodyRegistry + ?Sized>(&mut self, index: usize, registry: &mut R) -> bool {
        let Some(entity) = self.slots.get_mut(index).and_then(Option::take) else {
            return false;
        };
        entity.release(registry);
        self.occupied -= 1;
        self.allocated_bytes -= ENTITY_FOOTPRINT;
        true
    }

    /// Release every entity. Returns how many were released.
    pub fn teardown<R: BodyRegistry + ?Sized>(&mut self, registry: &mut R) -> usize {
        let mut released = 0;
        for index in 0..self.slots.len() {
            if self.clear_slot(index, registry) {
                released += 1;
            }
        }
        released
    }
}

impl Drop for Pool {
    fn drop(&mut self) {
        // Entities cannot reach the registry from here; their bodies stay registered.
        if self.occupied > 0 {
            console_warn!(
                "pool: dropped with {} occupied slots without teardown",
                self.occupied
            );
        }
    }
}
