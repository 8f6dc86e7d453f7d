use collider_pool_engine::{BodyRegistry, PoolEvent, Rect, SceneConfig, SceneCore, ENTITY_FOOTPRINT};
use collider_pool_engine::domain::DEFAULT_SYNC_TOLERANCE;

fn expected_overlaps(scene: &SceneCore) -> usize {
    let query = scene.query();
    scene.regions().iter().filter(|r| query.overlaps(r)).count()
}

#[test]
fn camera_path_over_four_colliders() {
    let mut scene = SceneCore::new(SceneConfig::default()).expect("default config");
    assert_eq!(scene.query(), Rect::new(10.0, 10.0, 200.0, 200.0));

    let mut counts = Vec::new();
    let mut events = Vec::new();
    for (px, py) in [(30.0, 400.0), (80.0, 400.0), (700.0, 50.0)] {
        let report = scene.step(px, py).expect("step");
        counts.push(report.occupied);
        events.extend(report.events.iter().copied());
    }

    assert_eq!(counts, vec![1, 2, 0]);
    assert_eq!(
        events,
        vec![
            PoolEvent::Constructed(0),
            PoolEvent::Constructed(1),
            PoolEvent::Destroyed(0),
            PoolEvent::Destroyed(1),
        ]
    );
}

#[test]
fn invariants_hold_along_a_wandering_pointer() {
    let mut scene = SceneCore::default();

    // Lissajous-ish path crossing the collider row many times
    for frame in 0..600 {
        let t = frame as f32 * 0.05;
        let px = 225.0 + 250.0 * (t * 0.7).sin();
        let py = 400.0 + 180.0 * (t * 1.3).cos();

        let before: Vec<bool> = (0..4).map(|i| scene.pool().is_occupied(i)).collect();
        let report = scene.step(px, py).expect("step").clone();

        let expected = expected_overlaps(&scene);
        assert_eq!(report.occupied, expected, "frame {frame}");
        assert_eq!(scene.pool().occupied_count(), expected);
        assert_eq!(
            scene.pool().allocated_bytes(),
            scene.pool().occupied_count() * ENTITY_FOOTPRINT
        );

        // Events only where the slot state actually flipped
        for (i, was) in before.iter().enumerate() {
            let now = scene.pool().is_occupied(i);
            let constructed = report.events.contains(&PoolEvent::Constructed(i));
            let destroyed = report.events.contains(&PoolEvent::Destroyed(i));
            assert_eq!(constructed, !was && now, "slot {i} frame {frame}");
            assert_eq!(destroyed, *was && !now, "slot {i} frame {frame}");
        }

        // Live bodies are exactly the occupied slots; retired ones are the bounded lag
        assert_eq!(scene.physics().live_body_count(), report.occupied);
        assert_eq!(
            scene.physics().body_count(),
            report.occupied + report.destroyed().min(DEFAULT_SYNC_TOLERANCE)
        );
        assert!(report.drift <= DEFAULT_SYNC_TOLERANCE, "frame {frame}");
    }
}

#[test]
fn reoccupied_slot_gets_a_fresh_body() {
    let mut scene = SceneCore::default();

    scene.step(30.0, 400.0).expect("step");
    let first = scene.pool().get(0).expect("slot 0").body();

    scene.step(700.0, 50.0).expect("step");
    assert!(scene.pool().get(0).is_none());
    assert_eq!(scene.physics().body_position(first), None);

    scene.step(30.0, 400.0).expect("step");
    let second = scene.pool().get(0).expect("slot 0 again").body();
    assert_ne!(first, second);
    assert!(scene.physics().body_position(second).is_some());
}

#[test]
fn wandering_pointer_never_warns() {
    let mut scene = SceneCore::default();
    for frame in 0..600 {
        let t = frame as f32 * 0.05;
        scene.step(225.0 + 900.0 * t.sin(), 400.0 + 600.0 * (t * 1.7).cos()).expect("step");
    }
    assert_eq!(scene.stats().drift_warnings(), 0);
}
