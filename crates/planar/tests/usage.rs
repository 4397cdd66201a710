//! Integration test: end-to-end use through the facade.

use planar::prelude::*;
use planar::validity;

#[test]
fn body_update_through_views() {
    planar::init();
    let body = Transform::from_position(&Vec2::new(0.0, 10.0));
    let velocity = Vec2::new(1.0, -2.0);

    for _ in 0..3 {
        body.position().add(&velocity);
    }
    body.rotation().set_angle(0.5);

    assert_eq!((body.x(), body.y()), (3.0, 4.0));
    assert!(validity::is_valid_vec2(&body.position()));
    assert!(validity::is_valid_rotation(&body.rotation()));
    assert_eq!(body.to_string(), "Transform{p=(3.00, 4.00), q=0.50}");
}

#[test]
fn degenerate_math_is_detected_afterwards() {
    planar::init();
    let mut v = Vec2::zero();
    v.normalize_to(2.0);
    assert!(!v.is_valid());
    assert!(!validity::is_valid_vec2(&v));

    let mut q = Rot::identity();
    q.set(0.0, 0.0);
    assert!(!validity::is_valid_rotation(&q));
}

#[test]
fn arena_release_point() {
    let config = ArenaConfig::new().with_region_bytes(64).with_max_regions(1);
    let arena = ScopedArena::with_config(config).unwrap();
    let mut values = Vec::new();
    for i in 0..8 {
        values.push(Vec2::new_in(&arena, i as f32, 0.0).unwrap());
    }
    let err = Vec2::new_in(&arena, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, ArenaError::CapacityExceeded { .. }));
    assert_eq!(values[7].x(), 7.0);
}
