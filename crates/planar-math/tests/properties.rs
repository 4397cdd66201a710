//! Property tests for the value types.

use std::f32::consts::{PI, TAU};

use planar_math::{Rot, Transform, Vec2};
use planar_test_utils::ready_engine;
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f32> {
    -1.0e6f32..1.0e6
}

#[test]
fn vec2_reference_values() {
    let v = Vec2::new(3.0, 4.0);
    let w = Vec2::new(2.0, 1.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(v.dot(&w), 10.0);
    assert_eq!(v.cross(&w), -5.0);

    let mut z = Vec2::zero();
    z.normalize();
    assert_eq!((z.x(), z.y()), (0.0, 0.0));

    let mut c = Vec2::new(1.0, 1.0);
    c.add_xy(2.0, 3.0).mul(2.0).sub_xy(1.0, 1.0);
    assert_eq!((c.x(), c.y()), (5.0, 7.0));
}

#[test]
fn identity_laws() {
    assert!(Rot::identity().is_identity());
    let t = Transform::identity();
    assert_eq!((t.x(), t.y(), t.angle()), (0.0, 0.0, 0.0));
}

#[test]
fn validity_reference_values() {
    ready_engine();
    assert!(!Vec2::new(f32::NAN, 1.0).is_valid());
    assert!(Vec2::new(1.0, 1.0).is_valid());
    assert!(!Rot::new(2.0, 2.0).is_valid());
}

proptest! {
    #[test]
    fn components_round_trip(a in any::<f32>(), b in any::<f32>()) {
        let v = Vec2::new(a, b);
        prop_assert_eq!(v.x().to_bits(), a.to_bits());
        prop_assert_eq!(v.y().to_bits(), b.to_bits());
    }

    #[test]
    fn vec2_copy_is_independent(a in finite(), b in finite(), c in finite()) {
        let v = Vec2::new(a, b);
        let mut copy = v.copy();
        copy.set_x(c).negate();
        prop_assert_eq!(v.x(), a);
        prop_assert_eq!(v.y(), b);
    }

    #[test]
    fn view_copy_is_independent(x in finite(), y in finite(), v in finite()) {
        let t = Transform::from_xy_angle(x, y, 0.0);
        let view = t.position();
        let mut copy = view.copy();
        copy.set_x(v);
        prop_assert_eq!(t.x(), x);
        t.position().set_y(v);
        prop_assert_eq!(copy.y(), y);
    }

    #[test]
    fn position_view_aliases(x in finite(), y in finite(), v in finite()) {
        let t = Transform::from_xy_angle(x, y, 0.0);
        t.position().set_x(v);
        prop_assert_eq!(t.x(), v);
        prop_assert_eq!(t.y(), y);
    }

    #[test]
    fn rot_angle_round_trip(theta in (-PI + 1.0e-6)..=PI) {
        // f32 π lies just past π, so it comes back as -π: compare on the circle.
        let q = Rot::from_radians(theta);
        let d = (q.angle() - theta).rem_euclid(TAU);
        prop_assert!(d.min(TAU - d) < 1.0e-4, "{} vs {}", q.angle(), theta);
    }

    #[test]
    fn rotations_from_angles_are_valid(theta in -10.0f32..10.0) {
        ready_engine();
        prop_assert!(Rot::from_radians(theta).is_valid());
    }

    #[test]
    fn transform_copy_is_deep(x in finite(), y in finite(), a in -3.0f32..3.0) {
        let t = Transform::from_xy_angle(x, y, a);
        let c = t.copy();
        c.position().set(0.0, 0.0);
        c.rotation().to_identity();
        prop_assert_eq!(t.x(), x);
        prop_assert_eq!(t.y(), y);
        prop_assert!((t.angle() - a).abs() < 1.0e-4);
    }

    #[test]
    fn normalize_gives_unit_length(x in finite(), y in finite()) {
        prop_assume!(x.abs() > 1.0e-3 || y.abs() > 1.0e-3);
        let mut v = Vec2::new(x, y);
        v.normalize();
        prop_assert!((v.length() - 1.0).abs() < 1.0e-4);
    }
}
