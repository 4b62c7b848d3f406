// Host-side tests for the per-frame point motion rule.

mod common;

use common::core::constants::*;
use common::core::point::*;
use glam::DVec2;

fn motion(pointer: Option<DVec2>) -> Motion {
    Motion {
        extent: DVec2::new(1000.0, 500.0),
        baseline: 0.5,
        dist: 200.0,
        scale: 1.0,
        pointer,
    }
}

#[test]
fn point_at_rest_on_baseline_stays_put_without_pointer() {
    let mut p = Point::new(0.3, 0.5);
    for _ in 0..100 {
        p.advance(&motion(None));
    }
    assert_eq!(p, Point::new(0.3, 0.5));
    assert!(!p.is_moving());
}

#[test]
fn pointer_within_radius_pushes_point_away_vertically() {
    // Point at (300, 250) px; pointer just above it pushes it down.
    let mut below = Point::new(0.3, 0.5);
    below.advance(&motion(Some(DVec2::new(300.0, 200.0))));
    assert!(below.vy > 0.0, "expected downward push, got {}", below.vy);
    assert!(below.y > 0.5);

    // Pointer just below pushes it up.
    let mut above = Point::new(0.3, 0.5);
    above.advance(&motion(Some(DVec2::new(300.0, 300.0))));
    assert!(above.vy < 0.0, "expected upward push, got {}", above.vy);
    assert!(above.y < 0.5);
}

#[test]
fn closer_pointer_pushes_harder() {
    let mut near = Point::new(0.3, 0.5);
    let mut far = Point::new(0.3, 0.5);
    near.advance(&motion(Some(DVec2::new(300.0, 240.0))));
    far.advance(&motion(Some(DVec2::new(300.0, 100.0))));
    assert!(near.vy.abs() > far.vy.abs());
    assert!(far.vy.abs() > 0.0);
}

#[test]
fn pointer_outside_radius_has_no_influence() {
    let mut p = Point::new(0.3, 0.5);
    // 250 px away with dist = 200
    p.advance(&motion(Some(DVec2::new(300.0, 500.0))));
    assert_eq!(p.vy, 0.0);
    assert_eq!(p.y, 0.5);
}

#[test]
fn radius_is_measured_in_logical_pixels() {
    // At scale 2, 300 buffer px is 150 logical px: inside a 200 px radius.
    let m = Motion {
        scale: 2.0,
        ..motion(Some(DVec2::new(300.0, 550.0)))
    };
    let mut p = Point::new(0.3, 0.5);
    p.advance(&m);
    assert!(p.vy < 0.0);
}

#[test]
fn non_finite_pointer_is_ignored() {
    for pointer in [
        DVec2::new(f64::NAN, 250.0),
        DVec2::new(300.0, f64::INFINITY),
    ] {
        let mut p = Point::new(0.3, 0.5);
        p.advance(&motion(Some(pointer)));
        assert_eq!(p, Point::new(0.3, 0.5));
    }
}

#[test]
fn velocity_decays_and_row_relaxes_back_to_baseline() {
    let mut p = Point::new(0.5, 0.5);
    p.vy = 50.0;
    let start = p.vy.abs();
    for _ in 0..400 {
        p.advance(&motion(None));
    }
    assert!(p.vy.abs() < start * 0.01);
    assert!(!p.is_moving());
    let offset_px = (p.y - 0.5) * 500.0;
    assert!(offset_px.abs() < 0.5, "still {offset_px} px off baseline");
}

#[test]
fn advance_is_deterministic() {
    let m = motion(Some(DVec2::new(480.0, 230.0)));
    let mut a = Point::new(0.5, 0.52);
    let mut b = a;
    a.vy = 3.0;
    b.vy = 3.0;
    for _ in 0..25 {
        let pa = a.advance(&m);
        let pb = b.advance(&m);
        assert_eq!(pa, pb);
    }
    assert_eq!(a, b);
}

#[test]
fn advance_never_touches_x() {
    let mut p = Point::new(0.42, 0.5);
    p.vy = 12.0;
    for _ in 0..10 {
        p.advance(&motion(Some(DVec2::new(420.0, 260.0))));
    }
    assert_eq!(p.x, 0.42);
}

#[test]
fn zero_height_surface_is_a_no_op() {
    let m = Motion {
        extent: DVec2::new(1000.0, 0.0),
        ..motion(Some(DVec2::new(300.0, 0.0)))
    };
    let mut p = Point::new(0.3, 0.5);
    p.vy = 4.0;
    let pos = p.advance(&m);
    assert_eq!(pos, DVec2::new(300.0, 0.0));
    assert_eq!(p.vy, 4.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_give_a_decaying_spring() {
    assert!(VELOCITY_DAMPING > 0.0 && VELOCITY_DAMPING < 1.0);
    assert!(SPRING_STIFFNESS > 0.0);
    assert!(VELOCITY_SCALE > 0.0);
    assert!(POINTER_PUSH > 0.0);
    assert!(REST_VELOCITY > 0.0);
}
