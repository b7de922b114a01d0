// Behavioral properties of the motion engine, driven the way the front-end
// drives it: one `tick` per reference frame.

use folio_core::constants::*;
use folio_core::*;
use glam::Vec2;

const FRAME: f32 = 1.0 / REFERENCE_FPS;

#[test]
fn follower_scenario_matches_closed_form() {
    let mut f = DampedFollower::new(0.15);
    let target = Vec2::new(100.0, 100.0);

    let first = f.step(target);
    assert!((first.x - 15.0).abs() < 1e-4);
    assert!((first.y - 15.0).abs() < 1e-4);

    for _ in 1..10 {
        f.step(target);
    }
    let expected = 100.0 * (1.0 - 0.85_f32.powi(10));
    assert!((f.current().x - expected).abs() < 1e-3);
    assert!((f.current().x - 80.31).abs() < 0.01);
}

#[test]
fn follower_converges_without_overshoot() {
    for &k in &[0.04_f32, 0.15, 0.3, 0.6, 0.95] {
        for &target in &[-250.0_f32, -1.0, 0.5, 42.0, 1920.0] {
            let mut f = DampedFollower::new(k);
            let goal = Vec2::new(target, -target);
            let mut gap = (goal - f.current()).length();
            for _ in 0..400 {
                f.step(goal);
                let next_gap = (goal - f.current()).length();
                if gap > 1e-3 * target.abs().max(1.0) {
                    assert!(next_gap < gap, "k={} target={} gap grew", k, target);
                }
                // never crosses the target on either axis
                assert!(f.current().x.abs() <= target.abs() + 1e-3);
                gap = next_gap;
            }
            assert!(gap < 1e-2 * target.abs().max(1.0), "k={} did not converge", k);
        }
    }
}

#[test]
fn variable_frame_times_still_converge() {
    let mut f = DampedFollower::new(DOT_SMOOTHING);
    let goal = Vec2::new(640.0, 360.0);
    let dts = [0.008_f32, 0.016, 0.033, 0.25, 0.004];
    for i in 0..500 {
        f.tick(goal, dts[i % dts.len()]);
        assert!(f.current().x <= goal.x && f.current().y <= goal.y);
    }
    assert!((f.current() - goal).length() < 1e-2);
}

#[test]
fn decay_reaches_epsilon_in_predicted_ticks() {
    assert_eq!(ticks_to_settle(10.0, 0.9, 0.01), Some(66));
    for &(v0, d, eps) in &[(10.0_f32, 0.9_f32, 0.01_f32), (3.0, 0.85, 1e-4), (50.0, 0.93, 1e-3)] {
        let n = ticks_to_settle(v0, d, eps).unwrap();
        assert!(v0 * d.powi(n as i32) < eps);
        assert!(v0 * d.powi(n as i32 - 1) >= eps);
    }
    assert_eq!(ticks_to_settle(1e-5, 0.9, 1e-4), Some(0));
    // undamped motion never settles
    assert_eq!(ticks_to_settle(10.0, 1.0, 0.01), None);
}

#[test]
fn idle_logo_only_auto_rotates() {
    let mut logo = LogoRotation::default();
    let mut prev = logo.tick(FRAME);
    for _ in 0..240 {
        let next = logo.tick(FRAME);
        assert_eq!(next.rx, 0.0);
        assert_eq!(next.rz, 0.0);
        let step = (next.ry - prev.ry).rem_euclid(std::f32::consts::TAU);
        assert!((step - IDLE_SPIN_PER_FRAME).abs() < 1e-5);
        prev = next;
    }
    assert!(logo.is_idle());
}

#[test]
fn settled_cursor_is_stable() {
    let mut cursor = StickyCursor::default();
    cursor.on_pointer_move(500.0, 400.0, 0.0);
    let mut frame = cursor.tick(FRAME);
    for _ in 0..2000 {
        frame = cursor.tick(FRAME);
    }
    for _ in 0..100 {
        let again = cursor.tick(FRAME);
        assert!((again.dot - frame.dot).length() < 1e-4);
        assert!((again.ring - frame.ring).length() < 1e-4);
        assert_eq!(again.dot_size, frame.dot_size);
    }
}

#[test]
fn brief_hover_returns_to_rest() {
    let mut cursor = StickyCursor::default();
    cursor.resync_targets([1, 2, 3]);
    cursor.on_pointer_move(10.0, 10.0, 0.0);
    cursor.on_enter(2);
    cursor.tick(FRAME);
    cursor.on_leave(2);
    let mut f = cursor.tick(FRAME);
    for _ in 0..300 {
        f = cursor.tick(FRAME);
    }
    assert!((f.dot_size - DOT_REST_SIZE).abs() < 1e-3);
    assert!((f.ring_size - RING_REST_SIZE).abs() < 1e-3);
    assert!(!cursor.hover().is_hovering());
}

#[test]
fn hover_leave_and_capture_loss_are_equivalent() {
    let mut a = StickyCursor::default();
    let mut b = StickyCursor::default();
    for c in [&mut a, &mut b] {
        c.resync_targets([4]);
        c.on_pointer_move(0.0, 0.0, 0.0);
        c.on_enter(4);
        for _ in 0..5 {
            c.tick(FRAME);
        }
    }
    a.on_leave(4);
    b.on_capture_lost();
    for _ in 0..60 {
        assert_eq!(a.tick(FRAME), b.tick(FRAME));
    }
}

#[test]
fn nested_targets_keep_hover_until_outer_is_left() {
    let mut cursor = StickyCursor::default();
    cursor.resync_targets([1, 2]);
    cursor.on_pointer_move(50.0, 50.0, 0.0);
    // card (1) contains link (2); leaving the link sends no event for the card
    cursor.on_enter(1);
    cursor.on_enter(2);
    cursor.on_leave(2);
    let mut f = cursor.tick(FRAME);
    for _ in 0..300 {
        f = cursor.tick(FRAME);
    }
    assert!(cursor.hover().is_hovering());
    assert_eq!(cursor.hover().phase(), HoverPhase::Hovering(1));
    assert!((f.dot_size - DOT_HOVER_SIZE).abs() < 1e-2);

    cursor.on_leave(1);
    for _ in 0..300 {
        f = cursor.tick(FRAME);
    }
    assert!(!cursor.hover().is_hovering());
    assert!((f.dot_size - DOT_REST_SIZE).abs() < 1e-3);
}

#[test]
fn navigation_clears_stuck_hover() {
    let mut cursor = StickyCursor::default();
    cursor.resync_targets([9]);
    cursor.on_enter(9);
    cursor.on_navigate();
    // the next page binds a different set; the old id never gets a leave
    cursor.resync_targets([10, 11]);
    assert!(!cursor.hover().is_hovering());
}

#[test]
fn drag_release_paths_are_equivalent() {
    let mut a = LogoRotation::default();
    let mut b = LogoRotation::default();
    for logo in [&mut a, &mut b] {
        logo.pointer_down(100.0, 100.0, 0.0);
        for i in 1..8 {
            logo.pointer_move(100.0 + i as f32 * 9.0, 100.0 - i as f32 * 3.0, i as f64 * 16.0);
            logo.tick(FRAME);
        }
    }
    a.pointer_up();
    b.capture_lost();
    for _ in 0..400 {
        assert_eq!(a.tick(FRAME), b.tick(FRAME));
    }
    assert!(a.is_idle() && b.is_idle());
}

#[test]
fn driver_gates_and_resets_components() {
    let mut driver = Driver::new(StickyCursor::default());
    driver.get_mut().on_pointer_move(50.0, 50.0, 0.0);
    assert!(driver.tick(FRAME).is_none());

    driver.start();
    let f = driver.tick(FRAME).unwrap();
    assert!(f.visible);

    driver.stop();
    driver.start();
    let f = driver.tick(FRAME).unwrap();
    assert!(!f.visible);
}

#[test]
fn custom_configs_are_validated() {
    let bad = CursorConfig {
        ring_smoothing: 1.5,
        ..CursorConfig::default()
    };
    assert!(StickyCursor::with_config(bad).is_err());

    let bad = RotationConfig {
        inertia: InertiaConfig {
            damping: 0.5,
            ..InertiaConfig::default()
        },
        ..RotationConfig::default()
    };
    let err = LogoRotation::with_config(bad).unwrap_err();
    assert!(err.to_string().contains("damping"));
}
