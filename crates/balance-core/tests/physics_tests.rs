// Host-side tests for the ball integrator.

use balance_core::constants::{DAMPING, GRAVITY, RESTITUTION};
use balance_core::physics::{gravity_force, step, Ball, PhysicsParams, Wall};
use proptest::prelude::*;

proptest! {
    #[test]
    fn step_never_leaves_the_bar(
        position in 0.0f32..=1.0,
        velocity in -5.0f32..5.0,
        tilt in -90.0f32..90.0,
    ) {
        let mut ball = Ball { position, velocity };
        step(&mut ball, tilt, &PhysicsParams::default());
        prop_assert!((0.0..=1.0).contains(&ball.position), "position {}", ball.position);
    }

    #[test]
    fn repeated_steps_stay_on_the_bar(
        velocity in -1.0f32..1.0,
        tilt in -15.0f32..15.0,
        frames in 1usize..400,
    ) {
        let mut ball = Ball { position: 0.5, velocity };
        for _ in 0..frames {
            step(&mut ball, tilt, &PhysicsParams::default());
            prop_assert!((0.0..=1.0).contains(&ball.position));
        }
    }

    #[test]
    fn right_bounce_keeps_restitution_fraction(
        position in 0.9f32..1.0,
        velocity in 0.2f32..1.0,
        tilt in -15.0f32..15.0,
    ) {
        let mut ball = Ball { position, velocity };
        let report = step(&mut ball, tilt, &PhysicsParams::default());
        prop_assert_eq!(report.bounced, Some(Wall::Right));
        prop_assert_eq!(ball.position, 1.0);
        prop_assert!(ball.velocity < 0.0);
        let expected = RESTITUTION * report.pre_bounce_velocity.abs();
        prop_assert!((ball.velocity.abs() - expected).abs() <= 1e-6 * expected.max(1.0));
    }

    #[test]
    fn left_bounce_keeps_restitution_fraction(
        position in 0.0f32..0.1,
        velocity in -1.0f32..-0.2,
        tilt in -15.0f32..15.0,
    ) {
        let mut ball = Ball { position, velocity };
        let report = step(&mut ball, tilt, &PhysicsParams::default());
        prop_assert_eq!(report.bounced, Some(Wall::Left));
        prop_assert_eq!(ball.position, 0.0);
        prop_assert!(ball.velocity > 0.0);
        let expected = RESTITUTION * report.pre_bounce_velocity.abs();
        prop_assert!((ball.velocity.abs() - expected).abs() <= 1e-6 * expected.max(1.0));
    }
}

#[test]
fn fixed_tilt_drifts_right_then_bounces_softer() {
    let params = PhysicsParams::default();
    let mut ball = Ball::default();
    let mut bounce = None;
    for frame in 0..1000 {
        let before = ball;
        let report = step(&mut ball, 10.0, &params);
        if let Some(wall) = report.bounced {
            bounce = Some((frame, wall, before.velocity, report.pre_bounce_velocity, ball.velocity));
            break;
        }
        assert!(
            ball.position >= before.position,
            "frame {frame}: position went from {} to {}",
            before.position,
            ball.position
        );
    }
    let (_, wall, v_prev, v_pre, v_after) = bounce.expect("ball never reached the wall");
    assert_eq!(wall, Wall::Right);
    assert!(v_after < 0.0);
    assert!(v_after.abs() < v_pre.abs());
    assert!(v_after.abs() < v_prev.abs());
}

#[test]
fn velocity_approaches_terminal_on_long_slope() {
    // v* = g·sin(θ)·D / (1 - D)
    let params = PhysicsParams {
        gravity: GRAVITY,
        damping: DAMPING,
        restitution: RESTITUTION,
    };
    let g = gravity_force(10.0, params.gravity);
    let terminal = g * params.damping / (1.0 - params.damping);
    let mut ball = Ball {
        position: 0.0,
        velocity: 0.0,
    };
    // keep the ball off the walls
    for _ in 0..2000 {
        ball.position = 0.0;
        step(&mut ball, 10.0, &params);
    }
    assert!((ball.velocity - terminal).abs() < 1e-6, "{} vs {}", ball.velocity, terminal);
}

#[test]
fn damping_applies_on_bounce_frames_too() {
    let mut ball = Ball {
        position: 0.99,
        velocity: 0.1,
    };
    let report = step(&mut ball, 0.0, &PhysicsParams::default());
    assert!((report.pre_bounce_velocity - 0.1 * DAMPING).abs() < 1e-7);
    assert!((ball.velocity + 0.1 * DAMPING * RESTITUTION).abs() < 1e-7);
}

#[test]
fn nan_velocity_recovers_on_the_bar() {
    let mut ball = Ball {
        position: 0.5,
        velocity: f32::NAN,
    };
    step(&mut ball, 0.0, &PhysicsParams::default());
    assert!((0.0..=1.0).contains(&ball.position));
    assert_eq!(ball.velocity, 0.0);
}
