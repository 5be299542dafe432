// Host-side tests for tuning constants and their relationships.

use balance_core::constants::*;
use balance_core::WidgetConfig;

#[test]
#[allow(clippy::assertions_on_constants)]
fn physics_constants_dissipate_energy() {
    assert!(GRAVITY > 0.0);
    assert!(DAMPING > 0.0 && DAMPING < 1.0);
    assert!(RESTITUTION > 0.0 && RESTITUTION < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reset_state_sits_on_the_bar() {
    assert!((0.0..=1.0).contains(&RESET_POSITION));
    assert!(RESET_VELOCITY > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tone_constants_have_logical_relationships() {
    // the oscillator stops before the decay window closes
    assert!(TONE_STOP_SEC < TONE_DECAY_SEC);
    assert!(TONE_DECAY_FLOOR > 0.0 && TONE_DECAY_FLOOR < TONE_VOLUME_CAP);
    assert!(TONE_VOLUME_CAP <= 1.0);
    assert!(PRIME_GAIN < TONE_VOLUME_CAP);
    assert!(PRIME_DURATION_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tilt_constants_are_reasonable() {
    assert!(MAX_TILT_DEG > 0.0 && MAX_TILT_DEG < 90.0);
    assert!(LEAVE_TILT_DECAY > 0.0 && LEAVE_TILT_DECAY < 1.0);
}

#[test]
fn defaults_pass_validation() {
    WidgetConfig::default().validate().unwrap();
}
