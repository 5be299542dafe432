//! Platform-free input mapping: pointer offset → tilt, key code → action.

/// Tilt for a pointer at `pointer_x` over a surface starting at `left` with
/// the given `width`. Linear in the offset from the center, ±`max_tilt_deg`
/// at the edges, and zero outside the surface.
#[inline]
pub fn tilt_from_pointer(pointer_x: f32, left: f32, width: f32, max_tilt_deg: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    let local = pointer_x - left;
    if !(0.0..=width).contains(&local) {
        return 0.0;
    }
    let half = width / 2.0;
    ((local - half) / half * max_tilt_deg).clamp(-max_tilt_deg, max_tilt_deg)
}

/// Tilt after the pointer leaves the surface.
#[inline]
pub fn decay_tilt(tilt_deg: f32, decay: f32) -> f32 {
    tilt_deg * decay
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Commit,
    DeleteLast,
}

/// Maps a `KeyboardEvent.code` to an action.
#[inline]
pub fn key_action(code: &str) -> Option<KeyAction> {
    match code {
        "Space" => Some(KeyAction::Commit),
        "Backspace" => Some(KeyAction::DeleteLast),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_level_and_edges_max_out() {
        assert_eq!(tilt_from_pointer(150.0, 100.0, 100.0, 15.0), 0.0);
        assert_eq!(tilt_from_pointer(200.0, 100.0, 100.0, 15.0), 15.0);
        assert_eq!(tilt_from_pointer(100.0, 100.0, 100.0, 15.0), -15.0);
        assert!((tilt_from_pointer(175.0, 100.0, 100.0, 15.0) - 7.5).abs() < 1e-5);
    }

    #[test]
    fn outside_bounds_is_zero() {
        assert_eq!(tilt_from_pointer(99.0, 100.0, 100.0, 15.0), 0.0);
        assert_eq!(tilt_from_pointer(201.0, 100.0, 100.0, 15.0), 0.0);
        assert_eq!(tilt_from_pointer(150.0, 100.0, 0.0, 15.0), 0.0);
    }

    #[test]
    fn only_space_and_backspace_map() {
        assert_eq!(key_action("Space"), Some(KeyAction::Commit));
        assert_eq!(key_action("Backspace"), Some(KeyAction::DeleteLast));
        assert_eq!(key_action("KeyA"), None);
        assert_eq!(key_action(" "), None);
    }
}
