/// Divisor applied to the pointer offset before the rotation mapping.
pub const TILT_DAMPING: f64 = 6.0;
/// Damped input magnitude that saturates the rotation.
pub const TILT_INPUT_RANGE: f64 = 40.0;
/// Rotation at saturation, in degrees.
pub const TILT_MAX_DEG: f64 = 10.0;

/// Bounding box of the tracked card, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Two-axis rotation of the hero card, derived from the latest pointer
/// position. Ephemeral: recomputed per mousemove event, flat on leave,
/// never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Linear map of `input` from [-TILT_INPUT_RANGE, TILT_INPUT_RANGE]
/// onto [out_min, out_max], clamped at the endpoints rather than
/// extrapolated.
fn map_clamped(input: f64, out_min: f64, out_max: f64) -> f64 {
    let t = ((input + TILT_INPUT_RANGE) / (2.0 * TILT_INPUT_RANGE)).clamp(0.0, 1.0);
    out_min + t * (out_max - out_min)
}

impl Tilt {
    /// Rotation for a pointer at `(client_x, client_y)` over `card`.
    /// The horizontal offset drives rotation about the vertical axis;
    /// the vertical offset drives an inverted rotation about the
    /// horizontal axis, so the card leans toward the cursor.
    pub fn from_pointer(client_x: f64, client_y: f64, card: ElementRect) -> Self {
        let dx = client_x - (card.left + card.width / 2.0);
        let dy = client_y - (card.top + card.height / 2.0);
        let ix = dx / TILT_DAMPING;
        let iy = dy / TILT_DAMPING;
        Self {
            rotate_x: map_clamped(iy, TILT_MAX_DEG, -TILT_MAX_DEG),
            rotate_y: map_clamped(ix, -TILT_MAX_DEG, TILT_MAX_DEG),
        }
    }

    /// Pointer-leave state: exactly flat.
    pub fn reset() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: ElementRect = ElementRect {
        left: 100.0,
        top: 200.0,
        width: 400.0,
        height: 300.0,
    };

    #[test]
    fn pointer_at_center_is_flat() {
        let tilt = Tilt::from_pointer(300.0, 350.0, CARD);
        assert_eq!(tilt, Tilt::default());
    }

    #[test]
    fn pointer_right_of_center_rotates_about_the_vertical_axis() {
        // dx = 120, ix = 20, halfway into the positive domain.
        let tilt = Tilt::from_pointer(420.0, 350.0, CARD);
        assert!((tilt.rotate_y - 5.0).abs() < 1e-9);
        assert!(tilt.rotate_x.abs() < 1e-9);
    }

    #[test]
    fn pointer_below_center_rotates_inverted() {
        // dy = 120, iy = 20, mapped through the inverted range.
        let tilt = Tilt::from_pointer(300.0, 470.0, CARD);
        assert!((tilt.rotate_x + 5.0).abs() < 1e-9);
    }

    #[test]
    fn far_pointer_clamps_to_the_boundary_rotation() {
        // dx = 10000 damps to ix far beyond the ±40 domain.
        let tilt = Tilt::from_pointer(10300.0, 350.0, CARD);
        assert_eq!(tilt.rotate_y, TILT_MAX_DEG);
        let tilt = Tilt::from_pointer(-9700.0, 350.0, CARD);
        assert_eq!(tilt.rotate_y, -TILT_MAX_DEG);
    }

    #[test]
    fn leave_resets_to_flat() {
        assert_eq!(Tilt::reset(), Tilt::default());
    }
}
