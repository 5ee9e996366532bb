//! Parallax math for the error screen.
//!
//! The pointer tracker normalizes the cursor position against the root
//! container's bounding box into a small signed offset, which every
//! decorative layer scales down by its own depth factor.

/// Half-range of the normalized offset. A pointer at the container edge maps
/// to ±[`OFFSET_RANGE`] / 2 on that axis.
pub const OFFSET_RANGE: f64 = 20.0;

/// Snapshot of the tracked container's bounding box, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Signed offset of the pointer from the container center, normalized to
/// roughly ±10 per axis. Overwritten on every pointer move, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Computes the offset for a pointer at `(px, py)` relative to `rect`.
    ///
    /// Returns `None` when the rect has no area (detached or zero-size
    /// container), so callers skip the update instead of dividing by zero.
    pub fn from_pointer(px: f64, py: f64, rect: ContainerRect) -> Option<Self> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }
        let x = (px - rect.left - rect.width / 2.0) / rect.width * OFFSET_RANGE;
        let y = (py - rect.top - rect.height / 2.0) / rect.height * OFFSET_RANGE;
        Some(PointerOffset { x, y })
    }

    /// CSS `translate(..)` fragment with both axes scaled by `factor`.
    /// Deeper layers pass smaller factors to move less than nearer ones.
    pub fn translate(&self, factor: f64) -> String {
        format!("translate({}px, {}px)", self.x * factor, self.y * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: ContainerRect = ContainerRect {
        left: 100.0,
        top: 50.0,
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn center_maps_to_zero() {
        let offset = PointerOffset::from_pointer(500.0, 350.0, RECT).unwrap();
        assert_eq!(offset, PointerOffset { x: 0.0, y: 0.0 });
    }

    #[test]
    fn edges_map_to_half_range() {
        // Top-left corner of the container.
        let offset = PointerOffset::from_pointer(100.0, 50.0, RECT).unwrap();
        assert_eq!(offset.x, -OFFSET_RANGE / 2.0);
        assert_eq!(offset.y, -OFFSET_RANGE / 2.0);

        // Bottom-right corner.
        let offset = PointerOffset::from_pointer(900.0, 650.0, RECT).unwrap();
        assert_eq!(offset.x, OFFSET_RANGE / 2.0);
        assert_eq!(offset.y, OFFSET_RANGE / 2.0);
    }

    #[test]
    fn matches_formula_off_center() {
        let (px, py) = (340.0, 500.0);
        let offset = PointerOffset::from_pointer(px, py, RECT).unwrap();
        let expected_x = (px - RECT.left - RECT.width / 2.0) / RECT.width * OFFSET_RANGE;
        let expected_y = (py - RECT.top - RECT.height / 2.0) / RECT.height * OFFSET_RANGE;
        assert!((offset.x - expected_x).abs() < f64::EPSILON);
        assert!((offset.y - expected_y).abs() < f64::EPSILON);
    }

    #[test]
    fn pointer_outside_rect_still_projects() {
        // Events arrive from the whole window, not just the container.
        let offset = PointerOffset::from_pointer(0.0, 0.0, RECT).unwrap();
        assert!(offset.x < -OFFSET_RANGE / 2.0);
        assert!(offset.y < -OFFSET_RANGE / 2.0);
    }

    #[test]
    fn degenerate_rect_is_skipped() {
        let flat = ContainerRect {
            width: 0.0,
            ..RECT
        };
        assert_eq!(PointerOffset::from_pointer(10.0, 10.0, flat), None);

        let thin = ContainerRect {
            height: 0.0,
            ..RECT
        };
        assert_eq!(PointerOffset::from_pointer(10.0, 10.0, thin), None);
    }

    #[test]
    fn translate_scales_by_depth_factor() {
        let offset = PointerOffset { x: 8.0, y: -4.0 };
        assert_eq!(offset.translate(0.5), "translate(4px, -2px)");
        assert_eq!(offset.translate(0.0), "translate(0px, -0px)");
        assert_eq!(
            PointerOffset::default().translate(0.1),
            "translate(0px, 0px)"
        );
    }
}
