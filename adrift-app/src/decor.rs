//! Descriptors for the decorative layers: the randomized star field and the
//! fixed set of floating geometric shapes.

use rand::Rng;

/// Number of background stars generated per mount.
pub const STAR_COUNT: usize = 18;

/// One twinkling background star. Drawn once at mount and immutable after;
/// only its parallax translation changes between renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarDescriptor {
    pub id: usize,
    /// Diameter in pixels, [2, 6).
    pub size: f64,
    /// Horizontal position as a viewport percentage, [0, 100).
    pub left: f64,
    /// Vertical position as a viewport percentage, [0, 100).
    pub top: f64,
    /// Twinkle animation start offset in seconds, [0, 3).
    pub delay_seconds: f64,
    /// Twinkle animation period in seconds, [2, 4).
    pub duration_seconds: f64,
}

/// Draws the star field for one mount of the screen.
///
/// Generic over the random source so tests can seed a [`rand::rngs::SmallRng`]
/// and assert the exact field; the browser seeds from the clock.
pub fn star_field(rng: &mut impl Rng) -> Vec<StarDescriptor> {
    (0..STAR_COUNT)
        .map(|id| StarDescriptor {
            id,
            size: rng.random_range(2.0..6.0),
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            delay_seconds: rng.random_range(0.0..3.0),
            duration_seconds: rng.random_range(2.0..4.0),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Square,
    Pentagon,
}

/// One of the large floating outline shapes. The set is hand-authored and
/// static for the process lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricElement {
    pub id: u32,
    pub kind: ShapeKind,
    /// Bounding box edge length in pixels.
    pub size_px: u32,
    pub left: f64,
    pub top: f64,
    pub rotation_deg: f64,
}

impl GeometricElement {
    /// Entrance stagger for the ambient float animation.
    pub fn float_delay_seconds(&self) -> f64 {
        self.id as f64 * 0.5
    }

    /// Float/rotate period; larger shapes (higher ids) drift slower.
    pub fn float_duration_seconds(&self) -> f64 {
        4.0 + self.id as f64
    }
}

/// The fixed shape layout: one shape near each corner of the viewport.
pub const GEOMETRIC_ELEMENTS: [GeometricElement; 4] = [
    GeometricElement {
        id: 1,
        kind: ShapeKind::Circle,
        size_px: 120,
        left: 15.0,
        top: 20.0,
        rotation_deg: 0.0,
    },
    GeometricElement {
        id: 2,
        kind: ShapeKind::Triangle,
        size_px: 80,
        left: 85.0,
        top: 15.0,
        rotation_deg: 45.0,
    },
    GeometricElement {
        id: 3,
        kind: ShapeKind::Square,
        size_px: 60,
        left: 90.0,
        top: 75.0,
        rotation_deg: 0.0,
    },
    GeometricElement {
        id: 4,
        kind: ShapeKind::Pentagon,
        size_px: 100,
        left: 10.0,
        top: 80.0,
        rotation_deg: 0.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn star_field_has_fixed_size_and_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        let stars = star_field(&mut rng);
        assert_eq!(stars.len(), STAR_COUNT);
        for (i, star) in stars.iter().enumerate() {
            assert_eq!(star.id, i);
            assert!((2.0..6.0).contains(&star.size), "size {}", star.size);
            assert!((0.0..100.0).contains(&star.left), "left {}", star.left);
            assert!((0.0..100.0).contains(&star.top), "top {}", star.top);
            assert!(
                (0.0..3.0).contains(&star.delay_seconds),
                "delay {}",
                star.delay_seconds
            );
            assert!(
                (2.0..4.0).contains(&star.duration_seconds),
                "duration {}",
                star.duration_seconds
            );
        }
    }

    #[test]
    fn star_field_is_deterministic_for_a_seed() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        assert_eq!(star_field(&mut a), star_field(&mut b));

        let mut c = SmallRng::seed_from_u64(43);
        assert_ne!(star_field(&mut a), star_field(&mut c));
    }

    #[test]
    fn geometric_layout_is_the_fixed_set() {
        let expected = [
            GeometricElement {
                id: 1,
                kind: ShapeKind::Circle,
                size_px: 120,
                left: 15.0,
                top: 20.0,
                rotation_deg: 0.0,
            },
            GeometricElement {
                id: 2,
                kind: ShapeKind::Triangle,
                size_px: 80,
                left: 85.0,
                top: 15.0,
                rotation_deg: 45.0,
            },
            GeometricElement {
                id: 3,
                kind: ShapeKind::Square,
                size_px: 60,
                left: 90.0,
                top: 75.0,
                rotation_deg: 0.0,
            },
            GeometricElement {
                id: 4,
                kind: ShapeKind::Pentagon,
                size_px: 100,
                left: 10.0,
                top: 80.0,
                rotation_deg: 0.0,
            },
        ];
        assert_eq!(GEOMETRIC_ELEMENTS, expected);
    }

    #[test]
    fn ambient_timing_derives_from_id() {
        for element in GEOMETRIC_ELEMENTS {
            assert_eq!(element.float_delay_seconds(), element.id as f64 * 0.5);
            assert_eq!(element.float_duration_seconds(), 4.0 + element.id as f64);
        }
        assert_eq!(GEOMETRIC_ELEMENTS[1].float_duration_seconds(), 6.0);
        assert_eq!(GEOMETRIC_ELEMENTS[3].float_duration_seconds(), 8.0);
    }
}
