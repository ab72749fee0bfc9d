//! Star records and population management.
//!
//! Stars are fungible: no identity beyond their slot in the vector. The
//! population tracks `target_count(..)`; shrinking truncates immediately,
//! growing is a pure mapping from the RNG with no per-star setup beyond the
//! record itself.

use rand::rngs::SmallRng;
use rand::Rng;
use std::f32::consts::TAU;

use crate::palette::lerp;

/// One particle of the field.
///
/// `x`/`y` are normalized positions that wander slightly outside `[0, 1]`
/// (wrap margin 0.05) to hide pop-in at the edges. `z` is depth, fixed at
/// creation: higher z means nearer, larger and faster.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Side length in pixels, derived once from `z`.
    pub size: f32,
    /// Base opacity in `[0.75, 1.0]`, fixed per star.
    pub alpha: f32,
    /// Twinkle phase accumulator; unbounded, wraps naturally through `sin`.
    pub twinkle: f32,
}

/// Population target for a surface: `floor(area * density)`.
pub fn target_count(width: u32, height: u32, density: f32) -> usize {
    ((width as f32 * height as f32) * density).floor() as usize
}

/// Star size for a given depth over the configured range.
#[inline]
pub(crate) fn size_for(z: f32, size_range: [f32; 2]) -> f32 {
    lerp(size_range[0], size_range[1], z)
}

/// Create a star at a uniformly random position and depth.
pub fn make_star(rng: &mut SmallRng, size_range: [f32; 2]) -> Star {
    let z = rng.gen::<f32>();
    Star {
        x: rng.gen::<f32>(),
        y: rng.gen::<f32>(),
        z,
        size: size_for(z, size_range),
        alpha: 0.75 + rng.gen::<f32>() * 0.25,
        twinkle: rng.gen::<f32>() * TAU,
    }
}

/// Spawn stars until the population reaches `target`.
///
/// New stars appear at random positions; the visual discontinuity is
/// accepted, matching how shrinks simply truncate.
pub fn fill_to_target(
    stars: &mut Vec<Star>,
    target: usize,
    rng: &mut SmallRng,
    size_range: [f32; 2],
) {
    while stars.len() < target {
        stars.push(make_star(rng, size_range));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_target_count_floor() {
        assert_eq!(target_count(1000, 1000, 0.0001), 100);
        assert_eq!(target_count(100, 100, 0.000099), 0);
    }

    #[test]
    fn test_size_monotone_in_depth() {
        let range = [3.0, 6.0];
        let mut last = f32::MIN;
        for i in 0..=10 {
            let size = size_for(i as f32 / 10.0, range);
            assert!(size >= last);
            last = size;
        }
        assert_eq!(size_for(0.0, range), 3.0);
        assert_eq!(size_for(1.0, range), 6.0);
    }

    #[test]
    fn test_make_star_ranges() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..200 {
            let s = make_star(&mut rng, [3.0, 6.0]);
            assert!((0.0..=1.0).contains(&s.x));
            assert!((0.0..=1.0).contains(&s.y));
            assert!((0.0..=1.0).contains(&s.z));
            assert!((0.75..=1.0).contains(&s.alpha));
            assert!((3.0..=6.0).contains(&s.size));
        }
    }

    #[test]
    fn test_fill_to_target_grows_exactly() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut stars = Vec::new();
        fill_to_target(&mut stars, 42, &mut rng, [3.0, 6.0]);
        assert_eq!(stars.len(), 42);
        // Already at target: no change.
        fill_to_target(&mut stars, 42, &mut rng, [3.0, 6.0]);
        assert_eq!(stars.len(), 42);
    }
}
