//! Frame renderer.
//!
//! Composites the cached nebula raster, then draws every star as a filled
//! square: palette-colored by position, twinkle-modulated alpha. A static
//! frame (reduced motion) pins the twinkle multiplier to exactly 1 so
//! repeated renders of the same state are byte-identical.

use crate::config::StarfieldConfig;
use crate::palette;
use crate::raster::Raster;
use crate::star::Star;

/// Weights of x and y when deriving the palette position for a star.
const PALETTE_X_WEIGHT: f32 = 0.7;
const PALETTE_Y_WEIGHT: f32 = 0.3;

/// Resting twinkle multiplier the sine term oscillates around.
const TWINKLE_BASE: f32 = 0.88;

/// Render one frame into `frame`.
pub fn draw(
    frame: &mut Raster,
    nebula: &Raster,
    stars: &[Star],
    config: &StarfieldConfig,
    static_frame: bool,
) {
    // The nebula layer is opaque and covers the surface, so the blit doubles
    // as the clear.
    frame.blit_scaled(nebula);

    let w = frame.width() as f32;
    let h = frame.height() as f32;

    for s in stars {
        let rgb = if config.use_gradient_stars {
            let t = (s.x * PALETTE_X_WEIGHT + s.y * PALETTE_Y_WEIGHT).clamp(0.0, 1.0);
            palette::sample(&config.palette, t)
        } else {
            palette::FALLBACK_RGB
        };

        let twinkle = if static_frame {
            1.0
        } else {
            TWINKLE_BASE + s.twinkle.sin() * config.twinkle
        };
        let alpha = (s.alpha * twinkle).clamp(0.0, 1.0);

        frame.fill_square(s.x * w, s.y * h, s.size, rgb, alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NebulaConfig;
    use crate::nebula;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn fixture() -> (Raster, Raster, Vec<Star>, StarfieldConfig) {
        let config = StarfieldConfig::default();
        let frame = Raster::new(64, 48);
        let mut backdrop = Raster::new(64, 48);
        nebula::paint(
            &mut backdrop,
            &NebulaConfig::default(),
            &mut SmallRng::seed_from_u64(11),
        );
        let stars = vec![
            Star { x: 0.25, y: 0.25, z: 0.1, size: 3.0, alpha: 0.8, twinkle: 0.0 },
            Star { x: 0.75, y: 0.6, z: 0.9, size: 6.0, alpha: 1.0, twinkle: 2.0 },
        ];
        (frame, backdrop, stars, config)
    }

    #[test]
    fn test_static_frames_are_identical() {
        let (mut frame, backdrop, stars, config) = fixture();
        draw(&mut frame, &backdrop, &stars, &config, true);
        let first = frame.pixels().to_vec();
        draw(&mut frame, &backdrop, &stars, &config, true);
        assert_eq!(frame.pixels(), &first[..]);
    }

    #[test]
    fn test_stars_change_pixels_over_backdrop() {
        let (mut frame, backdrop, stars, config) = fixture();
        draw(&mut frame, &backdrop, &stars, &config, true);
        assert_ne!(frame.pixels(), backdrop.pixels());
    }

    #[test]
    fn test_empty_population_leaves_backdrop() {
        let (mut frame, backdrop, _, config) = fixture();
        draw(&mut frame, &backdrop, &[], &config, false);
        assert_eq!(frame.pixels(), backdrop.pixels());
    }

    #[test]
    fn test_gradient_toggle_changes_color() {
        let (mut frame, backdrop, stars, mut config) = fixture();
        draw(&mut frame, &backdrop, &stars, &config, true);
        let gradient = frame.pixels().to_vec();
        config.use_gradient_stars = false;
        draw(&mut frame, &backdrop, &stars, &config, true);
        assert_ne!(frame.pixels(), &gradient[..]);
    }

    #[test]
    fn test_offscreen_star_does_not_panic() {
        let (mut frame, backdrop, _, config) = fixture();
        let stars = vec![Star { x: 1.05, y: -0.05, z: 0.5, size: 5.0, alpha: 1.0, twinkle: 0.0 }];
        draw(&mut frame, &backdrop, &stars, &config, false);
    }
}
