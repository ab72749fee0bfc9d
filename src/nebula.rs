//! One-shot nebula painter.
//!
//! Rebuilds the offscreen backdrop whenever the surface is resized: an
//! opaque base fill, a faint diagonal glow from the top-right corner toward
//! the bottom-left, then a handful of additively blended radial blobs at
//! random positions. Blob placement comes from the caller's RNG, so a seeded
//! starfield repaints the same nebula every time.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::NebulaConfig;
use crate::palette::lerp;
use crate::raster::Raster;

/// Endpoint colors of the directional glow gradient.
const GLOW_FROM: ([u8; 3], f32) = ([99, 102, 241], 0.12);
const GLOW_TO: ([u8; 3], f32) = ([14, 165, 233], 0.08);

/// Paint the backdrop into `raster`, overwriting its previous contents.
pub fn paint(raster: &mut Raster, config: &NebulaConfig, rng: &mut SmallRng) {
    let w = raster.width() as f32;
    let h = raster.height() as f32;

    raster.fill(config.base);
    raster.linear_gradient((w * 0.9, h * 0.05), (w * 0.05, h * 0.95), GLOW_FROM, GLOW_TO);

    if config.colors.is_empty() {
        return;
    }
    let min_dim = w.min(h);
    for i in 0..config.blobs {
        let cx = rng.gen::<f32>() * w;
        let cy = rng.gen::<f32>() * h;
        let radius = lerp(config.radius[0], config.radius[1], rng.gen::<f32>()) * min_dim;
        let tint = config.colors[i as usize % config.colors.len()];
        raster.radial_blob(cx, cy, radius, tint.rgb, tint.alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_paint_is_deterministic() {
        let config = NebulaConfig::default();
        let mut a = Raster::new(64, 48);
        let mut b = Raster::new(64, 48);
        paint(&mut a, &config, &mut SmallRng::seed_from_u64(7));
        paint(&mut b, &config, &mut SmallRng::seed_from_u64(7));
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_result_is_fully_opaque() {
        let config = NebulaConfig::default();
        let mut r = Raster::new(32, 32);
        paint(&mut r, &config, &mut SmallRng::seed_from_u64(1));
        for px in r.pixels().chunks_exact(4) {
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn test_empty_color_list_skips_blobs() {
        let config = NebulaConfig {
            colors: Vec::new(),
            ..NebulaConfig::default()
        };
        let mut r = Raster::new(16, 16);
        // Must not panic on the modulo and still leave the base + glow.
        paint(&mut r, &config, &mut SmallRng::seed_from_u64(1));
        assert_eq!(r.pixels()[3], 255);
    }

    #[test]
    fn test_repaint_differs_across_rng_state() {
        let config = NebulaConfig::default();
        let mut rng = SmallRng::seed_from_u64(99);
        let mut a = Raster::new(64, 48);
        let mut b = Raster::new(64, 48);
        paint(&mut a, &config, &mut rng);
        paint(&mut b, &config, &mut rng);
        assert_ne!(a.pixels(), b.pixels());
    }
}
