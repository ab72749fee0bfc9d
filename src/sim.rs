//! Per-frame simulation step.
//!
//! Each frame every star gets, in order: leftward drift, pointer parallax,
//! pixel-space repulsion away from the smoothed pointer, edge wrapping, and
//! a twinkle phase advance. After the per-star pass the population is topped
//! back up to the target count.
//!
//! Positions live in normalized `[0, 1]` space. Repulsion is the one place
//! pixel geometry matters: distance and falloff are computed in pixels (so
//! aspect ratio is handled correctly), then the displacement is divided by
//! the surface dimensions to land back in normalized space.

use glam::Vec2;
use rand::rngs::SmallRng;

use crate::config::StarfieldConfig;
use crate::palette::lerp;
use crate::star::{self, Star};

/// Fixed pixel-sensitivity of the repulsion displacement.
const REPEL_PIXEL_SCALE: f32 = 14.0;

/// Wrap margin outside `[0, 1]`; crossing one side re-enters at the other,
/// margin included, so stars never pop at a visible edge.
const WRAP_MARGIN: f32 = 0.05;

/// Repulsion push magnitude for a star at `dist` pixels from the pointer.
///
/// Quadratic ease-out: strong near the cursor, exactly zero at and beyond
/// the radius. The depth bias scales the push *down* as `z` rises, so with
/// a positive bias the farther stars are pushed more.
pub fn repel_push(dist: f32, radius: f32, strength: f32, depth_bias: f32, z: f32) -> f32 {
    if dist <= 0.0 || dist >= radius {
        return 0.0;
    }
    let t = 1.0 - dist / radius;
    let falloff = t * t;
    let depth_scale = lerp(1.0, 1.0 - depth_bias, z);
    strength * falloff * depth_scale
}

/// Advance the whole population one frame.
///
/// `pointer` is the smoothed pointer in normalized coordinates; `width` and
/// `height` are the surface size in pixels.
pub fn step(
    stars: &mut Vec<Star>,
    config: &StarfieldConfig,
    pointer: Vec2,
    width: f32,
    height: f32,
    target: usize,
    rng: &mut SmallRng,
) {
    let par_x = (pointer.x - 0.5) * config.parallax;
    let par_y = (pointer.y - 0.5) * config.parallax;

    for s in stars.iter_mut() {
        // Base drift plus depth-scaled pointer parallax.
        s.x -= config.drift * (0.5 + 0.5 * s.z);
        s.x -= par_x * (0.3 + 0.7 * s.z);
        s.y -= par_y * (0.3 + 0.7 * s.z);

        // Repulsion, computed in pixel space.
        let dx = s.x * width - pointer.x * width;
        let dy = s.y * height - pointer.y * height;
        let dist = (dx * dx + dy * dy).sqrt();
        let push = repel_push(
            dist,
            config.repel_radius,
            config.repel_strength,
            config.repel_depth_bias,
            s.z,
        );
        if push > 0.0 {
            s.x += (dx / dist) * push * REPEL_PIXEL_SCALE / width;
            s.y += (dy / dist) * push * REPEL_PIXEL_SCALE / height;
        }

        // Wrap across the margin-extended field.
        if s.x < -WRAP_MARGIN {
            s.x = 1.0 + WRAP_MARGIN;
        }
        if s.x > 1.0 + WRAP_MARGIN {
            s.x = -WRAP_MARGIN;
        }
        if s.y < -WRAP_MARGIN {
            s.y = 1.0 + WRAP_MARGIN;
        }
        if s.y > 1.0 + WRAP_MARGIN {
            s.y = -WRAP_MARGIN;
        }

        // Nearer stars twinkle slightly faster.
        s.twinkle += 0.02 + lerp(config.max_speed * 0.15, config.max_speed, s.z) * 0.01;
    }

    star::fill_to_target(stars, target, rng, config.star_size);
}
