//! Configuration for the starfield.
//!
//! All tunables live in [`StarfieldConfig`]. The config is a plain value
//! object: build one with struct-update syntax over [`Default`], hand it to
//! [`Starfield::new`](crate::Starfield::new), and nothing mutates it after
//! construction.
//!
//! ```ignore
//! use starfield::{Starfield, StarfieldConfig};
//!
//! let config = StarfieldConfig {
//!     density: 0.0005,
//!     repel_radius: 300.0,
//!     ..StarfieldConfig::default()
//! };
//! let field = Starfield::new(1280, 720, config);
//! ```

/// One stop of the star color palette.
///
/// `t` positions the stop in `[0, 1]`; stops must be ordered by
/// non-decreasing `t`, conventionally starting at 0 and ending at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteStop {
    pub t: f32,
    pub rgb: [u8; 3],
}

impl PaletteStop {
    pub const fn new(t: f32, rgb: [u8; 3]) -> Self {
        Self { t, rgb }
    }
}

/// A translucent color used for nebula blobs and gradients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl Tint {
    pub const fn new(rgb: [u8; 3], alpha: f32) -> Self {
        Self { rgb, alpha }
    }
}

/// Description of the pre-rendered nebula backdrop.
///
/// Consumed once per resize by the nebula painter; the painted raster is the
/// only artifact retained afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NebulaConfig {
    /// Opaque base fill (deep space).
    pub base: [u8; 3],
    /// Number of additive radial blobs.
    pub blobs: u32,
    /// Blob radius range, relative to `min(width, height)`.
    pub radius: [f32; 2],
    /// Blob colors, cycled by blob index.
    pub colors: Vec<Tint>,
}

impl Default for NebulaConfig {
    fn default() -> Self {
        Self {
            base: [0x05, 0x07, 0x0d],
            blobs: 8,
            radius: [0.25, 0.55],
            colors: vec![
                Tint::new([147, 51, 234], 0.13), // purple
                Tint::new([236, 72, 153], 0.10), // pink
                Tint::new([59, 130, 246], 0.10), // blue
                Tint::new([34, 197, 94], 0.07),  // green
            ],
        }
    }
}

/// Tunable parameters for a [`Starfield`](crate::Starfield) instance.
///
/// Positions are simulated in normalized `[0, 1]` space, so the motion
/// constants are per-frame deltas in that space. Repulsion is the exception:
/// its radius and strength are expressed in pixels and converted back to
/// normalized space each step, keeping the effect resolution-independent.
#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldConfig {
    /// Stars per visible pixel; the population target is
    /// `floor(width * height * density)`.
    pub density: f32,
    /// Star square side length range in pixels, interpolated by depth.
    pub star_size: [f32; 2],
    /// Twinkle amplitude, 0..1.
    pub twinkle: f32,
    /// Base leftward drift per frame.
    pub drift: f32,
    /// Upper bound for the depth-scaled twinkle rate term.
    pub max_speed: f32,
    /// Pointer parallax factor.
    pub parallax: f32,

    /// Repulsion radius around the pointer, in pixels.
    pub repel_radius: f32,
    /// Repulsion push strength.
    pub repel_strength: f32,
    /// 0..1; scales the push down for nearer (higher-z) stars.
    pub repel_depth_bias: f32,
    /// Minimum interval between processed pointer moves, in milliseconds.
    pub throttle_pointer_ms: u64,

    /// Color each star from the palette; when false every star uses a fixed
    /// near-white.
    pub use_gradient_stars: bool,
    /// Ordered palette stops for star coloring.
    pub palette: Vec<PaletteStop>,
    /// Nebula backdrop description.
    pub nebula: NebulaConfig,

    /// Seed for blob placement and star spawning. `None` seeds from entropy,
    /// which is the production default; set it for reproducible output.
    pub seed: Option<u64>,
    /// Force the reduced-motion static mode on or off. `None` reads the
    /// `STARFIELD_REDUCED_MOTION` environment variable once at construction.
    pub reduced_motion: Option<bool>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            density: 0.00035,
            star_size: [3.0, 6.0],
            twinkle: 0.12,
            drift: 0.0015,
            max_speed: 0.00028,
            parallax: 0.04,

            repel_radius: 220.0,
            repel_strength: 1.35,
            repel_depth_bias: 0.75,
            throttle_pointer_ms: 12,

            use_gradient_stars: true,
            palette: vec![
                PaletteStop::new(0.00, [71, 85, 197]),   // indigo
                PaletteStop::new(0.28, [139, 92, 246]),  // violet
                PaletteStop::new(0.55, [236, 72, 153]),  // pink
                PaletteStop::new(0.78, [56, 189, 248]),  // sky
                PaletteStop::new(1.00, [99, 102, 241]),  // indigo
            ],
            nebula: NebulaConfig::default(),

            seed: None,
            reduced_motion: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_ordered() {
        let config = StarfieldConfig::default();
        for pair in config.palette.windows(2) {
            assert!(pair[0].t <= pair[1].t);
        }
        assert_eq!(config.palette.first().map(|s| s.t), Some(0.0));
        assert_eq!(config.palette.last().map(|s| s.t), Some(1.0));
    }

    #[test]
    fn test_struct_update_override() {
        let config = StarfieldConfig {
            density: 0.001,
            ..StarfieldConfig::default()
        };
        assert_eq!(config.density, 0.001);
        assert_eq!(config.repel_radius, 220.0);
    }
}
