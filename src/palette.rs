//! Piecewise-linear palette sampling.
//!
//! Maps a scalar in `[0, 1]` to an RGB color by interpolating between
//! ordered [`PaletteStop`]s. Sampling is pure: no hidden state, same input
//! always yields the same color.

use crate::config::PaletteStop;

/// Near-white fallback used for empty palettes and non-gradient stars.
pub const FALLBACK_RGB: [u8; 3] = [235, 240, 255];

/// Linear interpolation between two scalars.
#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Sample the palette at `t`, clamped to `[0, 1]`.
///
/// Scans for the segment whose upper stop position exceeds `t` and
/// interpolates each channel linearly within it. `t` past the last stop uses
/// the last segment; an empty palette yields [`FALLBACK_RGB`].
pub fn sample(stops: &[PaletteStop], t: f32) -> [u8; 3] {
    if stops.is_empty() {
        return FALLBACK_RGB;
    }
    let t = t.clamp(0.0, 1.0);

    let mut i = 0;
    while i < stops.len() - 1 && t > stops[i + 1].t {
        i += 1;
    }
    let a = &stops[i];
    let b = &stops[(i + 1).min(stops.len() - 1)];

    let span = b.t - a.t;
    let k = if span == 0.0 { 0.0 } else { (t - a.t) / span };

    [
        lerp(a.rgb[0] as f32, b.rgb[0] as f32, k).round() as u8,
        lerp(a.rgb[1] as f32, b.rgb[1] as f32, k).round() as u8,
        lerp(a.rgb[2] as f32, b.rgb[2] as f32, k).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops() -> Vec<PaletteStop> {
        vec![
            PaletteStop::new(0.0, [0, 0, 0]),
            PaletteStop::new(0.5, [100, 50, 200]),
            PaletteStop::new(1.0, [200, 100, 0]),
        ]
    }

    #[test]
    fn test_endpoints() {
        let p = stops();
        assert_eq!(sample(&p, 0.0), [0, 0, 0]);
        assert_eq!(sample(&p, 1.0), [200, 100, 0]);
    }

    #[test]
    fn test_clamps_out_of_range() {
        let p = stops();
        assert_eq!(sample(&p, -3.0), sample(&p, 0.0));
        assert_eq!(sample(&p, 7.5), sample(&p, 1.0));
    }

    #[test]
    fn test_midpoint_interpolates() {
        let p = stops();
        assert_eq!(sample(&p, 0.25), [50, 25, 100]);
    }

    #[test]
    fn test_monotone_within_segment() {
        let p = stops();
        let lo = sample(&p, 0.1);
        let hi = sample(&p, 0.4);
        for ch in 0..3 {
            // All channels rise from stop 0 to stop 1 in this fixture.
            assert!(lo[ch] <= hi[ch]);
            assert!(lo[ch] >= p[0].rgb[ch] && hi[ch] <= p[1].rgb[ch]);
        }
    }

    #[test]
    fn test_empty_palette_falls_back() {
        assert_eq!(sample(&[], 0.5), FALLBACK_RGB);
    }

    #[test]
    fn test_degenerate_segment() {
        let p = vec![
            PaletteStop::new(0.5, [10, 10, 10]),
            PaletteStop::new(0.5, [90, 90, 90]),
        ];
        // Zero-width segment must not divide by zero.
        assert_eq!(sample(&p, 0.5), [10, 10, 10]);
    }
}
