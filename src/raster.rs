//! CPU raster surface.
//!
//! An RGBA8 pixel buffer with the handful of drawing primitives the
//! starfield needs: opaque fill, source-over rects for stars, a linear
//! gradient overlay and additive radial blobs for the nebula, and a
//! whole-surface blit for compositing the cached backdrop.
//!
//! The visible frame and the offscreen nebula layer are both `Raster`s; the
//! windowed presenter uploads the frame's bytes to a GPU texture as-is.

/// RGBA8 pixel buffer. The surface is always fully opaque: every write keeps
/// the alpha byte at 255.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Raster {
    /// Create a buffer of the given size. Zero dimensions clamp to 1 px.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            pixels: vec![0; (width * height * 4) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major from the top-left corner.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Reallocate for a new size, discarding the old contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.pixels = vec![0; (self.width * self.height * 4) as usize];
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 4) as usize
    }

    /// Flood the surface with an opaque color.
    pub fn fill(&mut self, rgb: [u8; 3]) {
        for px in self.pixels.chunks_exact_mut(4) {
            px[0] = rgb[0];
            px[1] = rgb[1];
            px[2] = rgb[2];
            px[3] = 255;
        }
    }

    /// Source-over blend one pixel. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, rgb: [u8; 3], alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        let i = self.offset(x as u32, y as u32);
        for ch in 0..3 {
            let src = rgb[ch] as f32;
            let dst = self.pixels[i + ch] as f32;
            self.pixels[i + ch] = (src * a + dst * (1.0 - a)).round() as u8;
        }
        self.pixels[i + 3] = 255;
    }

    /// Additive blend one pixel, saturating per channel. `rgb` is already
    /// alpha-weighted, in 0..1.
    #[inline]
    fn add_pixel(&mut self, x: i32, y: i32, rgb: [f32; 3]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        for ch in 0..3 {
            let add = (rgb[ch] * 255.0).round() as u16;
            self.pixels[i + ch] = (self.pixels[i + ch] as u16 + add).min(255) as u8;
        }
        self.pixels[i + 3] = 255;
    }

    /// Source-over blend a filled axis-aligned square of side `size` whose
    /// top-left corner is at `(x, y)`, clipped to the surface.
    pub fn fill_square(&mut self, x: f32, y: f32, size: f32, rgb: [u8; 3], alpha: f32) {
        let x0 = x.round() as i32;
        let y0 = y.round() as i32;
        let side = size.round().max(1.0) as i32;
        for py in y0..y0 + side {
            for px in x0..x0 + side {
                self.blend_pixel(px, py, rgb, alpha);
            }
        }
    }

    /// Overlay a linear gradient between two translucent colors, blended
    /// source-over across the whole surface. The gradient runs from `p0` to
    /// `p1`; pixels beyond either end clamp to the end color.
    pub fn linear_gradient(
        &mut self,
        p0: (f32, f32),
        p1: (f32, f32),
        from: ([u8; 3], f32),
        to: ([u8; 3], f32),
    ) {
        let dx = p1.0 - p0.0;
        let dy = p1.1 - p0.1;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return;
        }
        for y in 0..self.height {
            for x in 0..self.width {
                let t = (((x as f32 - p0.0) * dx + (y as f32 - p0.1) * dy) / len_sq)
                    .clamp(0.0, 1.0);
                let rgb = [
                    crate::palette::lerp(from.0[0] as f32, to.0[0] as f32, t).round() as u8,
                    crate::palette::lerp(from.0[1] as f32, to.0[1] as f32, t).round() as u8,
                    crate::palette::lerp(from.0[2] as f32, to.0[2] as f32, t).round() as u8,
                ];
                let alpha = crate::palette::lerp(from.1, to.1, t);
                self.blend_pixel(x as i32, y as i32, rgb, alpha);
            }
        }
    }

    /// Additively paint a radial blob centered at `(cx, cy)`: the given tint
    /// at the center, fading to fully transparent at radius `r`.
    ///
    /// Both the color and its alpha fade linearly toward the rim, so the
    /// added energy falls off quadratically.
    pub fn radial_blob(&mut self, cx: f32, cy: f32, r: f32, rgb: [u8; 3], alpha: f32) {
        if r <= 0.0 {
            return;
        }
        let x0 = (cx - r).floor() as i32;
        let x1 = (cx + r).ceil() as i32;
        let y0 = (cy - r).floor() as i32;
        let y1 = (cy + r).ceil() as i32;
        let base = [
            rgb[0] as f32 / 255.0 * alpha,
            rgb[1] as f32 / 255.0 * alpha,
            rgb[2] as f32 / 255.0 * alpha,
        ];
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f32 - cx;
                let dy = py as f32 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist >= r {
                    continue;
                }
                let fade = 1.0 - dist / r;
                let contribution = fade * fade;
                self.add_pixel(
                    px,
                    py,
                    [
                        base[0] * contribution,
                        base[1] * contribution,
                        base[2] * contribution,
                    ],
                );
            }
        }
    }

    /// Copy another raster onto this one, covering the whole surface.
    ///
    /// Sizes match in normal operation (both layers are rebuilt together on
    /// resize); a mismatch falls back to nearest-neighbor scaling.
    pub fn blit_scaled(&mut self, src: &Raster) {
        if src.width == self.width && src.height == self.height {
            self.pixels.copy_from_slice(&src.pixels);
            return;
        }
        for y in 0..self.height {
            let sy = (y as u64 * src.height as u64 / self.height as u64) as u32;
            for x in 0..self.width {
                let sx = (x as u64 * src.width as u64 / self.width as u64) as u32;
                let d = self.offset(x, y);
                let s = src.offset(sx, sy);
                self.pixels[d..d + 4].copy_from_slice(&src.pixels[s..s + 4]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_clamp() {
        let r = Raster::new(0, 0);
        assert_eq!(r.width(), 1);
        assert_eq!(r.height(), 1);
        assert_eq!(r.pixels().len(), 4);
    }

    #[test]
    fn test_fill_is_opaque() {
        let mut r = Raster::new(4, 4);
        r.fill([10, 20, 30]);
        for px in r.pixels().chunks_exact(4) {
            assert_eq!(px, &[10, 20, 30, 255]);
        }
    }

    #[test]
    fn test_blend_full_alpha_replaces() {
        let mut r = Raster::new(2, 2);
        r.fill([0, 0, 0]);
        r.blend_pixel(1, 1, [200, 100, 50], 1.0);
        let i = ((1 * 2 + 1) * 4) as usize;
        assert_eq!(&r.pixels()[i..i + 4], &[200, 100, 50, 255]);
    }

    #[test]
    fn test_blend_half_alpha_mixes() {
        let mut r = Raster::new(1, 1);
        r.fill([0, 0, 0]);
        r.blend_pixel(0, 0, [200, 200, 200], 0.5);
        assert_eq!(r.pixels()[0], 100);
    }

    #[test]
    fn test_blend_out_of_bounds_is_ignored() {
        let mut r = Raster::new(2, 2);
        r.blend_pixel(-1, 0, [255, 255, 255], 1.0);
        r.blend_pixel(0, 5, [255, 255, 255], 1.0);
        assert!(r.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_additive_saturates() {
        let mut r = Raster::new(1, 1);
        r.fill([250, 250, 250]);
        r.radial_blob(0.0, 0.0, 10.0, [255, 255, 255], 1.0);
        assert_eq!(&r.pixels()[0..3], &[255, 255, 255]);
    }

    #[test]
    fn test_square_clips_at_edges() {
        let mut r = Raster::new(4, 4);
        r.fill([0, 0, 0]);
        // Straddles the right edge without panicking.
        r.fill_square(3.0, 3.0, 3.0, [255, 255, 255], 1.0);
        assert_eq!(&r.pixels()[((3 * 4 + 3) * 4)..((3 * 4 + 3) * 4 + 3)], &[255, 255, 255]);
    }

    #[test]
    fn test_blit_same_size_copies() {
        let mut a = Raster::new(3, 3);
        let mut b = Raster::new(3, 3);
        b.fill([9, 8, 7]);
        a.blit_scaled(&b);
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_blit_scales_nearest() {
        let mut src = Raster::new(1, 1);
        src.fill([42, 42, 42]);
        let mut dst = Raster::new(4, 2);
        dst.blit_scaled(&src);
        for px in dst.pixels().chunks_exact(4) {
            assert_eq!(px, &[42, 42, 42, 255]);
        }
    }
}
