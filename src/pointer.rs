//! Pointer smoothing and throttling.
//!
//! Raw pointer and touch samples are normalized against the surface
//! rectangle and written to a *target* position; the smoothed position the
//! simulation reads chases that target exponentially, one step per frame.
//! Moves arriving faster than the configured interval are dropped outright
//! (the most recent processed sample wins, nothing is queued), so input
//! bursts never inflate per-frame cost.

use glam::Vec2;
use std::time::{Duration, Instant};

/// Fraction of the remaining distance the smoothed position covers per frame.
const SMOOTHING: f32 = 0.20;

/// Center of the surface; repulsion fades toward nothing as the smoothed
/// position settles here after the pointer leaves.
const CENTER: Vec2 = Vec2::splat(0.5);

#[derive(Debug)]
pub struct PointerTracker {
    pos: Vec2,
    target: Vec2,
    throttle: Duration,
    last_processed: Option<Instant>,
}

impl PointerTracker {
    pub fn new(throttle_ms: u64) -> Self {
        Self {
            pos: CENTER,
            target: CENTER,
            throttle: Duration::from_millis(throttle_ms),
            last_processed: None,
        }
    }

    /// Smoothed position in normalized surface coordinates.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Latest accepted raw sample, normalized.
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Feed a raw sample in surface pixels. Returns whether the sample was
    /// accepted or dropped by the throttle.
    pub fn on_move(&mut self, px: f32, py: f32, surface_w: f32, surface_h: f32) -> bool {
        self.on_move_at(Instant::now(), px, py, surface_w, surface_h)
    }

    pub(crate) fn on_move_at(
        &mut self,
        now: Instant,
        px: f32,
        py: f32,
        surface_w: f32,
        surface_h: f32,
    ) -> bool {
        if let Some(last) = self.last_processed {
            if now.duration_since(last) < self.throttle {
                return false;
            }
        }
        self.last_processed = Some(now);
        let w = surface_w.max(1.0);
        let h = surface_h.max(1.0);
        self.target = Vec2::new(px / w, py / h);
        true
    }

    /// Pointer left the surface: retarget the center so repulsion eases out
    /// instead of snapping.
    pub fn on_leave(&mut self) {
        self.target = CENTER;
    }

    /// Advance the smoothed position one frame toward the target.
    pub fn smooth(&mut self) {
        self.pos += (self.target - self.pos) * SMOOTHING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_centered() {
        let t = PointerTracker::new(12);
        assert_eq!(t.pos(), CENTER);
        assert_eq!(t.target(), CENTER);
    }

    #[test]
    fn test_move_normalizes() {
        let mut t = PointerTracker::new(12);
        assert!(t.on_move_at(Instant::now(), 200.0, 150.0, 800.0, 600.0));
        assert_eq!(t.target(), Vec2::new(0.25, 0.25));
        // Smoothed position only follows via smooth().
        assert_eq!(t.pos(), CENTER);
    }

    #[test]
    fn test_throttle_drops_fast_moves() {
        let mut t = PointerTracker::new(12);
        let now = Instant::now();
        assert!(t.on_move_at(now, 100.0, 100.0, 1000.0, 1000.0));
        // 5 ms later: inside the window, dropped, target unchanged.
        assert!(!t.on_move_at(now + Duration::from_millis(5), 900.0, 900.0, 1000.0, 1000.0));
        assert_eq!(t.target(), Vec2::new(0.1, 0.1));
        // 12 ms later: processed.
        assert!(t.on_move_at(now + Duration::from_millis(12), 500.0, 500.0, 1000.0, 1000.0));
        assert_eq!(t.target(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_leave_recenters_target() {
        let mut t = PointerTracker::new(0);
        t.on_move_at(Instant::now(), 0.0, 0.0, 100.0, 100.0);
        t.on_leave();
        assert_eq!(t.target(), CENTER);
    }

    #[test]
    fn test_smooth_converges() {
        let mut t = PointerTracker::new(0);
        t.on_move_at(Instant::now(), 1000.0, 0.0, 1000.0, 1000.0);
        let mut last_dist = (t.target() - t.pos()).length();
        for _ in 0..100 {
            t.smooth();
            let dist = (t.target() - t.pos()).length();
            assert!(dist <= last_dist);
            last_dist = dist;
        }
        assert!(last_dist < 1e-3);
    }

    #[test]
    fn test_zero_surface_dimension_falls_back() {
        let mut t = PointerTracker::new(0);
        assert!(t.on_move_at(Instant::now(), 10.0, 10.0, 0.0, 0.0));
        // Degenerate rect clamps to 1 px instead of dividing by zero.
        assert_eq!(t.target(), Vec2::new(10.0, 10.0));
    }
}
