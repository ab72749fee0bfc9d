//! The starfield instance.
//!
//! [`Starfield`] owns everything the per-frame loop touches: the star
//! population, the pointer state, the visible frame and the cached nebula
//! layer. The host drives it with [`tick`](Starfield::tick) once per display
//! refresh and presents [`frame`](Starfield::frame) however it likes; the
//! built-in presenter is [`crate::window::run`].
//!
//! The driver is a three-state machine. `Running` smooths the pointer,
//! simulates and renders every tick; `Static` (reduced motion) renders the
//! same fixed frame on every tick and skips simulation; `Destroyed` is
//! terminal and turns every later call into a no-op.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::StarfieldConfig;
use crate::pointer::PointerTracker;
use crate::raster::Raster;
use crate::render;
use crate::sim;
use crate::star::{self, Star};

/// Loop-driver state. Mode is chosen once at construction; the only
/// transition afterwards is into `Destroyed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Running,
    Static,
    Destroyed,
}

/// Reduced-motion preference, read once at construction when the config
/// does not override it.
fn reduced_motion_preference() -> bool {
    std::env::var("STARFIELD_REDUCED_MOTION")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

pub struct Starfield {
    config: StarfieldConfig,
    width: u32,
    height: u32,
    frame: Raster,
    nebula: Raster,
    stars: Vec<Star>,
    pointer: PointerTracker,
    target_count: usize,
    rng: SmallRng,
    mode: Mode,
}

impl Starfield {
    /// Create a running instance sized to the surface: paints the nebula,
    /// spawns the full population and picks the mode.
    ///
    /// This is the explicit factory; hosts that just want a window can use
    /// [`crate::window::run`] instead.
    pub fn new(width: u32, height: u32, config: StarfieldConfig) -> Self {
        let reduced = config
            .reduced_motion
            .unwrap_or_else(reduced_motion_preference);
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let pointer = PointerTracker::new(config.throttle_pointer_ms);

        let mut field = Self {
            config,
            width: 0,
            height: 0,
            frame: Raster::new(width, height),
            nebula: Raster::new(width, height),
            stars: Vec::new(),
            pointer,
            target_count: 0,
            rng,
            mode: if reduced { Mode::Static } else { Mode::Running },
        };
        field.resize(width, height);
        star::fill_to_target(
            &mut field.stars,
            field.target_count,
            &mut field.rng,
            field.config.star_size,
        );
        log::debug!(
            "starfield: {} stars at {}x{} ({:?})",
            field.stars.len(),
            field.width,
            field.height,
            field.mode
        );
        field
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// The rendered frame, valid after the first [`tick`](Starfield::tick).
    pub fn frame(&self) -> &Raster {
        &self.frame
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pointer input entry points, for hosts wiring their own events.
    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Adopt a new surface size: rebuild both rasters, repaint the nebula
    /// and retarget the population. Shrinks truncate immediately; growth is
    /// deferred to the next simulation step.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.mode == Mode::Destroyed {
            return;
        }
        self.width = width.max(1);
        self.height = height.max(1);
        self.frame.resize(self.width, self.height);
        self.nebula.resize(self.width, self.height);
        crate::nebula::paint(&mut self.nebula, &self.config.nebula, &mut self.rng);

        self.target_count = star::target_count(self.width, self.height, self.config.density);
        if self.stars.len() > self.target_count {
            self.stars.truncate(self.target_count);
        }
        log::debug!(
            "starfield: resized to {}x{}, target {}",
            self.width,
            self.height,
            self.target_count
        );
    }

    /// Advance one display frame.
    pub fn tick(&mut self) {
        match self.mode {
            Mode::Destroyed => {}
            Mode::Static => {
                render::draw(&mut self.frame, &self.nebula, &self.stars, &self.config, true);
            }
            Mode::Running => {
                self.pointer.smooth();
                sim::step(
                    &mut self.stars,
                    &self.config,
                    self.pointer.pos(),
                    self.width as f32,
                    self.height as f32,
                    self.target_count,
                    &mut self.rng,
                );
                render::draw(&mut self.frame, &self.nebula, &self.stars, &self.config, false);
            }
        }
    }

    /// Tear the instance down: clears the population and makes every later
    /// `tick`/`resize` a no-op. Safe to call any number of times, including
    /// when no loop ever ran.
    pub fn destroy(&mut self) {
        if self.mode != Mode::Destroyed {
            log::debug!("starfield: destroyed");
        }
        self.mode = Mode::Destroyed;
        self.stars.clear();
    }
}
