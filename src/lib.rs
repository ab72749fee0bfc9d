//! # Starfield
//!
//! A decorative animated starfield with a pre-rendered nebula backdrop,
//! reacting to pointer position with a repulsion effect.
//!
//! The simulation and rendering are pure CPU work over an RGBA raster; the
//! built-in presenter blits that raster into a winit window through wgpu.
//! Hosts can equally embed [`Starfield`] and present the frame themselves.
//!
//! ## Quick Start
//!
//! ```ignore
//! use starfield::{window, StarfieldConfig};
//!
//! fn main() {
//!     window::run(StarfieldConfig::default()).unwrap();
//! }
//! ```
//!
//! ## Embedding
//!
//! ```ignore
//! use starfield::{Starfield, StarfieldConfig};
//!
//! let mut field = Starfield::new(1280, 720, StarfieldConfig::default());
//! loop {
//!     field.tick();
//!     upload_somewhere(field.frame().pixels());
//! #   break;
//! }
//! ```
//!
//! ## Core Concepts
//!
//! - **Stars** live in normalized `[0, 1]` coordinates with a fixed depth
//!   `z`; nearer stars are larger, drift faster and shift more with the
//!   pointer. The field wraps at a small margin so nothing pops at edges.
//! - **The nebula** is painted once per resize into an offscreen raster and
//!   composited under the stars every frame.
//! - **The pointer** is throttled and smoothed; stars inside the repulsion
//!   radius are pushed away with a quadratic falloff.
//! - **Reduced motion** renders a single static frame per tick instead of
//!   animating; it is read from the environment once at construction.

pub mod config;
pub mod error;
pub mod nebula;
pub mod palette;
pub mod pointer;
pub mod raster;
pub mod render;
pub mod sim;
pub mod star;
pub mod starfield;
pub mod time;
pub mod window;

pub use config::{NebulaConfig, PaletteStop, StarfieldConfig, Tint};
pub use error::{GpuError, StarfieldError};
pub use glam::Vec2;
pub use pointer::PointerTracker;
pub use raster::Raster;
pub use star::Star;
pub use starfield::{Mode, Starfield};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::config::{NebulaConfig, PaletteStop, StarfieldConfig, Tint};
    pub use crate::starfield::{Mode, Starfield};
    pub use crate::window;
    pub use crate::Vec2;
}
