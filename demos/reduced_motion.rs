//! # Reduced motion
//!
//! Forces the static reduced-motion mode: one fixed frame, no twinkle, no
//! drift, but still responsive to window resizes. Equivalent to running the
//! default binary with `STARFIELD_REDUCED_MOTION=1`.
//!
//! Run with: `cargo run --example reduced_motion`

use starfield::{window, StarfieldConfig};

fn main() {
    env_logger::init();

    let config = StarfieldConfig {
        reduced_motion: Some(true),
        ..StarfieldConfig::default()
    };

    if let Err(e) = window::run(config) {
        eprintln!("starfield: {}", e);
        std::process::exit(1);
    }
}
