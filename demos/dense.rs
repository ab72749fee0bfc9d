//! # Dense field
//!
//! A busier starfield with a warmer palette and a stronger, wider
//! repulsion. Shows how to override config with struct-update syntax.
//!
//! Run with: `cargo run --example dense`

use starfield::{window, NebulaConfig, PaletteStop, StarfieldConfig, Tint};

fn main() {
    env_logger::init();

    let config = StarfieldConfig {
        density: 0.0008,
        star_size: [2.0, 4.0],
        repel_radius: 320.0,
        repel_strength: 2.0,
        palette: vec![
            PaletteStop::new(0.0, [255, 170, 60]),
            PaletteStop::new(0.5, [255, 90, 120]),
            PaletteStop::new(1.0, [180, 80, 255]),
        ],
        nebula: NebulaConfig {
            base: [0x0a, 0x04, 0x02],
            blobs: 12,
            colors: vec![
                Tint::new([255, 120, 40], 0.10),
                Tint::new([200, 60, 160], 0.08),
                Tint::new([120, 60, 255], 0.08),
            ],
            ..NebulaConfig::default()
        },
        ..StarfieldConfig::default()
    };

    if let Err(e) = window::run(config) {
        eprintln!("starfield: {}", e);
        std::process::exit(1);
    }
}
