//! # Snapshot
//!
//! Renders one seeded frame offscreen and writes it to `starfield.png` with
//! no window, no GPU. Handy for eyeballing palette or nebula changes.
//!
//! Run with: `cargo run --example snapshot`

use starfield::{Starfield, StarfieldConfig};

fn main() {
    env_logger::init();

    let config = StarfieldConfig {
        seed: Some(1234),
        reduced_motion: Some(false),
        ..StarfieldConfig::default()
    };

    let mut field = Starfield::new(1280, 720, config);
    // A few ticks so the twinkle phases spread out.
    for _ in 0..10 {
        field.tick();
    }

    let frame = field.frame();
    let img = image::RgbaImage::from_raw(frame.width(), frame.height(), frame.pixels().to_vec())
        .expect("frame buffer matches its dimensions");
    img.save("starfield.png").expect("failed to write starfield.png");

    println!("wrote starfield.png ({}x{})", frame.width(), frame.height());
}
