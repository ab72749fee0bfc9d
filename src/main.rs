use starfield::{window, StarfieldConfig};

fn main() {
    env_logger::init();

    if let Err(e) = window::run(StarfieldConfig::default()) {
        eprintln!("starfield: {}", e);
        std::process::exit(1);
    }
}
