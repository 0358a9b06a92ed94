fn main() {
    tracing_subscriber::fmt::init();
    match display_modes::system_displays() {
        Ok(displays) => {
            println!("Found {} display device(s)", displays.devices().len());
            for d in displays.devices() {
                let bounds = d.bounds();
                println!(
                    "{}: {} ({}) primary={} bounds={},{} {}x{} current={} modes={}",
                    d.id(),
                    d.device_name(),
                    d.description(),
                    d.is_primary(),
                    bounds.x,
                    bounds.y,
                    bounds.width,
                    bounds.height,
                    d.current_resolution(),
                    d.resolutions().len()
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
