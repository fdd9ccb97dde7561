//! Logging setup shared by all three subcommands.
//!
//! Mirrors the teacher crate's `simplelog` combo: a colored terminal logger
//! at `Info` plus a debug-level file logger, both driven by `RUST_LOG` when
//! set.

/// Initialize terminal + file logging. Safe to call once per process; the
/// CLI calls it first thing in `main`.
pub fn init() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        filter,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    match std::fs::create_dir_all("logs").and_then(|_| {
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        std::fs::File::create(format!("logs/{time}.log"))
    }) {
        Ok(file) => {
            let disk = simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file);
            let _ = simplelog::CombinedLogger::init(vec![term, disk]);
        }
        Err(_) => {
            let _ = simplelog::CombinedLogger::init(vec![term]);
        }
    }
}
