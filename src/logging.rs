use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// The filter comes from `level` if given (`env_logger` syntax, e.g. "debug" or
/// "ysort_sprites=debug"), then from `RUST_LOG`, and falls back to warnings only so the benchmark
/// output stays clean. Subsequent calls are ignored.
pub fn init_logging(level: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = level {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
