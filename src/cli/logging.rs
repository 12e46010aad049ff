use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize the logging system with the specified level
pub fn init_logging(debug: bool) -> LevelFilter {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    SimpleLogger::new().with_level(level).init().ok();
    level
}

/// Adjust the level of the already-initialized logger
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
