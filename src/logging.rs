use log::LevelFilter;
use simple_logger::SimpleLogger;

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the global logger. Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let result = SimpleLogger::new()
        .with_level(level_for(verbose))
        .without_timestamps()
        .init();

    if result.is_ok() {
        log::debug!("verbose mode enabled");
    }
}
