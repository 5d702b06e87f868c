use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Installs a terminal logger on stderr. Safe to call more than once, later calls are ignored.
pub fn init(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();

    // stdout is reserved for the report lines
    let _res = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}
