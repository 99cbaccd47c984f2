use log::{LevelFilter, debug};
use simplelog::{ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Installs a terminal logger for the whole process. Calling it twice is harmless: the second
/// call reports that a logger is already set and returns the error instead of panicking.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build();
    CombinedLogger::init(vec![TermLogger::new(
        level,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
}

/// Logger with the default simplelog configuration, convenient in tests. Keeps an already
/// installed logger.
pub fn init_default_logger() {
    if let Err(e) = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        debug!("keeping the installed logger: {}", e);
    }
}
