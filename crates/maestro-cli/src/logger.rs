use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use maestro_config::LogLevel;

/// Initialize logging with fern
///
/// Everything goes to stderr so that stdout carries nothing but command
/// results. Colors are only applied when the caller says stderr is a TTY.
pub fn initialize(log_level: LogLevel, colored: bool) -> Result<(), log::SetLoggerError> {
    let level_filter = log_level.0;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let level = if colored {
                colors.color(record.level()).to_string()
            } else {
                record.level().to_string()
            };
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = level,
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(std::io::stderr())
        .apply()?;

    info!("Logger initialized: level={:?}, stderr", level_filter);

    Ok(())
}
