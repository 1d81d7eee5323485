use crate::error::{EntrypointError, Result as EntrypointResult};

use bg_config::LoggingConfig;

use std::fmt::{Arguments, Display};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Initialize logger with fern
///
/// Colored stdout for terminals, plain stdout for container log
/// collectors, or append to `logging.file` when set.
pub fn initialize(logging: &LoggingConfig) -> EntrypointResult<()> {
    let level_filter = logging.level.0;

    let output = match logging.file {
        Some(ref file) => {
            let path = PathBuf::from(file);
            let file = open_log_file(&path)?;
            Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(file)
        }
        None if logging.colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        None => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| EntrypointError::logger(e.to_string()))?;

    match logging.file {
        Some(ref file) => info!("Logger initialized: level={level_filter:?}, file={file}"),
        None => info!("Logger initialized: level={level_filter:?}, stdout"),
    }

    Ok(())
}

fn write_line(out: FormatCallback, message: &Arguments, record: &Record, level: impl Display) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{target}]",
        date = humantime::format_rfc3339_seconds(SystemTime::now()),
        target = record.target(),
    ))
}

fn open_log_file(path: &Path) -> EntrypointResult<std::fs::File> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)
            .map_err(|e| EntrypointError::log_file(path.to_path_buf(), e))?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| EntrypointError::log_file(path.to_path_buf(), e))
}
