//! Opt-in log output for binaries and test harnesses built on this crate.
//!
//! The client never installs a logger on its own; every request is reported
//! through the `log` facade only. Programs that have no logger of their own
//! can call [`initialize`] (or [`initialize_with`] for custom settings) once
//! at startup to route those records to a file and, optionally, the terminal.

use crate::error::logger::LoggerError;

use common::ErrorLocation;

use std::io::stdout;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Cyan, Green, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339_seconds;
use log::{LevelFilter, debug, info};

static LOGGER_INSTALLED: AtomicBool = AtomicBool::new(false);

const LOG_FILE_NAME: &str = "osm-client.log";

/// Crates below us whose debug output drowns out request logging.
const HTTP_STACK_TARGETS: [&str; 4] = ["hyper", "hyper_util", "reqwest", "rustls"];

#[cfg(debug_assertions)]
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LoggerSettings {
    pub log_dir: PathBuf,
    pub level: LevelFilter,
    /// Level applied to the HTTP stack crates underneath reqwest.
    pub http_stack_level: LevelFilter,
    /// Mirror records to stdout with coloured levels.
    pub stdout: bool,
}

impl LoggerSettings {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            level: DEFAULT_LEVEL,
            http_stack_level: LevelFilter::Warn,
            stdout: true,
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_http_stack_level(mut self, level: LevelFilter) -> Self {
        self.http_stack_level = level;
        self
    }

    pub fn with_stdout(mut self, stdout: bool) -> Self {
        self.stdout = stdout;
        self
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

/// Log to `{log_dir}/osm-client.log` and stdout at the build's default level.
pub fn initialize(log_dir: &Path) -> Result<(), LoggerError> {
    initialize_with(LoggerSettings::new(log_dir))
}

/// Install the global logger described by `settings`.
///
/// Only the first call installs anything; later calls return `Ok` and leave
/// the existing logger in place.
///
/// # Errors
///
/// Returns [`LoggerError`] if the log file cannot be opened or another
/// global logger was installed by someone else.
pub fn initialize_with(settings: LoggerSettings) -> Result<(), LoggerError> {
    if LOGGER_INSTALLED.swap(true, Ordering::SeqCst) {
        debug!("Logger already installed, keeping existing configuration");
        return Ok(());
    }

    let result = build_dispatch(&settings).and_then(|dispatch| {
        dispatch.apply().map_err(|e| LoggerError::Dispatch {
            message: format!("Another global logger is already set: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    });

    match &result {
        Ok(()) => info!(
            "Logging at {} to {}",
            settings.level,
            settings.log_file().display()
        ),
        // Let a later call retry, e.g. with a writable directory.
        Err(_) => LOGGER_INSTALLED.store(false, Ordering::SeqCst),
    }

    result
}

/// Assemble the dispatch for `settings` without installing it.
#[track_caller]
pub(crate) fn build_dispatch(settings: &LoggerSettings) -> Result<Dispatch, LoggerError> {
    let log_file_path = settings.log_file();
    let log_file = fern::log_file(&log_file_path).map_err(|e| LoggerError::LogFile {
        message: format!("Cannot open {}: {e}", log_file_path.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let mut dispatch = HTTP_STACK_TARGETS
        .iter()
        .fold(Dispatch::new().level(settings.level), |dispatch, target| {
            dispatch.level_for(*target, settings.http_stack_level)
        })
        .chain(
            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} {}: {}",
                        format_rfc3339_seconds(SystemTime::now()),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(log_file),
        );

    if settings.stdout {
        let colors = ColoredLevelConfig::new()
            .error(Red)
            .warn(Yellow)
            .info(Green)
            .debug(Blue)
            .trace(Cyan);

        dispatch = dispatch.chain(
            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} {}",
                        format_rfc3339_seconds(SystemTime::now()),
                        colors.color(record.level()),
                        message
                    ))
                })
                .chain(stdout()),
        );
    }

    Ok(dispatch)
}
