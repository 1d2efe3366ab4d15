// Logger setup: idempotent installation, settings and file errors

use crate::error::logger::LoggerError;
use crate::logger::{LoggerSettings, build_dispatch, initialize};

use log::LevelFilter;
use tempfile::TempDir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: A binary and its test harness may both try to set up logging.
/// fern refuses a second global logger; that must not surface as an error to the caller.
///
/// **BUG THIS CATCHES**: Would catch the installed-flag guard being removed.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let dir = TempDir::new().unwrap();

    // WHEN: Calling initialize twice
    let first = initialize(dir.path());
    let second = initialize(dir.path());

    // THEN: Both return Ok
    assert!(first.is_ok(), "First initialization should succeed");
    assert!(second.is_ok(), "Second initialization should be a no-op");
}

/// **VALUE**: Verifies an unwritable log directory is reported, not panicked on.
///
/// **BUG THIS CATCHES**: Would catch `fern::log_file()` being unwrapped.
#[test]
fn given_invalid_log_dir_when_building_dispatch_then_log_file_error() {
    // GIVEN: A path that cannot hold a file on Unix-like systems
    let settings = LoggerSettings::new("/dev/null/invalid-path");

    // WHEN: Building the dispatch
    let result = build_dispatch(&settings);

    // THEN: A LogFile error naming the file
    match result {
        Err(LoggerError::LogFile { message, .. }) => {
            assert!(message.contains("osm-client.log"), "message: {message}")
        }
        Err(other) => panic!("expected LogFile error, got {other:?}"),
        Ok(_) => panic!("expected LogFile error, got a dispatch"),
    }
}

#[test]
fn given_writable_dir_without_stdout_when_building_dispatch_then_log_file_is_created() {
    let dir = TempDir::new().unwrap();
    let settings = LoggerSettings::new(dir.path()).with_stdout(false);

    let result = build_dispatch(&settings);

    assert!(result.is_ok());
    assert!(dir.path().join("osm-client.log").exists());
}

#[test]
fn given_settings_overrides_when_built_then_fields_follow_overrides() {
    let settings = LoggerSettings::new("/tmp/logs")
        .with_level(LevelFilter::Trace)
        .with_http_stack_level(LevelFilter::Error)
        .with_stdout(false);

    assert_eq!(settings.level, LevelFilter::Trace);
    assert_eq!(settings.http_stack_level, LevelFilter::Error);
    assert!(!settings.stdout);
    assert_eq!(
        settings.log_file(),
        std::path::PathBuf::from("/tmp/logs/osm-client.log")
    );
}
