use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` records the caller's file and position.
///
/// **WHY THIS MATTERS**: Every error in the client (missing content type, config parse
/// failures, transport errors) embeds an `ErrorLocation`. If capture breaks, every message
/// loses the one piece of context that says which call site failed.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being propagated or the
/// file/line/column fields are swapped.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN / WHEN: A location captured here
    let location = ErrorLocation::from(Location::caller());

    // THEN: It points into this test file
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert!(location.line > 0, "Should capture line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Pins the `[file:line:column]` rendering used in every error message.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    let location = ErrorLocation::from(Location::caller());

    let formatted = format!("{location}");

    assert_eq!(
        formatted,
        format!("[{}:{}:{}]", location.file, location.line, location.column)
    );
}

/// **VALUE**: Verifies `#[track_caller]` helpers report their call sites, not their own body.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[track_caller]` on the `From` impls in the
/// client error types, which would make every HTTP error point at the same line.
#[test]
fn given_track_caller_helper_when_called_twice_then_lines_differ() {
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    let first = capture_location();
    let second = capture_location();

    assert_eq!(first.file, second.file);
    assert_eq!(first.line + 1, second.line, "Lines should be sequential");
}
