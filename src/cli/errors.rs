//! Error display formatting for the CLI.

use crate::error::Error;

/// One line for the error, plus a hint line when there is one.
#[must_use]
pub fn format_error(error: &Error) -> String {
    error.hint().map_or_else(
        || format!("Error: {error}"),
        |hint| format!("Error: {error}\nHint: {hint}"),
    )
}

/// Prints an error message, either as JSON or user-friendly format.
pub fn print_error_with_json(error: &Error, json_format: bool) {
    if !json_format {
        eprintln!("{}", format_error(error));
        return;
    }
    let json_error = error.to_json();
    let Ok(json_output) = serde_json::to_string_pretty(&json_error) else {
        eprintln!("{}", format_error(error));
        return;
    };
    eprintln!("{json_output}");
}
