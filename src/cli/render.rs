//! Rendering of API responses.
//!
//! Successful bodies go to stdout, failed ones (status >= 400) to stderr.
//! JSON bodies are pretty-printed unless raw output was requested.

use crate::engine::transport::HttpResponse;
use crate::error::Error;
use serde_json::Value;
use std::io::Write;

fn pretty_json(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
}

/// Writes a response body to `out` (or `err` on failure status).
///
/// # Errors
/// Returns [`Error::HttpStatus`] for a status of 400 or above, after the body
/// has been written, or an I/O error if writing fails.
pub fn render_response<O: Write, E: Write>(
    response: &HttpResponse,
    raw: bool,
    out: &mut O,
    err: &mut E,
) -> Result<(), Error> {
    let text = if raw {
        None
    } else {
        pretty_json(&response.body)
    };
    let text = text.as_deref().unwrap_or(response.body.as_str());

    if response.is_success() {
        writeln!(out, "{text}")?;
        return Ok(());
    }

    writeln!(err, "{text}")?;
    Err(Error::HttpStatus {
        status: response.status,
    })
}

/// Prints a response to stdout/stderr.
///
/// # Errors
/// See [`render_response`].
pub fn print_response(response: &HttpResponse, raw: bool) -> Result<(), Error> {
    render_response(
        response,
        raw,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}
