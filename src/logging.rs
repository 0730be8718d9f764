//! Request and response logging with header redaction.
//!
//! Method and URL are logged at info, headers at debug and bodies at trace.
//! Credential-bearing headers are always replaced with `[REDACTED]`.

use crate::constants;
use reqwest::header::HeaderMap;
use tracing::{debug, info, trace};

const REDACTED: &str = "[REDACTED]";

/// Checks if a header name should be redacted
#[must_use]
pub fn should_redact_header(header_name: &str) -> bool {
    let lower = header_name.to_lowercase();
    matches!(
        lower.as_str(),
        "authorization"
            | "proxy-authorization"
            | "cookie"
            | "set-cookie"
            | "x-api-key"
            | "x-auth-token"
            | "api-key"
            | "token"
    )
}

fn log_headers(label: &str, headers: &HeaderMap) {
    debug!(target: "apictl::transport", "{label} headers:");
    for (name, value) in headers {
        let header_str = name.as_str();
        let display_value = if should_redact_header(header_str) {
            REDACTED.to_string()
        } else {
            String::from_utf8_lossy(value.as_bytes()).to_string()
        };
        debug!(target: "apictl::transport", "  {header_str}: {display_value}");
    }
}

/// Logs an outgoing HTTP request
pub fn log_request(method: &str, url: &str, headers: &HeaderMap, body: Option<&str>) {
    info!(target: "apictl::transport", "→ {} {}", method.to_uppercase(), url);
    log_headers("Request", headers);
    if let Some(body_content) = body {
        trace!(target: "apictl::transport", "Request body: {body_content}");
    }
}

/// Logs an HTTP response, truncating the body at `max_body_len` characters
pub fn log_response(
    status: u16,
    duration_ms: u128,
    headers: &HeaderMap,
    body: &str,
    max_body_len: usize,
) {
    info!(target: "apictl::transport", "← {status} ({duration_ms}ms)");
    log_headers("Response", headers);

    match body.char_indices().nth(max_body_len) {
        Some((cut, _)) => trace!(
            target: "apictl::transport",
            "Response body: {} (truncated at {} chars)",
            &body[..cut],
            max_body_len
        ),
        None => trace!(target: "apictl::transport", "Response body: {body}"),
    }
}

/// Gets the maximum logged body length from `APICTL_LOG_MAX_BODY`
#[must_use]
pub fn get_max_body_len() -> usize {
    std::env::var(constants::ENV_LOG_MAX_BODY)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(constants::DEFAULT_LOG_MAX_BODY)
}
