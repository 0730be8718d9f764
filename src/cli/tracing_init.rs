//! Tracing/logging initialization for the CLI.

use crate::constants;
use tracing_subscriber::EnvFilter;

/// Wrapper type to write logs to file or stderr.
struct FileOrStderr {
    file: Option<std::sync::Mutex<std::fs::File>>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for FileOrStderr {
    type Writer = Box<dyn std::io::Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        self.file
            .as_ref()
            .and_then(|mutex| mutex.lock().ok())
            .and_then(|file| file.try_clone().ok())
            .map_or_else(
                || Box::new(std::io::stderr()) as Self::Writer,
                |cloned| Box::new(cloned) as Self::Writer,
            )
    }
}

/// Target of every event this crate emits.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Filter directives for `-v` counts, falling back to `APICTL_LOG` (default `error`).
///
/// Verbosity raises only this crate's level; HTTP and TLS dependencies stay
/// at `warn` (`-v`) or `info` (`-vv`). A bare level in `APICTL_LOG` is
/// scoped the same way so `APICTL_LOG=debug` does not flood with connection
/// pool noise; full directives are passed through unchanged.
#[must_use]
pub fn log_level(verbosity: u8) -> String {
    match verbosity {
        0 => std::env::var(constants::ENV_LOG)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| "error".to_string(), |v| scope_directive(&v)),
        1 => format!("{CRATE_TARGET}=debug,warn"),
        _ => format!("{CRATE_TARGET}=trace,info"),
    }
}

fn scope_directive(raw: &str) -> String {
    let raw = raw.trim();
    let is_bare_level = matches!(
        raw.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error" | "off"
    );
    if is_bare_level {
        format!("{CRATE_TARGET}={raw},warn")
    } else {
        raw.to_string()
    }
}

/// Initialize tracing-subscriber for resolution and request logging.
pub fn init_tracing(verbosity: u8) {
    use std::fs::OpenOptions;
    use std::sync::Mutex;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = EnvFilter::try_new(log_level(verbosity))
        .or_else(|_| EnvFilter::try_new("error"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    let log_format = std::env::var(constants::ENV_LOG_FORMAT)
        .map_or_else(|_| "text".to_string(), |s| s.to_lowercase());

    if log_format != "json" && log_format != "text" {
        // Tracing is not yet initialized; eprintln! is the only output channel available.
        eprintln!(
            "Warning: Unrecognized {} '{log_format}'. Valid values: 'json', 'text'. Using 'text'.",
            constants::ENV_LOG_FORMAT
        );
    }

    let writer = std::env::var(constants::ENV_LOG_FILE).ok().map_or_else(
        || FileOrStderr { file: None },
        |path| match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => FileOrStderr {
                file: Some(Mutex::new(file)),
            },
            Err(e) => {
                eprintln!("Warning: Could not open log file '{path}': {e}. Using stderr.");
                FileOrStderr { file: None }
            }
        },
    );

    if log_format == "json" {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_span_list(false)
            .with_target(true)
            .with_line_number(true)
            .with_writer(writer);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(writer);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }
}
