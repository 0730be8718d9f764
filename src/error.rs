use crate::constants;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API description could not be turned into a route table.
    #[error("Invalid API description: {reason}")]
    Parse { reason: String },
    #[error("No endpoint found for path: {path}")]
    Lookup {
        path: String,
        suggestions: Vec<String>,
    },
    #[error("Ambiguous method for {path} (available: {}), use -X to specify", .available.join(", "))]
    AmbiguousMethod {
        path: String,
        available: Vec<String>,
    },
    #[error("Method {method} not available for path: {path}")]
    MethodNotAvailable { method: String, path: String },
    #[error("Cannot resolve {{{name}}}: no list endpoint known and no environment value set")]
    UnresolvableParam { name: String },
    #[error("Fetching resources for {{{param}}} failed: {reason}")]
    Upstream { param: String, reason: String },
    #[error("No selection made for {{{name}}}")]
    NoSelection { name: String },
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },
    #[error("Invalid query parameter '{0}' (expected key=value)")]
    InvalidQuery(String),
    #[error("Interactive input error: {0}")]
    Interactive(String),
}

/// JSON representation of an error for structured output
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonError {
    pub error_type: String,
    pub message: String,
    pub context: Option<String>,
}

impl Error {
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    pub fn upstream(param: &str, reason: impl Into<String>) -> Self {
        Self::Upstream {
            param: param.to_string(),
            reason: reason.into(),
        }
    }

    /// Hint shown under the error message, if there is one worth giving.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Lookup { suggestions, .. } if !suggestions.is_empty() => {
                Some(format!("Did you mean: {}", suggestions.join(", ")))
            }
            Self::Lookup { .. } => Some(constants::ERR_LIST_ENDPOINTS.to_string()),
            Self::UnresolvableParam { name } => Some(format!(
                "Pass a literal value for {{{name}}} in the path instead."
            )),
            Self::Network(req_err) if req_err.is_connect() => {
                Some(constants::ERR_CONNECTION.to_string())
            }
            Self::Network(req_err) if req_err.is_timeout() => {
                Some(constants::ERR_TIMEOUT.to_string())
            }
            Self::HttpStatus { status } => match status {
                401 => Some(constants::ERR_API_CREDENTIALS.to_string()),
                403 => Some(constants::ERR_PERMISSION_DENIED.to_string()),
                404 => Some(constants::ERR_ENDPOINT_NOT_FOUND.to_string()),
                429 => Some(constants::ERR_RATE_LIMITED.to_string()),
                500..=599 => Some(constants::ERR_SERVER_ERROR.to_string()),
                _ => None,
            },
            Self::Io(io_err) => match io_err.kind() {
                std::io::ErrorKind::NotFound => Some(constants::ERR_FILE_NOT_FOUND.to_string()),
                std::io::ErrorKind::PermissionDenied => {
                    Some(constants::ERR_PERMISSION.to_string())
                }
                _ => None,
            },
            Self::Toml(_) => Some(constants::ERR_TOML_SYNTAX.to_string()),
            _ => None,
        }
    }

    /// Convert error to JSON representation for structured output
    #[must_use]
    pub fn to_json(&self) -> JsonError {
        let error_type = match self {
            Self::Io(_) => "FileSystem",
            Self::Network(_) => "Network",
            Self::Yaml(_) => "YAMLParsing",
            Self::Json(_) => "JSONParsing",
            Self::Toml(_) => "TOMLParsing",
            Self::Config(_) => "Configuration",
            Self::Parse { .. } => "Parse",
            Self::Lookup { .. } => "Lookup",
            Self::AmbiguousMethod { .. } => "AmbiguousMethod",
            Self::MethodNotAvailable { .. } => "MethodNotAvailable",
            Self::UnresolvableParam { .. } => "UnresolvableParam",
            Self::Upstream { .. } => "Upstream",
            Self::NoSelection { .. } => "NoSelection",
            Self::HttpStatus { .. } => "HttpStatus",
            Self::InvalidQuery(_) => "InvalidQuery",
            Self::Interactive(_) => "Interactive",
        };

        JsonError {
            error_type: error_type.to_string(),
            message: self.to_string(),
            context: self.hint(),
        }
    }
}
