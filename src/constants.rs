//! Centralized string constants for apictl
//!
//! This module contains commonly used string literals to:
//! - Reduce string duplication
//! - Keep environment variable names in one place

// HTTP Headers
pub const HEADER_ACCEPT: &str = "Accept";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_ORG_ID: &str = "X-Org-ID";
pub const HEADER_BEARER: &str = "Bearer";

// Content Types
pub const CONTENT_TYPE_JSON: &str = "application/json";

// HTTP methods, in display precedence order
pub const HTTP_METHOD_GET: &str = "GET";
pub const HTTP_METHOD_POST: &str = "POST";
pub const HTTP_METHOD_PUT: &str = "PUT";
pub const HTTP_METHOD_PATCH: &str = "PATCH";
pub const HTTP_METHOD_DELETE: &str = "DELETE";

// Swagger parameter locations
pub const PARAM_IN_PATH: &str = "path";
pub const PARAM_IN_QUERY: &str = "query";
pub const PARAM_IN_BODY: &str = "body";

/// Prefix of body schema references, stripped for display only.
pub const DEFINITIONS_REF_PREFIX: &str = "#/definitions/";

// Path parameter names bound to configuration values
pub const PARAM_APP_ID: &str = "app_id";
pub const PARAM_INSTALL_ID: &str = "install_id";
pub const PARAM_ORG_ID: &str = "org_id";

// Environment Variables
pub const ENV_API_URL: &str = "APICTL_API_URL";
pub const ENV_API_TOKEN: &str = "APICTL_API_TOKEN";
pub const ENV_ORG_ID: &str = "APICTL_ORG_ID";
pub const ENV_APP_ID: &str = "APICTL_APP_ID";
pub const ENV_INSTALL_ID: &str = "APICTL_INSTALL_ID";
pub const ENV_SPEC_FILE: &str = "APICTL_SPEC_FILE";
pub const ENV_CONFIG_FILE: &str = "APICTL_CONFIG_FILE";
pub const ENV_TIMEOUT_SECS: &str = "APICTL_TIMEOUT_SECS";
pub const ENV_LOG: &str = "APICTL_LOG";
pub const ENV_LOG_FORMAT: &str = "APICTL_LOG_FORMAT";
pub const ENV_LOG_FILE: &str = "APICTL_LOG_FILE";
pub const ENV_LOG_MAX_BODY: &str = "APICTL_LOG_MAX_BODY";

// Defaults
pub const DEFAULT_API_URL: &str = "https://api.example.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_MAX_BODY: usize = 1000;
pub const CONFIG_DIR_NAME: &str = "apictl";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const USER_AGENT: &str = concat!("apictl/", env!("CARGO_PKG_VERSION"));

// Error Context Messages
pub const ERR_API_CREDENTIALS: &str =
    "Check your API credentials and authentication configuration.";
pub const ERR_PERMISSION_DENIED: &str =
    "Your credentials may be valid but lack permission for this operation.";
pub const ERR_ENDPOINT_NOT_FOUND: &str = "Check that the API endpoint and parameters are correct.";
pub const ERR_RATE_LIMITED: &str = "You're making requests too quickly. Wait before trying again.";
pub const ERR_SERVER_ERROR: &str = "The API server is experiencing issues. Try again later.";
pub const ERR_CONNECTION: &str = "Check that the API server is running and accessible.";
pub const ERR_TIMEOUT: &str = "The API server may be slow or unresponsive. Try again later.";
pub const ERR_FILE_NOT_FOUND: &str = "Check that the file path is correct and the file exists.";
pub const ERR_PERMISSION: &str = "Check file permissions or run with appropriate privileges.";
pub const ERR_TOML_SYNTAX: &str = "Check that your configuration file is valid TOML syntax.";
pub const ERR_LIST_ENDPOINTS: &str = "Use 'apictl --list' to browse available endpoints.";
