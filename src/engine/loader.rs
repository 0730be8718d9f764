use crate::error::Error;
use crate::spec::{parse_api_description, ApiDescription};
use std::fs;
use std::path::Path;
use tracing::debug;

/// The API description compiled into the binary.
pub const EMBEDDED_API_DESCRIPTION: &str = include_str!("../../schemas/api.json");

/// Loads the API description, from `spec_file` when given, else the embedded one.
///
/// # Errors
/// Returns an error if the file cannot be read or the document does not parse.
pub fn load_api_description(spec_file: Option<&Path>) -> Result<ApiDescription, Error> {
    let Some(path) = spec_file else {
        return parse_api_description(EMBEDDED_API_DESCRIPTION);
    };

    debug!(path = %path.display(), "loading API description from file");
    let content = fs::read_to_string(path)?;
    parse_api_description(&content)
}
