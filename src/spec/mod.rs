//! In-memory model of an API description and its route table
//!
//! The parser turns a Swagger-2.0-shaped document into an [`ApiDescription`];
//! [`RouteTable`] indexes it for path lookups. Both are immutable once built.

use crate::constants;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod parser;
pub mod route_table;

pub use parser::parse_api_description;
pub use route_table::{match_path, Lookup, RouteTable};

/// The HTTP verbs a route can declare, in display precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => constants::HTTP_METHOD_GET,
            Self::Post => constants::HTTP_METHOD_POST,
            Self::Put => constants::HTTP_METHOD_PUT,
            Self::Patch => constants::HTTP_METHOD_PATCH,
            Self::Delete => constants::HTTP_METHOD_DELETE,
        }
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            constants::HTTP_METHOD_GET => Ok(Self::Get),
            constants::HTTP_METHOD_POST => Ok(Self::Post),
            constants::HTTP_METHOD_PUT => Ok(Self::Put),
            constants::HTTP_METHOD_PATCH => Ok(Self::Patch),
            constants::HTTP_METHOD_DELETE => Ok(Self::Delete),
            _ => Err(format!("unsupported HTTP method: {s}")),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

/// Scalar default value declared for a parameter.
///
/// An absent or `null` default is represented as `None` on [`Param::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamDefault {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl fmt::Display for ParamDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub location: ParamLocation,
    /// Free-form type name copied from the document, never validated.
    pub param_type: String,
    pub required: bool,
    pub description: String,
    pub default: Option<ParamDefault>,
}

/// One operation: a path template paired with an HTTP method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    pub method: HttpMethod,
    pub operation_id: String,
    pub summary: String,
    pub tag: String,
    pub path_params: Vec<Param>,
    pub query_params: Vec<Param>,
    pub has_body: bool,
    /// Stored as declared, e.g. `#/definitions/service.CreateAppRequest`.
    pub body_schema_ref: String,
}

impl Route {
    /// Short display string like `GET /v1/apps`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// Body schema name without the `#/definitions/` pointer prefix.
    #[must_use]
    pub fn body_schema_name(&self) -> &str {
        self.body_schema_ref
            .strip_prefix(constants::DEFINITIONS_REF_PREFIX)
            .unwrap_or(&self.body_schema_ref)
    }

    /// Swagger UI link for this operation.
    #[must_use]
    pub fn docs_url(&self, base_url: &str) -> String {
        format!(
            "{}/docs/index.html#/{}/{}",
            base_url.trim_end_matches('/'),
            self.tag,
            self.operation_id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDescription {
    pub version: String,
    /// Sorted by path, then by [`HttpMethod`] precedence.
    pub routes: Vec<Route>,
}

/// Returns the placeholder name if `segment` is a `{name}` segment.
#[must_use]
pub fn placeholder_name(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

/// Whether a path still carries at least one `{...}` placeholder.
#[must_use]
pub fn has_placeholders(path: &str) -> bool {
    path.contains('{')
}
