use crate::constants;
use crate::error::Error;
use crate::spec::{ApiDescription, HttpMethod, Param, ParamDefault, ParamLocation, Route};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

// Swagger 2.0 structures, only the fields the route table needs.

#[derive(Debug, Default, Deserialize)]
struct SwaggerDoc {
    #[serde(default)]
    info: SwaggerInfo,
    /// Operations stay untyped until their key is known to be an HTTP verb,
    /// so path-level keys such as `parameters` never fail deserialization.
    #[serde(default)]
    paths: BTreeMap<String, BTreeMap<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct SwaggerInfo {
    #[serde(default)]
    version: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SwaggerOperation {
    #[serde(default)]
    operation_id: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    parameters: Vec<SwaggerParam>,
}

#[derive(Debug, Default, Deserialize)]
struct SwaggerParam {
    #[serde(default)]
    name: String,
    #[serde(rename = "in", default)]
    location: String,
    #[serde(rename = "type", default)]
    param_type: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    description: String,
    #[serde(default)]
    default: Option<Value>,
    #[serde(default)]
    schema: Option<SwaggerSchema>,
}

#[derive(Debug, Default, Deserialize)]
struct SwaggerSchema {
    #[serde(rename = "$ref", default)]
    reference: String,
}

/// Parses an API description document into a sorted route table.
///
/// JSON is tried first when the content looks like JSON, YAML otherwise, each
/// falling back to the other format. Keys under a path that are not one of
/// GET, POST, PUT, PATCH or DELETE (in any case) are ignored.
///
/// # Errors
/// Returns [`Error::Parse`] if the document cannot be deserialized, or if two
/// keys under one path name the same HTTP method. No partial description is
/// ever returned.
pub fn parse_api_description(content: &str) -> Result<ApiDescription, Error> {
    let raw = parse_document(content)?;
    let doc: SwaggerDoc = serde_json::from_value(raw)
        .map_err(|e| Error::parse_error(format!("unexpected document shape: {e}")))?;

    let mut routes = Vec::new();
    let mut seen = HashSet::new();

    for (path, operations) in doc.paths {
        for (verb, op_value) in operations {
            let Ok(method) = verb.parse::<HttpMethod>() else {
                continue;
            };
            if !seen.insert((path.clone(), method)) {
                return Err(Error::parse_error(format!(
                    "duplicate operation {method} {path}"
                )));
            }

            let op: SwaggerOperation = serde_json::from_value(op_value).map_err(|e| {
                Error::parse_error(format!("invalid operation {method} {path}: {e}"))
            })?;
            routes.push(build_route(&path, method, op));
        }
    }

    routes.sort_by(|a, b| a.path.cmp(&b.path).then(a.method.cmp(&b.method)));
    debug!(routes = routes.len(), version = %doc.info.version, "parsed API description");

    Ok(ApiDescription {
        version: doc.info.version,
        routes,
    })
}

fn parse_document(content: &str) -> Result<Value, Error> {
    if content.trim_start().starts_with('{') {
        match serde_json::from_str::<Value>(content) {
            Ok(value) => Ok(value),
            Err(json_err) => serde_yaml::from_str::<Value>(content)
                .map_err(|_| Error::parse_error(format!("not valid JSON: {json_err}"))),
        }
    } else {
        match serde_yaml::from_str::<Value>(content) {
            Ok(value) => Ok(value),
            Err(yaml_err) => serde_json::from_str::<Value>(content)
                .map_err(|_| Error::parse_error(format!("not valid YAML: {yaml_err}"))),
        }
    }
}

fn build_route(path: &str, method: HttpMethod, op: SwaggerOperation) -> Route {
    let mut route = Route {
        path: path.to_string(),
        method,
        operation_id: op.operation_id,
        summary: op.summary,
        tag: op.tags.into_iter().next().unwrap_or_default(),
        path_params: Vec::new(),
        query_params: Vec::new(),
        has_body: false,
        body_schema_ref: String::new(),
    };

    for p in op.parameters {
        match p.location.as_str() {
            constants::PARAM_IN_PATH => route.path_params.push(convert_param(p, ParamLocation::Path)),
            constants::PARAM_IN_QUERY => {
                route.query_params.push(convert_param(p, ParamLocation::Query));
            }
            constants::PARAM_IN_BODY => {
                route.has_body = true;
                if let Some(schema) = p.schema {
                    route.body_schema_ref = schema.reference;
                }
            }
            _ => {}
        }
    }

    route
}

fn convert_param(p: SwaggerParam, location: ParamLocation) -> Param {
    Param {
        name: p.name,
        location,
        param_type: p.param_type,
        required: p.required,
        description: p.description,
        default: p.default.and_then(convert_default),
    }
}

fn convert_default(value: Value) -> Option<ParamDefault> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(ParamDefault::Bool(b)),
        Value::Number(n) => Some(ParamDefault::Number(n)),
        Value::String(s) => Some(ParamDefault::String(s)),
        // Non-scalar defaults are kept as their JSON text so they can still be shown.
        other => Some(ParamDefault::String(other.to_string())),
    }
}
