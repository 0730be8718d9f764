//! `--info` output: route metadata for every method matching a path.

use crate::spec::{Param, Route};
use std::fmt::Write;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ParamRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    param_type: String,
    #[tabled(rename = "Required")]
    required: String,
    #[tabled(rename = "Default")]
    default: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Param> for ParamRow {
    fn from(p: &Param) -> Self {
        Self {
            name: p.name.clone(),
            param_type: p.param_type.clone(),
            required: if p.required { "yes" } else { "" }.to_string(),
            default: p.default.as_ref().map(ToString::to_string).unwrap_or_default(),
            description: p.description.clone(),
        }
    }
}

fn param_table(params: &[Param]) -> String {
    let rows: Vec<ParamRow> = params.iter().map(ParamRow::from).collect();
    Table::new(&rows).to_string()
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders details for each route, separated by blank lines.
#[must_use]
pub fn render_endpoint_info(routes: &[&Route], api_url: &str) -> String {
    let mut out = String::new();
    for (i, r) in routes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", r.display_name());
        if !r.summary.is_empty() {
            let _ = writeln!(out, "  {}", r.summary);
        }
        let _ = writeln!(out, "  Operation: {}", r.operation_id);
        let _ = writeln!(out, "  Docs:      {}", r.docs_url(api_url));

        if !r.path_params.is_empty() {
            let _ = writeln!(out, "  Path params:");
            let _ = writeln!(out, "{}", indent(&param_table(&r.path_params), "    "));
        }
        if !r.query_params.is_empty() {
            let _ = writeln!(out, "  Query params:");
            let _ = writeln!(out, "{}", indent(&param_table(&r.query_params), "    "));
        }
        if r.has_body {
            let _ = writeln!(out, "  Body:      {}", r.body_schema_name());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{HttpMethod, ParamDefault, ParamLocation};

    fn route() -> Route {
        Route {
            path: "/v1/apps".to_string(),
            method: HttpMethod::Post,
            operation_id: "CreateApp".to_string(),
            summary: "create an app".to_string(),
            tag: "apps".to_string(),
            path_params: Vec::new(),
            query_params: vec![Param {
                name: "limit".to_string(),
                location: ParamLocation::Query,
                param_type: "integer".to_string(),
                required: false,
                description: "page size".to_string(),
                default: Some(ParamDefault::Number(serde_json::Number::from(10_u64))),
            }],
            has_body: true,
            body_schema_ref: "#/definitions/service.CreateAppRequest".to_string(),
        }
    }

    #[test]
    fn test_info_shows_operation_and_docs() {
        let r = route();
        let text = render_endpoint_info(&[&r], "https://api.example.com/");
        assert!(text.starts_with("POST /v1/apps\n  create an app\n"));
        assert!(text.contains("  Operation: CreateApp"));
        assert!(text.contains("https://api.example.com/docs/index.html#/apps/CreateApp"));
    }

    #[test]
    fn test_info_strips_definitions_prefix() {
        let r = route();
        let text = render_endpoint_info(&[&r], "https://api.example.com");
        assert!(text.contains("  Body:      service.CreateAppRequest"));
        assert!(!text.contains("#/definitions/"));
    }

    #[test]
    fn test_info_renders_param_defaults() {
        let r = route();
        let text = render_endpoint_info(&[&r], "https://api.example.com");
        assert!(text.contains("Query params:"));
        assert!(text.contains("limit"));
        assert!(text.contains("10"));
        assert!(!text.contains("Path params:"));
    }
}
