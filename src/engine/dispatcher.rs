//! Turns user input into a [`ResolvedRequest`].

use crate::engine::method::{infer_method, Inference};
use crate::engine::resolver::PathParamResolver;
use crate::engine::transport::Transport;
use crate::error::Error;
use crate::interactive::Chooser;
use crate::spec::{has_placeholders, placeholder_name, Route, RouteTable};
use crate::suggestions;
use std::collections::BTreeMap;
use tracing::debug;

/// An executable request: method, concrete path and optional payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub route: Route,
    pub method: String,
    /// Contains no `{...}` segments.
    pub path: String,
    pub payload: Option<String>,
    /// Placeholder values taken from the input or filled in by resolution.
    pub resolved_params: BTreeMap<String, String>,
}

/// Stateless between calls; each `resolve` depends only on its inputs.
pub struct Dispatcher<'a, T: Transport + ?Sized, C: Chooser + ?Sized> {
    table: &'a RouteTable,
    resolver: PathParamResolver<'a, T, C>,
}

impl<'a, T: Transport + ?Sized, C: Chooser + ?Sized> Dispatcher<'a, T, C> {
    pub const fn new(table: &'a RouteTable, resolver: PathParamResolver<'a, T, C>) -> Self {
        Self { table, resolver }
    }

    /// Resolves a user-supplied path, payload and optional method override.
    ///
    /// # Errors
    /// - [`Error::Lookup`] when no route matches the path
    /// - [`Error::AmbiguousMethod`] when no single method can be inferred
    /// - [`Error::MethodNotAvailable`] when the chosen method is not offered
    /// - any path parameter resolution error, unchanged
    pub async fn resolve(
        &self,
        input_path: &str,
        payload: Option<&str>,
        method_override: Option<&str>,
    ) -> Result<ResolvedRequest, Error> {
        let payload = payload.filter(|p| !p.is_empty());

        let lookup = self.table.lookup_with_captures(input_path);
        if lookup.routes.is_empty() {
            return Err(Error::Lookup {
                path: input_path.to_string(),
                suggestions: suggestions::suggest_paths(self.table, input_path),
            });
        }
        debug!(
            candidates = lookup.routes.len(),
            path = input_path,
            "matched routes"
        );

        let method = match infer_method(&lookup.routes, payload.is_some(), method_override) {
            Inference::Method(method) => method,
            Inference::Ambiguous { available } => {
                return Err(Error::AmbiguousMethod {
                    path: input_path.to_string(),
                    available: available.iter().map(ToString::to_string).collect(),
                });
            }
        };
        debug!(method = %method, "selected method");

        let route = lookup
            .routes
            .iter()
            .find(|r| r.method.as_str() == method)
            .ok_or_else(|| Error::MethodNotAvailable {
                method: method.clone(),
                path: input_path.to_string(),
            })?;

        let mut resolved_params: BTreeMap<String, String> = lookup
            .captures
            .into_iter()
            .filter(|(_, value)| placeholder_name(value).is_none())
            .collect();

        let path = if has_placeholders(input_path) {
            let working = merge_literals(&route.path, input_path);
            let resolved = self.resolver.resolve(&working).await?;
            resolved_params.extend(resolved.params);
            resolved.path
        } else {
            input_path.to_string()
        };

        Ok(ResolvedRequest {
            route: (*route).clone(),
            method,
            path,
            payload: payload.map(str::to_string),
            resolved_params,
        })
    }
}

/// Copies literal values from the input into the matching placeholder
/// positions of the template, leaving the input's own placeholders open.
#[must_use]
pub fn merge_literals(template: &str, input_path: &str) -> String {
    let template_parts: Vec<&str> = template.trim_matches('/').split('/').collect();
    let input_parts: Vec<&str> = input_path.trim_matches('/').split('/').collect();
    if template_parts.len() != input_parts.len() {
        return template.to_string();
    }

    let merged: Vec<&str> = template_parts
        .iter()
        .zip(&input_parts)
        .map(|(tp, ip)| {
            if placeholder_name(tp).is_some() && placeholder_name(ip).is_none() {
                *ip
            } else {
                *tp
            }
        })
        .collect();

    let joined = merged.join("/");
    if template.starts_with('/') {
        format!("/{joined}")
    } else {
        joined
    }
}
