//! Fills `{name}` placeholders in a path.
//!
//! Each placeholder is tried, left to right, against the configured
//! environment bindings and then against a list endpoint whose results are
//! offered to a [`Chooser`]. List calls are made one at a time.

use crate::config::bindings::ResolverBindings;
use crate::engine::transport::{HttpRequest, Transport};
use crate::error::Error;
use crate::interactive::{ChoiceItem, Chooser};
use crate::spec::{has_placeholders, placeholder_name};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// A path with every placeholder replaced, plus the values that were filled in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedPath {
    pub path: String,
    pub params: BTreeMap<String, String>,
}

pub struct PathParamResolver<'a, T: Transport + ?Sized, C: Chooser + ?Sized> {
    bindings: &'a ResolverBindings,
    transport: &'a T,
    chooser: &'a C,
}

impl<'a, T: Transport + ?Sized, C: Chooser + ?Sized> PathParamResolver<'a, T, C> {
    pub const fn new(bindings: &'a ResolverBindings, transport: &'a T, chooser: &'a C) -> Self {
        Self {
            bindings,
            transport,
            chooser,
        }
    }

    /// Replaces every `{name}` segment of `path` with a concrete value.
    ///
    /// # Errors
    /// - [`Error::UnresolvableParam`] when a name has neither binding
    /// - [`Error::Upstream`] when a list call fails or returns a non-success status
    /// - [`Error::NoSelection`] when the user cancels the chooser
    ///
    /// The first failure aborts; no partially resolved path is returned.
    pub async fn resolve(&self, path: &str) -> Result<ResolvedPath, Error> {
        if !has_placeholders(path) {
            return Ok(ResolvedPath {
                path: path.to_string(),
                params: BTreeMap::new(),
            });
        }

        // Values resolved so far. List endpoints are not yet scoped by them.
        let mut resolved = BTreeMap::new();
        let mut parts: Vec<String> = path.split('/').map(str::to_string).collect();

        for part in &mut parts {
            let Some(name) = placeholder_name(part).map(str::to_string) else {
                continue;
            };

            let value = if let Some(value) = self.bindings.env_value(&name) {
                debug!(param = %name, "resolved from environment");
                value.to_string()
            } else {
                let value = self.select(&name).await?;
                debug!(param = %name, "resolved by selection");
                value
            };

            part.clone_from(&value);
            resolved.insert(name, value);
        }

        Ok(ResolvedPath {
            path: parts.join("/"),
            params: resolved,
        })
    }

    async fn select(&self, name: &str) -> Result<String, Error> {
        let list_path =
            self.bindings
                .list_endpoint(name)
                .ok_or_else(|| Error::UnresolvableParam {
                    name: name.to_string(),
                })?;

        debug!(param = %name, list_path, "fetching choices");
        let response = self
            .transport
            .send(&HttpRequest::get(list_path))
            .await
            .map_err(|e| Error::upstream(name, e.to_string()))?;
        if !response.is_success() {
            return Err(Error::upstream(name, format!("HTTP {}", response.status)));
        }

        let items = parse_resources(&response.body)
            .map_err(|e| Error::upstream(name, format!("invalid list response: {e}")))?;

        self.chooser
            .choose(name, &items)?
            .ok_or_else(|| Error::NoSelection {
                name: name.to_string(),
            })
    }
}

/// Extracts `(id, display name)` choices from a JSON array of objects.
///
/// Entries without a non-empty string `id` are skipped. The label is the
/// first non-empty of `display_name`, `name` and `id`.
///
/// # Errors
/// Returns an error if the body is not a JSON array of objects.
pub fn parse_resources(body: &str) -> Result<Vec<ChoiceItem>, serde_json::Error> {
    let objects: Vec<Map<String, Value>> = serde_json::from_str(body)?;

    Ok(objects
        .iter()
        .filter_map(|obj| {
            let id = string_field(obj, &["id"])?;
            let label = string_field(obj, &["display_name", "name", "id"])?;
            Some(ChoiceItem::new(id, label))
        })
        .collect())
}

fn string_field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| obj.get(*k).and_then(Value::as_str))
        .find(|v| !v.is_empty())
}
