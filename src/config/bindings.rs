//! Placeholder binding tables consulted during path parameter resolution.

use crate::config::settings::Settings;
use crate::constants;
use std::collections::BTreeMap;

/// Placeholder names mapped to the GET endpoint that lists candidate values.
pub const DEFAULT_LIST_ENDPOINTS: &[(&str, &str)] = &[
    ("app_id", "/v1/apps"),
    ("install_id", "/v1/installs"),
    ("component_id", "/v1/components"),
    ("org_id", "/v1/orgs"),
    ("action_workflow_id", "/v1/action-workflows"),
    ("workflow_id", "/v1/workflows"),
    ("vcs_connection_id", "/v1/vcs-connections"),
];

/// Immutable binding tables for the path parameter resolver.
///
/// `env_values` binds placeholder names to externally configured values;
/// an empty value counts as unset. `list_endpoints` binds placeholder names
/// to list operations used for interactive selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverBindings {
    env_values: BTreeMap<String, String>,
    list_endpoints: BTreeMap<String, String>,
}

impl ResolverBindings {
    #[must_use]
    pub const fn new(
        env_values: BTreeMap<String, String>,
        list_endpoints: BTreeMap<String, String>,
    ) -> Self {
        Self {
            env_values,
            list_endpoints,
        }
    }

    /// Default tables, with the configured ids and any list endpoint overrides.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let env_values = BTreeMap::from([
            (constants::PARAM_APP_ID.to_string(), settings.app_id.clone()),
            (
                constants::PARAM_INSTALL_ID.to_string(),
                settings.install_id.clone(),
            ),
            (constants::PARAM_ORG_ID.to_string(), settings.org_id.clone()),
        ]);

        let mut list_endpoints: BTreeMap<String, String> = DEFAULT_LIST_ENDPOINTS
            .iter()
            .map(|(name, path)| ((*name).to_string(), (*path).to_string()))
            .collect();
        list_endpoints.extend(settings.list_endpoints.clone());

        Self::new(env_values, list_endpoints)
    }

    /// The configured value for `name`, if bound and non-empty.
    #[must_use]
    pub fn env_value(&self, name: &str) -> Option<&str> {
        self.env_values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn list_endpoint(&self, name: &str) -> Option<&str> {
        self.list_endpoints.get(name).map(String::as_str)
    }
}
