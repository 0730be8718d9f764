//! Runtime settings
//!
//! Settings come from an optional TOML file overlaid with `APICTL_*`
//! environment variables. Environment values win over the file.

use crate::constants;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

/// On-disk configuration file layout.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub org_id: Option<String>,
    pub app_id: Option<String>,
    pub install_id: Option<String>,
    pub spec_file: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Extra or overriding placeholder name to list endpoint path bindings.
    #[serde(default)]
    pub list_endpoints: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub api_token: Option<String>,
    pub org_id: String,
    pub app_id: String,
    pub install_id: String,
    pub spec_file: Option<PathBuf>,
    pub timeout_secs: u64,
    pub list_endpoints: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            api_token: None,
            org_id: String::new(),
            app_id: String::new(),
            install_id: String::new(),
            spec_file: None,
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            list_endpoints: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Loads settings from the config file (if any) and the process environment.
    ///
    /// # Errors
    /// Returns an error if an explicitly configured file cannot be read, if the
    /// file is not valid TOML, or if `APICTL_TIMEOUT_SECS` is not a number.
    pub fn load() -> Result<Self, Error> {
        let file = match std::env::var(constants::ENV_CONFIG_FILE) {
            Ok(path) => Some(std::fs::read_to_string(expand_path(&path))?),
            Err(_) => default_config_path()
                .filter(|p| p.exists())
                .map(std::fs::read_to_string)
                .transpose()?,
        };
        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Builds settings from TOML content and an environment lookup.
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or the timeout is not a number.
    pub fn from_sources<F>(file_content: Option<&str>, env: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: FileConfig = file_content.map(toml::from_str).transpose()?.unwrap_or_default();
        let env = |key: &str| env(key).filter(|v| !v.is_empty());

        let timeout_secs = match env(constants::ENV_TIMEOUT_SECS) {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                Error::Config(format!(
                    "{} must be a whole number of seconds, got '{raw}'",
                    constants::ENV_TIMEOUT_SECS
                ))
            })?,
            None => file.timeout_secs.unwrap_or(constants::DEFAULT_TIMEOUT_SECS),
        };

        let settings = Self {
            api_url: env(constants::ENV_API_URL)
                .or(file.api_url)
                .unwrap_or_else(|| constants::DEFAULT_API_URL.to_string()),
            api_token: env(constants::ENV_API_TOKEN).or(file.api_token),
            org_id: env(constants::ENV_ORG_ID).or(file.org_id).unwrap_or_default(),
            app_id: env(constants::ENV_APP_ID).or(file.app_id).unwrap_or_default(),
            install_id: env(constants::ENV_INSTALL_ID)
                .or(file.install_id)
                .unwrap_or_default(),
            spec_file: env(constants::ENV_SPEC_FILE)
                .or(file.spec_file)
                .map(|p| expand_path(&p)),
            timeout_secs,
            list_endpoints: file.list_endpoints,
        };
        debug!(api_url = %settings.api_url, "settings loaded");
        Ok(settings)
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// `~/.config/apictl/config.toml`, when a home directory exists.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = Settings::from_sources(None, env_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let toml = "api_url = \"https://file.example.com\"\napp_id = \"from-file\"\n";
        let settings = Settings::from_sources(
            Some(toml),
            env_from(&[(constants::ENV_APP_ID, "from-env")]),
        )
        .unwrap();
        assert_eq!(settings.api_url, "https://file.example.com");
        assert_eq!(settings.app_id, "from-env");
    }

    #[test]
    fn test_empty_env_value_does_not_override() {
        let toml = "org_id = \"org-1\"\n";
        let settings =
            Settings::from_sources(Some(toml), env_from(&[(constants::ENV_ORG_ID, "")])).unwrap();
        assert_eq!(settings.org_id, "org-1");
    }

    #[test]
    fn test_list_endpoints_from_file() {
        let toml = "[list_endpoints]\nrunner_id = \"/v1/runners\"\n";
        let settings = Settings::from_sources(Some(toml), env_from(&[])).unwrap();
        assert_eq!(
            settings.list_endpoints.get("runner_id").map(String::as_str),
            Some("/v1/runners")
        );
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let result =
            Settings::from_sources(None, env_from(&[(constants::ENV_TIMEOUT_SECS, "soon")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let result = Settings::from_sources(Some("api_url = "), env_from(&[]));
        assert!(matches!(result, Err(Error::Toml(_))));
    }
}
