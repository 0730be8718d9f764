//! Shared helpers for binary tests

use std::path::PathBuf;

/// Cached binary path for the apictl CLI to avoid repeated lookups
#[allow(deprecated)]
pub static APICTL_BIN: std::sync::LazyLock<PathBuf> =
    std::sync::LazyLock::new(|| assert_cmd::cargo::cargo_bin("apictl"));

/// Command for the binary with the user's config and ids isolated.
pub fn apictl_cmd(config_file: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(&*APICTL_BIN);
    cmd.env("APICTL_CONFIG_FILE", config_file)
        .env_remove("APICTL_API_URL")
        .env_remove("APICTL_API_TOKEN")
        .env_remove("APICTL_ORG_ID")
        .env_remove("APICTL_APP_ID")
        .env_remove("APICTL_INSTALL_ID")
        .env_remove("APICTL_SPEC_FILE")
        .env_remove("APICTL_LOG");
    cmd
}
