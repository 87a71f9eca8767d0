//! Configuration file resolution.
//!
//! Resolves the configuration for a target directory in priority order:
//!
//! 1. `{target}/layer-guard.toml`
//! 2. `{target}/.layer-guard.toml`
//! 3. No config found → built-in layer map

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Found in the target directory.
    Project(PathBuf),
    /// No config found; built-in defaults will be used.
    Default,
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["layer-guard.toml", ".layer-guard.toml"];

/// Resolves the configuration file for `target_dir`.
#[must_use]
pub fn resolve(target_dir: &Path) -> ConfigSource {
    for name in PROJECT_CONFIG_NAMES {
        let candidate = target_dir.join(name);
        if candidate.is_file() {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    ConfigSource::Default
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn project_layer_guard_toml_found() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("layer-guard.toml"), "").unwrap();

        let result = resolve(tmp.path());
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("layer-guard.toml"))
        );
    }

    #[test]
    fn project_dot_layer_guard_toml_found() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".layer-guard.toml"), "").unwrap();

        let result = resolve(tmp.path());
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join(".layer-guard.toml"))
        );
    }

    #[test]
    fn plain_name_preferred_over_dot_prefix() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("layer-guard.toml"), "").unwrap();
        fs::write(tmp.path().join(".layer-guard.toml"), "").unwrap();

        let result = resolve(tmp.path());
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("layer-guard.toml"))
        );
    }

    #[test]
    fn directory_named_like_config_is_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("layer-guard.toml")).unwrap();

        assert_eq!(resolve(tmp.path()), ConfigSource::Default);
    }

    #[test]
    fn no_config_returns_default() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(resolve(tmp.path()), ConfigSource::Default);
    }

    #[test]
    fn missing_target_dir_returns_default() {
        assert_eq!(
            resolve(Path::new("/nonexistent/layer-guard-target")),
            ConfigSource::Default
        );
    }
}
