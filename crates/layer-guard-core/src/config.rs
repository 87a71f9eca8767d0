//! Configuration types for layer-guard.
//!
//! The file-to-layer mapping and the forbidden pattern set are data. The
//! built-in defaults describe the `super_core` tree; a `layer-guard.toml`
//! replaces either table without touching check logic.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::types::Layer;

/// Built-in file-to-layer mapping, in check order.
pub const DEFAULT_LAYER_MAP: &[(&str, Layer)] = &[
    ("ring_buffer.hpp", Layer::L0),
    ("protocol_decoder.hpp", Layer::L0),
    ("super_core.hpp", Layer::L0),
    ("arena.hpp", Layer::L0),
    ("persistent_arena.hpp", Layer::L1),
    ("main.cpp", Layer::L3),
];

/// Built-in substrings banned from uncommented lines of restricted layers.
pub const DEFAULT_FORBIDDEN: &[&str] = &[
    "#include <vector>",
    "#include <map>",
    "#include <unordered_map>",
    "#include <iostream>",
    "#include <string>",
    "#include <fstream>",
    "virtual ",
    "throw ",
    "try {",
    "catch(",
    " new ",
    " delete ",
    "../",
];

/// Top-level configuration for layer-guard.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Files to check and the layer each is expected to satisfy.
    #[serde(default = "default_files")]
    pub files: Vec<FileEntry>,

    /// Forbidden patterns for restricted layers (L0 and L1).
    #[serde(default = "default_forbidden")]
    pub forbidden: Vec<String>,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: default_files(),
            forbidden: default_forbidden(),
            rules: HashMap::new(),
        }
    }
}

/// One entry of the layer map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    /// File name, resolved directly inside the target directory.
    pub name: String,
    /// Expected layer.
    pub layer: Layer,
}

impl FileEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(name: impl Into<String>, layer: Layer) -> Self {
        Self {
            name: name.into(),
            layer,
        }
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

fn default_files() -> Vec<FileEntry> {
    DEFAULT_LAYER_MAP
        .iter()
        .map(|&(name, layer)| FileEntry::new(name, layer))
        .collect()
}

fn default_forbidden() -> Vec<String> {
    DEFAULT_FORBIDDEN.iter().map(|s| (*s).to_string()).collect()
}

impl Config {
    /// Creates the built-in configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Validates the layer map and rule table.
    ///
    /// `known_rules` lists the rule names that may appear under `[rules]`.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first problem found.
    pub fn validate(&self, known_rules: &[&str]) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, entry) in self.files.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!("files[{i}]: empty name")));
            }
            if entry.name.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!(
                    "files[{i}]: '{}' must be a plain file name",
                    entry.name
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "files[{i}]: '{}' is listed twice",
                    entry.name
                )));
            }
        }

        for (i, pattern) in self.forbidden.iter().enumerate() {
            if pattern.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "forbidden[{i}]: empty pattern"
                )));
            }
        }

        let mut names: Vec<&String> = self.rules.keys().collect();
        names.sort();
        for name in names {
            if !known_rules.contains(&name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "rules.{name}: unknown rule"
                )));
            }
        }

        Ok(())
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Forbidden patterns that apply to a layer; empty outside L0 and L1.
    #[must_use]
    pub fn forbidden_for(&self, layer: Layer) -> &[String] {
        if layer.is_restricted() {
            &self.forbidden
        } else {
            &[]
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[&str] = &["layer-header", "private-naming"];

    #[test]
    fn default_config_matches_builtin_tables() {
        let config = Config::default();
        let names: Vec<&str> = config.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "ring_buffer.hpp",
                "protocol_decoder.hpp",
                "super_core.hpp",
                "arena.hpp",
                "persistent_arena.hpp",
                "main.cpp",
            ]
        );
        assert_eq!(config.files[4].layer, Layer::L1);
        assert_eq!(config.files[5].layer, Layer::L3);
        assert_eq!(config.forbidden.len(), 13);
        assert!(config.validate(RULES).is_ok());
    }

    #[test]
    fn l1_inherits_l0_patterns() {
        let config = Config::default();
        assert_eq!(config.forbidden_for(Layer::L0), config.forbidden_for(Layer::L1));
        assert!(config.forbidden_for(Layer::L2).is_empty());
        assert!(config.forbidden_for(Layer::L3).is_empty());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = Config::parse("").expect("empty config should parse");
        assert_eq!(config.files, Config::default().files);
        assert_eq!(config.forbidden, Config::default().forbidden);
    }

    #[test]
    fn parse_custom_map_preserves_order() {
        let toml = r##"
forbidden = ["#include <regex>"]

[[files]]
name = "main.cpp"
layer = "L3"

[[files]]
name = "core.hpp"
layer = "L0"

[rules.private-naming]
enabled = false
"##;
        let config = Config::parse(toml).expect("parse failed");
        assert_eq!(
            config.files,
            vec![
                FileEntry::new("main.cpp", Layer::L3),
                FileEntry::new("core.hpp", Layer::L0),
            ]
        );
        assert_eq!(config.forbidden, vec!["#include <regex>".to_string()]);
        assert!(!config.is_rule_enabled("private-naming"));
        assert!(config.is_rule_enabled("layer-header"));
        assert!(config.validate(RULES).is_ok());
    }

    #[test]
    fn parse_accepts_lowercase_layer() {
        let config = Config::parse("[[files]]\nname = \"x.hpp\"\nlayer = \"l1\"\n").unwrap();
        assert_eq!(config.files, vec![FileEntry::new("x.hpp", Layer::L1)]);
    }

    #[test]
    fn parse_rejects_unknown_layer() {
        let toml = r#"
[[files]]
name = "x.hpp"
layer = "L7"
"#;
        assert!(matches!(Config::parse(toml), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn validate_rejects_duplicate_file() {
        let mut config = Config::default();
        config.files.push(FileEntry::new("arena.hpp", Layer::L1));
        let err = config.validate(RULES).unwrap_err();
        assert!(err.to_string().contains("arena.hpp"));
    }

    #[test]
    fn validate_rejects_nested_path() {
        let mut config = Config::default();
        config.files = vec![FileEntry::new("src/arena.hpp", Layer::L0)];
        assert!(config.validate(RULES).is_err());
    }

    #[test]
    fn validate_rejects_unknown_rule() {
        let config = Config::parse("[rules.no-such-rule]\nenabled = true\n").unwrap();
        let err = config.validate(RULES).unwrap_err();
        assert!(err.to_string().contains("no-such-rule"));
    }

    #[test]
    fn from_file_reports_missing_path() {
        let err = Config::from_file(Path::new("/nonexistent/layer-guard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
