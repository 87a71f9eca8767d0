//! Checker orchestrating rule execution over the layer map.

use crate::config::{Config, FileEntry};
use crate::context::{decode_dropping_invalid, FileContext};
use crate::rule::{Rule, RuleBox};
use crate::types::{CheckResult, Finding, Layer, Severity};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Code attached to read failures recorded as violations.
pub const READ_ERROR_CODE: &str = "LG000";

/// Name attached to read failures recorded as violations.
pub const READ_ERROR_NAME: &str = "read-error";

/// Errors that can occur while loading a file for checking.
#[derive(Debug, Error)]
pub enum CheckError {
    /// IO error reading a file.
    #[error("{source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Builder for configuring a [`Checker`].
#[derive(Default)]
pub struct CheckerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl CheckerBuilder {
    /// Creates a new builder with no rules and the built-in configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule. Rules run in the order they are added.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the checker.
    #[must_use]
    pub fn build(self) -> Checker {
        Checker {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Results of checking every mapped file in one directory.
#[derive(Debug, Default)]
pub struct DirOutcome {
    /// One result per mapped file that exists, in layer map order.
    pub results: Vec<CheckResult>,
    /// Mapped file names that were not found, in layer map order.
    pub missing: Vec<String>,
}

impl DirOutcome {
    /// True when no mapped file was found at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Runs the configured rules over files of the layer map.
///
/// Use [`Checker::builder()`] to construct an instance.
pub struct Checker {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Checker {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Checks every mapped file found directly inside `dir`.
    ///
    /// Missing files are collected, not treated as failures.
    pub fn check_dir(&self, dir: &Path) -> DirOutcome {
        info!("Checking {} mapped files in {}", self.config.files.len(), dir.display());

        let mut outcome = DirOutcome::default();
        for FileEntry { name, layer } in &self.config.files {
            let path = dir.join(name);
            if path.exists() {
                outcome.results.push(self.check(&path, *layer));
            } else {
                debug!("Not found: {}", path.display());
                outcome.missing.push(name.clone());
            }
        }

        info!(
            "Check complete: {} files checked, {} missing",
            outcome.results.len(),
            outcome.missing.len()
        );
        outcome
    }

    /// Checks a single file against its expected layer.
    ///
    /// Never fails: a read error becomes the result's only violation.
    #[must_use]
    pub fn check(&self, path: &Path, layer: Layer) -> CheckResult {
        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let mut result = CheckResult::new(file_name, layer);

        let content = match read_source(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                result.push(Finding::new(
                    READ_ERROR_CODE,
                    READ_ERROR_NAME,
                    Severity::Error,
                    format!("Failed to read file: {e}"),
                ));
                return result;
            }
        };

        result.extend(self.check_content(path, &content, layer));
        result
    }

    /// Runs the enabled rules over already decoded text.
    #[must_use]
    pub fn check_content(&self, path: &Path, content: &str, layer: Layer) -> Vec<Finding> {
        debug!("Checking: {} as {}", path.display(), layer);

        let ctx = FileContext::new(path, content, layer, self.config.forbidden_for(layer));
        let mut findings = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            findings.extend(rule.check(&ctx));
        }

        findings
    }
}

/// Reads a file fully and decodes it, dropping invalid UTF-8.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_source(path: &Path) -> Result<String, CheckError> {
    let bytes = std::fs::read(path).map_err(|e| CheckError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(decode_dropping_invalid(&bytes))
}
