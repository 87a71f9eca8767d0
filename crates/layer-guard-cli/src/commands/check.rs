//! Check command implementation.

use anyhow::{Context, Result};
use layer_guard_core::{Checker, Config};
use layer_guard_rules::{governance_rules, rule_names};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;

/// Runs the governance check over `path`.
///
/// Returns `Ok(false)` when a violation was found or no mapped file exists.
pub fn run(path: &Path) -> Result<bool> {
    println!("Checking directory: {}", display_path(path).display());

    let source = crate::config_resolver::resolve(path);
    let config = load_config(&source)?;
    config
        .validate(&rule_names())
        .context("Config validation failed")?;

    let mut builder = Checker::builder().config(config);
    for rule in governance_rules() {
        builder = builder.rule_box(rule);
    }
    let checker = builder.build();

    tracing::info!("Checking {:?} with {} rules", path, checker.rule_count());

    let outcome = checker.check_dir(path);

    for name in &outcome.missing {
        super::output::print_missing(name);
    }

    if outcome.is_empty() {
        super::output::print_no_files();
        return Ok(false);
    }

    super::output::report(&outcome.results).context("Failed to write report")
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        ConfigSource::Project(p) => {
            tracing::info!("Using config: {}", p.display());
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

/// Resolves `path` for display, falling back to the path as given.
fn display_path(path: &Path) -> PathBuf {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
