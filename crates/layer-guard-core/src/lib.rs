//! # layer-guard-core
//!
//! Core framework for lexical layer governance checks.
//!
//! This crate provides the foundational types and traits:
//!
//! - [`Layer`] and the [`Config`] layer map assigning files to layers
//! - [`Rule`] trait for per-file text checks
//! - [`Checker`] for running rules over the mapped files
//! - [`Finding`] and [`CheckResult`] for representing what was found
//!
//! ## Example
//!
//! ```ignore
//! use layer_guard_core::{Checker, Config};
//!
//! let checker = Checker::builder()
//!     .config(Config::default())
//!     .rule(MyRule::new())
//!     .build();
//!
//! let outcome = checker.check_dir(Path::new("."));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod config;
mod context;
mod rule;
mod types;

pub use checker::{
    read_source, CheckError, Checker, CheckerBuilder, DirOutcome, READ_ERROR_CODE,
    READ_ERROR_NAME,
};
pub use config::{
    Config, ConfigError, FileEntry, RuleConfig, DEFAULT_FORBIDDEN, DEFAULT_LAYER_MAP,
};
pub use context::{decode_dropping_invalid, split_lines, FileContext};
pub use rule::{Rule, RuleBox};
pub use types::{CheckResult, Finding, Layer, Severity, Summary};
