//! Core types for layers, findings and per-file results.

use serde::Deserialize;
use std::str::FromStr;

/// Architectural tier a file belongs to.
///
/// `L0` is the most restricted tier (core code, no heavy standard facilities,
/// no exceptions); `L3` is the least restricted (application entry points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Layer {
    /// Core layer.
    L0,
    /// Inherits every L0 restriction.
    L1,
    /// Reserved tier; no built-in file maps to it.
    L2,
    /// Application layer.
    L3,
}

impl Layer {
    /// All layers, most restricted first.
    pub const ALL: [Self; 4] = [Self::L0, Self::L1, Self::L2, Self::L3];

    /// Returns true for layers that carry the forbidden-pattern restriction.
    #[must_use]
    pub fn is_restricted(self) -> bool {
        matches!(self, Self::L0 | Self::L1)
    }

    /// Returns the layer tag as written in configuration and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::L0 => "L0",
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layer| layer.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid layer: {s}. Use: L0, L1, L2, L3"))
    }
}

impl TryFrom<String> for Layer {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Severity level for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Advisory note, never fails a file.
    Warning,
    /// Rule breach that fails the file.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single message produced by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Rule code (e.g., "LG002").
    pub code: String,
    /// Rule name (e.g., "forbidden-pattern").
    pub rule: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Line number (1-indexed), when the finding points at one line.
    pub line: Option<usize>,
    /// Human-readable message.
    pub message: String,
}

impl Finding {
    /// Creates a new finding that is not tied to a line.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            line: None,
            message: message.into(),
        }
    }

    /// Attaches a 1-indexed line number.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Returns true if this finding fails the file.
    #[must_use]
    pub fn is_violation(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of checking one file.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// File name as it appears in the layer map.
    pub file: String,
    /// Layer the file was checked against.
    pub layer: Layer,
    /// Violations, in the order they were found.
    pub violations: Vec<Finding>,
    /// Warnings, in the order they were found.
    pub warnings: Vec<Finding>,
}

impl CheckResult {
    /// Creates an empty result for a file.
    #[must_use]
    pub fn new(file: impl Into<String>, layer: Layer) -> Self {
        Self {
            file: file.into(),
            layer,
            violations: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Routes a finding to the violation or warning list by severity.
    pub fn push(&mut self, finding: Finding) {
        if finding.is_violation() {
            self.violations.push(finding);
        } else {
            self.warnings.push(finding);
        }
    }

    /// Adds findings, preserving their order.
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.push(finding);
        }
    }

    /// True iff no violation was recorded. Warnings never fail a file.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if neither violations nor warnings were recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.warnings.is_empty()
    }
}

/// Totals across a batch of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of files checked.
    pub files: usize,
    /// Files with no violations.
    pub passed: usize,
    /// Violations across all files.
    pub violations: usize,
    /// Warnings across all files.
    pub warnings: usize,
}

impl Summary {
    /// Tallies a batch of results.
    #[must_use]
    pub fn of(results: &[CheckResult]) -> Self {
        results.iter().fold(Self::default(), |acc, r| Self {
            files: acc.files + 1,
            passed: acc.passed + usize::from(r.passed()),
            violations: acc.violations + r.violations.len(),
            warnings: acc.warnings + r.warnings.len(),
        })
    }

    /// Files with at least one violation.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.files - self.passed
    }

    /// True iff the batch has no violations.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.violations == 0
    }
}
