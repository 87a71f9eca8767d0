//! Rule to forbid heavy standard facilities and exceptions in core layers.
//!
//! # Rationale
//!
//! L0 code must not depend on allocating containers, iostreams, virtual
//! dispatch, exceptions, raw `new`/`delete` or parent-directory includes.
//! L1 inherits the same set; higher layers are unrestricted.
//!
//! # Detected Patterns
//!
//! Any line whose trimmed form does not start with `//` and that contains one
//! of the forbidden substrings. Matching is purely lexical: occurrences inside
//! string literals or longer identifiers are reported too.

use layer_guard_core::{FileContext, Finding, Rule, Severity};

/// Rule code for forbidden-pattern.
pub const CODE: &str = "LG002";

/// Rule name for forbidden-pattern.
pub const NAME: &str = "forbidden-pattern";

const LINE_COMMENT: &str = "//";

/// Reports forbidden substrings on uncommented lines of restricted layers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForbiddenPattern;

impl ForbiddenPattern {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ForbiddenPattern {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &FileContext) -> Vec<Finding> {
        if ctx.forbidden.is_empty() {
            return Vec::new();
        }

        let mut findings = Vec::new();
        for (n, line) in ctx.numbered_lines() {
            if line.trim().starts_with(LINE_COMMENT) {
                continue;
            }
            for pattern in ctx.forbidden.iter().filter(|p| line.contains(p.as_str())) {
                findings.push(
                    self.finding(format!(
                        "Line {n}: forbidden in {} -> '{}'",
                        ctx.layer,
                        pattern.trim()
                    ))
                    .at_line(n),
                );
            }
        }
        findings
    }
}
