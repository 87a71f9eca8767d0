//! Rule enforcing the `m_` prefix on private primitive members.
//!
//! A private region runs from `private:` to the next `public:` or
//! `protected:` marker, or to the end of the file. Inside it, declarations of
//! integer, size, boolean and floating point variables followed by `;` or `=`
//! must be named `m_*` or `_*`.
//!
//! This is a lexical scan. It does not track braces, so a nested type's
//! markers end or start regions as seen in the raw text, and it misses
//! multi-line declarations and non-primitive types.

use layer_guard_core::{FileContext, Finding, Rule, Severity};
use regex::Regex;
use tracing::debug;

/// Rule code for private-naming.
pub const CODE: &str = "LG005";

/// Rule name for private-naming.
pub const NAME: &str = "private-naming";

const PRIVATE: &str = "private:";
const REGION_ENDS: &[&str] = &["public:", "protected:"];
const ALLOWED_PREFIXES: &[&str] = &["m_", "_"];

/// Warns about private primitive members without the `m_` prefix.
#[derive(Debug, Clone)]
pub struct PrivateNaming {
    declaration: Regex,
}

impl Default for PrivateNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivateNaming {
    /// Creates a new rule.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            declaration: Regex::new(r"\b(?:int|uint\w+|size_t|bool|float|double)\s+(\w+)\s*[;=]")
                .expect("Invalid regex"),
        }
    }
}

/// Splits out every private region, scanning left to right without overlap.
fn private_regions(content: &str) -> Vec<&str> {
    let mut regions = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find(PRIVATE) {
        let body = &rest[start + PRIVATE.len()..];
        let end = REGION_ENDS
            .iter()
            .filter_map(|marker| body.find(marker))
            .min()
            .unwrap_or(body.len());
        regions.push(&rest[start..start + PRIVATE.len() + end]);
        rest = &body[end..];
    }

    regions
}

impl Rule for PrivateNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &FileContext) -> Vec<Finding> {
        let regions = private_regions(ctx.content);
        debug!("{}: {} private region(s)", ctx.path.display(), regions.len());

        regions
            .into_iter()
            .flat_map(|region| self.declaration.captures_iter(region))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .filter(|name| !ALLOWED_PREFIXES.iter().any(|p| name.starts_with(p)))
            .map(|name| self.finding(format!("Private variable '{name}' should use the 'm_' prefix")))
            .collect()
    }
}
