//! Rule nudging core structs toward cache-line alignment with a size check.
//!
//! Both conditions are file-wide: an `alignas(64)` or `static_assert` anywhere
//! in the file satisfies them for every struct in it.

use layer_guard_core::{FileContext, Finding, Layer, Rule, Severity};
use regex::Regex;

/// Rule code for struct-alignment.
pub const CODE: &str = "LG003";

/// Rule name for struct-alignment.
pub const NAME: &str = "struct-alignment";

const ALIGNAS: &str = "alignas(64)";

/// Warns about L0 structs without `alignas(64)` and aligned structs without a
/// `static_assert` on their size.
#[derive(Debug, Clone)]
pub struct StructAlignment {
    struct_pattern: Regex,
}

impl Default for StructAlignment {
    fn default() -> Self {
        Self::new()
    }
}

impl StructAlignment {
    /// Creates a new rule.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            struct_pattern: Regex::new(r"struct\s+(\w+)\s*\{").expect("Invalid regex"),
        }
    }

    /// Struct names declared with an opening brace, in order, duplicates kept.
    fn struct_names<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.struct_pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }
}

impl Rule for StructAlignment {
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
        let aligned = ctx.contains(ALIGNAS);
        let mut findings = Vec::new();

        for name in self.struct_names(ctx.content) {
            if !aligned && ctx.layer == Layer::L0 {
                findings.push(self.finding(format!(
                    "Struct '{name}' may need {ALIGNAS}. Check whether it is an arena structure."
                )));
            }
            if aligned && !ctx.contains(&format!("static_assert(sizeof({name})")) {
                findings.push(self.finding(format!(
                    "Struct '{name}' has {ALIGNAS} without static_assert(sizeof({name}) == 64)"
                )));
            }
        }
        findings
    }
}
