//! Rule requiring algorithm documentation in L0 files.
//!
//! Every core file must name its algorithm (`Algoritmo:`), state its
//! complexity (`Complexidade`) and cite the CLRS textbook (`CLRS` or
//! `Cormen`). The markers are matched verbatim anywhere in the file.

use layer_guard_core::{FileContext, Finding, Layer, Rule, Severity};

/// Rule code for mandatory-docs.
pub const CODE: &str = "LG004";

/// Rule name for mandatory-docs.
pub const NAME: &str = "mandatory-docs";

/// Each requirement is met when any of its alternatives appears.
const REQUIREMENTS: &[(&[&str], &str)] = &[
    (&["Algoritmo:"], "'Algoritmo:'"),
    (&["Complexidade"], "'Complexidade'"),
    (&["CLRS", "Cormen"], "a CLRS/Cormen reference"),
];

/// Warns once per documentation marker missing from an L0 file.
#[derive(Debug, Clone, Copy, Default)]
pub struct MandatoryDocs;

impl MandatoryDocs {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MandatoryDocs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn check(&self, ctx: &FileContext) -> Vec<Finding> {
        if ctx.layer != Layer::L0 {
            return Vec::new();
        }

        REQUIREMENTS
            .iter()
            .filter(|(alternatives, _)| !alternatives.iter().any(|m| ctx.contains(m)))
            .map(|(_, what)| self.finding(format!("Incomplete L0 documentation: missing {what}")))
            .collect()
    }
}
