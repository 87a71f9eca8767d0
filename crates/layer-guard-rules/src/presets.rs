//! The governance rule set and its evaluation order.

use crate::{ForbiddenPattern, LayerHeader, MandatoryDocs, PrivateNaming, StructAlignment};
use layer_guard_core::RuleBox;

/// Returns the governance rules in evaluation order.
///
/// Findings are reported in this order: header, forbidden patterns (line by
/// line), struct alignment, documentation, private naming.
#[must_use]
pub fn governance_rules() -> Vec<RuleBox> {
    vec![
        Box::new(LayerHeader::new()),
        Box::new(ForbiddenPattern::new()),
        Box::new(StructAlignment::new()),
        Box::new(MandatoryDocs::new()),
        Box::new(PrivateNaming::new()),
    ]
}

/// Names of every built-in rule, in evaluation order.
#[must_use]
pub fn rule_names() -> Vec<&'static str> {
    governance_rules().iter().map(|r| r.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_run_in_documented_order() {
        assert_eq!(
            rule_names(),
            [
                "layer-header",
                "forbidden-pattern",
                "struct-alignment",
                "mandatory-docs",
                "private-naming",
            ]
        );
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = governance_rules().iter().map(|r| r.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 5);
    }
}
