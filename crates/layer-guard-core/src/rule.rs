//! Rule trait for defining text checks.

use crate::context::FileContext;
use crate::types::{Finding, Severity};

/// A per-file check over raw source text.
///
/// Rules never fail: a rule that finds nothing returns an empty vector.
/// Rules are lexical by contract; they see the decoded text and the file's
/// layer, never a syntax tree.
///
/// # Example
///
/// ```ignore
/// use layer_guard_core::{FileContext, Finding, Rule, Severity};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn code(&self) -> &'static str { "LG900" }
///
///     fn check(&self, ctx: &FileContext) -> Vec<Finding> {
///         ctx.numbered_lines()
///             .filter(|(_, line)| line.contains('\t'))
///             .map(|(n, _)| {
///                 Finding::new(self.code(), self.name(), Severity::Warning, "tab")
///                     .at_line(n)
///             })
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "forbidden-pattern").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "LG002").
    fn code(&self) -> &'static str;

    /// Returns the severity of findings from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks a single file and returns findings in emission order.
    fn check(&self, ctx: &FileContext) -> Vec<Finding>;

    /// Builds a finding stamped with this rule's code, name and severity.
    fn finding(&self, message: String) -> Finding {
        Finding::new(self.code(), self.name(), self.default_severity(), message)
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Layer;
    use std::path::Path;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }

        fn check(&self, ctx: &FileContext) -> Vec<Finding> {
            vec![self.finding(format!("{} lines", ctx.numbered_lines().count()))]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Warning);
    }

    #[test]
    fn finding_is_stamped_with_rule_identity() {
        let ctx = FileContext::new(Path::new("a.hpp"), "x\ny", Layer::L3, &[]);
        let findings = TestRule.check(&ctx);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, "TEST001");
        assert_eq!(findings[0].rule, "test-rule");
        assert_eq!(findings[0].message, "2 lines");
    }
}
