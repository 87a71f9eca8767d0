//! Rule asking every file to declare its layer on the first line.
//!
//! # Good Patterns
//!
//! ```text
//! // Layer: L0 | Version: 1.0 | Author: ...
//! ```

use layer_guard_core::{FileContext, Finding, Rule, Severity};

/// Rule code for layer-header.
pub const CODE: &str = "LG001";

/// Rule name for layer-header.
pub const NAME: &str = "layer-header";

/// Marker that must appear on line 1.
const MARKER: &str = "Layer:";

/// Warns when the first line lacks a `Layer:` declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerHeader;

impl LayerHeader {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for LayerHeader {
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
        match ctx.first_line() {
            Some(first) if !first.contains(MARKER) => vec![self
                .finding(
                    "First line does not declare a layer. \
                     Add: // Layer: L0 | Version: X.Y | Author: ..."
                        .to_string(),
                )
                .at_line(1)],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layer_guard_core::Layer;
    use std::path::Path;

    fn check_code(code: &str) -> Vec<Finding> {
        let ctx = FileContext::new(Path::new("arena.hpp"), code, Layer::L0, &[]);
        LayerHeader::new().check(&ctx)
    }

    #[test]
    fn accepts_declared_layer() {
        assert!(check_code("// Layer: L0 | Version: 1.0 | Author: X\nint x;\n").is_empty());
    }

    #[test]
    fn warns_without_declaration() {
        let findings = check_code("#pragma once\n// Layer: L0\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, CODE);
        assert_eq!(findings[0].severity, Severity::Warning);
        insta::assert_snapshot!(
            findings[0].message,
            @"First line does not declare a layer. Add: // Layer: L0 | Version: X.Y | Author: ..."
        );
    }

    #[test]
    fn first_line_ends_at_carriage_return() {
        assert_eq!(check_code("#pragma once\r// Layer: L0\r").len(), 1);
        assert!(check_code("// Layer: L0\r#pragma once\r").is_empty());
    }

    #[test]
    fn empty_file_is_not_flagged() {
        assert!(check_code("").is_empty());
    }

    #[test]
    fn marker_anywhere_on_first_line_counts() {
        assert!(check_code("/* Layer: L3 */").is_empty());
    }
}
