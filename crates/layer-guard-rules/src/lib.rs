//! # layer-guard-rules
//!
//! Built-in governance checks for layer-guard.
//!
//! Every rule is a lexical scan over raw text; none of them parses the
//! source language.
//!
//! ## Available Rules
//!
//! | Code | Name | Severity | Description |
//! |------|------|----------|-------------|
//! | LG001 | `layer-header` | warning | First line must contain `Layer:` |
//! | LG002 | `forbidden-pattern` | error | Forbidden substrings on uncommented L0/L1 lines |
//! | LG003 | `struct-alignment` | warning | `alignas(64)` and size `static_assert` for structs |
//! | LG004 | `mandatory-docs` | warning | `Algoritmo:`, `Complexidade`, CLRS/Cormen in L0 |
//! | LG005 | `private-naming` | warning | `m_` prefix on private primitive members |
//!
//! ## Usage
//!
//! ```ignore
//! use layer_guard_core::Checker;
//! use layer_guard_rules::governance_rules;
//!
//! let mut builder = Checker::builder();
//! for rule in governance_rules() {
//!     builder = builder.rule_box(rule);
//! }
//! let checker = builder.build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod forbidden_pattern;
mod layer_header;
mod mandatory_docs;
mod presets;
mod private_naming;
mod struct_alignment;

pub use forbidden_pattern::ForbiddenPattern;
pub use layer_header::LayerHeader;
pub use mandatory_docs::MandatoryDocs;
pub use presets::{governance_rules, rule_names};
pub use private_naming::PrivateNaming;
pub use struct_alignment::StructAlignment;

/// Re-export core types for convenience.
pub use layer_guard_core::{Finding, Rule, Severity};
