//! Temporal-dead-zone checking for block-scoped bindings.
//!
//! This crate is organized into several submodules:
//! - `referenced` - referenced-identifier classification
//! - `scope_chain` - scope-frame chain for live binding resolution
//! - `checker` - the per-scope check (`validate`)
//! - `pass` - whole-program attachment points for a calling pipeline
//!
//! The check is static: a reference that is textually before its
//! declaration is flagged regardless of runtime control flow. It is also
//! explicit: nothing runs unless the pipeline invokes `validate` (or
//! `validate_subtree`) on an annotated scope-bearing node.

pub mod checker;
pub mod pass;
pub mod referenced;
pub mod scope_chain;

pub use checker::{TdzViolation, validate};
pub use pass::{is_attachment_point, validate_subtree};

pub mod diagnostics {
    pub use tdz_common::diagnostics::{
        Diagnostic, DiagnosticCategory, diagnostic_codes, get_diagnostic_message,
    };
}
