//! Diagnostic types and message lookup for the block-scoping checker.
//!
//! The checker reports violations as `Diagnostic` values; the calling
//! pipeline decides how to surface them (abort the build, collect into a
//! diagnostics list, serialize to JSON).

use serde::Serialize;

use crate::position::Position;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// A checker diagnostic with its source position.
#[derive(Clone, Debug, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub position: Position,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub const fn error(file: String, position: Position, message: String, code: u32) -> Self {
        Self {
            file,
            position,
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
        }
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    //! Stable codes for the diagnostics this tool can produce.

    /// Reference to a block-scoped binding before its declaration point.
    pub const TEMPORAL_DEAD_ZONE: u32 = 101;
}

/// All diagnostic message definitions, ordered by code.
pub const DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[DiagnosticMessage {
    code: diagnostic_codes::TEMPORAL_DEAD_ZONE,
    category: DiagnosticCategory::Error,
    message: "Temporal dead zone - accessing a variable before it's initialized",
}];

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}
