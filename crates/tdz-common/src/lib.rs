//! Common types and utilities for the tdz block-scoping checker.
//!
//! This crate provides foundational types used across all tdz crates:
//! - String interning (`Atom`, `Interner`)
//! - Source positions (`Position`, `LineMap`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, diagnostic codes)
//! - Centralized limits and thresholds

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Diagnostic types and message lookup
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Centralized limits and thresholds
pub mod limits;
