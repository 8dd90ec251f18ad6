//! AST node types and arena storage for the tdz block-scoping checker.
//!
//! This crate is the interface between a parser/scope-resolution pipeline
//! and the checker:
//! - `node` - `NodeIndex`, `NodeList`, and the closed `NodeKind` enum
//! - `arena` - flat node storage with parent links and the per-scope
//!   binding annotations the checker reads
//!
//! The crate neither parses source text nor computes binding tables; both
//! are the producing pipeline's job. It only stores what that pipeline
//! built.

pub mod node;
pub use node::{BinaryOperator, DeclarationKind, Node, NodeIndex, NodeKind, NodeList};

pub mod arena;
pub use arena::{AstArena, BlockBindings};
