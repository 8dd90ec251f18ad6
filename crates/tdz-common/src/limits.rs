//! Centralized limits and thresholds for the block-scoping checker.
//!
//! Shared constants for recursion depths and capacity limits. Centralizing
//! them prevents duplicate definitions with inconsistent values and
//! documents the rationale for each limit.

/// Maximum depth for AST traversal.
///
/// Prevents stack overflow when a walk recursively visits deeply nested
/// nodes (e.g., hundreds of nested blocks). A walk that exceeds the limit
/// stops descending and treats the remainder as unchecked rather than
/// panicking.
pub const MAX_AST_DEPTH: u32 = 500;

/// Maximum pre-allocation for AST node storage.
///
/// Based on typical source file sizes (roughly 1 AST node per ~20
/// characters of source). The arena pre-allocates up to this many node
/// slots; the actual allocation is `min(requested, MAX_NODE_PREALLOC)`.
pub const MAX_NODE_PREALLOC: usize = 5_000_000;
