//! Whole-program attachment points for the check.
//!
//! The check attaches at loops, bare blocks, and the program root - the
//! places a block-scoped declaration can sit directly. `validate_subtree`
//! runs the check at every qualifying annotated scope under a root, for
//! pipelines that collect diagnostics instead of aborting on the first.

use smallvec::SmallVec;
use tracing::debug;

use tdz_ast::{AstArena, NodeIndex, NodeKind};
use tdz_common::limits::MAX_AST_DEPTH;

use crate::checker::{TdzViolation, validate};

/// Whether the check attaches to nodes of this kind.
///
/// Function declarations are scope-bearing (their annotations contribute
/// resolution frames) but are not attachment points; a function body is a
/// block and attaches on its own.
#[must_use]
pub fn is_attachment_point(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Program { .. }
            | NodeKind::Block { .. }
            | NodeKind::ForStatement { .. }
            | NodeKind::WhileStatement { .. }
            | NodeKind::DoWhileStatement { .. }
    )
}

/// Run the check at every qualifying annotated scope under `root`, in
/// pre-order, collecting at most one violation per scope.
#[must_use]
pub fn validate_subtree(arena: &AstArena, root: NodeIndex) -> Vec<TdzViolation> {
    let mut violations = Vec::new();
    sweep(arena, root, 0, &mut violations);
    debug!(
        root = root.0,
        violations = violations.len(),
        "temporal dead zone sweep finished"
    );
    violations
}

fn sweep(arena: &AstArena, index: NodeIndex, depth: u32, out: &mut Vec<TdzViolation>) {
    if depth > MAX_AST_DEPTH {
        return;
    }
    let Some(node) = arena.get(index) else {
        return;
    };

    if is_attachment_point(&node.kind)
        && let Err(violation) = validate(arena, index)
    {
        out.push(violation);
    }

    let mut children: SmallVec<[NodeIndex; 8]> = SmallVec::new();
    node.push_children(&mut children);
    for child in children {
        sweep(arena, child, depth + 1, out);
    }
}
