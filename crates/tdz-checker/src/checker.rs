//! The temporal-dead-zone check.
//!
//! `validate` runs once per scope-bearing node that carries a binding
//! annotation. It walks the node's subtree in pre-order and reports the
//! first referenced identifier that resolves to one of the scope's own
//! block-scoped declarations while sitting textually before it.
//!
//! The ordering rule is purely textual (line, then column on the same
//! line). A reference inside an earlier function body is flagged even if
//! that function only ever runs after the declaration: the whole scope is
//! dead until the declaration statement executes, regardless of runtime
//! path.

use smallvec::SmallVec;
use tracing::debug;

use tdz_ast::{AstArena, BlockBindings, NodeIndex, NodeKind};
use tdz_common::diagnostics::{Diagnostic, diagnostic_codes, get_diagnostic_message};
use tdz_common::limits::MAX_AST_DEPTH;
use tdz_common::{Atom, Position};

use crate::referenced::is_referenced_identifier;
use crate::scope_chain::ScopeFrame;

/// A reference to a block-scoped binding before its declaration point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TdzViolation {
    /// The offending reference node.
    pub reference: NodeIndex,
}

impl TdzViolation {
    /// Render this violation as a diagnostic for the calling pipeline.
    ///
    /// The reference's position is always present: a violation is only
    /// ever produced from a position comparison.
    #[must_use]
    pub fn to_diagnostic(&self, arena: &AstArena, file: &str) -> Diagnostic {
        let position = arena
            .get(self.reference)
            .and_then(|node| node.pos)
            .unwrap_or(Position::new(0, 0));
        let message = get_diagnostic_message(diagnostic_codes::TEMPORAL_DEAD_ZONE)
            .map_or("", |m| m.message);
        Diagnostic::error(
            file.to_string(),
            position,
            message.to_string(),
            diagnostic_codes::TEMPORAL_DEAD_ZONE,
        )
    }
}

/// Validate one scope-bearing node.
///
/// Succeeds immediately when the node carries no binding annotation or an
/// empty one; otherwise walks the subtree and returns the first violation
/// in pre-order, if any. The walk reads the arena only - no AST state is
/// touched, so independent scope nodes may be validated in parallel.
pub fn validate(arena: &AstArena, scope: NodeIndex) -> Result<(), TdzViolation> {
    let Some(bindings) = arena.block_bindings(scope) else {
        return Ok(());
    };
    if bindings.is_empty() {
        return Ok(());
    }

    debug!(
        scope = scope.0,
        bindings = bindings.len(),
        "running temporal dead zone check"
    );
    let root = ScopeFrame::new(scope, bindings);
    walk(arena, scope, &root, bindings, 0)
}

/// Pre-order walk. The current node is checked before its children;
/// entering an annotated child scope pushes a resolution frame.
fn walk(
    arena: &AstArena,
    index: NodeIndex,
    frame: &ScopeFrame<'_>,
    tracked: &BlockBindings,
    depth: u32,
) -> Result<(), TdzViolation> {
    if depth > MAX_AST_DEPTH {
        return Ok(());
    }
    let Some(node) = arena.get(index) else {
        return Ok(());
    };

    if let NodeKind::Identifier { atom } = node.kind
        && is_referenced_identifier(arena, index)
    {
        check_reference(arena, index, atom, node.pos, frame, tracked)?;
    }

    let mut children: SmallVec<[NodeIndex; 8]> = SmallVec::new();
    node.push_children(&mut children);
    for child in children {
        match arena.block_bindings(child) {
            Some(child_bindings) => {
                let nested = frame.nested(child, child_bindings);
                walk(arena, child, &nested, tracked, depth + 1)?;
            }
            None => walk(arena, child, frame, tracked, depth + 1)?,
        }
    }
    Ok(())
}

/// Check one referenced identifier against the tracked binding map.
fn check_reference(
    arena: &AstArena,
    reference: NodeIndex,
    name: Atom,
    reference_pos: Option<Position>,
    frame: &ScopeFrame<'_>,
    tracked: &BlockBindings,
) -> Result<(), TdzViolation> {
    // not a name this traversal is protecting
    let Some(&declared) = tracked.get(&name) else {
        return Ok(());
    };

    // declared node is different in this scope: shadowing is in effect,
    // the reference belongs to another binding's check
    if frame.resolve(name) != Some(declared) {
        return Ok(());
    }

    // no safe comparison without both positions; skipped, not passed
    let Some(reference_pos) = reference_pos else {
        debug!(reference = reference.0, "reference has no position, skipping");
        return Ok(());
    };
    let Some(declared_pos) = arena.get(declared).and_then(|node| node.pos) else {
        debug!(declaration = declared.0, "declaration has no position, skipping");
        return Ok(());
    };

    if reference_pos.is_before(declared_pos) {
        debug!(
            reference = reference.0,
            line = reference_pos.line,
            column = reference_pos.column,
            "reference precedes declaration"
        );
        return Err(TdzViolation { reference });
    }
    Ok(())
}
