//! Scope-frame chain for live binding resolution during traversal.
//!
//! Frames are immutable and parent-linked by reference. The chain is
//! passed down the recursive walk as a parameter - never held in ambient
//! state - so independent scope-bearing nodes can be validated in
//! parallel.

use tdz_ast::{BlockBindings, NodeIndex};
use tdz_common::Atom;

/// One frame of the live scope chain: a scope-bearing node together with
/// the binding map annotated on it.
#[derive(Debug)]
pub struct ScopeFrame<'a> {
    /// The scope-bearing node this frame belongs to.
    pub scope: NodeIndex,
    /// Bindings declared directly in this scope.
    pub bindings: &'a BlockBindings,
    /// Enclosing frame, if any.
    pub parent: Option<&'a ScopeFrame<'a>>,
}

impl<'a> ScopeFrame<'a> {
    /// Root frame of a validation walk.
    #[must_use]
    pub fn new(scope: NodeIndex, bindings: &'a BlockBindings) -> ScopeFrame<'a> {
        ScopeFrame {
            scope,
            bindings,
            parent: None,
        }
    }

    /// A frame nested inside `self` for an inner annotated scope.
    #[must_use]
    pub fn nested<'b>(&'b self, scope: NodeIndex, bindings: &'b BlockBindings) -> ScopeFrame<'b>
    where
        'a: 'b,
    {
        ScopeFrame {
            scope,
            bindings,
            parent: Some(self),
        }
    }

    /// Resolve a name to the innermost declaration visible from this
    /// frame, walking outward through enclosing frames.
    #[must_use]
    pub fn resolve(&self, name: Atom) -> Option<NodeIndex> {
        let mut frame = Some(self);
        while let Some(current) = frame {
            if let Some(&declaration) = current.bindings.get(&name) {
                return Some(declaration);
            }
            frame = current.parent;
        }
        None
    }
}
