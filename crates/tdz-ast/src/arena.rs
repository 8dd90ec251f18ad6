//! Arena storage for AST nodes, parent links, and scope annotations.
//!
//! Nodes are built bottom-up: children are created before their parents,
//! and `add` records the parent link for every child of the node being
//! added. Scope annotations (name -> declaring node maps) are attached
//! after construction by the scope-resolution pass that feeds the checker.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tdz_common::limits::MAX_NODE_PREALLOC;
use tdz_common::{Atom, Interner, Position};
use tracing::debug;

use crate::node::{Node, NodeIndex, NodeKind};

/// Binding-name -> declaring-node map for one scope-bearing node.
///
/// Populated by the external scope-resolution pass, only for scopes that
/// directly contain block-scoped declarations. Read-only during checking.
pub type BlockBindings = FxHashMap<Atom, NodeIndex>;

/// Flat AST storage with parent links and per-scope binding annotations.
#[derive(Debug, Default)]
pub struct AstArena {
    nodes: Vec<Node>,
    parents: Vec<NodeIndex>,
    block_bindings: FxHashMap<u32, BlockBindings>,
    interner: Interner,
}

impl AstArena {
    #[must_use]
    pub fn new() -> AstArena {
        AstArena::default()
    }

    /// Create an arena with pre-allocated node capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> AstArena {
        let safe_capacity = capacity.min(MAX_NODE_PREALLOC);
        AstArena {
            nodes: Vec::with_capacity(safe_capacity),
            parents: Vec::with_capacity(safe_capacity),
            block_bindings: FxHashMap::default(),
            interner: Interner::new(),
        }
    }

    // =========================================================================
    // Node creation
    // =========================================================================

    /// Add a node, recording this node as the parent of each of its
    /// children. Children must already be in the arena.
    pub fn add(&mut self, kind: NodeKind, pos: Option<Position>) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        let node = Node { kind, pos };

        let mut children: SmallVec<[NodeIndex; 8]> = SmallVec::new();
        node.push_children(&mut children);

        self.nodes.push(node);
        self.parents.push(NodeIndex::NONE);
        for child in children {
            self.set_parent(child, idx);
        }
        idx
    }

    /// Add an identifier node, interning its name.
    pub fn add_identifier(&mut self, name: &str, pos: Option<Position>) -> NodeIndex {
        let atom = self.interner.intern(name);
        self.add(NodeKind::Identifier { atom }, pos)
    }

    /// Set the parent for a single child node.
    /// Children are created before parents, so the child slot exists.
    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if !child.is_none()
            && let Some(slot) = self.parents.get_mut(child.0 as usize)
        {
            *slot = parent;
        }
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Get a node by index.
    #[inline]
    #[must_use]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get the parent of a node. Roots and unknown indices have no parent.
    #[inline]
    #[must_use]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        if index.is_none() {
            return NodeIndex::NONE;
        }
        self.parents
            .get(index.0 as usize)
            .copied()
            .unwrap_or(NodeIndex::NONE)
    }

    /// Resolve an identifier node's name text.
    #[must_use]
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        match self.get(index)?.kind {
            NodeKind::Identifier { atom } => Some(self.interner.resolve(atom)),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Intern a name in this arena's interner.
    pub fn intern(&mut self, text: &str) -> Atom {
        self.interner.intern(text)
    }

    /// Get a reference to the interner.
    #[must_use]
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    // =========================================================================
    // Scope annotations
    // =========================================================================

    /// Attach the block-scoped binding map for a scope-bearing node.
    ///
    /// Any scope-bearing node may carry an annotation; a binder expresses
    /// parameter or function-name shadowing by annotating the function
    /// node with name -> declaring-node entries through the same map.
    pub fn annotate_block_bindings(&mut self, scope: NodeIndex, bindings: BlockBindings) {
        debug_assert!(
            self.get(scope).is_some_and(Node::is_scope_bearing),
            "binding annotation target must be a scope-bearing node"
        );
        debug!(
            scope = scope.0,
            bindings = bindings.len(),
            "annotating scope with block bindings"
        );
        self.block_bindings.insert(scope.0, bindings);
    }

    /// The block-scoped binding map attached to a node, if any.
    #[must_use]
    pub fn block_bindings(&self, index: NodeIndex) -> Option<&BlockBindings> {
        if index.is_none() {
            return None;
        }
        self.block_bindings.get(&index.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{DeclarationKind, NodeList};
    use smallvec::SmallVec;

    fn pos(line: u32, column: u32) -> Option<Position> {
        Some(Position::new(line, column))
    }

    /// Build `let x = 1;` and return (declarator, statement).
    fn let_x(arena: &mut AstArena) -> (NodeIndex, NodeIndex) {
        let name = arena.add_identifier("x", pos(0, 4));
        let one = arena.add(NodeKind::NumericLiteral { value: 1.0 }, pos(0, 8));
        let declarator = arena.add(
            NodeKind::VariableDeclarator {
                name,
                initializer: one,
            },
            pos(0, 4),
        );
        let statement = arena.add(
            NodeKind::VariableDeclaration {
                kind: DeclarationKind::Let,
                declarators: NodeList::new(vec![declarator]),
            },
            pos(0, 0),
        );
        (declarator, statement)
    }

    #[test]
    fn test_parent_links_set_on_add() {
        let mut arena = AstArena::new();
        let (declarator, statement) = let_x(&mut arena);
        let block = arena.add(
            NodeKind::Block {
                statements: NodeList::new(vec![statement]),
            },
            pos(0, 0),
        );

        assert_eq!(arena.parent(statement), block);
        assert_eq!(arena.parent(declarator), statement);
        assert_eq!(arena.parent(block), NodeIndex::NONE);
    }

    #[test]
    fn test_children_in_source_order() {
        let mut arena = AstArena::new();
        let (_, statement) = let_x(&mut arena);
        let reference = arena.add_identifier("x", pos(1, 0));
        let use_stmt = arena.add(
            NodeKind::ExpressionStatement {
                expression: reference,
            },
            pos(1, 0),
        );
        let block = arena.add(
            NodeKind::Block {
                statements: NodeList::new(vec![statement, use_stmt]),
            },
            pos(0, 0),
        );

        let mut children: SmallVec<[NodeIndex; 8]> = SmallVec::new();
        arena
            .get(block)
            .expect("block exists")
            .push_children(&mut children);
        assert_eq!(children.as_slice(), &[statement, use_stmt]);
    }

    #[test]
    fn test_identifier_text_resolution() {
        let mut arena = AstArena::new();
        let ident = arena.add_identifier("console", None);
        let number = arena.add(NodeKind::NumericLiteral { value: 2.0 }, None);

        assert_eq!(arena.identifier_text(ident), Some("console"));
        assert_eq!(arena.identifier_text(number), None);
        assert_eq!(arena.identifier_text(NodeIndex::NONE), None);
        assert!(arena.interner().get("console").is_some());
    }

    #[test]
    fn test_block_bindings_annotation() {
        let mut arena = AstArena::new();
        let (declarator, statement) = let_x(&mut arena);
        let block = arena.add(
            NodeKind::Block {
                statements: NodeList::new(vec![statement]),
            },
            pos(0, 0),
        );

        assert!(arena.block_bindings(block).is_none());

        let x = arena.intern("x");
        let mut bindings = BlockBindings::default();
        bindings.insert(x, declarator);
        arena.annotate_block_bindings(block, bindings);

        let stored = arena.block_bindings(block).expect("annotation stored");
        assert_eq!(stored.get(&x), Some(&declarator));
        assert!(arena.block_bindings(NodeIndex::NONE).is_none());
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let mut arena = AstArena::with_capacity(1024);
        assert!(arena.is_empty());

        arena.add_identifier("x", None);
        assert_eq!(arena.len(), 1);
    }
}
