//! Referenced-identifier classification.
//!
//! A *referenced identifier* is an identifier in a read position. Names
//! that introduce declarations (declarator names, function names,
//! parameters), non-computed member properties, non-computed object keys,
//! and label positions are not references. Everything else - call
//! arguments, operands, assignment targets, computed keys - is.
//!
//! Classification looks at the parent edge only: which child slot of the
//! parent holds this identifier.

use tdz_ast::{AstArena, NodeIndex, NodeKind};

/// Whether the node at `index` is an identifier being read.
#[must_use]
pub fn is_referenced_identifier(arena: &AstArena, index: NodeIndex) -> bool {
    let Some(node) = arena.get(index) else {
        return false;
    };
    if !matches!(node.kind, NodeKind::Identifier { .. }) {
        return false;
    }

    let Some(parent) = arena.get(arena.parent(index)) else {
        // A detached identifier has no declaring context; treat it as a
        // value position.
        return true;
    };

    match &parent.kind {
        NodeKind::VariableDeclarator { name, .. } => *name != index,
        NodeKind::FunctionDeclaration {
            name, parameters, ..
        } => *name != index && !parameters.nodes.contains(&index),
        NodeKind::MemberExpression {
            property, computed, ..
        } => *computed || *property != index,
        NodeKind::PropertyAssignment { key, computed, .. } => *computed || *key != index,
        NodeKind::LabeledStatement { label, .. } => *label != index,
        NodeKind::BreakStatement { label } | NodeKind::ContinueStatement { label } => {
            *label != index
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdz_ast::NodeList;

    #[test]
    fn test_member_property_positions() {
        let mut arena = AstArena::new();
        let object = arena.add_identifier("console", None);
        let property = arena.add_identifier("log", None);
        arena.add(
            NodeKind::MemberExpression {
                object,
                property,
                computed: false,
            },
            None,
        );

        // console.log: object is read, property is not
        assert!(is_referenced_identifier(&arena, object));
        assert!(!is_referenced_identifier(&arena, property));

        let object2 = arena.add_identifier("table", None);
        let key = arena.add_identifier("k", None);
        arena.add(
            NodeKind::MemberExpression {
                object: object2,
                property: key,
                computed: true,
            },
            None,
        );

        // table[k]: a computed property is read
        assert!(is_referenced_identifier(&arena, key));
    }

    #[test]
    fn test_declaration_positions() {
        let mut arena = AstArena::new();
        let name = arena.add_identifier("x", None);
        let init = arena.add_identifier("y", None);
        arena.add(
            NodeKind::VariableDeclarator {
                name,
                initializer: init,
            },
            None,
        );

        // let x = y: x declares, y is read
        assert!(!is_referenced_identifier(&arena, name));
        assert!(is_referenced_identifier(&arena, init));
    }

    #[test]
    fn test_function_name_and_parameters() {
        let mut arena = AstArena::new();
        let name = arena.add_identifier("f", None);
        let param = arena.add_identifier("a", None);
        let body = arena.add(
            NodeKind::Block {
                statements: NodeList::empty(),
            },
            None,
        );
        arena.add(
            NodeKind::FunctionDeclaration {
                name,
                parameters: NodeList::new(vec![param]),
                body,
            },
            None,
        );

        assert!(!is_referenced_identifier(&arena, name));
        assert!(!is_referenced_identifier(&arena, param));
    }

    #[test]
    fn test_object_literal_keys() {
        let mut arena = AstArena::new();
        let key = arena.add_identifier("a", None);
        let value = arena.add_identifier("b", None);
        arena.add(
            NodeKind::PropertyAssignment {
                key,
                value,
                computed: false,
            },
            None,
        );

        // { a: b }: a is a key, b is read
        assert!(!is_referenced_identifier(&arena, key));
        assert!(is_referenced_identifier(&arena, value));
    }

    #[test]
    fn test_label_positions() {
        let mut arena = AstArena::new();
        let label = arena.add_identifier("outer", None);
        let body = arena.add(
            NodeKind::Block {
                statements: NodeList::empty(),
            },
            None,
        );
        arena.add(NodeKind::LabeledStatement { label, body }, None);

        let break_label = arena.add_identifier("outer", None);
        arena.add(NodeKind::BreakStatement { label: break_label }, None);

        assert!(!is_referenced_identifier(&arena, label));
        assert!(!is_referenced_identifier(&arena, break_label));
    }

    #[test]
    fn test_assignment_target_is_a_reference() {
        let mut arena = AstArena::new();
        let target = arena.add_identifier("x", None);
        let value = arena.add(NodeKind::NumericLiteral { value: 1.0 }, None);
        arena.add(NodeKind::AssignmentExpression { target, value }, None);

        // x = 1 touches the binding, so the target counts as a reference
        assert!(is_referenced_identifier(&arena, target));
    }

    #[test]
    fn test_non_identifier_is_never_a_reference() {
        let mut arena = AstArena::new();
        let number = arena.add(NodeKind::NumericLiteral { value: 3.0 }, None);
        assert!(!is_referenced_identifier(&arena, number));
        assert!(!is_referenced_identifier(&arena, NodeIndex::NONE));
    }
}
