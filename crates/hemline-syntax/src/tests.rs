use hemline_common::Location;

use crate::{Element, NodeKind, SyntaxTree, TokenKind, TreeBuilder, TreeError, TreeNav};

/// Builds a tree for `foo(bar, baz)` laid out on one line:
///
/// ```text
/// foo(bar, baz)
/// 0123456789012
/// ```
fn call_tree() -> SyntaxTree {
    let mut builder = TreeBuilder::new();
    builder.start_node(NodeKind::Root);
    builder.token(TokenKind::Word, "foo", 1, 0).unwrap();
    builder.start_node(NodeKind::Group);
    builder.token(TokenKind::OpenParen, "(", 1, 3).unwrap();
    builder.start_node(NodeKind::Phrase);
    builder.token(TokenKind::Word, "bar", 1, 4).unwrap();
    builder.token(TokenKind::Comma, ",", 1, 7).unwrap();
    builder.token(TokenKind::Word, "baz", 1, 9).unwrap();
    builder.finish_node().unwrap();
    builder.token(TokenKind::CloseParen, ")", 1, 12).unwrap();
    builder.finish_node().unwrap();
    builder.finish_node().unwrap();
    builder.finish().unwrap()
}

fn group_of(tree: &SyntaxTree) -> Element {
    tree.node_ids()
        .find(|id| tree.node_kind(*id) == NodeKind::Group)
        .map(Element::Node)
        .expect("tree contains a group")
}

#[test]
fn test_first_and_last_token_descend_nested_nodes() {
    let tree = call_tree();
    let group = group_of(&tree);
    assert_eq!(tree.first_token(group).text, "(");
    assert_eq!(tree.last_token(group).text, ")");

    let root = Element::Node(tree.root());
    assert_eq!(tree.first_token(root).text, "foo");
    assert_eq!(tree.last_token(root).text, ")");
}

#[test]
fn test_left_sibling_in_source_order() {
    let tree = call_tree();
    let group = group_of(&tree);

    let sibling = tree.left_sibling(group).expect("group follows foo");
    assert_eq!(tree.last_token(sibling).text, "foo");

    // `foo` starts its construct: nothing to its left.
    assert_eq!(tree.left_sibling(sibling), None);

    // The root has no parent, hence no sibling.
    assert_eq!(tree.left_sibling(Element::Node(tree.root())), None);
}

#[test]
fn test_span_locations_carry_raw_columns() {
    let tree = call_tree();
    let group = group_of(&tree);
    assert_eq!(tree.span_start(group), Location::new(1, 3));
    // Span end is the first character of the last token.
    assert_eq!(tree.span_end(group), Location::new(1, 12));
}

#[test]
fn test_child_access_matches_group_shape() {
    let tree = call_tree();
    let Element::Node(group) = group_of(&tree) else {
        panic!("group element is a node");
    };
    assert_eq!(tree.child_count(group), 3);
    assert_eq!(tree.first_token(tree.child(group, 0)).text, "(");
    assert_eq!(tree.first_token(tree.child(group, 1)).text, "bar");
    assert_eq!(tree.last_token(tree.child(group, 1)).text, "baz");
    assert_eq!(tree.first_token(tree.child(group, 2)).text, ")");
}

#[test]
fn test_stream_neighbors_cross_node_boundaries() {
    let tree = call_tree();
    let open = tree
        .token_ids()
        .find(|id| tree.token(*id).kind == TokenKind::OpenParen)
        .unwrap();
    assert_eq!(tree.token_before(open).unwrap().text, "foo");
    assert_eq!(tree.token_after(open).unwrap().text, "bar");

    let first = tree.token_ids().next().unwrap();
    assert!(tree.token_before(first).is_none());
}

#[test]
fn test_token_outside_node_is_rejected() {
    let mut builder = TreeBuilder::new();
    let err = builder.token(TokenKind::Word, "stray", 1, 0).unwrap_err();
    assert!(matches!(err, TreeError::TokenOutsideNode { .. }));
}

#[test]
fn test_out_of_order_token_is_rejected() {
    let mut builder = TreeBuilder::new();
    builder.start_node(NodeKind::Root);
    builder.token(TokenKind::Word, "foo", 1, 4).unwrap();
    // Overlaps the previous token on the same line.
    let err = builder.token(TokenKind::Comma, ",", 1, 6).unwrap_err();
    assert!(matches!(err, TreeError::TokenOutOfOrder { .. }));

    // An earlier line is just as invalid.
    let mut builder = TreeBuilder::new();
    builder.start_node(NodeKind::Root);
    builder.token(TokenKind::Word, "foo", 2, 0).unwrap();
    let err = builder.token(TokenKind::Word, "bar", 1, 0).unwrap_err();
    assert!(matches!(err, TreeError::TokenOutOfOrder { .. }));
}

#[test]
fn test_adjacent_tokens_are_accepted() {
    // No whitespace between tokens: b.column == a.last_column + 1.
    let mut builder = TreeBuilder::new();
    builder.start_node(NodeKind::Root);
    builder.token(TokenKind::Word, "foo", 1, 0).unwrap();
    builder.token(TokenKind::OpenParen, "(", 1, 3).unwrap();
    builder.token(TokenKind::CloseParen, ")", 1, 4).unwrap();
    builder.finish_node().unwrap();
    assert!(builder.finish().is_ok());
}

#[test]
fn test_empty_node_is_rejected() {
    let mut builder = TreeBuilder::new();
    builder.start_node(NodeKind::Root);
    builder.start_node(NodeKind::Group);
    let err = builder.finish_node().unwrap_err();
    assert_eq!(err, TreeError::EmptyNode { kind: NodeKind::Group });
}

#[test]
fn test_unbalanced_finish_is_rejected() {
    let mut builder = TreeBuilder::new();
    let err = builder.finish_node().unwrap_err();
    assert_eq!(err, TreeError::UnbalancedFinish);
}

#[test]
fn test_unclosed_nodes_are_rejected() {
    let mut builder = TreeBuilder::new();
    builder.start_node(NodeKind::Root);
    builder.token(TokenKind::Word, "foo", 1, 0).unwrap();
    let err = builder.finish().unwrap_err();
    assert_eq!(err, TreeError::UnclosedNodes { open: 1 });
}

#[test]
fn test_empty_tree_is_rejected() {
    let err = TreeBuilder::new().finish().unwrap_err();
    assert_eq!(err, TreeError::EmptyTree);
}

#[test]
fn test_multiple_roots_are_rejected() {
    let mut builder = TreeBuilder::new();
    builder.start_node(NodeKind::Root);
    builder.token(TokenKind::Word, "foo", 1, 0).unwrap();
    builder.finish_node().unwrap();
    builder.start_node(NodeKind::Root);
    builder.token(TokenKind::Word, "bar", 2, 0).unwrap();
    builder.finish_node().unwrap();
    let err = builder.finish().unwrap_err();
    assert_eq!(err, TreeError::MultipleRoots);
}
