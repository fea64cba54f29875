use hemline_common::Location;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::token::{Token, TokenKind};

/// Structural category of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Root,
    /// A parenthesized construct: opening token, optional content, closing
    /// token. A group with exactly two children is empty.
    Group,
    /// An undifferentiated run of content.
    Phrase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(u32);

/// A child slot in the tree: either a nested node or a leaf token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Node(NodeId),
    Token(TokenId),
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<Element>,
}

/// Errors raised while assembling a tree through [`TreeBuilder`].
///
/// These are producer bugs surfaced eagerly; a finished [`SyntaxTree`]
/// upholds every invariant the verifiers rely on (non-empty nodes, strictly
/// advancing token positions, a single root).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("token {text:?} at {line}:{column} appears outside any open node")]
    TokenOutsideNode { text: String, line: u32, column: u32 },
    #[error("token {text:?} at {line}:{column} does not advance past the previous token")]
    TokenOutOfOrder { text: String, line: u32, column: u32 },
    #[error("finish_node called with no open node")]
    UnbalancedFinish,
    #[error("{kind:?} node closed with no children")]
    EmptyNode { kind: NodeKind },
    #[error("{open} node(s) left open at finish")]
    UnclosedNodes { open: usize },
    #[error("tree has no root node")]
    EmptyTree,
    #[error("tree has more than one root node")]
    MultipleRoots,
}

/// Read-only navigation over a syntax tree.
///
/// This is the only capability set the verifiers see, so they can run
/// against synthetic in-memory trees without any parser behind them.
///
/// Span locations carry the raw 0-indexed column of the respective token's
/// first character; the `+1` user-facing conversion happens where a
/// violation is built, not here.
pub trait TreeNav {
    /// First token of the element's span in source order.
    fn first_token(&self, element: Element) -> &Token;

    /// Last token of the element's span in source order.
    fn last_token(&self, element: Element) -> &Token;

    /// The element immediately to the left in source order, under the same
    /// parent. `None` when the element starts its containing construct.
    fn left_sibling(&self, element: Element) -> Option<Element>;

    fn child_count(&self, node: NodeId) -> usize;

    /// Child at `index`. Panics when `index` is out of range; callers are
    /// expected to have checked the node's shape via [`child_count`].
    ///
    /// [`child_count`]: TreeNav::child_count
    fn child(&self, node: NodeId, index: usize) -> Element;

    /// Position of the span's first character.
    fn span_start(&self, element: Element) -> Location {
        let token = self.first_token(element);
        Location::new(token.line, token.column)
    }

    /// Position of the first character of the span's last token.
    fn span_end(&self, element: Element) -> Location {
        let token = self.last_token(element);
        Location::new(token.line, token.column)
    }
}

/// An immutable, arena-backed syntax tree over a token stream.
///
/// Nodes and tokens are addressed by copyable ids; the tree itself owns all
/// data, so handles stay cheap and the tree can be shared freely across
/// concurrent traversals.
#[derive(Debug)]
pub struct SyntaxTree {
    tokens: Vec<Token>,
    token_parents: Vec<NodeId>,
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl SyntaxTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.0 as usize]
    }

    pub fn node_kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.0 as usize].kind
    }

    pub fn children(&self, id: NodeId) -> &[Element] {
        &self.nodes[id.0 as usize].children
    }

    pub fn parent(&self, element: Element) -> Option<NodeId> {
        match element {
            Element::Node(id) => self.nodes[id.0 as usize].parent,
            Element::Token(id) => Some(self.token_parents[id.0 as usize]),
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// All tokens in stream order.
    pub fn token_ids(&self) -> impl Iterator<Item = TokenId> {
        (0..self.tokens.len() as u32).map(TokenId)
    }

    /// All nodes, root first, in creation (pre-)order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// The token immediately before `id` in the token stream, across any
    /// node boundary.
    pub fn token_before(&self, id: TokenId) -> Option<&Token> {
        id.0.checked_sub(1).map(|i| &self.tokens[i as usize])
    }

    /// The token immediately after `id` in the token stream.
    pub fn token_after(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.0 as usize + 1)
    }
}

impl TreeNav for SyntaxTree {
    fn first_token(&self, element: Element) -> &Token {
        match element {
            Element::Token(id) => self.token(id),
            Element::Node(id) => {
                let child = *self.children(id).first().expect("nodes are never empty");
                self.first_token(child)
            }
        }
    }

    fn last_token(&self, element: Element) -> &Token {
        match element {
            Element::Token(id) => self.token(id),
            Element::Node(id) => {
                let child = *self.children(id).last().expect("nodes are never empty");
                self.last_token(child)
            }
        }
    }

    fn left_sibling(&self, element: Element) -> Option<Element> {
        let parent = self.parent(element)?;
        let siblings = self.children(parent);
        let index = siblings.iter().position(|sibling| *sibling == element)?;
        index.checked_sub(1).map(|i| siblings[i])
    }

    fn child_count(&self, node: NodeId) -> usize {
        self.children(node).len()
    }

    fn child(&self, node: NodeId, index: usize) -> Element {
        self.children(node)[index]
    }
}

/// Incremental builder for [`SyntaxTree`].
///
/// Mirrors the shape of an event-driven parse: `start_node`, `token`, and
/// `finish_node` calls arrive in source order, and `finish` seals the tree.
/// Structural mistakes surface as [`TreeError`]s instead of producing a
/// tree the verifiers could misread.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tokens: Vec<Token>,
    token_parents: Vec<NodeId>,
    nodes: Vec<NodeData>,
    stack: Vec<NodeId>,
    roots: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a node; children added until the matching `finish_node` belong
    /// to it.
    pub fn start_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let parent = self.stack.last().copied();
        if let Some(parent) = parent {
            self.nodes[parent.0 as usize].children.push(Element::Node(id));
        } else {
            self.roots += 1;
        }
        self.nodes.push(NodeData {
            kind,
            parent,
            children: Vec::new(),
        });
        self.stack.push(id);
        id
    }

    /// Appends a leaf token to the currently open node.
    pub fn token(
        &mut self,
        kind: TokenKind,
        text: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Result<TokenId, TreeError> {
        let token = Token::new(kind, text, line, column);
        let Some(&parent) = self.stack.last() else {
            return Err(TreeError::TokenOutsideNode {
                text: token.text,
                line,
                column,
            });
        };
        if let Some(previous) = self.tokens.last() {
            let advances = token.line > previous.line
                || (token.line == previous.line && token.column > previous.last_column());
            if !advances {
                return Err(TreeError::TokenOutOfOrder {
                    text: token.text,
                    line,
                    column,
                });
            }
        }
        let id = TokenId(self.tokens.len() as u32);
        self.nodes[parent.0 as usize].children.push(Element::Token(id));
        self.token_parents.push(parent);
        self.tokens.push(token);
        Ok(id)
    }

    /// Closes the most recently opened node.
    pub fn finish_node(&mut self) -> Result<(), TreeError> {
        let Some(id) = self.stack.pop() else {
            return Err(TreeError::UnbalancedFinish);
        };
        let node = &self.nodes[id.0 as usize];
        if node.children.is_empty() {
            return Err(TreeError::EmptyNode { kind: node.kind });
        }
        Ok(())
    }

    /// Seals the tree and returns it.
    pub fn finish(self) -> Result<SyntaxTree, TreeError> {
        if !self.stack.is_empty() {
            return Err(TreeError::UnclosedNodes {
                open: self.stack.len(),
            });
        }
        if self.nodes.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        if self.roots != 1 {
            return Err(TreeError::MultipleRoots);
        }
        Ok(SyntaxTree {
            tokens: self.tokens,
            token_parents: self.token_parents,
            nodes: self.nodes,
            root: NodeId(0),
        })
    }
}
