//! Concrete syntax tree.
//!
//! The tree is an append-only arena: nodes are pushed as the parser shifts
//! tokens and descends into nonterminals, and are never removed or
//! reparented. `NodeId` handles stay valid for the lifetime of the tree,
//! which lets parser frames refer to the node they populate without
//! borrowing it.

use std::fmt::Write as _;

use crate::colors::Colors;
use crate::token::{NonterminalId, TokenKind};

/// Handle to a node in a [`Cst`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum NodeData {
    Interior {
        symbol: NonterminalId,
        children: Vec<NodeId>,
        line: u32,
        col: u32,
    },
    Leaf {
        kind: TokenKind,
        text: String,
        line: u32,
        col: u32,
    },
}

/// What a node is: an open-ended nonterminal or a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind<'a> {
    Interior(NonterminalId),
    Leaf { kind: TokenKind, text: &'a str },
}

/// Concrete syntax tree rooted at one interior node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cst {
    nodes: Vec<NodeData>,
}

impl Cst {
    /// Create a tree holding only its (childless) root.
    pub fn new(root_symbol: NonterminalId, line: u32, col: u32) -> Self {
        Self {
            nodes: vec![NodeData::Interior {
                symbol: root_symbol,
                children: Vec::new(),
                line,
                col,
            }],
        }
    }

    #[inline]
    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root(&self) -> NodeRef<'_> {
        self.get(self.root_id())
    }

    /// Borrow a node.
    ///
    /// # Panics
    /// Panics if `id` was not created by this tree.
    pub fn get(&self, id: NodeId) -> NodeRef<'_> {
        self.ensure_node(id);
        NodeRef { cst: self, id }
    }

    /// Total number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append an empty interior child to `parent` and return its handle.
    pub fn push_interior(
        &mut self,
        parent: NodeId,
        symbol: NonterminalId,
        line: u32,
        col: u32,
    ) -> NodeId {
        self.push_child(
            parent,
            NodeData::Interior {
                symbol,
                children: Vec::new(),
                line,
                col,
            },
        )
    }

    /// Append a token leaf to `parent`.
    pub fn push_leaf(
        &mut self,
        parent: NodeId,
        kind: TokenKind,
        text: impl Into<String>,
        line: u32,
        col: u32,
    ) -> NodeId {
        self.push_child(
            parent,
            NodeData::Leaf {
                kind,
                text: text.into(),
                line,
                col,
            },
        )
    }

    fn push_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        match self.nodes.get_mut(parent.0 as usize) {
            Some(NodeData::Interior { children, .. }) => children.push(id),
            Some(NodeData::Leaf { .. }) => Self::leaf_parent(parent),
            None => Self::unknown_node(parent),
        }
        self.nodes.push(data);
        id
    }

    /// Indented text rendering, one node per line.
    ///
    /// Interior nodes print their nonterminal name, leaves print
    /// `KIND "text"`. Each depth level indents by two spaces.
    pub fn render<F>(&self, name_of: F, colors: Colors) -> String
    where
        F: Fn(NonterminalId) -> String,
    {
        let mut out = String::new();
        // Explicit stack: trees can nest deeper than the native call stack allows.
        let mut stack = vec![(self.root_id(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.get(id);
            let indent = "  ".repeat(depth);
            match node.kind() {
                NodeKind::Interior(symbol) => {
                    let _ = writeln!(out, "{indent}{}", colors.symbol(&name_of(symbol)));
                    for child in node.children().rev() {
                        stack.push((child.id(), depth + 1));
                    }
                }
                NodeKind::Leaf { kind, text } => {
                    let _ = writeln!(
                        out,
                        "{indent}{} {}",
                        colors.meta(kind.name()),
                        colors.text(text)
                    );
                }
            }
        }
        out
    }
}

/// Borrowed view of one node.
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a> {
    cst: &'a Cst,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    fn data(&self) -> &'a NodeData {
        &self.cst.nodes[self.id.0 as usize]
    }

    pub fn kind(&self) -> NodeKind<'a> {
        match self.data() {
            NodeData::Interior { symbol, .. } => NodeKind::Interior(*symbol),
            NodeData::Leaf { kind, text, .. } => NodeKind::Leaf { kind: *kind, text },
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.data(), NodeData::Leaf { .. })
    }

    /// Nonterminal of an interior node.
    pub fn symbol(&self) -> Option<NonterminalId> {
        match self.data() {
            NodeData::Interior { symbol, .. } => Some(*symbol),
            NodeData::Leaf { .. } => None,
        }
    }

    /// Token kind of a leaf.
    pub fn token_kind(&self) -> Option<TokenKind> {
        match self.data() {
            NodeData::Leaf { kind, .. } => Some(*kind),
            NodeData::Interior { .. } => None,
        }
    }

    /// Token text of a leaf.
    pub fn text(&self) -> Option<&'a str> {
        match self.data() {
            NodeData::Leaf { text, .. } => Some(text),
            NodeData::Interior { .. } => None,
        }
    }

    pub fn line(&self) -> u32 {
        match self.data() {
            NodeData::Interior { line, .. } | NodeData::Leaf { line, .. } => *line,
        }
    }

    pub fn col(&self) -> u32 {
        match self.data() {
            NodeData::Interior { col, .. } | NodeData::Leaf { col, .. } => *col,
        }
    }

    fn child_ids(&self) -> &'a [NodeId] {
        match self.data() {
            NodeData::Interior { children, .. } => children,
            NodeData::Leaf { .. } => &[],
        }
    }

    /// Children in insertion order. Leaves have none.
    pub fn children(&self) -> Children<'a> {
        Children {
            cst: self.cst,
            ids: self.child_ids().iter(),
        }
    }

    pub fn child_count(&self) -> usize {
        self.child_ids().len()
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'a>> {
        self.child_ids().get(index).map(|&id| NodeRef { cst: self.cst, id })
    }

    pub fn last_child(&self) -> Option<NodeRef<'a>> {
        self.child_ids()
            .last()
            .map(|&id| NodeRef { cst: self.cst, id })
    }

    /// Concatenated text of all leaves below this node, space separated.
    pub fn leaf_text(&self) -> String {
        let mut parts = Vec::new();
        let mut stack = vec![*self];
        while let Some(node) = stack.pop() {
            match node.kind() {
                NodeKind::Leaf { text, .. } => parts.push(text),
                NodeKind::Interior(_) => stack.extend(node.children().rev()),
            }
        }
        parts.join(" ")
    }
}

/// Iterator over a node's children.
#[derive(Clone, Debug)]
pub struct Children<'a> {
    cst: &'a Cst,
    ids: std::slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| NodeRef { cst: self.cst, id })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|&id| NodeRef { cst: self.cst, id })
    }
}

impl ExactSizeIterator for Children<'_> {}
