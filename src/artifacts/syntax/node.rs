//! Syntax node shapes
//!
//! A node is generic over its child type so the same shapes describe plain
//! terms (`SyntaxNode<Term>`), diffs (`SyntaxNode<Diff>`) and one-sided split
//! diffs (`SyntaxNode<SplitDiff>`).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Leaf,
    Indexed,
    Fixed,
    Keyed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode<T> {
    /// No children
    Leaf,
    /// Ordered, variable-length children
    Indexed(Vec<T>),
    /// Ordered children of a fixed arity
    Fixed(Vec<T>),
    /// Children by key
    ///
    /// Key order carries no meaning; entries are stored in source order so
    /// the text between them can be recovered.
    Keyed(Vec<(String, T)>),
}

impl<T> SyntaxNode<T> {
    pub fn kind(&self) -> NodeKind {
        match self {
            SyntaxNode::Leaf => NodeKind::Leaf,
            SyntaxNode::Indexed(_) => NodeKind::Indexed,
            SyntaxNode::Fixed(_) => NodeKind::Fixed,
            SyntaxNode::Keyed(_) => NodeKind::Keyed,
        }
    }

    /// Children in stored order, keys dropped
    pub fn children(&self) -> Vec<&T> {
        match self {
            SyntaxNode::Leaf => Vec::new(),
            SyntaxNode::Indexed(children) | SyntaxNode::Fixed(children) => {
                children.iter().collect()
            }
            SyntaxNode::Keyed(children) => children.iter().map(|(_, child)| child).collect(),
        }
    }
}
