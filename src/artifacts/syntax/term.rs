//! Terms: one version's parsed subtree
//!
//! A term pairs an `Info` (its range in the source and its categories) with
//! a syntax node whose children are again terms.

use crate::artifacts::source::range::{Range, Ranged};
use crate::artifacts::syntax::category::CategorySet;
use crate::artifacts::syntax::node::SyntaxNode;
use derive_new::new;

/// Range and categories of a node on one side
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Info {
    pub range: Range,
    pub categories: CategorySet,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Term {
    pub info: Info,
    pub syntax: SyntaxNode<Term>,
}

impl Term {
    pub fn leaf(range: Range, categories: CategorySet) -> Self {
        Self::new(Info::new(range, categories), SyntaxNode::Leaf)
    }

    pub fn indexed(range: Range, categories: CategorySet, children: Vec<Term>) -> Self {
        Self::new(Info::new(range, categories), SyntaxNode::Indexed(children))
    }

    pub fn fixed(range: Range, categories: CategorySet, children: Vec<Term>) -> Self {
        Self::new(Info::new(range, categories), SyntaxNode::Fixed(children))
    }

    pub fn keyed(range: Range, categories: CategorySet, children: Vec<(String, Term)>) -> Self {
        Self::new(Info::new(range, categories), SyntaxNode::Keyed(children))
    }

    pub fn categories(&self) -> &CategorySet {
        &self.info.categories
    }
}

impl Ranged for Term {
    fn range(&self) -> Range {
        self.info.range
    }
}
