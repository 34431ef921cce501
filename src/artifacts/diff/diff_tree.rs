//! Diff trees
//!
//! A `Diff` is either a whole-subtree `Patch` or an `Annotated` branch that
//! exists on both sides (with per-side `Info`) and whose children may differ
//! further down. A `SplitDiff` has the same shape projected onto one side.

use crate::artifacts::core::Both;
use crate::artifacts::diff::patch::{Patch, SplitPatch};
use crate::artifacts::source::range::{Range, Ranged};
use crate::artifacts::syntax::category::CategorySet;
use crate::artifacts::syntax::node::SyntaxNode;
use crate::artifacts::syntax::term::{Info, Term};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diff {
    Patch(Patch<Term>),
    Annotated(Both<Info>, SyntaxNode<Diff>),
}

impl Diff {
    pub fn insert(term: Term) -> Self {
        Diff::Patch(Patch::Insert(term))
    }

    pub fn delete(term: Term) -> Self {
        Diff::Patch(Patch::Delete(term))
    }

    pub fn replace(before: Term, after: Term) -> Self {
        Diff::Patch(Patch::Replace(before, after))
    }

    pub fn annotated(infos: Both<Info>, syntax: SyntaxNode<Diff>) -> Self {
        Diff::Annotated(infos, syntax)
    }

    /// An unchanged leaf spanning `ranges` on each side
    pub fn unchanged_leaf(ranges: Both<Range>, categories: CategorySet) -> Self {
        let infos = ranges.map(|range| Info::new(range, categories.clone()));
        Diff::Annotated(infos, SyntaxNode::Leaf)
    }

    /// Range covered on each side, `None` on the side a patch is absent from
    pub fn ranges(&self) -> Both<Option<Range>> {
        match self {
            Diff::Patch(patch) => Both::new(
                patch.before().map(Ranged::range),
                patch.after().map(Ranged::range),
            ),
            Diff::Annotated(infos, _) => infos.as_ref().map(|info| Some(info.range)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitDiff {
    Patch(SplitPatch<Term>),
    Annotated(Info, SyntaxNode<SplitDiff>),
}

impl SplitDiff {
    pub fn categories(&self) -> &CategorySet {
        match self {
            SplitDiff::Patch(patch) => patch.term().categories(),
            SplitDiff::Annotated(info, _) => &info.categories,
        }
    }

    /// Presentation classes of this fragment: its patch marker (if any)
    /// followed by one class per category
    pub fn classes(&self) -> Vec<String> {
        let marker = match self {
            SplitDiff::Patch(patch) => Some(patch.marker().to_string()),
            SplitDiff::Annotated(..) => None,
        };

        marker
            .into_iter()
            .chain(self.categories().iter().map(|category| category.class_name()))
            .collect()
    }
}

impl Ranged for SplitDiff {
    fn range(&self) -> Range {
        match self {
            SplitDiff::Patch(patch) => patch.term().range(),
            SplitDiff::Annotated(info, _) => info.range,
        }
    }
}
