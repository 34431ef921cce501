//! Lines and rows
//!
//! A `Line` holds the fragments rendered on one physical source line, or
//! nothing at all (an empty slot). A `Row` pairs an old-side line with a
//! new-side line; either may be empty.

use crate::artifacts::source::range::{Range, Ranged};
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<T>(Vec<T>);

impl<T> Line<T> {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn single(fragment: T) -> Self {
        Self(vec![fragment])
    }

    pub fn new(fragments: Vec<T>) -> Self {
        Self(fragments)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fragments(&self) -> &[T] {
        &self.0
    }

    pub fn into_fragments(self) -> Vec<T> {
        self.0
    }

    pub fn last(&self) -> Option<&T> {
        self.0.last()
    }

    /// Continue this line with the fragments of `other`
    pub fn extend(&mut self, other: Line<T>) {
        self.0.extend(other.0);
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Line<U> {
        Line(self.0.into_iter().map(f).collect())
    }
}

impl<T: Ranged> Line<T> {
    /// Range covered by all fragments, `None` for an empty line
    pub fn range(&self) -> Option<Range> {
        Range::union(self.0.iter().map(Ranged::range))
    }
}

impl<T> Default for Line<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Row<T> {
    pub left: Line<T>,
    pub right: Line<T>,
}

impl<T> Row<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Row<U> {
        Row {
            left: self.left.map(&mut f),
            right: self.right.map(&mut f),
        }
    }

    /// Transform each side's line independently
    pub fn map_lines<U>(
        self,
        left: impl FnOnce(Line<T>) -> Line<U>,
        right: impl FnOnce(Line<T>) -> Line<U>,
    ) -> Row<U> {
        Row {
            left: left(self.left),
            right: right(self.right),
        }
    }
}

/// A fragment of a line while a node is being split
///
/// Gaps are the literal text between children (whitespace, punctuation)
/// re-sliced from the source; they take part in line merging but are not
/// kept as children of the rebuilt node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<T> {
    Gap(Range),
    Kept(T),
}

impl<T> Fragment<T> {
    pub fn kept(self) -> Option<T> {
        match self {
            Fragment::Gap(_) => None,
            Fragment::Kept(fragment) => Some(fragment),
        }
    }
}

impl<T: Ranged> Ranged for Fragment<T> {
    fn range(&self) -> Range {
        match self {
            Fragment::Gap(range) => *range,
            Fragment::Kept(fragment) => fragment.range(),
        }
    }
}

/// Rebuild a line of fragments into a line holding a single node
///
/// The node keeps only the non-gap fragments as children but covers the
/// whole line, gaps included. Empty lines stay empty.
pub fn wrap_line<T: Ranged, U>(
    line: Line<Fragment<T>>,
    wrap: impl FnOnce(Range, Vec<T>) -> U,
) -> Line<U> {
    let Some(range) = line.range() else {
        return Line::empty();
    };
    let kept = line
        .into_fragments()
        .into_iter()
        .filter_map(Fragment::kept)
        .collect();

    Line::single(wrap(range, kept))
}
