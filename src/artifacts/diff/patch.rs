//! Whole-subtree changes
//!
//! A `Patch` describes a change between the two versions. Once a diff is
//! projected onto a single rendered side, each patch becomes a one-sided
//! `SplitPatch` that only remembers what kind of change it was.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Insert(T),
    Delete(T),
    Replace(T, T),
}

impl<T> Patch<T> {
    /// The old-side subtree, if the patch has one
    pub fn before(&self) -> Option<&T> {
        match self {
            Patch::Delete(before) | Patch::Replace(before, _) => Some(before),
            Patch::Insert(_) => None,
        }
    }

    /// The new-side subtree, if the patch has one
    pub fn after(&self) -> Option<&T> {
        match self {
            Patch::Insert(after) | Patch::Replace(_, after) => Some(after),
            Patch::Delete(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitPatch<T> {
    Insert(T),
    Delete(T),
    Replace(T),
}

impl<T> SplitPatch<T> {
    pub fn term(&self) -> &T {
        match self {
            SplitPatch::Insert(term) | SplitPatch::Delete(term) | SplitPatch::Replace(term) => term,
        }
    }

    /// Wrapper marker used by markup layers
    pub fn marker(&self) -> &'static str {
        match self {
            SplitPatch::Insert(_) => "insert",
            SplitPatch::Delete(_) => "delete",
            SplitPatch::Replace(_) => "replace",
        }
    }
}
