//! Half-open character ranges
//!
//! A `Range` is `[start, end)` in zero-based character offsets of a single
//! source buffer. Ranges never carry the buffer they belong to; the caller
//! always knows which side (old or new) a range was taken from.

use derive_new::new;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Zero-width range positioned at `position`
    pub fn empty_at(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    pub fn contains_range(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Smallest range covering every given range: `[min(starts), max(ends))`
    ///
    /// Returns `None` for an empty set of ranges.
    pub fn union(ranges: impl IntoIterator<Item = Range>) -> Option<Range> {
        ranges.into_iter().reduce(|covered, range| Range {
            start: covered.start.min(range.start),
            end: covered.end.max(range.end),
        })
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Anything that spans a range of one source buffer
pub trait Ranged {
    fn range(&self) -> Range;
}

impl Ranged for Range {
    fn range(&self) -> Range {
        *self
    }
}

impl<K, T: Ranged> Ranged for (K, T) {
    fn range(&self) -> Range {
        self.1.range()
    }
}
