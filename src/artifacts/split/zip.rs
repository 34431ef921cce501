//! Zipping with defaults
//!
//! Aligns two independently produced sequences of unequal length, padding
//! the shorter one with a default value.

use crate::artifacts::split::line::{Line, Row};

/// `result[i] = combine(a[i] or default_a, b[i] or default_b)` for
/// `i < max(a.len(), b.len())`
pub fn zip_with_defaults<A: Clone, B: Clone, C>(
    mut combine: impl FnMut(A, B) -> C,
    default_a: A,
    default_b: B,
    a: Vec<A>,
    b: Vec<B>,
) -> Vec<C> {
    let length = a.len().max(b.len());
    let (mut a, mut b) = (a.into_iter(), b.into_iter());

    (0..length)
        .map(|_| {
            combine(
                a.next().unwrap_or_else(|| default_a.clone()),
                b.next().unwrap_or_else(|| default_b.clone()),
            )
        })
        .collect()
}

/// Pair old-side and new-side lines into rows, padding with empty lines
pub fn zip_lines<T: Clone>(left: Vec<Line<T>>, right: Vec<Line<T>>) -> Vec<Row<T>> {
    zip_with_defaults(Row::new, Line::empty(), Line::empty(), left, right)
}
