//! Range invariants of terms and diffs
//!
//! The splitter re-derives gap text from the sources by range arithmetic, so
//! it relies on the producer of the tree for these invariants:
//!
//! - every range is well formed and lies within its source buffer
//! - every child range is nested within its parent's range
//! - siblings are in ascending source order and do not overlap (per side for
//!   diffs; a patch only takes part on the side(s) it exists on)
//!
//! A violation is a bug in whoever built the tree. It is reported, never
//! silently corrected.

use crate::artifacts::core::{Both, Side};
use crate::artifacts::diff::diff_tree::Diff;
use crate::artifacts::source::range::{Range, Ranged};
use crate::artifacts::source::source_buffer::SourceBuffer;
use crate::artifacts::syntax::term::Term;
use anyhow::Context;

pub fn check_term(term: &Term, source: &SourceBuffer) -> anyhow::Result<()> {
    let range = term.range();
    check_within(range, source)?;

    let mut previous_end = range.start;
    for child in term.syntax.children() {
        previous_end = check_child(child.range(), range, previous_end)?;
        check_term(child, source)?;
    }

    Ok(())
}

pub fn check_diff(diff: &Diff, sources: Both<&SourceBuffer>) -> anyhow::Result<()> {
    match diff {
        Diff::Patch(patch) => {
            if let Some(before) = patch.before() {
                check_term(before, sources.old).context("Invalid old side of a patch")?;
            }
            if let Some(after) = patch.after() {
                check_term(after, sources.new).context("Invalid new side of a patch")?;
            }
        }
        Diff::Annotated(infos, syntax) => {
            let ranges = infos.as_ref().map(|info| info.range);
            for side in [Side::Old, Side::New] {
                check_within(*ranges.get(side), sources.get(side))
                    .with_context(|| format!("Invalid {side:?} side of an annotated node"))?;
            }

            let mut previous_ends = ranges.map(|range| range.start);
            for child in syntax.children() {
                let child_ranges = child.ranges();
                if let Some(child_range) = child_ranges.old {
                    previous_ends.old = check_child(child_range, ranges.old, previous_ends.old)
                        .context("Invalid old side of an annotated node")?;
                }
                if let Some(child_range) = child_ranges.new {
                    previous_ends.new = check_child(child_range, ranges.new, previous_ends.new)
                        .context("Invalid new side of an annotated node")?;
                }
                check_diff(child, sources)?;
            }
        }
    }

    Ok(())
}

fn check_within(range: Range, source: &SourceBuffer) -> anyhow::Result<()> {
    anyhow::ensure!(
        range.is_well_formed(),
        "Malformed range {}: start is past end",
        range
    );
    anyhow::ensure!(
        source.contains(range),
        "Range {} exceeds source buffer of length {}",
        range,
        source.len()
    );

    Ok(())
}

/// Check one child against its parent and previous sibling, returning the
/// child's end
fn check_child(child: Range, parent: Range, previous_end: usize) -> anyhow::Result<usize> {
    anyhow::ensure!(
        parent.contains_range(&child),
        "Child range {} is not nested within parent range {}",
        child,
        parent
    );
    anyhow::ensure!(
        child.start >= previous_end,
        "Child range {} overlaps or precedes its previous sibling ending at {}",
        child,
        previous_end
    );

    Ok(child.end)
}
