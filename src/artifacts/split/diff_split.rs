//! Splitting a diff tree into rows
//!
//! The splitter walks the diff tree depth-first, left to right, and returns
//! for every subtree its rows together with the exact old/new ranges it
//! covered. Parents use those ranges to re-slice the unchanged text between
//! children from each source.
//!
//! ## Patches
//!
//! - `Insert`: the term is split against the new source; each line becomes
//!   a row with an empty left side. The old range is zero-width at the
//!   previous old end.
//! - `Delete`: symmetric, against the old source.
//! - `Replace`: both terms are split against their own source and the two
//!   line sequences are zipped into rows, padding the shorter side.
//!
//! ## Annotated branches
//!
//! - Leaf: each side's range is broken into lines independently and zipped.
//! - Indexed/Fixed/Keyed: fold over the children tracking the previous end
//!   on each side. Before each child, the old and new gaps are split into
//!   lines, zipped into context rows and adjoined; then the child's own rows
//!   are adjoined. After the last child the trailing gaps are added. Each
//!   side of every row is rebuilt into a node of the same kind carrying that
//!   side's categories.
//!
//! Separators between children may differ in length or line count between
//! versions, which is why every gap is computed per side.

use crate::artifacts::core::Both;
use crate::artifacts::diff::diff_tree::{Diff, SplitDiff};
use crate::artifacts::diff::patch::{Patch, SplitPatch};
use crate::artifacts::source::range::{Range, Ranged};
use crate::artifacts::source::source_buffer::SourceBuffer;
use crate::artifacts::split::adjoin::adjoin_rows;
use crate::artifacts::split::line::{Fragment, Line, Row, wrap_line};
use crate::artifacts::split::term_split::split_term_by_lines;
use crate::artifacts::split::validate::check_diff;
use crate::artifacts::split::zip::zip_lines;
use crate::artifacts::syntax::category::CategorySet;
use crate::artifacts::syntax::node::SyntaxNode;
use crate::artifacts::syntax::term::{Info, Term};

/// Rows of a subtree and the old/new ranges it covers
pub type SplitRows = (Vec<Row<SplitDiff>>, Both<Range>);

/// Split a whole diff into rows after checking its range invariants
///
/// Splitting starts at offset zero on both sides.
pub fn split_diff(
    diff: &Diff,
    old: &SourceBuffer,
    new: &SourceBuffer,
) -> anyhow::Result<SplitRows> {
    let sources = Both::new(old, new);
    check_diff(diff, sources)?;

    let (rows, ranges) = split_diff_by_lines(diff, Both::new(0, 0), sources);
    debug_log!(
        "Split diff into {} rows covering old {} and new {}",
        rows.len(),
        ranges.old,
        ranges.new
    );

    Ok((rows, ranges))
}

/// Split one subtree into rows
///
/// `previous` holds the old/new ends of whatever preceded this subtree; a
/// patch absent from one side covers a zero-width range there.
///
/// # Panics
///
/// When a range exceeds its source or siblings are out of order.
pub fn split_diff_by_lines(
    diff: &Diff,
    previous: Both<usize>,
    sources: Both<&SourceBuffer>,
) -> SplitRows {
    match diff {
        Diff::Patch(Patch::Insert(term)) => {
            let (lines, range) = split_term_by_lines(term, sources.new);
            let rows = lines
                .into_iter()
                .map(|line| Row::new(Line::empty(), line.map(split_insert)))
                .collect();

            (rows, Both::new(Range::empty_at(previous.old), range))
        }
        Diff::Patch(Patch::Delete(term)) => {
            let (lines, range) = split_term_by_lines(term, sources.old);
            let rows = lines
                .into_iter()
                .map(|line| Row::new(line.map(split_delete), Line::empty()))
                .collect();

            (rows, Both::new(range, Range::empty_at(previous.new)))
        }
        Diff::Patch(Patch::Replace(before, after)) => {
            let (old_lines, old_range) = split_term_by_lines(before, sources.old);
            let (new_lines, new_range) = split_term_by_lines(after, sources.new);
            let rows = zip_lines(
                old_lines.into_iter().map(|l| l.map(split_replace)).collect(),
                new_lines.into_iter().map(|l| l.map(split_replace)).collect(),
            );

            (rows, Both::new(old_range, new_range))
        }
        Diff::Annotated(infos, syntax) => split_annotated_by_lines(infos, syntax, sources),
    }
}

fn split_insert(term: Term) -> SplitDiff {
    SplitDiff::Patch(SplitPatch::Insert(term))
}

fn split_delete(term: Term) -> SplitDiff {
    SplitDiff::Patch(SplitPatch::Delete(term))
}

fn split_replace(term: Term) -> SplitDiff {
    SplitDiff::Patch(SplitPatch::Replace(term))
}

fn split_annotated_by_lines(
    infos: &Both<Info>,
    syntax: &SyntaxNode<Diff>,
    sources: Both<&SourceBuffer>,
) -> SplitRows {
    let ranges = infos.as_ref().map(|info| info.range);
    let categories = infos.as_ref().map(|info| &info.categories);
    debug_log!(
        "Splitting {:?} node: old {} new {}",
        syntax.kind(),
        ranges.old,
        ranges.new
    );

    let rows = match syntax {
        SyntaxNode::Leaf => context_rows(ranges, sources)
            .into_iter()
            .map(|row| {
                row.map_lines(
                    |line| line.map(|range| annotated_leaf(range, categories.old)),
                    |line| line.map(|range| annotated_leaf(range, categories.new)),
                )
            })
            .collect(),
        SyntaxNode::Indexed(children) => {
            let mut rows = ChildRows::new(sources, ranges.map(|range| range.start));
            for child in children {
                let (child_rows, child_ranges) =
                    split_diff_by_lines(child, rows.previous, sources);
                rows.push_child(child_rows, child_ranges);
            }
            rows.finish(ranges.map(|range| range.end), categories, SyntaxNode::Indexed)
        }
        SyntaxNode::Fixed(children) => {
            let mut rows = ChildRows::new(sources, ranges.map(|range| range.start));
            for child in children {
                let (child_rows, child_ranges) =
                    split_diff_by_lines(child, rows.previous, sources);
                rows.push_child(child_rows, child_ranges);
            }
            rows.finish(ranges.map(|range| range.end), categories, SyntaxNode::Fixed)
        }
        SyntaxNode::Keyed(children) => {
            let mut rows = ChildRows::new(sources, ranges.map(|range| range.start));
            for (key, child) in children {
                let (child_rows, child_ranges) =
                    split_diff_by_lines(child, rows.previous, sources);
                let keyed_rows: Vec<Row<(String, SplitDiff)>> = child_rows
                    .into_iter()
                    .map(|row| row.map(|piece| (key.clone(), piece)))
                    .collect();
                rows.push_child(keyed_rows, child_ranges);
            }
            rows.finish(ranges.map(|range| range.end), categories, SyntaxNode::Keyed)
        }
    };

    debug_log!(
        "Split {:?} node: old {} new {} -> {} rows",
        syntax.kind(),
        ranges.old,
        ranges.new,
        rows.len()
    );

    (rows, ranges)
}

fn annotated_leaf(range: Range, categories: &CategorySet) -> SplitDiff {
    SplitDiff::Annotated(Info::new(range, categories.clone()), SyntaxNode::Leaf)
}

/// Lines of the old and new ranges, zipped into rows
fn context_rows(ranges: Both<Range>, sources: Both<&SourceBuffer>) -> Vec<Row<Range>> {
    let lines: Both<Vec<Line<Range>>> = ranges.zip(sources).map(|(range, source)| {
        source
            .line_ranges(range)
            .into_iter()
            .map(Line::single)
            .collect()
    });

    zip_lines(lines.old, lines.new)
}

/// Running rows of a branch being split
struct ChildRows<'s, T> {
    sources: Both<&'s SourceBuffer>,
    rows: Vec<Row<Fragment<T>>>,
    previous: Both<usize>,
}

impl<'s, T: Ranged> ChildRows<'s, T> {
    fn new(sources: Both<&'s SourceBuffer>, start: Both<usize>) -> Self {
        Self {
            sources,
            rows: Vec::new(),
            previous: start,
        }
    }

    fn push_gap(&mut self, end: Both<usize>) {
        let gaps = self
            .previous
            .zip(end)
            .map(|(start, end)| Range::new(start, end));
        for row in context_rows(gaps, self.sources) {
            self.adjoin(row.map(Fragment::Gap));
        }
    }

    fn push_child(&mut self, child_rows: Vec<Row<T>>, child_ranges: Both<Range>) {
        self.push_gap(child_ranges.map(|range| range.start));
        for row in child_rows {
            self.adjoin(row.map(Fragment::Kept));
        }
        self.previous = child_ranges.map(|range| range.end);
    }

    fn adjoin(&mut self, row: Row<Fragment<T>>) {
        let Both { old, new } = self.sources;
        let merged = adjoin_rows(
            &mut self.rows,
            row,
            |fragment| old.is_open(fragment.range()),
            |fragment| new.is_open(fragment.range()),
        );
        if !merged.is_empty() {
            debug_log!("  continued open line on {:?}", merged);
        }
    }

    /// Add the trailing gaps and rebuild each side of every row into a node
    fn finish(
        mut self,
        end: Both<usize>,
        categories: Both<&CategorySet>,
        rebuild: fn(Vec<T>) -> SyntaxNode<SplitDiff>,
    ) -> Vec<Row<SplitDiff>> {
        self.push_gap(end);

        self.rows
            .into_iter()
            .map(|row| {
                row.map_lines(
                    |line| wrap_line(line, annotated_branch(categories.old, rebuild)),
                    |line| wrap_line(line, annotated_branch(categories.new, rebuild)),
                )
            })
            .collect()
    }
}

/// Rebuild one side's kept fragments into an annotated branch
fn annotated_branch<'a, T: 'a>(
    categories: &'a CategorySet,
    rebuild: fn(Vec<T>) -> SyntaxNode<SplitDiff>,
) -> impl FnOnce(Range, Vec<T>) -> SplitDiff + 'a {
    move |range, kept| SplitDiff::Annotated(Info::new(range, categories.clone()), rebuild(kept))
}
