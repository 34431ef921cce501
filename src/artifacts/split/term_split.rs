//! Splitting a term into lines
//!
//! Used for the sides of whole-subtree patches: an inserted, deleted or
//! replaced term is broken into one rebuilt term per physical line.
//!
//! - A leaf becomes one leaf per line of its range.
//! - A branch folds over its children in order. The text between children
//!   (and before the first and after the last) is re-sliced from the source
//!   as gap fragments; child lines and gaps are merged whenever they continue
//!   an open line. Each resulting line is rebuilt into a node of the same
//!   kind holding the children that fall on it.

use crate::artifacts::source::range::{Range, Ranged};
use crate::artifacts::source::source_buffer::SourceBuffer;
use crate::artifacts::split::adjoin::adjoin_lines;
use crate::artifacts::split::line::{Fragment, Line, wrap_line};
use crate::artifacts::split::validate::check_term;
use crate::artifacts::syntax::node::SyntaxNode;
use crate::artifacts::syntax::term::{Info, Term};

/// Split a term into lines after checking its range invariants
pub fn split_term(term: &Term, source: &SourceBuffer) -> anyhow::Result<(Vec<Line<Term>>, Range)> {
    check_term(term, source)?;

    Ok(split_term_by_lines(term, source))
}

/// Split a term into lines, returning them with the range the term covers
///
/// # Panics
///
/// When a range of `term` exceeds `source` or a child is out of order.
pub fn split_term_by_lines(term: &Term, source: &SourceBuffer) -> (Vec<Line<Term>>, Range) {
    let range = term.range();
    let rebuild = |syntax: SyntaxNode<Term>, range: Range| {
        Term::new(Info::new(range, term.categories().clone()), syntax)
    };

    let lines = match &term.syntax {
        SyntaxNode::Leaf => source
            .line_ranges(range)
            .into_iter()
            .map(|line| Line::single(Term::leaf(line, term.categories().clone())))
            .collect(),
        SyntaxNode::Indexed(children) => {
            let mut lines = ChildLines::new(source, range.start);
            for child in children {
                let (child_lines, child_range) = split_term_by_lines(child, source);
                lines.push_child(child_lines, child_range);
            }
            lines.finish(range.end, |range, kept| {
                rebuild(SyntaxNode::Indexed(kept), range)
            })
        }
        SyntaxNode::Fixed(children) => {
            let mut lines = ChildLines::new(source, range.start);
            for child in children {
                let (child_lines, child_range) = split_term_by_lines(child, source);
                lines.push_child(child_lines, child_range);
            }
            lines.finish(range.end, |range, kept| rebuild(SyntaxNode::Fixed(kept), range))
        }
        SyntaxNode::Keyed(children) => {
            let mut lines = ChildLines::new(source, range.start);
            for (key, child) in children {
                let (child_lines, child_range) = split_term_by_lines(child, source);
                let keyed_lines: Vec<Line<(String, Term)>> = child_lines
                    .into_iter()
                    .map(|line| line.map(|piece| (key.clone(), piece)))
                    .collect();
                lines.push_child(keyed_lines, child_range);
            }
            lines.finish(range.end, |range, kept| rebuild(SyntaxNode::Keyed(kept), range))
        }
    };

    (lines, range)
}

/// Running per-line fragments of a branch being split
struct ChildLines<'s, T> {
    source: &'s SourceBuffer,
    lines: Vec<Line<Fragment<T>>>,
    previous_end: usize,
}

impl<'s, T: Ranged> ChildLines<'s, T> {
    fn new(source: &'s SourceBuffer, start: usize) -> Self {
        Self {
            source,
            lines: Vec::new(),
            previous_end: start,
        }
    }

    fn push_gap(&mut self, end: usize) {
        let gap = Range::new(self.previous_end, end);
        for line in self.source.line_ranges(gap) {
            self.adjoin(Line::single(Fragment::Gap(line)));
        }
    }

    fn push_child(&mut self, child_lines: Vec<Line<T>>, child_range: Range) {
        self.push_gap(child_range.start);
        for line in child_lines {
            self.adjoin(line.map(Fragment::Kept));
        }
        self.previous_end = child_range.end;
    }

    fn adjoin(&mut self, line: Line<Fragment<T>>) {
        let source = self.source;
        adjoin_lines(&mut self.lines, line, |fragment| {
            source.is_open(fragment.range())
        });
    }

    fn finish(mut self, end: usize, rebuild: impl Fn(Range, Vec<T>) -> Term) -> Vec<Line<Term>> {
        self.push_gap(end);

        self.lines
            .into_iter()
            .map(|line| wrap_line(line, &rebuild))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::document::parse_document;
    use crate::artifacts::syntax::category::categories;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn leaf(start: usize, end: usize) -> Term {
        Term::leaf(Range::new(start, end), categories(["word"]))
    }

    /// Text of each line's single rebuilt term
    fn line_texts(lines: &[Line<Term>], source: &SourceBuffer) -> Vec<String> {
        lines
            .iter()
            .flat_map(|line| line.fragments().iter().map(|term| source.slice(term.range())))
            .collect()
    }

    #[test]
    fn leaf_is_split_at_every_newline() -> anyhow::Result<()> {
        let source = SourceBuffer::new("foo\nbar\nbaz");
        let term = Term::leaf(source.full_range(), categories(["string"]));

        let (lines, range) = split_term(&term, &source)?;

        assert_eq!(range, Range::new(0, 11));
        assert_eq!(
            lines,
            vec![
                Line::single(Term::leaf(Range::new(0, 4), categories(["string"]))),
                Line::single(Term::leaf(Range::new(4, 8), categories(["string"]))),
                Line::single(Term::leaf(Range::new(8, 11), categories(["string"]))),
            ]
        );

        Ok(())
    }

    #[test]
    fn leaf_without_newline_is_a_single_line() -> anyhow::Result<()> {
        let source = SourceBuffer::new("x");

        let (lines, _) = split_term(&leaf(0, 1), &source)?;

        assert_eq!(lines, vec![Line::single(leaf(0, 1))]);

        Ok(())
    }

    #[test]
    fn siblings_on_one_line_are_merged() -> anyhow::Result<()> {
        let source = SourceBuffer::new("(a b)\n");
        let term = Term::indexed(
            Range::new(0, 6),
            categories(["list"]),
            vec![leaf(1, 2), leaf(3, 4)],
        );

        let (lines, _) = split_term(&term, &source)?;

        assert_eq!(
            lines,
            vec![Line::single(Term::indexed(
                Range::new(0, 6),
                categories(["list"]),
                vec![leaf(1, 2), leaf(3, 4)],
            ))]
        );

        Ok(())
    }

    #[test]
    fn branch_spanning_lines_is_rebuilt_per_line() -> anyhow::Result<()> {
        let source = SourceBuffer::new("f(a,\n  b)");
        let term = Term::fixed(
            Range::new(0, 9),
            categories(["call"]),
            vec![leaf(0, 1), leaf(2, 3), leaf(7, 8)],
        );

        let (lines, _) = split_term(&term, &source)?;

        assert_eq!(
            lines,
            vec![
                Line::single(Term::fixed(
                    Range::new(0, 5),
                    categories(["call"]),
                    vec![leaf(0, 1), leaf(2, 3)],
                )),
                Line::single(Term::fixed(
                    Range::new(5, 9),
                    categories(["call"]),
                    vec![leaf(7, 8)],
                )),
            ]
        );

        Ok(())
    }

    #[test]
    fn trailing_gap_after_a_closed_last_child_is_its_own_line() -> anyhow::Result<()> {
        let source = SourceBuffer::new("a\nb");
        let term = Term::indexed(Range::new(0, 3), categories(["list"]), vec![leaf(0, 2)]);

        let (lines, range) = split_term(&term, &source)?;

        assert_eq!(range, Range::new(0, 3));
        assert_eq!(
            lines,
            vec![
                Line::single(Term::indexed(
                    Range::new(0, 2),
                    categories(["list"]),
                    vec![leaf(0, 2)],
                )),
                Line::single(Term::indexed(Range::new(2, 3), categories(["list"]), vec![])),
            ]
        );
        assert_eq!(line_texts(&lines, &source), vec!["a\n", "b"]);

        Ok(())
    }

    #[test]
    fn multi_line_child_is_merged_with_surrounding_gaps() -> anyhow::Result<()> {
        let source = SourceBuffer::new("x = \"a\nb\";\n");
        let string = Term::leaf(Range::new(4, 9), categories(["string"]));
        let term = Term::indexed(
            Range::new(0, 11),
            categories(["assignment"]),
            vec![leaf(0, 1), string],
        );

        let (lines, _) = split_term(&term, &source)?;

        assert_eq!(line_texts(&lines, &source), vec!["x = \"a\n", "b\";\n"]);
        assert_eq!(
            lines[1].fragments()[0].syntax,
            SyntaxNode::Indexed(vec![Term::leaf(Range::new(7, 9), categories(["string"]))])
        );

        Ok(())
    }

    #[test]
    fn keyed_children_keep_their_keys() -> anyhow::Result<()> {
        let source = SourceBuffer::new("{a: 1,\n b: 2}");
        let term = Term::keyed(
            Range::new(0, 13),
            categories(["object"]),
            vec![
                ("a".to_string(), leaf(4, 5)),
                ("b".to_string(), leaf(11, 12)),
            ],
        );

        let (lines, _) = split_term(&term, &source)?;

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1].fragments()[0].syntax,
            SyntaxNode::Keyed(vec![("b".to_string(), leaf(11, 12))])
        );

        Ok(())
    }

    #[test]
    fn childless_empty_node_has_no_lines() -> anyhow::Result<()> {
        let source = SourceBuffer::new("");
        let term = Term::indexed(Range::new(0, 0), categories(["program"]), Vec::new());

        let (lines, range) = split_term(&term, &source)?;

        assert!(lines.is_empty());
        assert_eq!(range, Range::new(0, 0));

        Ok(())
    }

    #[test]
    fn invalid_term_is_rejected() {
        let source = SourceBuffer::new("ab");

        assert!(split_term(&leaf(0, 5), &source).is_err());
    }

    proptest! {
        #[test]
        fn prop_lines_reconstruct_the_term_text(text in "[a-z0-9 ;(){}\n]{0,80}") {
            let source = SourceBuffer::new(&text);
            let document = parse_document(&source).unwrap();

            let (lines, range) = split_term_by_lines(&document, &source);

            prop_assert_eq!(line_texts(&lines, &source).concat(), source.slice(range));
            prop_assert_eq!(lines.len(), source.line_count(range));
        }

        #[test]
        fn prop_every_line_stays_on_one_physical_line(text in "[a-z \n]{0,60}") {
            let source = SourceBuffer::new(&text);
            let document = parse_document(&source).unwrap();

            let (lines, _) = split_term_by_lines(&document, &source);

            for line in &lines {
                let range = line.range().unwrap();
                prop_assert_eq!(source.line_count(range), 1);
            }
        }
    }
}
