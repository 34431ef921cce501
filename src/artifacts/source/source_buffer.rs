//! Read-only source text
//!
//! A `SourceBuffer` is one fully materialized version of a document. All
//! positions and ranges are character offsets (not bytes), so indexing is
//! O(1) and independent of the text's encoding.
//!
//! ## Line ranges
//!
//! `line_ranges` breaks a range at every newline. The newline stays with the
//! line it terminates, a trailing empty remainder after a final newline is
//! not emitted, and an empty range has no lines at all:
//!
//! ```text
//! "foo\nbar\n" -> ["foo\n", "bar\n"]
//! "foo\nbar"   -> ["foo\n", "bar"]
//! ""           -> []
//! ```

use crate::artifacts::source::range::Range;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceBuffer {
    chars: Vec<char>,
    line_starts: Vec<usize>,
}

impl SourceBuffer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let line_starts = std::iter::once(0)
            .chain(
                chars
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| **c == '\n')
                    .map(|(index, _)| index + 1),
            )
            .collect();

        Self { chars, line_starts }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Range covering the whole buffer
    pub fn full_range(&self) -> Range {
        Range::new(0, self.len())
    }

    /// Whether `range` is well formed and lies within this buffer
    pub fn contains(&self, range: Range) -> bool {
        range.is_well_formed() && range.end <= self.len()
    }

    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    pub fn slice(&self, range: Range) -> String {
        self.assert_contains(range);
        self.chars[range.start..range.end].iter().collect()
    }

    /// Break `range` into per-line sub-ranges
    ///
    /// Every non-final sub-range ends just after its terminating newline.
    ///
    /// # Panics
    ///
    /// When `range` is malformed or exceeds the buffer; such ranges violate
    /// the contract of whoever produced them.
    pub fn line_ranges(&self, range: Range) -> Vec<Range> {
        self.assert_contains(range);

        let mut lines = Vec::new();
        let mut line_start = range.start;
        for position in range.start..range.end {
            if self.chars[position] == '\n' {
                lines.push(Range::new(line_start, position + 1));
                line_start = position + 1;
            }
        }
        if line_start < range.end {
            lines.push(Range::new(line_start, range.end));
        }

        lines
    }

    /// A range is open when its last character is not a newline
    ///
    /// Text placed right after an open range continues the same physical
    /// line. Empty ranges are open.
    pub fn is_open(&self, range: Range) -> bool {
        self.assert_contains(range);
        range.is_empty() || self.char_at(range.end - 1) != '\n'
    }

    /// 1-based physical line number of `position`
    pub fn line_number(&self, position: usize) -> usize {
        self.line_starts.partition_point(|start| *start <= position)
    }

    /// Number of physical lines touched by `range`
    pub fn line_count(&self, range: Range) -> usize {
        self.line_ranges(range).len()
    }

    fn assert_contains(&self, range: Range) {
        assert!(
            self.contains(range),
            "range {} exceeds source buffer of length {}",
            range,
            self.len()
        );
    }
}

impl From<&str> for SourceBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceBuffer {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ranges(pairs: &[(usize, usize)]) -> Vec<Range> {
        pairs
            .iter()
            .map(|(start, end)| Range::new(*start, *end))
            .collect()
    }

    #[rstest]
    #[case("foo\nbar\n", Range::new(0, 8), ranges(&[(0, 4), (4, 8)]))]
    #[case("foo\nbar", Range::new(0, 7), ranges(&[(0, 4), (4, 7)]))]
    #[case("foo\nbar\n", Range::new(2, 6), ranges(&[(2, 4), (4, 6)]))]
    #[case("\n\n", Range::new(0, 2), ranges(&[(0, 1), (1, 2)]))]
    #[case("abc", Range::new(1, 1), ranges(&[]))]
    #[case("", Range::new(0, 0), ranges(&[]))]
    fn line_ranges_keep_newline_with_its_line(
        #[case] text: &str,
        #[case] range: Range,
        #[case] expected: Vec<Range>,
    ) {
        let source = SourceBuffer::new(text);

        assert_eq!(source.line_ranges(range), expected);
    }

    #[rstest]
    #[case(Range::new(0, 3), true)]
    #[case(Range::new(0, 4), false)]
    #[case(Range::new(4, 4), true)]
    #[case(Range::new(4, 7), true)]
    fn openness_depends_on_last_character(#[case] range: Range, #[case] open: bool) {
        let source = SourceBuffer::new("foo\nbar");

        assert_eq!(source.is_open(range), open);
    }

    #[test]
    fn positions_are_characters_not_bytes() {
        let source = SourceBuffer::new("é\nλx");

        assert_eq!(source.len(), 4);
        assert_eq!(source.char_at(3), 'x');
        assert_eq!(source.slice(Range::new(2, 4)), "λx");
        assert_eq!(source.line_ranges(source.full_range()), ranges(&[(0, 2), (2, 4)]));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(3, 1)]
    #[case(4, 2)]
    #[case(8, 3)]
    fn line_numbers_are_one_based(#[case] position: usize, #[case] line: usize) {
        let source = SourceBuffer::new("foo\nbar\n");

        assert_eq!(source.line_number(position), line);
    }

    #[test]
    #[should_panic(expected = "exceeds source buffer")]
    fn out_of_bounds_range_is_fatal() {
        let source = SourceBuffer::new("abc");

        source.line_ranges(Range::new(1, 9));
    }
}
