//! Open-line merging
//!
//! Splitting a node produces fragments one child (or gap) at a time. A new
//! fragment continues the current line when that line is still *open*: its
//! last fragment does not end with a newline. Otherwise it starts a line of
//! its own. Without this, a sibling that begins mid-line would be rendered
//! on a spurious extra line.
//!
//! ## Rows
//!
//! For rows, each side is tracked independently. Empty slots at the end of
//! a side are skipped when looking for the line to continue, so a fragment
//! may land in an earlier row than the last one:
//!
//! ```text
//! rows so far          incoming            result
//! [a    | x\n]         [b | z]             [a b  | x\n]
//! [     | y\n]                             [     | y\n]
//!                                          [     | z  ]
//! ```
//!
//! When only one side continues a line, the other side of the incoming row
//! (if any) is pushed as a new row paired with an empty slot.

use crate::artifacts::split::line::{Line, Row};
use bitflags::bitflags;

bitflags! {
    /// Sides whose incoming fragments continued an open line
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Merged: u8 {
        const LEFT = 0b01;
        const RIGHT = 0b10;
        const BOTH = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

/// Index of the line a new fragment would continue
///
/// Looks at the most recent non-empty line and returns its index if its last
/// fragment is open.
pub fn open_line_position<'l, T: 'l>(
    lines: impl DoubleEndedIterator<Item = &'l Line<T>> + ExactSizeIterator,
    is_open: impl Fn(&T) -> bool,
) -> Option<usize> {
    let (index, line) = lines.enumerate().rev().find(|(_, line)| !line.is_empty())?;

    line.last()
        .filter(|fragment| is_open(*fragment))
        .map(|_| index)
}

/// Append `line` to `lines`, continuing the last line if it is open
pub fn adjoin_lines<T>(lines: &mut Vec<Line<T>>, line: Line<T>, is_open: impl Fn(&T) -> bool) {
    if line.is_empty() {
        return;
    }

    match open_line_position(lines.iter(), is_open) {
        Some(index) => lines[index].extend(line),
        None => lines.push(line),
    }
}

/// Append `row` to `rows`, continuing open lines on each side independently
pub fn adjoin_rows<T>(
    rows: &mut Vec<Row<T>>,
    row: Row<T>,
    is_open_left: impl Fn(&T) -> bool,
    is_open_right: impl Fn(&T) -> bool,
) -> Merged {
    if row.left.is_empty() && row.right.is_empty() {
        return Merged::empty();
    }

    let left = open_line_position(rows.iter().map(|row| &row.left), is_open_left);
    let right = open_line_position(rows.iter().map(|row| &row.right), is_open_right);
    let Row {
        left: new_left,
        right: new_right,
    } = row;

    let mut merged = Merged::empty();
    merged.set(Merged::LEFT, left.is_some() && !new_left.is_empty());
    merged.set(Merged::RIGHT, right.is_some() && !new_right.is_empty());

    match (left, right) {
        (Some(left), Some(right)) => {
            rows[left].left.extend(new_left);
            rows[right].right.extend(new_right);
        }
        (Some(left), None) => {
            rows[left].left.extend(new_left);
            if !new_right.is_empty() {
                rows.push(Row::new(Line::empty(), new_right));
            }
        }
        (None, Some(right)) => {
            rows[right].right.extend(new_right);
            if !new_left.is_empty() {
                rows.push(Row::new(new_left, Line::empty()));
            }
        }
        (None, None) => rows.push(Row::new(new_left, new_right)),
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// Fragments are strings; a fragment is open unless it ends with a newline
    fn open(fragment: &&str) -> bool {
        !fragment.ends_with('\n')
    }

    fn line(fragments: &[&'static str]) -> Line<&'static str> {
        Line::new(fragments.to_vec())
    }

    #[test]
    fn open_line_is_continued() {
        let mut lines = vec![line(&["a\n"]), line(&["b"])];

        adjoin_lines(&mut lines, line(&[" c\n"]), open);
        adjoin_lines(&mut lines, line(&["d"]), open);

        assert_eq!(lines, vec![line(&["a\n"]), line(&["b", " c\n"]), line(&["d"])]);
    }

    #[test]
    fn first_line_starts_a_new_group() {
        let mut lines = Vec::new();

        adjoin_lines(&mut lines, line(&["a"]), open);

        assert_eq!(lines, vec![line(&["a"])]);
    }

    #[test]
    fn rows_open_on_both_sides_merge_in_place() {
        let mut rows = vec![Row::new(line(&["a"]), line(&["a"]))];

        let merged = adjoin_rows(&mut rows, Row::new(line(&[" b"]), line(&[" c"])), open, open);

        assert_eq!(merged, Merged::BOTH);
        assert_eq!(rows, vec![Row::new(line(&["a", " b"]), line(&["a", " c"]))]);
    }

    #[test]
    fn merged_flags_name_only_sides_that_received_fragments() {
        let mut rows = vec![Row::new(line(&["a"]), line(&["a"]))];

        let merged = adjoin_rows(&mut rows, Row::new(line(&[" b"]), Line::empty()), open, open);

        assert_eq!(merged, Merged::LEFT);
        assert_eq!(rows, vec![Row::new(line(&["a", " b"]), line(&["a"]))]);
    }

    #[test]
    fn open_side_with_nothing_incoming_is_not_reported_as_merged() {
        let mut rows = vec![Row::new(line(&["a"]), line(&["x\n"]))];

        let merged = adjoin_rows(&mut rows, Row::new(Line::empty(), line(&["y"])), open, open);

        assert_eq!(merged, Merged::empty());
        assert_eq!(
            rows,
            vec![
                Row::new(line(&["a"]), line(&["x\n"])),
                Row::new(Line::empty(), line(&["y"])),
            ]
        );
    }

    #[test]
    fn only_left_open_pushes_right_as_new_row() {
        let mut rows = vec![Row::new(line(&["a"]), line(&["x\n"]))];

        let merged = adjoin_rows(&mut rows, Row::new(line(&["b"]), line(&["y"])), open, open);

        assert_eq!(merged, Merged::LEFT);
        assert_eq!(
            rows,
            vec![
                Row::new(line(&["a", "b"]), line(&["x\n"])),
                Row::new(Line::empty(), line(&["y"])),
            ]
        );
    }

    #[test]
    fn only_right_open_pushes_left_as_new_row() {
        let mut rows = vec![Row::new(line(&["x\n"]), line(&["a"]))];

        let merged = adjoin_rows(&mut rows, Row::new(line(&["y"]), line(&["b"])), open, open);

        assert_eq!(merged, Merged::RIGHT);
        assert_eq!(
            rows,
            vec![
                Row::new(line(&["x\n"]), line(&["a", "b"])),
                Row::new(line(&["y"]), Line::empty()),
            ]
        );
    }

    #[test]
    fn closed_rows_start_a_new_row() {
        let mut rows = vec![Row::new(line(&["x\n"]), line(&["y\n"]))];

        let merged = adjoin_rows(&mut rows, Row::new(line(&["a"]), line(&["b"])), open, open);

        assert!(merged.is_empty());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn empty_slots_are_skipped_when_looking_for_an_open_line() {
        let mut rows = vec![
            Row::new(line(&["a"]), line(&["x\n"])),
            Row::new(Line::empty(), line(&["y\n"])),
        ];

        adjoin_rows(&mut rows, Row::new(line(&["b"]), line(&["z"])), open, open);

        assert_eq!(
            rows,
            vec![
                Row::new(line(&["a", "b"]), line(&["x\n"])),
                Row::new(Line::empty(), line(&["y\n"])),
                Row::new(Line::empty(), line(&["z"])),
            ]
        );
    }

    fn fragment_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("a"), Just("b\n"), Just(""), Just("c d"), Just("\n")]
    }

    fn line_strategy() -> impl Strategy<Value = Line<&'static str>> {
        prop::collection::vec(fragment_strategy(), 0..3).prop_map(Line::new)
    }

    proptest! {
        #[test]
        fn prop_adjoin_rows_never_drops_a_fragment(
            incoming in prop::collection::vec((line_strategy(), line_strategy()), 0..12)
        ) {
            let mut rows = Vec::new();
            let mut expected_left = Vec::new();
            let mut expected_right = Vec::new();

            for (left, right) in incoming {
                expected_left.extend(left.fragments().to_vec());
                expected_right.extend(right.fragments().to_vec());
                adjoin_rows(&mut rows, Row::new(left, right), open, open);
            }

            let mut actual_left: Vec<&str> = rows
                .iter()
                .flat_map(|row| row.left.fragments().to_vec())
                .collect();
            let mut actual_right: Vec<&str> = rows
                .iter()
                .flat_map(|row| row.right.fragments().to_vec())
                .collect();
            expected_left.sort();
            expected_right.sort();
            actual_left.sort();
            actual_right.sort();

            prop_assert_eq!(actual_left, expected_left);
            prop_assert_eq!(actual_right, expected_right);
        }

        #[test]
        fn prop_adjoin_lines_preserves_fragment_order(
            incoming in prop::collection::vec(line_strategy(), 0..12)
        ) {
            let mut lines = Vec::new();
            let mut expected = Vec::new();

            for line in incoming {
                expected.extend(line.fragments().to_vec());
                adjoin_lines(&mut lines, line, open);
            }

            let actual: Vec<&str> = lines
                .iter()
                .flat_map(|line| line.fragments().to_vec())
                .collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
