//! Two-column terminal layout
//!
//! Every row becomes one output line: the old side on the left, the new side
//! on the right, each optionally prefixed by its physical line number.
//! Fragments are painted by what happened to them; text between children is
//! re-sliced from the source and shown as context.

use crate::artifacts::core::Both;
use crate::artifacts::diff::diff_tree::SplitDiff;
use crate::artifacts::diff::patch::SplitPatch;
use crate::artifacts::render::config::RenderConfig;
use crate::artifacts::source::range::{Range, Ranged};
use crate::artifacts::source::source_buffer::SourceBuffer;
use crate::artifacts::split::line::{Line, Row};
use crate::artifacts::syntax::category::CategorySet;
use crate::artifacts::syntax::node::SyntaxNode;
use crate::artifacts::syntax::term::Term;
use colored::{Color, ColoredString, Colorize};
use derive_new::new;
use std::io::Write;

/// Subdued colors for unchanged tokens of well-known categories
pub const CATEGORY_COLORS: phf::Map<&'static str, Color> = phf::phf_map! {
    "number" => Color::Cyan,
    "punctuation" => Color::BrightBlack,
    "string" => Color::Magenta,
    "comment" => Color::BrightBlack,
};

const SEPARATOR: &str = " |";
const LINE_NUMBER_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Context,
    Category(Color),
    Insert,
    Delete,
    Replace,
}

impl Paint {
    fn of_patch(patch: &SplitPatch<Term>) -> Self {
        match patch {
            SplitPatch::Insert(_) => Paint::Insert,
            SplitPatch::Delete(_) => Paint::Delete,
            SplitPatch::Replace(_) => Paint::Replace,
        }
    }

    fn of_categories(categories: &CategorySet) -> Self {
        categories
            .iter()
            .find_map(|category| CATEGORY_COLORS.get(category.name()).copied())
            .map_or(Paint::Context, Paint::Category)
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            Paint::Context => text.normal(),
            Paint::Category(color) => text.color(color),
            Paint::Insert => text.green(),
            Paint::Delete => text.red(),
            Paint::Replace => text.yellow(),
        }
    }
}

/// A run of text sharing one paint
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Segment {
    pub text: String,
    pub paint: Paint,
}

#[derive(new)]
pub struct SideBySide<'r> {
    config: &'r RenderConfig,
    sources: Both<&'r SourceBuffer>,
}

impl SideBySide<'_> {
    pub fn render_header(&self, titles: Both<&str>, writer: &mut dyn Write) -> anyhow::Result<()> {
        let gutter = if self.config.line_numbers {
            " ".repeat(LINE_NUMBER_WIDTH + 1)
        } else {
            String::new()
        };
        let left: String = titles.old.chars().take(self.config.width).collect();

        writeln!(
            writer,
            "{}",
            format!(
                "{gutter}{left:<width$}{SEPARATOR} {gutter}{}",
                titles.new,
                width = self.config.width
            )
            .trim_end()
            .bold()
        )?;

        Ok(())
    }

    pub fn render(&self, rows: &[Row<SplitDiff>], writer: &mut dyn Write) -> anyhow::Result<()> {
        for row in rows {
            writeln!(writer, "{}", self.render_row(row))?;
        }

        Ok(())
    }

    fn render_row(&self, row: &Row<SplitDiff>) -> String {
        let mut output = self.gutter(&row.left, self.sources.old);
        output.push_str(&paint_cell(
            self.cell(&row.left, self.sources.old),
            Some(self.config.width),
        ));
        output.push_str(SEPARATOR);

        if !row.right.is_empty() {
            output.push(' ');
            output.push_str(&self.gutter(&row.right, self.sources.new));
            output.push_str(&paint_cell(self.cell(&row.right, self.sources.new), None));
        }

        output
    }

    fn gutter(&self, line: &Line<SplitDiff>, source: &SourceBuffer) -> String {
        if !self.config.line_numbers {
            return String::new();
        }

        match line.range() {
            Some(range) => format!(
                "{} ",
                format!(
                    "{:>width$}",
                    source.line_number(range.start),
                    width = LINE_NUMBER_WIDTH
                )
                .dimmed()
            ),
            None => " ".repeat(LINE_NUMBER_WIDTH + 1),
        }
    }

    /// Laid-out segments of one side of a row: newlines dropped, tabs
    /// expanded, truncated to the column width
    pub fn cell(&self, line: &Line<SplitDiff>, source: &SourceBuffer) -> Vec<Segment> {
        let mut segments = Vec::new();
        for fragment in line.fragments() {
            push_fragment(fragment, source, &mut segments);
        }

        self.layout(segments)
    }

    fn layout(&self, segments: Vec<Segment>) -> Vec<Segment> {
        let tab_width = self.config.tab_width.max(1);
        let mut column = 0;
        let mut laid_out = Vec::new();

        for segment in segments {
            let mut text = String::new();
            for c in segment.text.chars() {
                if column >= self.config.width {
                    break;
                }
                match c {
                    '\n' | '\r' => {}
                    '\t' => {
                        let spaces =
                            (tab_width - column % tab_width).min(self.config.width - column);
                        text.push_str(&" ".repeat(spaces));
                        column += spaces;
                    }
                    c => {
                        text.push(c);
                        column += 1;
                    }
                }
            }
            if !text.is_empty() {
                laid_out.push(Segment::new(text, segment.paint));
            }
        }

        laid_out
    }
}

fn push_fragment(fragment: &SplitDiff, source: &SourceBuffer, segments: &mut Vec<Segment>) {
    match fragment {
        SplitDiff::Patch(patch) => segments.push(Segment::new(
            source.slice(patch.term().range()),
            Paint::of_patch(patch),
        )),
        SplitDiff::Annotated(info, SyntaxNode::Leaf) => segments.push(Segment::new(
            source.slice(info.range),
            Paint::of_categories(&info.categories),
        )),
        SplitDiff::Annotated(info, syntax) => {
            let mut cursor = info.range.start;
            for child in syntax.children() {
                let range = child.range();
                segments.push(Segment::new(
                    source.slice(Range::new(cursor, range.start)),
                    Paint::Context,
                ));
                push_fragment(child, source, segments);
                cursor = range.end;
            }
            segments.push(Segment::new(
                source.slice(Range::new(cursor, info.range.end)),
                Paint::Context,
            ));
        }
    }
}

fn paint_cell(segments: Vec<Segment>, pad_to: Option<usize>) -> String {
    let mut output = String::new();
    let mut column = 0;

    for segment in segments {
        column += segment.text.chars().count();
        output.push_str(&segment.paint.paint(&segment.text).to_string());
    }
    if let Some(width) = pad_to {
        output.push_str(&" ".repeat(width.saturating_sub(column)));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::document::diff_documents;
    use crate::artifacts::render::config::ColorMode;
    use crate::artifacts::split::diff_split::split_diff;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn plain() -> RenderConfig {
        colored::control::set_override(false);
        RenderConfig::new(12, 4, false, ColorMode::Never, false)
    }

    fn render_texts(
        config: &RenderConfig,
        old: &str,
        new: &str,
    ) -> anyhow::Result<Vec<String>> {
        let (old, new) = (SourceBuffer::new(old), SourceBuffer::new(new));
        let (rows, _) = split_diff(&diff_documents(&old, &new)?, &old, &new)?;

        let mut output = Vec::new();
        SideBySide::new(config, Both::new(&old, &new)).render(&rows, &mut output)?;

        Ok(String::from_utf8(output)?
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn cell_text(segments: &[Segment]) -> String {
        segments.iter().map(|segment| segment.text.as_str()).collect()
    }

    #[rstest]
    fn changed_token_is_painted_on_both_sides(plain: RenderConfig) -> anyhow::Result<()> {
        let (old, new) = (SourceBuffer::new("let x = 1;\n"), SourceBuffer::new("let y = 1;\n"));
        let (rows, _) = split_diff(&diff_documents(&old, &new)?, &old, &new)?;
        let renderer = SideBySide::new(&plain, Both::new(&old, &new));

        let left = renderer.cell(&rows[0].left, &old);
        let right = renderer.cell(&rows[0].right, &new);

        assert_eq!(cell_text(&left), "let x = 1;");
        assert_eq!(cell_text(&right), "let y = 1;");
        assert!(left.contains(&Segment::new("x".to_string(), Paint::Replace)));
        assert!(right.contains(&Segment::new("y".to_string(), Paint::Replace)));
        assert!(left.contains(&Segment::new("1".to_string(), Paint::Category(Color::Cyan))));

        Ok(())
    }

    #[rstest]
    #[case("a\tb\n", 12, "a   b")]
    #[case("\tb\n", 12, "    b")]
    #[case("abcdefgh\n", 5, "abcde")]
    #[case("a\tbcdef\n", 6, "a   bc")]
    fn cells_expand_tabs_and_truncate(
        #[case] text: &str,
        #[case] width: usize,
        #[case] expected: &str,
    ) -> anyhow::Result<()> {
        let config = RenderConfig::new(width, 4, false, ColorMode::Never, false);
        let source = SourceBuffer::new(text);
        let (rows, _) = split_diff(&diff_documents(&source, &source)?, &source, &source)?;
        let renderer = SideBySide::new(&config, Both::new(&source, &source));

        assert_eq!(cell_text(&renderer.cell(&rows[0].left, &source)), expected);

        Ok(())
    }

    #[rstest]
    fn rows_are_aligned_in_two_columns(plain: RenderConfig) -> anyhow::Result<()> {
        let lines = render_texts(&plain, "a\nb\n", "a\nc\nd\n")?;

        assert_eq!(
            lines,
            vec![
                format!("{:<12} | a", "a"),
                format!("{:<12} | c", "b"),
                format!("{:<12} | d", ""),
            ]
        );

        Ok(())
    }

    #[rstest]
    fn line_numbers_follow_each_side(mut plain: RenderConfig) -> anyhow::Result<()> {
        plain.line_numbers = true;

        let lines = render_texts(&plain, "a\nb\n", "b\n")?;

        assert_eq!(
            lines,
            vec![
                format!("{:>4} {:<12} |", 1, "a"),
                format!("{:>4} {:<12} | {:>4} b", 2, "b", 1),
            ]
        );

        Ok(())
    }

    #[rstest]
    fn header_is_aligned_with_the_columns(plain: RenderConfig) -> anyhow::Result<()> {
        let source = SourceBuffer::new("");
        let mut output = Vec::new();

        SideBySide::new(&plain, Both::new(&source, &source))
            .render_header(Both::new("old.txt", "new.txt"), &mut output)?;

        assert_eq!(String::from_utf8(output)?, format!("{:<12} | new.txt\n", "old.txt"));

        Ok(())
    }
}
