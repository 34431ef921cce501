use crate::areas::comparison::Comparison;
use crate::artifacts::diff::diff_tree::SplitDiff;
use crate::artifacts::source::range::Ranged;
use crate::artifacts::split::line::Line;

impl Comparison {
    pub fn dump_rows(&self) -> anyhow::Result<()> {
        let (rows, ranges) = self.split()?;

        for (index, row) in rows.iter().enumerate() {
            writeln!(
                self.writer(),
                "{:>4} {} | {}",
                index + 1,
                describe_line(&row.left),
                describe_line(&row.right)
            )?;
        }
        writeln!(
            self.writer(),
            "{} rows covering old {} and new {}",
            rows.len(),
            ranges.old,
            ranges.new
        )?;

        Ok(())
    }
}

/// `-` for an empty slot, otherwise the line's range followed by each change
/// on it as `classes@range`
fn describe_line(line: &Line<SplitDiff>) -> String {
    let Some(range) = line.range() else {
        return "-".to_string();
    };

    let mut changes = Vec::new();
    for fragment in line.fragments() {
        collect_changes(fragment, &mut changes);
    }

    std::iter::once(range.to_string())
        .chain(changes)
        .collect::<Vec<_>>()
        .join(" ")
}

fn collect_changes(fragment: &SplitDiff, changes: &mut Vec<String>) {
    match fragment {
        SplitDiff::Patch(_) => {
            changes.push(format!("{}@{}", fragment.classes().join("."), fragment.range()))
        }
        SplitDiff::Annotated(_, syntax) => {
            for child in syntax.children() {
                collect_changes(child, changes);
            }
        }
    }
}
