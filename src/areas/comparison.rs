use crate::artifacts::core::Both;
use crate::artifacts::diff::document::diff_documents;
use crate::artifacts::source::source_buffer::SourceBuffer;
use crate::artifacts::split::diff_split::{SplitRows, split_diff};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Two versions of a document and the writer their comparison goes to
pub struct Comparison {
    titles: Both<String>,
    sources: Both<SourceBuffer>,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Comparison {
    pub fn new(
        titles: Both<String>,
        sources: Both<SourceBuffer>,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        Comparison {
            titles,
            sources,
            writer: RefCell::new(writer),
        }
    }

    /// Read both versions from disk; file paths become the column titles
    pub fn open(old: &Path, new: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let sources = Both::new(read_source(old)?, read_source(new)?);
        let titles = Both::new(old.display().to_string(), new.display().to_string());

        Ok(Self::new(titles, sources, writer))
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn titles(&self) -> Both<&str> {
        self.titles.as_ref().map(String::as_str)
    }

    pub fn sources(&self) -> Both<&SourceBuffer> {
        self.sources.as_ref()
    }

    /// Diff both versions line by line and split the result into rows
    pub fn split(&self) -> anyhow::Result<SplitRows> {
        let Both { old, new } = self.sources();
        let diff = diff_documents(old, new)?;

        split_diff(&diff, old, new)
    }
}

fn read_source(path: &Path) -> anyhow::Result<SourceBuffer> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;

    Ok(SourceBuffer::from(text))
}
