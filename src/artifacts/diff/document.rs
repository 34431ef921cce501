//! Line/token documents and their diffs
//!
//! A small built-in producer of syntax trees and diff trees for plain text:
//!
//! ```text
//! document (Indexed)
//! └── line (Indexed, range includes the terminating newline)
//!     └── word | number | punctuation (Leaf)
//! ```
//!
//! Whitespace is never a token; it is recovered from the source as gap text
//! when the diff is split into rows.
//!
//! ## Diffing
//!
//! Lines are compared with Myers' diff on their text. Unchanged lines become
//! unchanged leaves. Inside each change block, deleted and inserted lines are
//! paired in order and each pair is refined with a second Myers' diff over
//! tokens; pairs without any common token fall back to a whole-line replace.
//! Unpaired lines become whole-line deletes or inserts.

use crate::artifacts::core::Both;
use crate::artifacts::diff::diff_tree::Diff;
use crate::artifacts::diff::myers::{Edit, MyersDiff};
use crate::artifacts::source::range::{Range, Ranged};
use crate::artifacts::source::source_buffer::SourceBuffer;
use crate::artifacts::syntax::category::categories;
use crate::artifacts::syntax::node::SyntaxNode;
use crate::artifacts::syntax::term::Term;
use regex::Regex;

/// Tokens: numbers, words and single punctuation characters
const TOKEN_REGEX: &str = r"(?P<number>\d+(?:\.\d+)?)|(?P<word>\w+)|(?P<punctuation>[^\w\s])";
const TOKEN_CATEGORIES: [&str; 3] = ["number", "word", "punctuation"];

pub const DOCUMENT_CATEGORY: &str = "document";
pub const LINE_CATEGORY: &str = "line";

#[derive(Debug, Clone)]
pub struct DocumentParser {
    token_regex: Regex,
}

impl DocumentParser {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            token_regex: Regex::new(TOKEN_REGEX)?,
        })
    }

    pub fn parse(&self, source: &SourceBuffer) -> Term {
        let lines = source
            .line_ranges(source.full_range())
            .into_iter()
            .map(|line| self.parse_line(source, line))
            .collect();

        Term::indexed(source.full_range(), categories([DOCUMENT_CATEGORY]), lines)
    }

    fn parse_line(&self, source: &SourceBuffer, line: Range) -> Term {
        let text = source.slice(line);
        let mut tokens = Vec::new();
        // regex offsets are bytes, ranges are characters
        let (mut byte_offset, mut char_offset) = (0, line.start);

        for captures in self.token_regex.captures_iter(&text) {
            let Some(token) = captures.get(0) else {
                continue;
            };
            char_offset += text[byte_offset..token.start()].chars().count();
            byte_offset = token.start();

            let length = token.as_str().chars().count();
            let category = TOKEN_CATEGORIES
                .iter()
                .find(|name| captures.name(name).is_some())
                .copied()
                .unwrap_or("word");
            tokens.push(Term::leaf(
                Range::new(char_offset, char_offset + length),
                categories([category]),
            ));
        }

        Term::indexed(line, categories([LINE_CATEGORY]), tokens)
    }
}

/// Parse one document version into a document/line/token term
pub fn parse_document(source: &SourceBuffer) -> anyhow::Result<Term> {
    Ok(DocumentParser::new()?.parse(source))
}

/// Diff two document versions into a diff tree rooted at the document node
pub fn diff_documents(old: &SourceBuffer, new: &SourceBuffer) -> anyhow::Result<Diff> {
    let parser = DocumentParser::new()?;
    let documents = Both::new(parser.parse(old), parser.parse(new));
    let differ = DocumentDiffer {
        sources: Both::new(old, new),
    };

    let lines = differ.diff_children(
        &documents.old.syntax.children(),
        &documents.new.syntax.children(),
        line_key,
        |before, after| differ.refine_line(before, after),
    );

    Ok(Diff::annotated(
        documents.map(|document| document.info),
        SyntaxNode::Indexed(lines),
    ))
}

/// Lines compare equal regardless of a trailing newline
fn line_key(source: &SourceBuffer, line: &Term) -> String {
    let text = source.slice(line.range());
    match text.strip_suffix('\n') {
        Some(content) => content.to_string(),
        None => text,
    }
}

fn token_key(source: &SourceBuffer, token: &Term) -> String {
    source.slice(token.range())
}

struct DocumentDiffer<'s> {
    sources: Both<&'s SourceBuffer>,
}

impl DocumentDiffer<'_> {
    fn diff_children(
        &self,
        old: &[&Term],
        new: &[&Term],
        key: fn(&SourceBuffer, &Term) -> String,
        pair: impl Fn(&Term, &Term) -> Diff,
    ) -> Vec<Diff> {
        let old_keys: Vec<String> = old.iter().map(|t| key(self.sources.old, t)).collect();
        let new_keys: Vec<String> = new.iter().map(|t| key(self.sources.new, t)).collect();

        let mut children = Vec::new();
        let mut deleted = Vec::new();
        let mut inserted = Vec::new();

        for edit in MyersDiff::new(&old_keys, &new_keys).diff() {
            match edit {
                Edit::Equal { a, b } => {
                    flush_change_block(&mut children, &mut deleted, &mut inserted, &pair);
                    children.push(Diff::unchanged_leaf(
                        Both::new(old[a].range(), new[b].range()),
                        old[a].categories().clone(),
                    ));
                }
                Edit::Delete { a } => deleted.push(old[a]),
                Edit::Insert { b } => inserted.push(new[b]),
            }
        }
        flush_change_block(&mut children, &mut deleted, &mut inserted, &pair);

        children
    }

    fn refine_line(&self, before: &Term, after: &Term) -> Diff {
        let (old_tokens, new_tokens) = (before.syntax.children(), after.syntax.children());
        if old_tokens.is_empty() || new_tokens.is_empty() {
            return Diff::replace(before.clone(), after.clone());
        }

        let tokens = self.diff_children(&old_tokens, &new_tokens, token_key, |old, new| {
            Diff::replace(old.clone(), new.clone())
        });
        let shares_tokens = tokens
            .iter()
            .any(|token| matches!(token, Diff::Annotated(..)));
        if !shares_tokens {
            return Diff::replace(before.clone(), after.clone());
        }

        Diff::annotated(
            Both::new(before.info.clone(), after.info.clone()),
            SyntaxNode::Indexed(tokens),
        )
    }
}

fn flush_change_block(
    children: &mut Vec<Diff>,
    deleted: &mut Vec<&Term>,
    inserted: &mut Vec<&Term>,
    pair: &impl Fn(&Term, &Term) -> Diff,
) {
    let paired = deleted.len().min(inserted.len());

    children.extend(
        deleted
            .iter()
            .zip(inserted.iter())
            .map(|(before, after)| pair(*before, *after)),
    );
    children.extend(deleted[paired..].iter().map(|t| Diff::delete((*t).clone())));
    children.extend(inserted[paired..].iter().map(|t| Diff::insert((*t).clone())));

    deleted.clear();
    inserted.clear();
}
