//! Diff trees and the algorithms that produce them
//!
//! - `patch`: Whole-subtree changes, two-sided and one-sided
//! - `diff_tree`: Diffs (patches or annotated branches) and split diffs
//! - `myers`: Myers' diff over arbitrary comparable items
//! - `document`: Line/token parser and differ producing diff trees from text
//!
//! Diff trees are usually produced by an external parser and matcher; the
//! `document` module is a small built-in producer so plain text files can be
//! compared end to end.

pub mod diff_tree;
pub mod document;
pub mod myers;
pub mod patch;
