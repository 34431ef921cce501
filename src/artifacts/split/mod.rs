//! Projection of diff trees onto aligned, line-based rows
//!
//! - `line`: Lines, rows and gap/kept fragments
//! - `zip`: Zipping sequences of unequal length with defaults
//! - `adjoin`: Merging fragments that continue an open line
//! - `term_split`: Splitting one term into per-line pieces
//! - `diff_split`: Splitting a diff tree into rows (the recursive core)
//! - `validate`: Checking range invariants before splitting
//!
//! The entry points are [`diff_split::split_diff`] and
//! [`term_split::split_term`]; both validate their input first.

pub mod adjoin;
pub mod diff_split;
pub mod line;
pub mod term_split;
pub mod validate;
pub mod zip;
