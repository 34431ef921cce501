//! Side-by-side projection of structural diffs
//!
//! A structural diff is a tree: unchanged or partially changed branches that
//! carry per-side ranges and categories, and whole-subtree patches
//! (insert/delete/replace). This crate projects such a tree onto aligned,
//! line-based rows ready for two-column rendering.
//!
//! - `artifacts`: data structures and algorithms (sources, syntax trees,
//!   diffs, the row splitter, terminal rendering)
//! - `areas`: the comparison state shared by commands
//! - `commands`: the `sidediff` command built on top of them

/// Macro for debug logging that is enabled with the debug_split feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Splitting node {:?}", ranges);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_split")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;
