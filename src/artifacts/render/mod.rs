//! Terminal rendering of split rows
//!
//! - `config`: render options and color mode
//! - `side_by_side`: two-column layout of rows with colored fragments
//! - `pager`: `Write` adapter for the minus pager

pub mod config;
pub mod pager;
pub mod side_by_side;
