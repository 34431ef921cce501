//! Command implementations
//!
//! Each command is an `impl Comparison` block writing to the comparison's
//! writer:
//!
//! - `side_by_side`: the rendered two-column view
//! - `rows`: a dump of every row's ranges and changes, for debugging

pub mod rows;
pub mod side_by_side;
