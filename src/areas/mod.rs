//! State shared by the commands
//!
//! - `comparison`: the two document versions being compared and the output
//!   they are written to

pub mod comparison;
