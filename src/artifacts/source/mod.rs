//! Source text and character ranges
//!
//! - `range`: Half-open character ranges and the `Ranged` trait
//! - `source_buffer`: Read-only, indexed source text with line splitting

pub mod range;
pub mod source_buffer;
