//! Structural diff data structures and algorithms
//!
//! - `core`: Shared utilities (paired old/new values)
//! - `source`: Source buffers and character ranges
//! - `syntax`: Categories, syntax nodes and terms
//! - `diff`: Patches, diff trees and a line/token differ (Myers' diff)
//! - `split`: Projection of diff trees onto aligned rows
//! - `render`: Terminal side-by-side rendering of rows

pub mod core;
pub mod diff;
pub mod render;
pub mod source;
pub mod split;
pub mod syntax;
