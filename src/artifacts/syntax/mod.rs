//! Parsed syntax trees of one document version
//!
//! - `category`: Syntactic category tags used for presentation
//! - `node`: The child-container shapes a node can have
//! - `term`: Annotated subtrees (range + categories + node)

pub mod category;
pub mod node;
pub mod term;
