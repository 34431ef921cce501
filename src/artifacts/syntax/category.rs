//! Syntactic categories
//!
//! Categories only matter for presentation: a markup layer turns each one into
//! a class name such as `category-word`.

use std::collections::BTreeSet;
use std::fmt;

const CLASS_PREFIX: &str = "category-";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Presentation class for this category
    pub fn class_name(&self) -> String {
        format!("{CLASS_PREFIX}{}", self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

pub type CategorySet = BTreeSet<Category>;

/// Build a category set from plain names
pub fn categories<'n>(names: impl IntoIterator<Item = &'n str>) -> CategorySet {
    names.into_iter().map(Category::from).collect()
}
