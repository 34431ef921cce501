//! Core utilities and shared types
//!
//! Almost every value in a two-sided diff comes in pairs: one for the old
//! version and one for the new version. `Both` keeps such pairs together.

use derive_new::new;

/// Which version of the document a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Old,
    New,
}

/// A pair of values, one per side of a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, new)]
pub struct Both<T> {
    pub old: T,
    pub new: T,
}

impl<T> Both<T> {
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Old => &self.old,
            Side::New => &self.new,
        }
    }

    pub fn as_ref(&self) -> Both<&T> {
        Both {
            old: &self.old,
            new: &self.new,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Both<U> {
        Both {
            old: f(self.old),
            new: f(self.new),
        }
    }

    pub fn zip<U>(self, other: Both<U>) -> Both<(T, U)> {
        Both {
            old: (self.old, other.old),
            new: (self.new, other.new),
        }
    }
}
