//! Identity newtypes for patterns, parts, and rules.
//!
//! Ids are authored by the editing layer and carried through the engine
//! unchanged. The engine only mints fresh ids for the ephemeral rotated
//! clones it creates during rule expansion, via [`RuleId::variant`] and
//! friends; those ids are best-effort unique, never persisted.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a [`Pattern`](crate::Pattern).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PatternId(String);

/// Identifier of a [`Part`](crate::Part).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PartId(String);

/// Identifier of a [`Rule`](crate::Rule).
///
/// Also identifies a rule group: a group's id is the id of its first
/// authored rule.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleId(String);

impl PatternId {
    /// Creates a pattern id from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives a fresh id for the `step`-th rotated clone.
    #[must_use]
    pub fn variant(&self, step: usize) -> Self {
        Self(format!("{}::r{step}", self.0))
    }
}

impl PartId {
    /// Creates a part id from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives a fresh id for the `step`-th rotated clone.
    #[must_use]
    pub fn variant(&self, step: usize) -> Self {
        Self(format!("{}::r{step}", self.0))
    }
}

impl RuleId {
    /// Creates a rule id from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives a fresh id for the `step`-th rotated clone.
    #[must_use]
    pub fn variant(&self, step: usize) -> Self {
        Self(format!("{}::r{step}", self.0))
    }
}

impl From<&str> for PatternId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PatternId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PartId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PartId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Debug for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternId({})", self.0)
    }
}

impl fmt::Debug for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartId({})", self.0)
    }
}

impl fmt::Debug for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleId({})", self.0)
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
