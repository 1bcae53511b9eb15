//! Rules and their parts.
//!
//! A [`Part`] pairs one match template with zero or more outcome templates.
//! A [`Rule`] is an ordered sequence of parts plus the flags that drive
//! rotation expansion and group chaining. Rules are authored and mutated by
//! the editing layer between engine runs; the engine only reads them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ident::{PartId, RuleId};
use crate::pattern::Pattern;

/// One match template plus its outcome templates.
///
/// `patterns[0]` is the match template and is never written to the target.
/// `patterns[1..]` are outcome templates; the applier picks one at random
/// when the whole rule matches. A part with only the match template is a
/// pure guard: it must match, but never writes.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Part {
    /// Authoring identity.
    pub id: PartId,
    /// Match template first, then outcome templates.
    pub patterns: Vec<Pattern>,
}

impl Part {
    /// Creates a part from its patterns.
    #[must_use]
    pub fn new(id: impl Into<PartId>, patterns: Vec<Pattern>) -> Self {
        Self {
            id: id.into(),
            patterns,
        }
    }

    /// Returns the match template, if the part has one.
    #[must_use]
    pub fn template(&self) -> Option<&Pattern> {
        self.patterns.first()
    }

    /// Returns the outcome templates (may be empty).
    #[must_use]
    pub fn outcomes(&self) -> &[Pattern] {
        self.patterns.get(1..).unwrap_or(&[])
    }

    /// Returns true if this part only guards and never writes.
    #[must_use]
    pub fn is_guard(&self) -> bool {
        self.patterns.len() <= 1
    }

    /// Checks that the part has a template and every pattern is well-formed.
    ///
    /// # Errors
    /// Returns an error if the part has no patterns or any pattern fails
    /// [`Pattern::validate`].
    pub fn validate(&self) -> Result<()> {
        if self.patterns.is_empty() {
            return Err(Error::empty_part(self.id.clone()));
        }
        for pattern in &self.patterns {
            pattern.validate()?;
        }
        Ok(())
    }
}

/// An authored rewrite rule: ordered parts plus scheduling flags.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    /// Authoring identity.
    pub id: RuleId,
    /// Parts, all of which must match for the rule to apply.
    pub parts: Vec<Part>,
    /// Expand into 4 rotational variants at run time.
    pub rotate: bool,
    /// Chain with the previous rule into one application group.
    pub part_of_group: bool,
    /// Authoring label, ignored by the engine.
    pub label: String,
    /// Authoring comment, ignored by the engine.
    pub comment: String,
}

impl Rule {
    /// Creates a rule with both flags cleared and empty metadata.
    #[must_use]
    pub fn new(id: impl Into<RuleId>, parts: Vec<Part>) -> Self {
        Self {
            id: id.into(),
            parts,
            rotate: false,
            part_of_group: false,
            label: String::new(),
            comment: String::new(),
        }
    }

    /// Sets the rotation-expansion flag.
    #[must_use]
    pub fn with_rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    /// Sets the group-chaining flag.
    #[must_use]
    pub fn with_part_of_group(mut self, part_of_group: bool) -> Self {
        self.part_of_group = part_of_group;
        self
    }

    /// Sets the authoring label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the authoring comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Checks that the rule has parts and every part is well-formed.
    ///
    /// # Errors
    /// Returns an error if the rule has no parts or any part fails
    /// [`Part::validate`].
    pub fn validate(&self) -> Result<()> {
        if self.parts.is_empty() {
            return Err(Error::empty_rule(self.id.clone()));
        }
        for part in &self.parts {
            part.validate()?;
        }
        Ok(())
    }
}
