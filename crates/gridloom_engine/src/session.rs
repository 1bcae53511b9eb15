//! Engine facade: validation, expansion, scheduling, and statistics.
//!
//! One [`RewriteEngine::apply`] call runs to completion: it validates its
//! input, expands the authored rules into groups, runs each group to its
//! fixed point in order, and returns aggregate statistics. The target grid
//! is the only thing mutated; it is exclusively borrowed for the duration
//! of the call.

use std::collections::HashSet;

use rand::Rng;

use gridloom_foundation::{Error, Pattern, Result, Rule, RuleId};

use crate::expander::RuleExpander;
use crate::schedule::Scheduler;

// =============================================================================
// Apply Stats
// =============================================================================

/// Aggregate statistics from one engine invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Successful rule applications across all groups.
    pub application_count: usize,
    /// Failed rule attempts across all groups.
    pub failed_count: usize,
    /// Groups that applied at least one rule.
    pub groups_application_count: usize,
    /// Groups that applied nothing.
    pub groups_failed_count: usize,
    /// Ids of groups whose success count reached the application limit.
    pub groups_that_hit_limit: Vec<RuleId>,
}

impl ApplyStats {
    /// Returns true if the call changed nothing.
    ///
    /// The engine reports this rather than deciding what to do about it;
    /// callers typically stop iterating once a run is quiescent.
    #[must_use]
    pub fn is_quiescent(&self) -> bool {
        self.application_count == 0
    }
}

// =============================================================================
// Rewrite Engine
// =============================================================================

/// The rule-rewriting engine.
///
/// Configured builder-style and reusable across calls; all per-run state
/// lives on the stack of [`RewriteEngine::apply`], so independent runs
/// never observe each other.
#[derive(Clone, Debug)]
pub struct RewriteEngine {
    /// Step size for candidate match windows.
    stride: usize,
    /// Cap on successful rewrites per group per call.
    application_limit: usize,
    /// Optional filter restricting which rules participate.
    selection: Option<HashSet<RuleId>>,
}

impl Default for RewriteEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RewriteEngine {
    /// Default cap on successful rewrites per group per call.
    pub const DEFAULT_APPLICATION_LIMIT: usize = 10_000;

    /// Creates an engine with stride 1 and the default application limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stride: 1,
            application_limit: Self::DEFAULT_APPLICATION_LIMIT,
            selection: None,
        }
    }

    /// Sets the match window stride.
    #[must_use]
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Sets the per-group application limit (kill switch threshold).
    #[must_use]
    pub fn with_application_limit(mut self, limit: usize) -> Self {
        self.application_limit = limit;
        self
    }

    /// Restricts the run to the given rule ids.
    ///
    /// While a selection is active every selected rule forms its own group
    /// and `part_of_group` chaining is ignored.
    #[must_use]
    pub fn with_selection(mut self, ids: impl IntoIterator<Item = RuleId>) -> Self {
        self.selection = Some(ids.into_iter().collect());
        self
    }

    /// Removes any active selection filter.
    #[must_use]
    pub fn without_selection(mut self) -> Self {
        self.selection = None;
        self
    }

    /// Runs the rules against the target grid, mutating it in place.
    ///
    /// Groups run in authoring order; within a group the scheduler applies
    /// rules with priority restart until quiescence or the application
    /// limit. The same seed on `rng` with the same inputs reproduces the
    /// same grid, cell for cell.
    ///
    /// # Errors
    /// Returns a validation error, raised before any matching begins, if the
    /// stride or limit is zero, the target is malformed, or any rule has
    /// no parts, a part with no patterns, or a malformed pattern.
    pub fn apply<R: Rng>(
        &self,
        rules: &[Rule],
        target: &mut Pattern,
        rng: &mut R,
    ) -> Result<ApplyStats> {
        if self.stride == 0 {
            return Err(Error::zero_stride());
        }
        if self.application_limit == 0 {
            return Err(Error::zero_limit());
        }
        target.validate()?;
        for rule in rules {
            rule.validate()?;
        }

        let groups = RuleExpander::expand(rules, self.selection.as_ref());

        let mut stats = ApplyStats::default();
        for group in &groups {
            let outcome =
                Scheduler::run_group(group, target, self.stride, self.application_limit, rng);
            stats.application_count += outcome.successes;
            stats.failed_count += outcome.failures;
            if outcome.had_effect() {
                stats.groups_application_count += 1;
            } else {
                stats.groups_failed_count += 1;
            }
            if outcome.hit_limit {
                stats.groups_that_hit_limit.push(group.id.clone());
            }
        }
        Ok(stats)
    }
}

// =============================================================================
// Tests
// =============================================================================
