//! Per-group fixed-point scheduling with priority restart.
//!
//! Within a group, rules are attempted in priority (authoring) order. Any
//! success restarts the scan from the group's first rule, so the earliest
//! rule is always retried first after the grid changes. The application
//! limit caps successes per group and is the only guard against rules that
//! keep succeeding without reaching a fixed point.

use rand::Rng;

use gridloom_foundation::Pattern;

use crate::applier::Applier;
use crate::expander::RuleGroup;

// =============================================================================
// Group Outcome
// =============================================================================

/// What happened while running one group to its fixed point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupOutcome {
    /// Successful rule applications.
    pub successes: usize,
    /// Failed rule attempts (ordinary control flow, not errors).
    pub failures: usize,
    /// Whether the group stopped because it reached the application limit.
    pub hit_limit: bool,
}

impl GroupOutcome {
    /// Returns true if the group applied at least one rule.
    #[must_use]
    pub fn had_effect(self) -> bool {
        self.successes > 0
    }
}

// =============================================================================
// Scheduler
// =============================================================================

/// Runs rule groups to a fixed point.
pub struct Scheduler;

impl Scheduler {
    /// Runs one group against the target until quiescence or the limit.
    ///
    /// The loop terminates either because no rule in the group can find all
    /// of its part matches (the scan walks off the end with no success
    /// since the last restart), or because `limit` successes were reached;
    /// the latter is reported via [`GroupOutcome::hit_limit`].
    pub fn run_group<R: Rng>(
        group: &RuleGroup,
        target: &mut Pattern,
        stride: usize,
        limit: usize,
        rng: &mut R,
    ) -> GroupOutcome {
        let mut outcome = GroupOutcome::default();
        let mut rule_index = 0;

        while outcome.successes < limit && rule_index < group.rules.len() {
            if Applier::apply_rule(&group.rules[rule_index], target, stride, rng) {
                outcome.successes += 1;
                // Restart from the group's highest-priority rule.
                rule_index = 0;
            } else {
                outcome.failures += 1;
                rule_index += 1;
            }
        }

        outcome.hit_limit = outcome.successes == limit;
        outcome
    }
}

// =============================================================================
// Tests
// =============================================================================
