//! Grouping and rotational expansion of authored rules.
//!
//! The expander turns the authored rule list into the ephemeral run plan:
//! an ordered list of [`RuleGroup`]s, each a flat list of concrete rules.
//! Groups are rebuilt on every engine invocation and never persisted.

use std::collections::HashSet;

use gridloom_foundation::{Part, Pattern, Rule, RuleId};
use gridloom_transform::rotate;

// =============================================================================
// Rule Group
// =============================================================================

/// Rules chained for one scheduling pass, sharing a priority-restart loop.
///
/// A group's id is the id of its first authored rule.
#[derive(Clone, Debug)]
pub struct RuleGroup {
    /// Group identity (first authored rule's id).
    pub id: RuleId,
    /// Concrete rules to attempt, in priority order.
    pub rules: Vec<Rule>,
}

// =============================================================================
// Rule Expander
// =============================================================================

/// Builds the run plan from the authored rule list.
pub struct RuleExpander;

impl RuleExpander {
    /// Expands `rules` into ordered rule groups.
    ///
    /// With a `selection`, only selected rules participate and each becomes
    /// its own group; `part_of_group` chaining is ignored while a filter
    /// is active, and an empty selection yields no groups. Without one,
    /// rules chain into groups via their `part_of_group` flag.
    ///
    /// Rules flagged `rotate` are followed in place by their three rotated
    /// clones, so every group contains only concrete, non-rotating rules.
    #[must_use]
    pub fn expand(rules: &[Rule], selection: Option<&HashSet<RuleId>>) -> Vec<RuleGroup> {
        let groups = match selection {
            Some(selected) => rules
                .iter()
                .filter(|rule| selected.contains(&rule.id))
                .map(|rule| RuleGroup {
                    id: rule.id.clone(),
                    rules: vec![rule.clone()],
                })
                .collect(),
            None => Self::chain_groups(rules),
        };

        groups
            .into_iter()
            .map(|group| RuleGroup {
                id: group.id,
                rules: group
                    .rules
                    .iter()
                    .flat_map(Self::rotation_variants)
                    .collect(),
            })
            .collect()
    }

    /// Walks rules in authoring order, chaining `part_of_group` rules onto
    /// the currently open group.
    ///
    /// The open group is an explicit accumulator; it closes when an
    /// ungrouped rule starts the next group. The very first rule always
    /// starts a group, whatever its flag says.
    fn chain_groups(rules: &[Rule]) -> Vec<RuleGroup> {
        let mut groups: Vec<RuleGroup> = Vec::new();
        let mut open: Option<RuleGroup> = None;

        for rule in rules {
            match open.as_mut() {
                Some(group) if rule.part_of_group => {
                    group.rules.push(rule.clone());
                }
                _ => {
                    if let Some(finished) = open.take() {
                        groups.push(finished);
                    }
                    open = Some(RuleGroup {
                        id: rule.id.clone(),
                        rules: vec![rule.clone()],
                    });
                }
            }
        }
        if let Some(finished) = open.take() {
            groups.push(finished);
        }
        groups
    }

    /// Returns the rule followed by its rotated clones when `rotate` is set.
    ///
    /// Clone `k` is the original rotated 90 degrees clockwise `k` times,
    /// applied to every pattern of every part. Clones carry fresh ids and
    /// cleared flags; only their geometry matters to the engine.
    fn rotation_variants(rule: &Rule) -> Vec<Rule> {
        let mut variants = vec![rule.clone()];
        if rule.rotate {
            for step in 1..4 {
                variants.push(Self::rotated_clone(rule, step));
            }
        }
        variants
    }

    fn rotated_clone(rule: &Rule, step: usize) -> Rule {
        Rule {
            id: rule.id.variant(step),
            parts: rule
                .parts
                .iter()
                .map(|part| Part {
                    id: part.id.variant(step),
                    patterns: part
                        .patterns
                        .iter()
                        .map(|pattern| Self::rotated_pattern(pattern, step))
                        .collect(),
                })
                .collect(),
            rotate: false,
            part_of_group: false,
            label: rule.label.clone(),
            comment: rule.comment.clone(),
        }
    }

    fn rotated_pattern(pattern: &Pattern, step: usize) -> Pattern {
        let id = pattern.id().variant(step);
        rotate(pattern, step).with_id(id)
    }
}

// =============================================================================
// Tests
// =============================================================================
