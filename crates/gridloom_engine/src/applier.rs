//! Atomic multi-part rule application.
//!
//! A rule applies only when every one of its parts finds a match; the
//! target is written after all matches are collected, so a partial match
//! never leaks writes. Outcome selection is the engine's only source of
//! randomness and goes through the injected generator.

use rand::Rng;

use gridloom_foundation::{Part, Pattern, Rule};

use crate::matcher::{Matcher, Position};

/// Applies whole rules to the target grid.
pub struct Applier;

impl Applier {
    /// Attempts one atomic application of `rule` against `target`.
    ///
    /// Every part's match template is searched first; if any part has no
    /// match the target is left untouched. On total success, each part
    /// with outcome templates picks one uniformly at random and writes its
    /// non-wildcard cells at the part's matched offset. Overlapping part
    /// windows write in part order, last write wins. Guard parts (a lone
    /// match template) never write.
    ///
    /// Returns `true` only when at least one write changed a cell; an
    /// outcome identical to the matched region, or all wildcards, is not
    /// progress and must not reset the scheduler's priority scan.
    pub fn apply_rule<R: Rng>(
        rule: &Rule,
        target: &mut Pattern,
        stride: usize,
        rng: &mut R,
    ) -> bool {
        let mut placements: Vec<(&Part, Position)> = Vec::with_capacity(rule.parts.len());
        for part in &rule.parts {
            // A part without a template cannot match anything.
            let Some(template) = part.template() else {
                return false;
            };
            match Matcher::find(template, target, stride) {
                Some(position) => placements.push((part, position)),
                None => return false,
            }
        }

        let mut changed = false;
        for (part, position) in placements {
            let outcomes = part.outcomes();
            if outcomes.is_empty() {
                continue;
            }
            let chosen = &outcomes[rng.gen_range(0..outcomes.len())];
            changed |= Self::write_outcome(chosen, target, position);
        }
        changed
    }

    /// Writes an outcome pattern at `position`, masking wildcard cells.
    ///
    /// Returns whether any cell value actually changed. Cells falling
    /// outside the target (an outcome larger than its match template) are
    /// skipped rather than wrapped.
    fn write_outcome(outcome: &Pattern, target: &mut Pattern, position: Position) -> bool {
        let mut changed = false;
        for (oy, row) in outcome.rows().enumerate() {
            for (ox, &value) in row.iter().enumerate() {
                if value < 0 {
                    continue;
                }
                let (gx, gy) = (position.x + ox, position.y + oy);
                if let Some(current) = target.get(gx, gy) {
                    if current != value {
                        target.set(gx, gy, value);
                        changed = true;
                    }
                }
            }
        }
        changed
    }
}

// =============================================================================
// Tests
// =============================================================================
