//! Rule matching, expansion, scheduling, and application for Gridloom.
//!
//! This crate provides:
//! - [`Matcher`] - Positional sub-pattern search with wildcard semantics
//! - [`RuleExpander`] - Grouping and rotational expansion of authored rules
//! - [`Applier`] - Atomic multi-part rule application
//! - [`Scheduler`] - Per-group priority-restart loop with an iteration cap
//! - [`RewriteEngine`] - The session facade tying the layers together
//!
//! The engine mutates the target grid in place and reports aggregate
//! [`ApplyStats`]. All randomness (outcome selection) flows through an
//! injected [`rand::Rng`], so seeded runs reproduce exactly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod applier;
mod expander;
mod matcher;
mod schedule;
mod session;

pub use applier::Applier;
pub use expander::{RuleExpander, RuleGroup};
pub use matcher::{Matcher, Position};
pub use schedule::{GroupOutcome, Scheduler};
pub use session::{ApplyStats, RewriteEngine};
