//! Core types for Gridloom.
//!
//! This crate provides:
//! - [`Pattern`] - Rectangular cell grids with wildcard cells
//! - [`Part`] - A match template plus its outcome templates
//! - [`Rule`] - Ordered parts with rotation and grouping flags
//! - [`Error`] - Validation error types
//!
//! The `serde` feature derives `Serialize`/`Deserialize` on all authoring
//! types so external collaborators can round-trip them losslessly. Gridloom
//! itself imposes no file format.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod ident;
mod pattern;
mod rule;

pub use error::{Error, ErrorKind, Result};
pub use ident::{PartId, PatternId, RuleId};
pub use pattern::{Pattern, WILDCARD};
pub use rule::{Part, Rule};
