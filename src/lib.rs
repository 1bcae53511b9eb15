//! Gridloom - Grid-rewrite rule engine
//!
//! This crate re-exports all layers of the Gridloom system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: gridloom_engine     — Matching, expansion, scheduling, application
//! Layer 1: gridloom_transform  — Pure geometric pattern operations
//! Layer 0: gridloom_foundation — Core types (Pattern, Part, Rule, Error)
//! ```

pub use gridloom_engine as engine;
pub use gridloom_foundation as foundation;
pub use gridloom_transform as transform;
