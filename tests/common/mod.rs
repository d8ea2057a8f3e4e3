//! Shared test utilities for doxidx integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. All helpers are deterministic — fixtures are literal
//! fragment sources, not generated data.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
