//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! console bank test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data (amounts, credentials, instants)
//! - `builders`: Builder patterns for accounts and directories
//! - `assertions`: Ledger-aware assertion helpers
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
