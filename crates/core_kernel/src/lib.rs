//! Core Kernel - Foundational types for the console bank
//!
//! This crate provides the building blocks shared by every other crate:
//! - Money with a non-negative decimal amount
//! - Numeric identifiers and the sequences that hand them out
//! - Clocks, so ledger timestamps can be pinned in tests

pub mod money;
pub mod identifiers;
pub mod temporal;
pub mod error;

pub use money::{Money, MoneyError, Rate};
pub use identifiers::{AccountNumber, TransactionId, IdSequence, SessionId};
pub use temporal::{Clock, SystemClock, FixedClock};
pub use error::CoreError;
