//! Account Domain - Per-Account Ledger
//!
//! This crate implements the bank account ledger: every account keeps an
//! append-only list of transactions next to its running balance.
//!
//! # Ledger Invariant
//!
//! At every point:
//!
//! ```text
//! balance = opening balance + Σ deposits + Σ interest credits − Σ withdrawals
//! ```
//!
//! A refused withdrawal leaves both the balance and the ledger untouched.
//!
//! # Account Types
//!
//! - **Savings**: earns flat monthly interest (4% by default)
//! - **Checking**: no interest
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use core_kernel::{AccountNumber, IdSequence, Money};
//! use domain_account::{Account, AccountType, LedgerContext};
//! use rust_decimal_macros::dec;
//!
//! let context = LedgerContext::new(Arc::new(IdSequence::new()));
//! let mut account = Account::open(
//!     AccountNumber::new(1),
//!     "Ada Lovelace",
//!     AccountType::Savings,
//!     Money::new(dec!(100.00)).unwrap(),
//!     context,
//! );
//!
//! account.deposit(Money::new(dec!(50.00)).unwrap()).unwrap();
//! account.withdraw(Money::new(dec!(30.00)).unwrap()).unwrap();
//! account.calculate_interest().unwrap();
//!
//! assert_eq!(account.check_balance().amount(), dec!(124.80));
//! assert_eq!(account.generate_statement().count(), 3);
//! ```

pub mod account;
pub mod transaction;
pub mod statement;
pub mod interest;
pub mod error;

pub use account::{Account, AccountType, LedgerContext};
pub use transaction::{Transaction, TransactionKind};
pub use statement::{Statement, StatementLine};
pub use interest::InterestPolicy;
pub use error::AccountError;
