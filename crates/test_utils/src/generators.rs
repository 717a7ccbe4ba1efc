//! Property-Based Test Generators
//!
//! Provides proptest strategies for amounts, usernames and sequences of
//! ledger operations.

use core_kernel::Money;
use domain_account::{Account, AccountError};
use proptest::prelude::*;

/// Strategy for positive amounts in cents (0.01 to 100,000.00)
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (1u64..10_000_000u64).prop_map(Money::from_minor)
}

/// Strategy for amounts that may be zero
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (0u64..10_000_000u64).prop_map(Money::from_minor)
}

/// Strategy for usernames accepted by registration
pub fn username_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}

/// One operation against an account
#[derive(Debug, Clone, Copy)]
pub enum LedgerOp {
    Deposit(Money),
    Withdraw(Money),
    Interest,
}

impl LedgerOp {
    /// Applies the operation, discarding the recorded transaction
    pub fn apply(self, account: &mut Account) -> Result<(), AccountError> {
        match self {
            LedgerOp::Deposit(amount) => account.deposit(amount).map(|_| ()),
            LedgerOp::Withdraw(amount) => account.withdraw(amount).map(|_| ()),
            LedgerOp::Interest => account.calculate_interest().map(|_| ()),
        }
    }
}

/// Strategy for a single ledger operation
pub fn ledger_op_strategy() -> impl Strategy<Value = LedgerOp> {
    prop_oneof![
        positive_money_strategy().prop_map(LedgerOp::Deposit),
        positive_money_strategy().prop_map(LedgerOp::Withdraw),
        Just(LedgerOp::Interest),
    ]
}

/// Strategy for up to `max_len` ledger operations
pub fn ledger_ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<LedgerOp>> {
    prop::collection::vec(ledger_op_strategy(), 0..max_len)
}
