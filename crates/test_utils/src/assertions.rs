//! Custom Test Assertions
//!
//! Provides assertion helpers for ledger types that give more meaningful
//! failure messages than standard assertions.

use core_kernel::Money;
use domain_account::{Account, Transaction};
use rust_decimal::Decimal;

/// Asserts that a Money value equals the given decimal
pub fn assert_money_eq(actual: Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that balance == opening balance + signed sum of the ledger
pub fn assert_ledger_consistent(account: &Account) {
    let replayed = account.opening_balance().amount()
        + account
            .transactions()
            .iter()
            .map(Transaction::signed_amount)
            .sum::<Decimal>();

    assert_eq!(
        account.check_balance().amount(),
        replayed,
        "Account {} balance {} does not match its ledger (replayed {})",
        account.number(),
        account.check_balance(),
        replayed
    );
    assert!(account.is_consistent());
}

/// Asserts that transaction ids strictly increase in ledger order
pub fn assert_strictly_increasing(transactions: &[Transaction]) {
    for pair in transactions.windows(2) {
        assert!(
            pair[0].id() < pair[1].id(),
            "Transaction ids out of order: {} then {}",
            pair[0].id(),
            pair[1].id()
        );
    }
}
