//! Integration tests for accounts and their ledgers

use std::sync::Arc;

use core_kernel::{IdSequence, Money, Rate};
use domain_account::{AccountError, AccountType, InterestPolicy, Transaction, TransactionKind};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::{
    assert_ledger_consistent, assert_money_eq, assert_strictly_increasing, ledger_ops_strategy,
    money_strategy, positive_money_strategy, MoneyFixtures, TemporalFixtures, TestAccountBuilder,
};

mod scenario {
    use super::*;

    #[test]
    fn test_deposit_withdraw_interest_walkthrough() {
        let mut account = TestAccountBuilder::new().build();

        account.deposit(MoneyFixtures::fifty()).unwrap();
        assert_money_eq(account.check_balance(), dec!(150));

        account.withdraw(Money::from_minor(3_000)).unwrap();
        assert_money_eq(account.check_balance(), dec!(120));

        let credited = account.calculate_interest().unwrap().unwrap().amount();
        assert_money_eq(credited, dec!(4.80));
        assert_money_eq(account.check_balance(), dec!(124.80));
        assert_eq!(account.check_balance().to_string(), "124.80");

        let statement: Vec<(TransactionKind, Decimal)> = account
            .generate_statement()
            .map(|line| (line.kind, line.amount.amount()))
            .collect();
        assert_eq!(
            statement,
            vec![
                (TransactionKind::Deposit, dec!(50.00)),
                (TransactionKind::Withdrawal, dec!(30.00)),
                (TransactionKind::InterestCredit, dec!(4.80)),
            ]
        );
        assert_ledger_consistent(&account);
    }

    #[test]
    fn test_statement_lines_render_in_order() {
        let mut account = TestAccountBuilder::new().build();
        account.deposit(MoneyFixtures::fifty()).unwrap();
        account.withdraw(Money::from_minor(3_000)).unwrap();

        let lines: Vec<String> = account.generate_statement().map(|line| line.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "2024-03-01 10:00:00 - Deposit: 50.00".to_string(),
                "2024-03-01 10:00:00 - Withdrawal: 30.00".to_string(),
            ]
        );
    }

    #[test]
    fn test_opening_balance_is_not_a_transaction() {
        let account = TestAccountBuilder::new()
            .with_holder_name("Alice Smith")
            .with_initial_deposit(MoneyFixtures::two_hundred())
            .build();

        assert_eq!(account.holder_name(), "Alice Smith");
        assert_eq!(account.generate_statement().holder_name(), "Alice Smith");

        assert!(account.transactions().is_empty());
        assert_eq!(account.opening_balance(), MoneyFixtures::two_hundred());
        assert_eq!(account.opened_at(), TemporalFixtures::opening_day());
        assert_ledger_consistent(&account);
    }
}

mod withdrawals {
    use super::*;

    #[test]
    fn test_overdraw_leaves_account_untouched() {
        let mut account = TestAccountBuilder::new().build();
        let before = account.clone();

        let err = account.withdraw(MoneyFixtures::two_hundred()).unwrap_err();

        assert!(matches!(
            err,
            AccountError::InsufficientFunds { available, requested, .. }
                if available == MoneyFixtures::hundred() && requested == MoneyFixtures::two_hundred()
        ));
        assert_eq!(account.check_balance(), before.check_balance());
        assert_eq!(account.transactions(), before.transactions());
    }

    #[test]
    fn test_withdrawing_entire_balance_reaches_zero() {
        let mut account = TestAccountBuilder::new().build();
        account.withdraw(MoneyFixtures::hundred()).unwrap();

        assert!(account.check_balance().is_zero());
        assert!(matches!(
            account.withdraw(Money::from_minor(1)),
            Err(AccountError::InsufficientFunds { .. })
        ));
        assert_eq!(account.transactions().len(), 1);
    }

    #[test]
    fn test_zero_amounts_are_rejected() {
        let mut account = TestAccountBuilder::new().build();

        assert!(matches!(account.deposit(Money::zero()), Err(AccountError::InvalidAmount(_))));
        assert!(matches!(account.withdraw(Money::zero()), Err(AccountError::InvalidAmount(_))));
        assert!(account.transactions().is_empty());
    }
}

mod interest {
    use super::*;

    #[test]
    fn test_checking_accounts_earn_nothing() {
        let mut account = TestAccountBuilder::new().checking().build();

        assert!(account.calculate_interest().unwrap().is_none());
        assert_eq!(account.check_balance(), MoneyFixtures::hundred());
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_zero_balance_still_records_a_credit() {
        let mut account = TestAccountBuilder::new()
            .with_initial_deposit(Money::zero())
            .build();

        let tx = *account.calculate_interest().unwrap().unwrap();
        assert_eq!(tx.kind(), TransactionKind::InterestCredit);
        assert!(tx.amount().is_zero());
        assert_eq!(account.transactions().len(), 1);
    }

    #[test]
    fn test_custom_policy_rate() {
        let policy = InterestPolicy::new(Rate::from_basis_points(150));
        let mut account = TestAccountBuilder::new()
            .with_interest_policy(policy)
            .build();

        let credited = account.calculate_interest().unwrap().unwrap().amount();
        assert_money_eq(credited, dec!(1.50));
    }

    #[test]
    fn test_repeated_interest_compounds_without_rounding() {
        let mut account = TestAccountBuilder::new().build();

        for _ in 0..4 {
            let before = account.check_balance().amount();
            let credited = account.calculate_interest().unwrap().unwrap().amount();
            assert_money_eq(credited, before * dec!(0.04));
            assert_money_eq(account.check_balance(), before * dec!(1.04));
        }

        assert_money_eq(account.check_balance(), dec!(116.98585600));
        assert_eq!(account.check_balance().to_string(), "116.99");
        assert_ledger_consistent(&account);
    }

    #[test]
    fn test_fractional_balance_earns_exact_interest() {
        let mut account = TestAccountBuilder::new()
            .with_initial_deposit(MoneyFixtures::fractional())
            .build();

        let credited = account.calculate_interest().unwrap().unwrap().amount();
        assert_money_eq(credited, dec!(0.400196));
        assert_eq!(credited.to_string(), "0.40");
    }

    #[test]
    fn test_sub_cent_interest_is_kept_exactly() {
        let mut account = TestAccountBuilder::new()
            .with_initial_deposit(Money::from_minor(1))
            .build();

        let credited = account.calculate_interest().unwrap().unwrap().amount();
        assert_money_eq(credited, dec!(0.0004));
        assert_ledger_consistent(&account);
    }
}

mod identifiers {
    use super::*;

    #[test]
    fn test_accounts_sharing_a_sequence_never_reuse_ids() {
        let ids = Arc::new(IdSequence::new());
        let mut first = TestAccountBuilder::new().with_transaction_ids(ids.clone()).build();
        let mut second = TestAccountBuilder::new()
            .with_number(2)
            .with_transaction_ids(ids.clone())
            .build();

        let a = first.deposit(MoneyFixtures::fifty()).unwrap().id();
        let b = second.deposit(MoneyFixtures::fifty()).unwrap().id();
        let c = first.withdraw(MoneyFixtures::fifty()).unwrap().id();

        assert_eq!((a.value(), b.value(), c.value()), (1, 2, 3));
        assert_strictly_increasing(first.transactions());
    }

    #[test]
    fn test_failed_operations_do_not_consume_ids() {
        let mut account = TestAccountBuilder::new().build();

        account.withdraw(MoneyFixtures::two_hundred()).unwrap_err();
        account.deposit(Money::zero()).unwrap_err();
        let id = account.deposit(MoneyFixtures::fifty()).unwrap().id();

        assert_eq!(id.value(), 1);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_transaction_json_roundtrip() {
        let mut account = TestAccountBuilder::new().build();
        let tx = *account.deposit(MoneyFixtures::seventy()).unwrap();

        let json = serde_json::to_string(&tx).unwrap();
        let restored: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, tx);
    }

    #[test]
    fn test_account_serializes_its_ledger() {
        let mut account = TestAccountBuilder::new().checking().build();
        account.deposit(MoneyFixtures::fifty()).unwrap();

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["account_type"], "checking");
        assert_eq!(value["holder_name"], "Alice");
        assert_eq!(value["transactions"].as_array().map(Vec::len), Some(1));
        assert!(value.get("context").is_none());
    }

    #[test]
    fn test_account_type_parsing() {
        assert_eq!("Savings".parse::<AccountType>().unwrap(), AccountType::Savings);
        assert_eq!(AccountType::Checking.to_string(), "checking");
        assert!(matches!(
            "loan".parse::<AccountType>(),
            Err(AccountError::UnknownAccountType(name)) if name == "loan"
        ));
    }
}

proptest! {
    #[test]
    fn prop_balance_matches_replayed_ledger(
        initial in positive_money_strategy(),
        ops in ledger_ops_strategy(40),
    ) {
        let mut account = TestAccountBuilder::new().with_initial_deposit(initial).build();

        for op in ops {
            let before = account.check_balance();
            let len = account.transactions().len();
            match op.apply(&mut account) {
                Ok(()) => prop_assert_eq!(account.transactions().len(), len + 1),
                Err(AccountError::InsufficientFunds { .. }) => {
                    prop_assert_eq!(account.check_balance(), before);
                    prop_assert_eq!(account.transactions().len(), len);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        prop_assert!(account.is_consistent());
        assert_strictly_increasing(account.transactions());
    }

    #[test]
    fn prop_interest_is_four_percent_of_balance(balance in positive_money_strategy()) {
        let mut account = TestAccountBuilder::new().with_initial_deposit(balance).build();

        let credited = account.calculate_interest().unwrap().unwrap().amount();
        prop_assert_eq!(credited.amount(), balance.amount() * dec!(0.04));
        prop_assert_eq!(account.check_balance().amount(), balance.amount() * dec!(1.04));
    }

    #[test]
    fn prop_repeated_interest_is_always_four_percent(
        opening in money_strategy(),
        calls in 1usize..10,
    ) {
        let mut account = TestAccountBuilder::new().with_initial_deposit(opening).build();

        for _ in 0..calls {
            let before = account.check_balance().amount();
            let credited = account.calculate_interest().unwrap().unwrap().amount();
            prop_assert_eq!(credited.amount(), before * dec!(0.04));
            prop_assert_eq!(account.check_balance().amount(), before * dec!(1.04));
        }

        prop_assert_eq!(account.transactions().len(), calls);
        prop_assert!(account.is_consistent());
    }

    #[test]
    fn prop_statement_is_repeatable(ops in ledger_ops_strategy(20)) {
        let mut account = TestAccountBuilder::new().build();
        for op in ops {
            let _ = op.apply(&mut account);
        }

        let first: Vec<_> = account.generate_statement().collect();
        let second: Vec<_> = account.generate_statement().collect();
        prop_assert_eq!(first.len(), account.transactions().len());
        prop_assert_eq!(first, second);
    }
}
