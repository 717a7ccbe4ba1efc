//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the bank domain. These fixtures are
//! consistent and predictable for unit tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{FixedClock, Money};
use fake::faker::internet::en::Username;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard opening balance
    pub fn hundred() -> Money {
        Money::from_minor(10_000)
    }

    pub fn fifty() -> Money {
        Money::from_minor(5_000)
    }

    pub fn seventy() -> Money {
        Money::from_minor(7_000)
    }

    pub fn two_hundred() -> Money {
        Money::from_minor(20_000)
    }

    /// An amount with sub-cent precision for rounding tests
    pub fn fractional() -> Money {
        Money::new(dec!(10.0049)).unwrap()
    }

    pub fn zero() -> Money {
        Money::zero()
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The instant every fixed clock reports
    pub fn opening_day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    }

    /// A clock frozen at [`TemporalFixtures::opening_day`]
    pub fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(Self::opening_day()))
    }
}

/// Fixture for user credentials
pub struct CredentialFixtures;

impl CredentialFixtures {
    pub fn username() -> &'static str {
        "alice"
    }

    pub fn password() -> &'static str {
        "secret"
    }

    pub fn other_username() -> &'static str {
        "bob"
    }

    /// A random plausible username
    pub fn fake_username() -> String {
        Username().fake()
    }

    /// A random holder name
    pub fn fake_holder_name() -> String {
        Name().fake()
    }
}
