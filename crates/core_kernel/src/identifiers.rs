//! Strongly-typed identifiers for domain entities
//!
//! Account numbers and transaction ids are small integers handed out by an
//! [`IdSequence`]. Wrapping them in newtypes prevents passing a transaction
//! id where an account number is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

macro_rules! define_sequential_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates from a raw value
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the underlying value
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_sequential_id!(AccountNumber);
define_sequential_id!(TransactionId);

/// A counter that hands out 1, 2, 3, ... in creation order
///
/// Advancing only needs `&self`, so one sequence can be shared through an
/// `Arc` by every account that draws from it.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// Creates a sequence whose first value is 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a sequence whose first value is `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Returns the next value and advances the counter
    pub fn next_value(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Returns the next value as a typed identifier
    pub fn next_id<T: From<u64>>(&self) -> T {
        T::from(self.next_value())
    }

    /// Returns the value the next call will hand out, without advancing
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies one login session in the logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SES-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_sequence_starts_at_one() {
        let seq = IdSequence::new();
        assert_eq!(seq.next_value(), 1);
        assert_eq!(seq.next_value(), 2);
        assert_eq!(seq.peek(), 3);
    }

    #[test]
    fn test_typed_ids() {
        let seq = IdSequence::new();
        let a: AccountNumber = seq.next_id();
        let b: AccountNumber = seq.next_id();
        assert_eq!(a, AccountNumber::new(1));
        assert!(b > a);
        assert_eq!(b.to_string(), "2");
    }

    #[test]
    fn test_shared_sequence_is_unique_across_threads() {
        let seq = Arc::new(IdSequence::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let seq = Arc::clone(&seq);
                std::thread::spawn(move || (0..250).map(|_| seq.next_value()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (1..=1000).collect::<Vec<_>>());
    }

    #[test]
    fn test_id_parsing() {
        let parsed: TransactionId = " 42 ".parse().unwrap();
        assert_eq!(parsed.value(), 42);
        assert!("x".parse::<AccountNumber>().is_err());
    }

    #[test]
    fn test_session_id_display() {
        let id = SessionId::new();
        assert!(id.to_string().starts_with("SES-"));
    }
}
