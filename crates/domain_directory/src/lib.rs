//! Directory Domain
//!
//! This crate manages users: registration, login, and the accounts each
//! user owns.
//!
//! # Identity Model
//!
//! - Usernames are unique; a second registration with a taken username is
//!   refused.
//! - Passwords are plaintext and compared for exact, case-sensitive
//!   equality. There is no hashing and no lockout.
//! - Accounts belong to exactly one user and are reached through that user.
//!
//! The directory owns the account-number and transaction-id sequences, so
//! ids are unique across every user of the same directory.
//!
//! # Examples
//!
//! ```rust
//! use core_kernel::Money;
//! use domain_account::AccountType;
//! use domain_directory::{Directory, DirectoryError};
//! use rust_decimal_macros::dec;
//!
//! let mut directory = Directory::new();
//! directory.register("ada", "secret").unwrap();
//!
//! let number = directory
//!     .open_account("ada", "Ada Lovelace", AccountType::Savings, Money::new(dec!(100)).unwrap())
//!     .unwrap()
//!     .number();
//!
//! directory
//!     .account_mut("ada", number)
//!     .unwrap()
//!     .deposit(Money::new(dec!(50)).unwrap())
//!     .unwrap();
//!
//! assert_eq!(directory.login("ada", "wrong").unwrap_err(), DirectoryError::InvalidCredentials);
//! ```

pub mod directory;
pub mod user;
pub mod registration;
pub mod error;

pub use directory::Directory;
pub use user::User;
pub use registration::Registration;
pub use error::DirectoryError;
