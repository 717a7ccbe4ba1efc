//! Console Interface
//!
//! This crate provides the interactive text front end of the bank.
//!
//! # Architecture
//!
//! - **Shell**: menu loop over any `BufRead`/`Write` pair
//! - **Menu / Input**: parsing of choices, amounts, account numbers and types
//! - **Config**: `BANK_*` environment configuration
//! - **Error Handling**: one error type, with operator-facing messages
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use domain_directory::Directory;
//! use interface_cli::Shell;
//!
//! let script = "1\nada\nsecret\n3\n";
//! let mut shell = Shell::new(Directory::new(), Cursor::new(script), Vec::new());
//! shell.run().unwrap();
//!
//! let (_, output) = shell.into_parts();
//! assert!(String::from_utf8(output).unwrap().contains("Registration successful!"));
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod shell;

pub use config::CliConfig;
pub use error::CliError;
pub use shell::Shell;
