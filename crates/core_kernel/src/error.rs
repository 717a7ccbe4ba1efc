//! Kernel-level errors surfaced to the outer layers

use thiserror::Error;
use crate::money::MoneyError;

/// Errors raised while assembling kernel values from outside input
#[derive(Debug, Error)]
pub enum CoreError {
    /// An amount or rate was rejected by the money rules
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// A configured value lies outside its allowed range
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}
