//! Registration requests

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DirectoryError;

/// Credentials submitted when registering
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Registration {
    /// Login name, compared case-sensitively
    #[validate(length(min = 1, max = 64, message = "username must be between 1 and 64 characters"))]
    pub username: String,
    /// Plaintext password, compared for exact equality
    #[validate(length(min = 1, max = 128, message = "password must be between 1 and 128 characters"))]
    pub password: String,
}

impl Registration {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Runs the field validators, flattening failures into one message
    pub fn check(&self) -> Result<(), DirectoryError> {
        self.validate().map_err(|errors| {
            let mut messages: Vec<String> = errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errs)| {
                    errs.iter().map(move |e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("{} is invalid", field),
                    })
                })
                .collect();
            messages.sort();
            DirectoryError::Validation(messages.join("; "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_registration() {
        assert!(Registration::new("ada", "secret").check().is_ok());
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let err = Registration::new("", "secret").check().unwrap_err();
        assert_eq!(
            err,
            DirectoryError::Validation("username must be between 1 and 64 characters".to_string())
        );
    }

    #[test]
    fn test_both_fields_reported() {
        let err = Registration::new("", "").check().unwrap_err();
        match err {
            DirectoryError::Validation(msg) => {
                assert!(msg.contains("username"));
                assert!(msg.contains("password"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_overlong_password_is_rejected() {
        let password = "x".repeat(129);
        assert!(Registration::new("ada", password).check().is_err());
    }
}
