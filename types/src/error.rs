use std::fmt;

use thiserror::Error;

/// An inline validation message attached to a single login field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Every field error produced by one validation pass.
///
/// Both fields are always checked, so a submission can fail on both at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl fmt::Display for LoginErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = [self.email, self.password]
            .into_iter()
            .flatten()
            .map(|e| e.to_string())
            .collect();

        if messages.is_empty() {
            write!(f, "no validation errors")
        } else {
            write!(f, "{}", messages.join("; "))
        }
    }
}

impl std::error::Error for LoginErrors {}
