use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

use crate::{FieldError, LoginErrors};

pub const MIN_PASSWORD_LEN: usize = 8;

// Leading dots and runs of dots are rejected separately; the regex crate has
// no lookahead. Unicode is off so case folding stays within ASCII.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@(?:[a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern compiles")
});

/// Raw values from the admin login form.
#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Check both fields and collect whatever fails.
    pub fn errors(&self) -> LoginErrors {
        LoginErrors {
            email: validate_email(&self.email).err(),
            password: validate_password(self.password.expose_secret()).err(),
        }
    }

    pub fn validate(&self) -> Result<AdminLogin, LoginErrors> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(AdminLogin {
            email: self.email.clone(),
        })
    }
}

/// A login that passed shape validation. Nothing was checked against a
/// credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLogin {
    email: String,
}

impl AdminLogin {
    pub fn email(&self) -> &str {
        &self.email
    }
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if is_email(email) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// Length is measured in UTF-16 code units, the unit browsers report for
/// form values.
pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.encode_utf16().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(FieldError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        })
    }
}

fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for email in [
            "john.doe@fcrit.ac.in",
            "admin@example.com",
            "A.B+tag@Sub.Example.ORG",
            "o'brien@example.ie",
            "x@y.io",
        ] {
            assert!(is_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@localhost",
            "user@example.c",
            "user.@example.com",
            ".user@example.com",
            "us..er@example.com",
            "user@example..com",
            "user@-example.com",
            "user@@example.com",
            " user@example.com",
            "user@example.com ",
            "user name@example.com",
            "user@example.co\u{212A}",
            "\u{17F}@example.com",
            "us\u{E9}r@example.com",
        ] {
            assert!(!is_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn password_length_boundary() {
        assert_eq!(
            validate_password("1234567"),
            Err(FieldError::PasswordTooShort { min: 8 })
        );
        assert_eq!(validate_password("12345678"), Ok(()));
        assert_eq!(validate_password(""), Err(FieldError::PasswordTooShort { min: 8 }));
    }

    #[test]
    fn password_counts_utf16_units() {
        // each emoji is two UTF-16 units
        assert_eq!(validate_password("\u{1F600}\u{1F600}\u{1F600}\u{1F600}"), Ok(()));
        assert!(validate_password("\u{1F600}\u{1F600}\u{1F600}a").is_err());
        // seven BMP characters, fourteen bytes
        assert!(validate_password("ééééééé").is_err());
        assert!(validate_password("éééééééé").is_ok());
    }

    #[test]
    fn reports_every_failing_field() {
        let form = LoginForm::new("nope", "short");
        assert_eq!(
            form.validate(),
            Err(LoginErrors {
                email: Some(FieldError::InvalidEmail),
                password: Some(FieldError::PasswordTooShort { min: 8 }),
            })
        );
    }

    #[test]
    fn validated_login_keeps_only_the_email() {
        let login = LoginForm::new("admin@fcrit.ac.in", "correct horse")
            .validate()
            .unwrap();
        assert_eq!(login.email(), "admin@fcrit.ac.in");
    }

    #[test]
    fn debug_output_hides_password() {
        let form = LoginForm::new("admin@fcrit.ac.in", "hunter2hunter2");
        assert!(!format!("{form:?}").contains("hunter2hunter2"));
    }
}
