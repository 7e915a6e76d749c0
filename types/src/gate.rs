use crate::{AdminLogin, LoginErrors, LoginForm};

/// Whether the admin page shows the login form or the dashboard.
///
/// This lives only as long as the page does. It is never synchronized with a
/// server-side session, so a reload starts over at [`AdminGate::LoggedOut`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AdminGate {
    #[default]
    LoggedOut,
    LoggedIn(AdminLogin),
}

impl AdminGate {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, AdminGate::LoggedIn(_))
    }

    pub fn login(&self) -> Option<&AdminLogin> {
        match self {
            AdminGate::LoggedIn(login) => Some(login),
            AdminGate::LoggedOut => None,
        }
    }

    /// Validate a submitted form and open the gate if it passes.
    ///
    /// A rejected submission leaves the gate as it was.
    pub fn submit(&mut self, form: &LoginForm) -> Result<(), LoginErrors> {
        match form.validate() {
            Ok(login) => {
                tracing::info!(email = %login.email(), "admin login accepted");
                *self = AdminGate::LoggedIn(login);
                Ok(())
            }
            Err(errors) => {
                tracing::debug!(
                    email_invalid = errors.email.is_some(),
                    password_invalid = errors.password.is_some(),
                    "admin login rejected"
                );
                Err(errors)
            }
        }
    }
}
