pub mod dashboard;
mod error;
pub mod gate;
pub mod login;

pub use dashboard::{AdminAction, ApprovalStatus, DASHBOARD, DashboardSnapshot, format_count};
pub use error::{FieldError, LoginErrors};
pub use gate::AdminGate;
pub use login::{AdminLogin, LoginForm, MIN_PASSWORD_LEN};
