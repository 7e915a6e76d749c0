//! Presentation components shared by the admin views.

mod badge;
mod card;
mod form;
mod icons;

pub use badge::StatusBadge;
pub use card::{Accent, ActionButton, Panel, StatCard};
pub use form::FormField;
pub use icons::{Icon, IconKind};
