use dioxus::prelude::*;
use types::AdminGate;

use super::{Dashboard, Login};

/// The admin page. Shows the login form until a submission passes
/// validation, then the dashboard for the rest of the page's life.
#[component]
pub fn AdminPanel() -> Element {
    let gate = use_signal(AdminGate::default);

    rsx! { GatedView { gate } }
}

#[component]
fn GatedView(gate: Signal<AdminGate>) -> Element {
    let logged_in = gate.read().is_logged_in();

    rsx! {
        div { class: "admin-page",
            if logged_in {
                Dashboard {}
            } else {
                Login { gate }
            }
        }
    }
}
