use dioxus::prelude::*;
use types::ApprovalStatus;

#[component]
pub fn StatusBadge(status: ApprovalStatus) -> Element {
    let class = match status {
        ApprovalStatus::Approved => "badge badge-approved",
        ApprovalStatus::Pending => "badge badge-pending",
    };

    rsx! {
        span { class, "{status.label()}" }
    }
}
