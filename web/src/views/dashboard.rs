use dioxus::prelude::*;
use types::{AdminAction, DASHBOARD, format_count};
use ui::{Accent, ActionButton, IconKind, Panel, StatCard, StatusBadge};

#[component]
pub fn Dashboard() -> Element {
    let summary = DASHBOARD.summary;

    rsx! {
        h1 { class: "page-title", "Admin Dashboard" }

        div { class: "grid grid-cols-3",
            StatCard {
                title: "Total Students",
                value: format_count(summary.students),
                icon: IconKind::Users,
                accent: Accent::Blue,
            }
            StatCard {
                title: "Registered Companies",
                value: format_count(summary.companies),
                icon: IconKind::Building,
                accent: Accent::Green,
            }
            StatCard {
                title: "Active Internships",
                value: format_count(summary.internships),
                icon: IconKind::Briefcase,
                accent: Accent::Purple,
            }
        }

        div { class: "grid grid-cols-2",
            Panel { title: "Recent Student Registrations",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Department" }
                            }
                        }
                        tbody {
                            for student in DASHBOARD.students {
                                tr { key: "{student.email}",
                                    td { "{student.name}" }
                                    td { "{student.email}" }
                                    td { "{student.department}" }
                                }
                            }
                        }
                    }
                }
            }
            Panel { title: "Recent Company Registrations",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Company Name" }
                                th { "Industry" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for company in DASHBOARD.companies {
                                tr { key: "{company.name}",
                                    td { "{company.name}" }
                                    td { "{company.industry}" }
                                    td { StatusBadge { status: company.status } }
                                }
                            }
                        }
                    }
                }
            }
        }

        div { class: "actions-panel",
            Panel { title: "Admin Actions",
                div { class: "action-list",
                    for action in AdminAction::ALL {
                        ActionButton { key: "{action.label()}", action }
                    }
                }
            }
        }
    }
}
