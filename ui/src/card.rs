use dioxus::prelude::*;
use types::AdminAction;

use crate::{Icon, IconKind};

/// Color family used for icons and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Red,
}

impl Accent {
    pub fn text_class(self) -> &'static str {
        match self {
            Accent::Blue => "text-blue",
            Accent::Green => "text-green",
            Accent::Purple => "text-purple",
            Accent::Red => "text-red",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            Accent::Blue => "btn btn-block btn-blue",
            Accent::Green => "btn btn-block btn-green",
            Accent::Purple => "btn btn-block btn-purple",
            Accent::Red => "btn btn-block btn-red",
        }
    }

    pub fn for_action(action: AdminAction) -> Self {
        match action {
            AdminAction::ManageUsers => Accent::Blue,
            AdminAction::ApproveCompanies => Accent::Green,
            AdminAction::ReviewInternships => Accent::Purple,
            AdminAction::GenerateReports => Accent::Red,
        }
    }
}

/// A single headline number with an icon and a caption.
#[component]
pub fn StatCard(title: &'static str, value: String, icon: IconKind, accent: Accent) -> Element {
    rsx! {
        div { class: "card stat-card",
            div { class: "stat-card-header",
                Icon { kind: icon, class: "stat-card-icon {accent.text_class()}" }
                h2 { class: "stat-card-title", "{title}" }
            }
            p { class: "stat-card-value", "{value}" }
        }
    }
}

#[component]
pub fn Panel(title: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "card panel",
            h2 { class: "panel-title", "{title}" }
            {children}
        }
    }
}

/// Placeholder button for an admin action. No handler is attached.
#[component]
pub fn ActionButton(action: AdminAction) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: Accent::for_action(action).button_class(),
            "{action.label()}"
        }
    }
}
