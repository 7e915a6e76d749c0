use dioxus::prelude::*;

/// Outline icons drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Users,
    Building,
    Briefcase,
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[props(default = 24)] size: u32,
    #[props(default, into)] class: String,
) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {match kind {
                IconKind::Users => rsx! {
                    path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
                    circle { cx: "9", cy: "7", r: "4" }
                    path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
                    path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
                },
                IconKind::Building => rsx! {
                    rect { width: "16", height: "20", x: "4", y: "2", rx: "2", ry: "2" }
                    path { d: "M9 22v-4h6v4" }
                    path { d: "M8 6h.01" }
                    path { d: "M16 6h.01" }
                    path { d: "M12 6h.01" }
                    path { d: "M12 10h.01" }
                    path { d: "M12 14h.01" }
                    path { d: "M16 10h.01" }
                    path { d: "M16 14h.01" }
                    path { d: "M8 10h.01" }
                    path { d: "M8 14h.01" }
                },
                IconKind::Briefcase => rsx! {
                    path { d: "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" }
                    rect { width: "20", height: "14", x: "2", y: "6", rx: "2" }
                },
            }}
        }
    }
}
