use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        div { class: "admin-page",
            div { class: "card not-found",
                h1 { class: "page-title", "Page not found" }
                p { class: "text-muted", "Nothing lives at {path}." }
                Link { to: Route::AdminPanel {}, class: "btn btn-purple", "Back to the admin panel" }
            }
        }
    }
}
