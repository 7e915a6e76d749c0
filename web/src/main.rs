use dioxus::prelude::*;

mod views;

use views::{AdminPanel, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    AdminPanel {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::Config::load()?;
        server::init_tracing(&config);

        Ok(dioxus::server::router(App).merge(server::router(&config)))
    });

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Admin Panel" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}
