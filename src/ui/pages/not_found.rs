use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { style: "padding: 32px;",
            h1 { style: "font-size: 24px;", "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: Route::Home {}, "Back to customers" }
        }
    }
}
