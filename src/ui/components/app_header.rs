use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::ui::styles::{button_style, header_style};

#[component]
pub fn AppHeader(sidebar_open: bool, on_toggle_sidebar: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let toggle_label = if sidebar_open { "Hide menu" } else { "Show menu" };

    rsx! {
        header {
            style: "{header_style()}",
            button {
                style: "{button_style(false)}",
                aria_label: "{toggle_label}",
                onclick: move |_| on_toggle_sidebar.call(()),
                "☰"
            }
            span { style: "font-weight: 600;", "{config.window_title}" }
        }
    }
}
