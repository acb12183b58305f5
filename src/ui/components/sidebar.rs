use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::styles::{button_style, sidebar_link_style, sidebar_style};

#[component]
pub fn Sidebar(open: bool, on_toggle: EventHandler<()>) -> Element {
    let route = use_route::<Route>();
    let on_customers = matches!(route, Route::Home {});
    let toggle_title = if open { "Collapse sidebar" } else { "Expand sidebar" };

    rsx! {
        aside {
            style: "{sidebar_style(open)}",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; padding: 0 8px 16px;",
                if open {
                    strong { "Deltadesk" }
                } else {
                    strong { "DD" }
                }
                button {
                    style: "{button_style(false)}",
                    title: "{toggle_title}",
                    onclick: move |_| on_toggle.call(()),
                    if open { "«" } else { "»" }
                }
            }
            div {
                style: "{sidebar_link_style(on_customers)}",
                Link { to: Route::Home {}, if open { "Customers" } else { "C" } }
            }
        }
    }
}
