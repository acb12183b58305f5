use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::ui::components::app_header::AppHeader;
use crate::ui::components::sidebar::Sidebar;
use crate::ui::pages::home::Home;
use crate::ui::pages::not_found::NotFound;
use crate::ui::styles::{content_area_style, root_container_style};

pub const CONTENT_AREA_ID: &str = "content-area";

/// Jumps to the top without the smooth-scroll animation, then restores the
/// page's scroll behaviour.
pub const SCROLL_RESET_SCRIPT: &str = r#"
const html = document.querySelector('html');
html.style.scrollBehavior = 'auto';
window.scroll({ top: 0 });
const content = document.getElementById('content-area');
if (content) { content.scrollTop = 0; }
html.style.scrollBehavior = '';
"#;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    let mut sidebar_open = use_signal(|| true);
    let route = use_route::<Route>();

    use_effect(use_reactive((&route,), |(route,)| {
        debug!(route = %route, "route changed, resetting scroll");
        let _ = document::eval(SCROLL_RESET_SCRIPT);
    }));

    rsx! {
        div {
            style: "{root_container_style()}",
            Sidebar {
                open: sidebar_open(),
                on_toggle: move |_| sidebar_open.set(!sidebar_open()),
            }
            div {
                id: CONTENT_AREA_ID,
                style: "{content_area_style()}",
                AppHeader {
                    sidebar_open: sidebar_open(),
                    on_toggle_sidebar: move |_| sidebar_open.set(!sidebar_open()),
                }
                main { style: "flex-grow: 1;",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
