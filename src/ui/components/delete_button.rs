use dioxus::prelude::*;

#[component]
pub fn DeleteButton(selected_count: usize, disabled: bool, on_delete: EventHandler<()>) -> Element {
    let inactive = disabled || selected_count == 0;
    let style = if inactive {
        "border: 1px solid #e2e8f0; background: #fff; color: #94a3b8; padding: 6px 14px; border-radius: 6px; cursor: default;"
    } else {
        "border: 1px solid #e2e8f0; background: #fff; color: #f43f5e; padding: 6px 14px; border-radius: 6px; cursor: pointer;"
    };

    rsx! {
        div { style: "display: flex; align-items: center; gap: 8px;",
            if selected_count > 0 {
                span { style: "font-size: 14px; font-style: italic;", "{selected_count} selected" }
            }
            button {
                style: "{style}",
                disabled: inactive,
                onclick: move |_| on_delete.call(()),
                "Delete"
            }
        }
    }
}
