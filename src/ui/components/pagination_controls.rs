use dioxus::prelude::*;

use crate::domain::table::pagination::{PaginationState, PAGE_SIZE_OPTIONS};
use crate::ui::styles::{button_style, pagination_bar_style};

/// Text shown in the jump-to-page box: the user's draft while typing,
/// otherwise the current page. The draft is dropped on commit so the box
/// shows the clamped page.
pub fn jump_input_value(draft: Option<&str>, page_number: usize) -> String {
    draft.map_or_else(|| page_number.to_string(), str::to_string)
}

/// Footer of the data table. Apart from the jump box draft it renders the
/// page metadata it is given, and every control emits the next
/// [`PaginationState`], already clamped for `row_count`.
#[component]
pub fn PaginationControls(
    state: PaginationState,
    row_count: usize,
    page_count: usize,
    can_previous: bool,
    can_next: bool,
    on_change: EventHandler<PaginationState>,
) -> Element {
    let page_number = state.page_index + 1;
    let page_size = state.page_size;
    let mut jump_draft = use_signal(|| None::<String>);
    let jump_value = jump_input_value(jump_draft().as_deref(), page_number);

    rsx! {
        div {
            style: "{pagination_bar_style()}",
            button {
                style: "{button_style(false)}",
                disabled: !can_previous,
                onclick: move |_| on_change.call(state.first()),
                "<<"
            }
            button {
                style: "{button_style(false)}",
                disabled: !can_previous,
                onclick: move |_| on_change.call(state.previous()),
                "<"
            }
            button {
                style: "{button_style(false)}",
                disabled: !can_next,
                onclick: move |_| on_change.call(state.next(row_count)),
                ">"
            }
            button {
                style: "{button_style(false)}",
                disabled: !can_next,
                onclick: move |_| on_change.call(state.last(row_count)),
                ">>"
            }
            span {
                "Page "
                strong { "{page_number} of {page_count}" }
            }
            span {
                "| Go to page: "
                input {
                    r#type: "number",
                    min: "1",
                    max: "{page_count}",
                    value: "{jump_value}",
                    style: "width: 100px;",
                    oninput: move |event| jump_draft.set(Some(event.value())),
                    onchange: move |event| {
                        jump_draft.set(None);
                        on_change.call(state.with_page_input(&event.value(), row_count));
                    }
                }
            }
            select {
                value: "{page_size}",
                onchange: move |event| {
                    if let Ok(size) = event.value().parse::<usize>() {
                        on_change.call(state.with_page_size(size, row_count));
                    }
                },
                for size in PAGE_SIZE_OPTIONS {
                    option { key: "{size}", value: "{size}", selected: size == page_size, "Show {size}" }
                }
            }
        }
    }
}
