use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;

use crate::domain::table::column::{ColumnDef, TableRow};
use crate::domain::table::pagination::{PaginationState, DEFAULT_PAGE_SIZE};
use crate::domain::table::selection::{SelectionStatus, SelectionTracker};
use crate::ui::components::pagination_controls::PaginationControls;
use crate::ui::styles::{
    checkbox_cell_style, column_alignment, table_cell_style, table_container_style,
    table_header_cell_style, table_row_style,
};
use crate::usecase::services::table_adapter::{TableAdapter, TableState};

static NEXT_TABLE_ID: AtomicUsize = AtomicUsize::new(0);

/// Row-body or checkbox click. Flips the row's membership and hands the row
/// to `on_row_select` exactly once. Returns whether the row is selected
/// afterwards.
pub fn toggle_row_selection<T: TableRow>(
    selection: &mut SelectionTracker,
    row: &T,
    on_row_select: Option<impl FnOnce(T)>,
) -> bool {
    let selected = selection.toggle_row(row.row_key());
    if let Some(notify) = on_row_select {
        notify(row.clone());
    }
    selected
}

/// Header checkbox click over every loaded row.
pub fn toggle_all_selection<T: TableRow>(
    selection: &mut SelectionTracker,
    rows: &[T],
    on_all_rows_select: Option<impl FnOnce(bool)>,
) -> bool {
    let selected = selection.toggle_all(rows);
    if let Some(notify) = on_all_rows_select {
        notify(selected);
    }
    selected
}

/// `indeterminate` is a DOM property with no HTML attribute, so it is set
/// from script.
pub fn indeterminate_script(checkbox_id: &str, partial: bool) -> String {
    format!(
        "const checkbox = document.getElementById('{checkbox_id}'); if (checkbox) {{ checkbox.indeterminate = {partial}; }}"
    )
}

fn commit_row_click<T: TableRow>(
    mut selection: Signal<SelectionTracker>,
    row: &T,
    on_row_select: Option<EventHandler<T>>,
) {
    let mut tracker = selection.peek().clone();
    let selected = toggle_row_selection(
        &mut tracker,
        row,
        on_row_select.map(|handler| move |row: T| handler.call(row)),
    );
    selection.set(tracker);
    debug!(row = %row.row_key(), selected, "row selection toggled");
}

/// Sortable, paginated table with optional checkbox selection.
///
/// Pass `selection` to lift selection state into the caller; otherwise the
/// table keeps its own. "Select all" covers every row in `data`, not only the
/// visible page. Only sorting and pagination are kept between renders; the
/// view is rebuilt from `data` every time. `initial_page_index` is applied
/// once `data` holds rows.
#[component]
pub fn DataTable<T: TableRow>(
    columns: Vec<ColumnDef<T>>,
    data: Vec<T>,
    on_row_select: Option<EventHandler<T>>,
    on_all_rows_select: Option<EventHandler<bool>>,
    #[props(default = 0)] initial_page_index: usize,
    #[props(default = DEFAULT_PAGE_SIZE)] initial_page_size: usize,
    #[props(default = false)] include_checkbox_column: bool,
    selection: Option<Signal<SelectionTracker>>,
) -> Element {
    let local_selection = use_signal(SelectionTracker::default);
    let mut selection = selection.unwrap_or(local_selection);
    let mut state = use_signal(|| {
        TableState::new(PaginationState::new(initial_page_index, initial_page_size))
    });
    let select_all_id = use_hook(|| {
        format!("select-all-{}", NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed))
    });

    let view = TableAdapter::from_state(columns.clone(), data.clone(), state()).view();
    let row_count = view.row_count;

    use_effect(use_reactive((&row_count,), move |(row_count,)| {
        let mut next = state.peek().clone();
        if next.settle(row_count) {
            state.set(next);
        }
    }));

    let selection_snapshot = selection();
    let status = selection_snapshot.status(&data);
    let all_selected = status == SelectionStatus::AllSelected;
    let partially_selected = status == SelectionStatus::PartiallySelected;
    let aria_checked = if partially_selected {
        "mixed".to_string()
    } else {
        all_selected.to_string()
    };

    let script_target = select_all_id.clone();
    use_effect(use_reactive(
        (&partially_selected, &include_checkbox_column),
        move |(partial, include)| {
            if include {
                let _ = document::eval(&indeterminate_script(&script_target, partial));
            }
        },
    ));

    let alignments: Vec<&'static str> = columns
        .iter()
        .map(|column| column_alignment(column, &data))
        .collect();
    let column_span = columns.len() + usize::from(include_checkbox_column);
    let empty_cell_style = table_cell_style("center");
    let nothing_visible = view.rows.is_empty();

    rsx! {
        div {
            style: "{table_container_style()}",
            table { style: "width: 100%; border-collapse: collapse;",
                thead {
                    {view.header_groups.into_iter().map(|group| {
                        let all_rows = data.clone();
                        let select_all_id = select_all_id.clone();
                        rsx!(
                            tr { key: "{group.id}",
                                if include_checkbox_column {
                                    th { style: "{checkbox_cell_style()}",
                                        input {
                                            id: "{select_all_id}",
                                            r#type: "checkbox",
                                            checked: all_selected,
                                            aria_checked: "{aria_checked}",
                                            onclick: move |_| {
                                                let mut tracker = selection.peek().clone();
                                                let selected = toggle_all_selection(
                                                    &mut tracker,
                                                    &all_rows,
                                                    on_all_rows_select.map(|handler| move |selected: bool| handler.call(selected)),
                                                );
                                                selection.set(tracker);
                                                info!(selected, rows = all_rows.len(), "select all toggled");
                                            }
                                        }
                                    }
                                }
                                {group.headers.into_iter().map(|header| {
                                    let column_id = header.column_id.clone();
                                    let sort_columns = columns.clone();
                                    let indicator = header.sort.map(|sort| sort.indicator()).unwrap_or("");
                                    let sortable = header.sortable;
                                    rsx!(
                                        th {
                                            key: "{header.column_id}",
                                            style: "{table_header_cell_style(sortable)}",
                                            onclick: move |event| {
                                                if !sortable {
                                                    return;
                                                }
                                                let multi = event.modifiers().contains(Modifiers::SHIFT);
                                                let mut next = state.peek().clone();
                                                if next.toggle_sorting(&sort_columns, &column_id, multi) {
                                                    debug!(column = %column_id, multi, sorting = ?next.sorting, "sorting changed");
                                                    state.set(next);
                                                }
                                            },
                                            "{header.label}"
                                            span { "{indicator}" }
                                        }
                                    )
                                })}
                            }
                        )
                    })}
                }
                tbody {
                    if nothing_visible {
                        tr {
                            td {
                                colspan: "{column_span}",
                                style: "{empty_cell_style}",
                                "No records found"
                            }
                        }
                    }
                    {view.rows.into_iter().map(|visible| {
                        let row = visible.row;
                        let key = row.row_key();
                        let is_selected = selection_snapshot.is_selected(&key);
                        let row_for_checkbox = row.clone();
                        let cells: Vec<(String, &'static str)> = visible
                            .cells
                            .into_iter()
                            .zip(alignments.iter().copied())
                            .collect();
                        rsx!(
                            tr {
                                key: "{key}",
                                style: "{table_row_style(is_selected)}",
                                onclick: move |_| commit_row_click(selection, &row, on_row_select),
                                if include_checkbox_column {
                                    td { style: "{checkbox_cell_style()}",
                                        input {
                                            r#type: "checkbox",
                                            checked: is_selected,
                                            onclick: move |event| {
                                                event.stop_propagation();
                                                commit_row_click(selection, &row_for_checkbox, on_row_select);
                                            }
                                        }
                                    }
                                }
                                for (idx, (text, alignment)) in cells.into_iter().enumerate() {
                                    td { key: "{idx}", style: "{table_cell_style(alignment)}", "{text}" }
                                }
                            }
                        )
                    })}
                }
            }
        }
        PaginationControls {
            state: view.pagination,
            row_count,
            page_count: view.page_count,
            can_previous: view.can_previous,
            can_next: view.can_next,
            on_change: move |next: PaginationState| {
                debug!(page_index = next.page_index, page_size = next.page_size, "pagination changed");
                state.write().set_pagination(next, row_count);
            }
        }
    }
}
