use chrono::Local;
use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::config::AppConfig;
use crate::domain::entities::customer::{Customer, CustomerFilter};
use crate::domain::table::cell::CellValue;
use crate::domain::table::column::ColumnDef;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::data_table::DataTable;
use crate::ui::components::delete_button::DeleteButton;
use crate::ui::state::app_state::CustomersState;
use crate::ui::styles::button_style;
use crate::usecase::services::customer_service::CustomerService;

fn average_order(customer: &Customer) -> CellValue {
    if customer.orders == 0 {
        CellValue::Empty
    } else {
        CellValue::Number(customer.spent / customer.orders as f64)
    }
}

fn currency(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        other => format!("${other}"),
    }
}

pub fn customer_columns() -> Vec<ColumnDef<Customer>> {
    vec![
        ColumnDef::accessor("id", "ID"),
        ColumnDef::accessor("name", "Name"),
        ColumnDef::accessor("email", "Email").disable_sorting(),
        ColumnDef::accessor("city", "City"),
        ColumnDef::accessor("postal_code", "Postal Code"),
        ColumnDef::accessor("orders", "Orders"),
        ColumnDef::accessor("spent", "Total Spent").cell_renderer(currency),
        ColumnDef::computed("average_order", "Avg. Order", average_order).cell_renderer(currency),
        ColumnDef::accessor("last_order", "Last Order"),
    ]
}

const FIELD_STYLE: &str = "display: flex; flex-direction: column; gap: 4px; flex: 1; min-width: 160px;";
const INPUT_STYLE: &str = "border: 1px solid #cbd5e1; border-radius: 6px; padding: 6px 8px;";

#[component]
pub fn Home() -> Element {
    let config = use_context::<AppConfig>();
    let CustomersState {
        mut customers,
        mut filter_draft,
        mut applied_filter,
        mut selection,
        mut busy,
        mut status,
    } = CustomersState::new();

    use_effect(move || match CustomerService::load_demo() {
        Ok(loaded) => {
            info!(rows = loaded.len(), "loaded demo customers");
            customers.set(loaded);
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "demo data failed to load");
            status.set(format!("Failed to load demo data: {err:#}"));
        }
    });

    let filtered = CustomerService::filtered(&customers(), &applied_filter());
    let selected_count = selection().selected_rows(&filtered).len();
    let draft = filter_draft();
    let total = customers().len();
    let shown = filtered.len();
    let status_text = status();

    rsx! {
        div {
            style: "padding: 32px; width: 100%; max-width: 1536px; margin: 0 auto; box-sizing: border-box;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 32px; flex-wrap: wrap; gap: 16px;",
                h1 { style: "font-size: 28px; font-weight: bold; margin: 0;", "Customers ✨" }
                div {
                    style: "display: flex; gap: 8px; align-items: center;",
                    DeleteButton {
                        selected_count,
                        disabled: busy(),
                        on_delete: move |_| {
                            let count = selection.peek().len();
                            if count == 0 {
                                return;
                            }
                            let confirm = MessageDialog::new()
                                .set_level(MessageLevel::Warning)
                                .set_title("Delete customers")
                                .set_description(format!("Delete {count} selected customer(s)?"))
                                .set_buttons(MessageButtons::YesNo)
                                .show();
                            if confirm != MessageDialogResult::Yes {
                                status.set("Delete cancelled".to_string());
                                return;
                            }
                            let removed = CustomerService::remove_selected(
                                &mut customers.write(),
                                &mut selection.write(),
                            );
                            info!(removed, "deleted selected customers");
                            status.set(format!("Deleted {removed} customer(s)"));
                        }
                    }
                    button {
                        style: "{button_style(true)}",
                        disabled: busy(),
                        onclick: move |_| {
                            if busy() {
                                return;
                            }
                            let Some(path) = FileDialog::new()
                                .add_filter("CSV", &["csv"])
                                .pick_file() else {
                                status.set("Import cancelled".to_string());
                                return;
                            };

                            busy.set(true);
                            status.set(format!("Importing {}", path.display()));
                            match run_blocking("import customers", || CustomerService::import_csv(&path)) {
                                Ok(imported) => {
                                    let summary = CustomerService::merge(&mut customers.write(), imported);
                                    info!(
                                        path = %path.display(),
                                        added = summary.added,
                                        skipped = summary.skipped,
                                        "customers imported"
                                    );
                                    status.set(format!(
                                        "Imported {} customer(s) at {}; skipped {} duplicate id(s)",
                                        summary.added,
                                        Local::now().format("%H:%M"),
                                        summary.skipped
                                    ));
                                }
                                Err(err) => {
                                    warn!(path = %path.display(), error = %format!("{err:#}"), "import failed");
                                    status.set(format!("Import failed: {err:#}"));
                                }
                            }
                            busy.set(false);
                        },
                        "Import CSV"
                    }
                }
            }

            div {
                style: "background: #fff; border: 1px solid #e2e8f0; border-radius: 4px; box-shadow: 0 4px 12px rgba(0,0,0,0.06); padding: 24px 20px; margin-bottom: 32px;",
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; margin-bottom: 16px;",
                    label { style: FIELD_STYLE,
                        span { "City" }
                        input {
                            style: INPUT_STYLE,
                            r#type: "text",
                            value: "{draft.city}",
                            oninput: move |event| filter_draft.write().city = event.value(),
                        }
                    }
                    label { style: FIELD_STYLE,
                        span { "Postal Code" }
                        input {
                            style: INPUT_STYLE,
                            r#type: "text",
                            value: "{draft.postal_code}",
                            oninput: move |event| filter_draft.write().postal_code = event.value(),
                        }
                    }
                    label { style: "{FIELD_STYLE} flex: 2;",
                        span { "Search" }
                        input {
                            style: INPUT_STYLE,
                            r#type: "search",
                            value: "{draft.search}",
                            oninput: move |event| filter_draft.write().search = event.value(),
                        }
                    }
                }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        style: "{button_style(true)}",
                        onclick: move |_| {
                            let next = filter_draft();
                            let matching = CustomerService::filtered(&customers.peek(), &next);
                            selection.write().retain(&matching);
                            info!(filter = ?next, matches = matching.len(), "filter applied");
                            applied_filter.set(next);
                        },
                        "Search"
                    }
                    button {
                        style: "{button_style(false)}",
                        onclick: move |_| {
                            filter_draft.set(CustomerFilter::default());
                            applied_filter.set(CustomerFilter::default());
                        },
                        "Reset"
                    }
                }
            }

            p { style: "font-size: 14px; color: #64748b;", "{status_text} · showing {shown} of {total}" }

            DataTable::<Customer> {
                columns: customer_columns(),
                data: filtered,
                on_row_select: move |customer: Customer| {
                    info!(customer = %customer.id, name = %customer.name, "row selected");
                },
                on_all_rows_select: move |selected: bool| {
                    info!(selected, "all rows selection changed");
                },
                initial_page_index: 0,
                initial_page_size: config.initial_page_size,
                include_checkbox_column: config.include_checkbox_column,
                selection,
            }
        }
    }
}
