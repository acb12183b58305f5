use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;

use crate::config::{ensure_webview_data_dir, read_config, AppConfig, ConfigError};
use crate::domain::entities::customer::{Customer, CustomerFilter};
use crate::domain::table::cell::{format_number_with_commas, CellValue};
use crate::domain::table::column::{ColumnDef, RowKey, TableRow};
use crate::domain::table::pagination::{PaginationState, PAGE_SIZE_OPTIONS};
use crate::domain::table::selection::{SelectionStatus, SelectionTracker};
use crate::domain::table::sorting::{SortDirection, SortingState};
use crate::infra::import::csv::{bundled_customers, import_customers_csv, parse_customers, ImportError};
use crate::ui::components::data_table::{
    indeterminate_script, toggle_all_selection, toggle_row_selection, DataTable,
};
use crate::ui::components::pagination_controls::jump_input_value;
use crate::ui::pages::home::customer_columns;
use crate::ui::styles::{column_alignment, table_container_style, table_header_cell_style};
use crate::usecase::services::customer_service::{CustomerService, MergeSummary};
use crate::usecase::services::table_adapter::{TableAdapter, TableState};

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("deltadesk-{prefix}-{nanos}"))
}

#[derive(Debug, Clone, PartialEq)]
struct Greeting {
    id: usize,
    col1: String,
    col2: String,
}

impl TableRow for Greeting {
    fn row_key(&self) -> RowKey {
        RowKey(self.id.to_string())
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "col1" => CellValue::text(self.col1.as_str()),
            "col2" => CellValue::text(self.col2.as_str()),
            _ => CellValue::Empty,
        }
    }
}

fn greetings() -> Vec<Greeting> {
    [("Hello", "World"), ("react-table", "rocks"), ("whatever", "you want")]
        .iter()
        .enumerate()
        .map(|(id, (col1, col2))| Greeting {
            id,
            col1: col1.to_string(),
            col2: col2.to_string(),
        })
        .collect()
}

fn greeting_columns() -> Vec<ColumnDef<Greeting>> {
    vec![
        ColumnDef::accessor("col1", "Column 1"),
        ColumnDef::accessor("col2", "Column 2"),
    ]
}

fn numbered_rows(count: usize) -> Vec<Greeting> {
    (0..count)
        .map(|id| Greeting {
            id,
            col1: format!("row-{id:03}"),
            col2: format!("{}", count - id),
        })
        .collect()
}

fn customer(id: &str, name: &str, city: &str, orders: i64, spent: f64) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@mail.test", name.to_lowercase().replace(' ', ".")),
        city: city.to_string(),
        postal_code: "10115".to_string(),
        orders,
        spent,
        last_order: None,
    }
}

/// Columns and rows held fixed while header and pager clicks change the
/// state, the way `DataTable` keeps them between renders.
struct TableFixture<T: TableRow> {
    columns: Vec<ColumnDef<T>>,
    rows: Vec<T>,
    state: TableState,
}

impl<T: TableRow> TableFixture<T> {
    fn new(columns: Vec<ColumnDef<T>>, rows: Vec<T>, pagination: PaginationState) -> Self {
        Self {
            columns,
            rows,
            state: TableState::new(pagination),
        }
    }

    fn click_header(&mut self, column_id: &str, multi: bool) -> bool {
        self.state.toggle_sorting(&self.columns, column_id, multi)
    }

    fn set_pagination(&mut self, next: PaginationState) {
        self.state.set_pagination(next, self.rows.len());
    }

    fn adapter(&self) -> TableAdapter<T> {
        TableAdapter::from_state(self.columns.clone(), self.rows.clone(), self.state.clone())
    }
}

impl TableFixture<Greeting> {
    fn col1_values(&self) -> Vec<String> {
        self.adapter()
            .visible_rows()
            .iter()
            .map(|row| row.col1.clone())
            .collect()
    }

    fn col2_values(&self) -> Vec<String> {
        self.adapter()
            .visible_rows()
            .iter()
            .map(|row| row.col2.clone())
            .collect()
    }
}

impl TableFixture<Customer> {
    fn visible_ids(&self) -> Vec<String> {
        self.adapter()
            .visible_rows()
            .iter()
            .map(|row| row.id.clone())
            .collect()
    }
}

#[test]
fn three_rows_fit_on_one_page_in_original_order() {
    let table = TableFixture::new(greeting_columns(), greetings(), PaginationState::new(0, 20));
    let adapter = table.adapter();

    assert_eq!(adapter.page_count(), 1);
    assert_eq!(table.col1_values(), vec!["Hello", "react-table", "whatever"]);
    assert!(!adapter.can_previous(), "previous should be disabled");
    assert!(!adapter.can_next(), "next should be disabled");
}

#[test]
fn clicking_a_header_three_times_restores_original_order() {
    let mut table =
        TableFixture::new(greeting_columns(), greetings(), PaginationState::new(0, 20));

    assert!(table.click_header("col1", false));
    assert_eq!(table.col1_values(), vec!["Hello", "react-table", "whatever"]);

    assert!(table.click_header("col1", false));
    assert_eq!(table.col1_values(), vec!["whatever", "react-table", "Hello"]);

    assert!(table.click_header("col1", false));
    assert!(table.state.sorting.is_empty(), "third click should clear sorting");
    assert_eq!(table.col1_values(), vec!["Hello", "react-table", "whatever"]);
}

#[test]
fn sorting_by_second_column_reorders_and_restores() {
    let mut table =
        TableFixture::new(greeting_columns(), greetings(), PaginationState::new(0, 20));

    table.click_header("col2", false);
    assert_eq!(table.col2_values(), vec!["rocks", "World", "you want"]);

    table.click_header("col2", false);
    assert_eq!(table.col2_values(), vec!["you want", "World", "rocks"]);

    table.click_header("col2", false);
    assert_eq!(table.col2_values(), vec!["World", "rocks", "you want"]);
}

#[test]
fn header_groups_report_sort_direction() {
    let mut table =
        TableFixture::new(greeting_columns(), greetings(), PaginationState::default());
    table.click_header("col2", false);
    table.click_header("col2", false);

    let groups = table.adapter().header_groups();

    assert_eq!(groups.len(), 1, "flat columns should yield one header group");
    let headers = &groups[0].headers;
    assert_eq!(headers[0].label, "Column 1");
    assert_eq!(headers[0].sort, None);
    assert_eq!(headers[1].sort, Some(SortDirection::Desc));
    assert_eq!(SortDirection::Desc.indicator(), " 🔽");
}

#[test]
fn header_renderer_receives_sort_direction() {
    let columns = vec![ColumnDef::<Greeting>::accessor("col1", "unused").header_renderer(
        |sort| match sort {
            Some(SortDirection::Asc) => "Greeting (A-Z)".to_string(),
            Some(SortDirection::Desc) => "Greeting (Z-A)".to_string(),
            None => "Greeting".to_string(),
        },
    )];
    let mut table = TableFixture::new(columns, greetings(), PaginationState::default());

    assert_eq!(table.adapter().header_groups()[0].headers[0].label, "Greeting");
    table.click_header("col1", false);
    assert_eq!(table.adapter().header_groups()[0].headers[0].label, "Greeting (A-Z)");
}

#[test]
fn toggling_unsortable_or_unknown_columns_is_a_no_op() {
    let columns = vec![
        ColumnDef::accessor("col1", "Column 1"),
        ColumnDef::accessor("col2", "Column 2").disable_sorting(),
    ];
    let mut table = TableFixture::new(columns, greetings(), PaginationState::new(1, 2));

    assert!(!table.click_header("col2", false));
    assert!(!table.click_header("missing", true));
    assert!(table.state.sorting.is_empty());
    assert_eq!(table.state.pagination.page_index, 1, "no-op click should keep the page");
}

#[test]
fn sorting_criteria_for_unsortable_columns_are_ignored() {
    let columns = vec![ColumnDef::accessor("col1", "Column 1").disable_sorting()];
    let mut table = TableFixture::new(columns, greetings(), PaginationState::default());

    table
        .state
        .set_sorting(SortingState::default().toggled("col1", false).toggled("col1", false));

    assert_eq!(table.col1_values(), vec!["Hello", "react-table", "whatever"]);
}

#[test]
fn visible_rows_are_the_expected_slice_for_every_page() {
    let rows = numbered_rows(47);

    for page_size in PAGE_SIZE_OPTIONS {
        let mut table = TableFixture::new(
            greeting_columns(),
            rows.clone(),
            PaginationState::new(0, page_size),
        );
        table.click_header("col2", false);
        let sorted: Vec<usize> = table.adapter().sorted_rows().iter().map(|row| row.id).collect();

        for page_index in 0..table.adapter().page_count() {
            table.set_pagination(PaginationState::new(page_index, page_size));
            let visible: Vec<usize> = table
                .adapter()
                .visible_rows()
                .iter()
                .map(|row| row.id)
                .collect();
            let start = page_index * page_size;
            let end = ((page_index + 1) * page_size).min(rows.len());

            assert!(visible.len() <= page_size, "page should not exceed page size");
            assert_eq!(visible, sorted[start..end], "page {page_index} of size {page_size}");
        }
    }
}

#[test]
fn page_size_change_lands_on_a_valid_page() {
    let mut table = TableFixture::new(
        greeting_columns(),
        numbered_rows(45),
        PaginationState::new(4, 10),
    );

    table.set_pagination(PaginationState::new(4, 50));

    assert_eq!(table.state.pagination.page_index, 0);
    assert_eq!(table.adapter().page_count(), 1);
    assert_eq!(table.adapter().visible_rows().len(), 45, "page should not render empty");

    table.set_pagination(PaginationState::new(0, 10).last(45).with_page_size(20, 45));
    assert_eq!(table.state.pagination, PaginationState::new(2, 20));
    assert!(!table.adapter().can_next());
}

#[test]
fn removing_rows_reclamps_page_index() {
    let mut table = TableFixture::new(
        greeting_columns(),
        numbered_rows(45),
        PaginationState::new(4, 10),
    );

    table.rows.truncate(12);
    let view = table.adapter().view();

    assert_eq!(view.pagination.page_index, 1);
    assert_eq!(view.rows.len(), 2);
    assert!(!view.can_next);
}

#[test]
fn rebuilt_view_shows_new_rows_with_kept_sorting() {
    let mut table =
        TableFixture::new(greeting_columns(), greetings(), PaginationState::new(0, 10));
    table.click_header("col1", false);
    table.click_header("col1", false);
    assert_eq!(table.col1_values()[0], "whatever");

    table.rows = vec![
        Greeting {
            id: 7,
            col1: "alpha".to_string(),
            col2: "first".to_string(),
        },
        Greeting {
            id: 8,
            col1: "omega".to_string(),
            col2: "last".to_string(),
        },
    ];
    let view = table.adapter().view();

    let cells: Vec<&str> = view.rows.iter().map(|row| row.cells[0].as_str()).collect();
    assert_eq!(cells, vec!["omega", "alpha"], "view should follow the latest rows");
    assert_eq!(view.row_count, 2);
}

#[test]
fn stored_page_index_waits_for_rows_before_clamping() {
    let mut state = TableState::new(PaginationState::new(3, 10));

    assert!(!state.settle(0), "empty data should keep the requested page");
    assert_eq!(state.pagination.page_index, 3);
    let empty = TableAdapter::from_state(greeting_columns(), Vec::new(), state.clone()).view();
    assert_eq!(empty.pagination.page_index, 0, "empty view still renders page one");

    assert!(!state.settle(45));
    assert_eq!(state.pagination.page_index, 3);

    assert!(state.settle(12));
    assert_eq!(state.pagination.page_index, 1);
}

#[test]
fn sorting_returns_to_first_page() {
    let mut table = TableFixture::new(
        greeting_columns(),
        numbered_rows(45),
        PaginationState::new(3, 10),
    );

    table.click_header("col1", false);

    assert_eq!(table.state.pagination.page_index, 0);
}

#[test]
fn empty_dataset_renders_zero_rows_on_one_page() {
    let table = TableFixture::new(greeting_columns(), Vec::new(), PaginationState::new(3, 10));
    let view = table.adapter().view();

    assert!(view.rows.is_empty());
    assert_eq!(view.page_count, 1);
    assert_eq!(view.pagination.page_index, 0);
    assert!(!view.can_previous && !view.can_next, "navigation should be disabled");
}

#[test]
fn view_renders_cells_through_column_rules() {
    let customers = vec![
        customer("C-1", "Ada Byron", "London", 4, 1234.0),
        customer("C-2", "Alan Turing", "Wilmslow", 0, 0.0),
    ];
    let table = TableFixture::new(customer_columns(), customers, PaginationState::default());

    let view = table.adapter().view();

    assert_eq!(view.rows[0].cells[6], "$1,234.00");
    assert_eq!(view.rows[0].cells[7], "$308.50");
    assert_eq!(view.rows[1].cells[7], "", "average order should be blank without orders");
}

#[test]
fn multi_column_sort_uses_later_keys_for_ties() {
    let customers = vec![
        customer("C-1", "Ada", "Oslo", 3, 10.0),
        customer("C-2", "Bea", "Berlin", 1, 10.0),
        customer("C-3", "Cal", "Oslo", 9, 10.0),
        customer("C-4", "Dan", "Berlin", 5, 10.0),
    ];
    let mut table = TableFixture::new(customer_columns(), customers, PaginationState::default());

    table.click_header("city", false);
    table.click_header("orders", true);
    table.click_header("orders", true);

    assert_eq!(table.visible_ids(), vec!["C-4", "C-2", "C-3", "C-1"]);
}

#[test]
fn dates_sort_chronologically_with_blanks_first() {
    let mut customers = vec![
        customer("C-1", "Ada", "Oslo", 1, 1.0),
        customer("C-2", "Bea", "Oslo", 1, 1.0),
        customer("C-3", "Cal", "Oslo", 1, 1.0),
    ];
    customers[0].last_order = NaiveDate::from_ymd_opt(2026, 3, 9);
    customers[2].last_order = NaiveDate::from_ymd_opt(2025, 12, 31);
    let mut table = TableFixture::new(customer_columns(), customers, PaginationState::default());

    table.click_header("last_order", false);

    assert_eq!(table.visible_ids(), vec!["C-2", "C-3", "C-1"]);
}

#[test]
fn toggle_all_selects_every_row_then_clears() {
    let rows = numbered_rows(45);
    let mut selection = SelectionTracker::default();

    assert!(selection.toggle_all(&rows));
    assert_eq!(selection.len(), rows.len(), "select all should span every page");
    assert_eq!(selection.status(&rows), SelectionStatus::AllSelected);

    assert!(!selection.toggle_all(&rows));
    assert!(selection.is_empty());
    assert_eq!(selection.status(&rows), SelectionStatus::NoneSelected);
}

#[test]
fn toggle_all_from_partial_selection_selects_everything() {
    let rows = greetings();
    let mut selection = SelectionTracker::default();
    selection.toggle_row(rows[1].row_key());

    assert_eq!(selection.status(&rows), SelectionStatus::PartiallySelected);
    assert!(selection.toggle_all(&rows));
    assert_eq!(selection.status(&rows), SelectionStatus::AllSelected);
}

#[test]
fn toggling_a_row_twice_restores_prior_selection() {
    let rows = greetings();
    let mut selection = SelectionTracker::default();
    selection.toggle_row(rows[0].row_key());
    let before = selection.clone();

    assert!(selection.toggle_row(rows[1].row_key()));
    assert!(!selection.toggle_row(rows[1].row_key()));

    assert_eq!(selection, before);
    assert!(selection.is_selected(&rows[0].row_key()));
    assert!(!selection.is_selected(&rows[2].row_key()));
}

#[test]
fn individually_selecting_every_row_derives_select_all() {
    let rows = greetings();
    let mut selection = SelectionTracker::default();

    for row in &rows {
        selection.toggle_row(row.row_key());
    }
    assert_eq!(selection.status(&rows), SelectionStatus::AllSelected);

    selection.toggle_row(rows[0].row_key());
    assert_eq!(selection.status(&rows), SelectionStatus::PartiallySelected);
}

#[test]
fn rows_with_identical_values_are_selected_independently() {
    let rows = vec![
        Greeting {
            id: 1,
            col1: "same".to_string(),
            col2: "same".to_string(),
        },
        Greeting {
            id: 2,
            col1: "same".to_string(),
            col2: "same".to_string(),
        },
    ];
    let mut selection = SelectionTracker::default();

    selection.toggle_row(rows[0].row_key());

    assert_eq!(selection.selected_rows(&rows).len(), 1);
    assert_eq!(selection.status(&rows), SelectionStatus::PartiallySelected);
}

#[test]
fn empty_dataset_has_nothing_selected() {
    let rows: Vec<Greeting> = Vec::new();
    let mut selection = SelectionTracker::default();

    assert_eq!(selection.status(&rows), SelectionStatus::NoneSelected);
    assert!(!selection.toggle_all(&rows));
}

#[test]
fn retain_drops_keys_of_rows_no_longer_loaded() {
    let rows = greetings();
    let mut selection = SelectionTracker::default();
    selection.toggle_all(&rows);

    selection.retain(&rows[..1]);

    assert_eq!(selection.len(), 1);
    assert!(selection.is_selected(&RowKey::from("0")));
}

#[test]
fn bundled_customers_load_with_unique_ids() {
    let customers = bundled_customers().expect("bundled customers should parse");

    assert_eq!(customers.len(), 46);
    let ids: BTreeSet<RowKey> = customers.iter().map(TableRow::row_key).collect();
    assert_eq!(ids.len(), customers.len(), "row keys should be unique");
}

#[test]
fn parse_customers_reads_optional_columns() {
    let csv = "ID,Name,City,Postal Code,Orders,Spent,Last Order\n\
               C-9,Grace Hopper,Arlington,22201,12,\"$1,024.00\",2026-05-01\n\
               C-10,Edsger Dijkstra,Nuenen,,,,\n";

    let customers = parse_customers(csv.as_bytes()).expect("csv should parse");

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].spent, 1024.0);
    assert_eq!(customers[0].last_order, NaiveDate::from_ymd_opt(2026, 5, 1));
    assert_eq!(customers[1].orders, 0);
    assert_eq!(customers[1].last_order, None);
    assert_eq!(customers[1].email, "");
}

#[test]
fn parse_customers_rejects_bad_input() {
    let missing_name = parse_customers("id,city\nC-1,Oslo\n".as_bytes());
    assert!(matches!(missing_name, Err(ImportError::MissingColumn("name"))));

    let duplicate = parse_customers("id,name\nC-1,Ada\nC-1,Bea\n".as_bytes());
    assert!(matches!(duplicate, Err(ImportError::DuplicateId { row: 2, .. })));

    let bad_orders = parse_customers("id,name,orders\nC-1,Ada,many\n".as_bytes());
    assert!(matches!(
        bad_orders,
        Err(ImportError::InvalidValue { column: "orders", .. })
    ));

    let blank_id = parse_customers("id,name\n,Ada\n".as_bytes());
    assert!(matches!(blank_id, Err(ImportError::BlankId { row: 1 })));
}

#[test]
fn import_customers_csv_reads_file_from_disk() {
    let temp_dir = unique_test_dir("import-customers");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let csv_path = temp_dir.join("customers.csv");
    fs::write(&csv_path, "id,name,city\nC-1,Alice,Paris\nC-2,Bob,Tokyo\n")
        .expect("should write csv fixture");

    let customers = import_customers_csv(&csv_path).expect("import should succeed");

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[1].city, "Tokyo", "expected imported cell value");

    let missing = import_customers_csv(&temp_dir.join("missing.csv"));
    assert!(missing.is_err(), "missing file should fail");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn merge_skips_customers_already_loaded() {
    let mut existing = vec![customer("C-1", "Ada", "Oslo", 1, 1.0)];
    let imported = vec![
        customer("C-1", "Ada Again", "Oslo", 2, 2.0),
        customer("C-2", "Bea", "Bergen", 3, 3.0),
    ];

    let summary = CustomerService::merge(&mut existing, imported);

    assert_eq!(summary, MergeSummary { added: 1, skipped: 1 });
    assert_eq!(existing.len(), 2);
    assert_eq!(existing[0].name, "Ada", "existing customer should be kept");
}

#[test]
fn filter_matches_fields_case_insensitively() {
    let customers = vec![
        customer("C-1", "Ada Byron", "London", 1, 1.0),
        customer("C-2", "Bea Smith", "Berlin", 1, 1.0),
        customer("C-3", "Cal Jones", "berlin", 1, 1.0),
    ];

    let by_city = CustomerService::filtered(
        &customers,
        &CustomerFilter {
            city: "BERLIN".to_string(),
            ..CustomerFilter::default()
        },
    );
    assert_eq!(by_city.len(), 2);

    let by_search = CustomerService::filtered(
        &customers,
        &CustomerFilter {
            search: "byron".to_string(),
            ..CustomerFilter::default()
        },
    );
    assert_eq!(by_search.len(), 1);
    assert_eq!(by_search[0].id, "C-1");

    let everything = CustomerService::filtered(&customers, &CustomerFilter::default());
    assert_eq!(everything.len(), 3);
}

#[test]
fn select_all_after_filter_covers_only_filtered_rows() {
    let customers = vec![
        customer("C-1", "Ada", "Oslo", 1, 1.0),
        customer("C-2", "Bea", "Berlin", 1, 1.0),
        customer("C-3", "Cal", "Oslo", 1, 1.0),
    ];
    let filtered = CustomerService::filtered(
        &customers,
        &CustomerFilter {
            city: "oslo".to_string(),
            ..CustomerFilter::default()
        },
    );
    let mut selection = SelectionTracker::default();

    selection.toggle_all(&filtered);

    assert_eq!(selection.status(&filtered), SelectionStatus::AllSelected);
    assert_eq!(selection.status(&customers), SelectionStatus::PartiallySelected);
}

#[test]
fn remove_selected_deletes_rows_and_prunes_selection() {
    let mut customers = vec![
        customer("C-1", "Ada", "Oslo", 1, 1.0),
        customer("C-2", "Bea", "Berlin", 1, 1.0),
        customer("C-3", "Cal", "Oslo", 1, 1.0),
    ];
    let mut selection = SelectionTracker::default();
    selection.toggle_row(RowKey::from("C-1"));
    selection.toggle_row(RowKey::from("C-3"));

    let removed = CustomerService::remove_selected(&mut customers, &mut selection);

    assert_eq!(removed, 2);
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].id, "C-2");
    assert!(selection.is_empty(), "selection should not keep deleted keys");
}

#[test]
fn read_config_defaults_when_file_is_missing() {
    let temp_dir = unique_test_dir("config-missing");

    let config = read_config(&temp_dir.join("settings.json")).expect("missing file is fine");

    assert_eq!(config, AppConfig::default());
}

#[test]
fn read_config_fills_unset_fields_with_defaults() {
    let temp_dir = unique_test_dir("config-partial");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let path = temp_dir.join("settings.json");
    fs::write(&path, r#"{ "initial_page_size": 20, "include_checkbox_column": false }"#)
        .expect("should write config fixture");

    let config = read_config(&path).expect("config should parse");

    assert_eq!(config.initial_page_size, 20);
    assert!(!config.include_checkbox_column);
    assert_eq!(config.window_title, "Deltadesk");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn read_config_reports_malformed_json() {
    let temp_dir = unique_test_dir("config-malformed");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let path = temp_dir.join("settings.json");
    fs::write(&path, "{ not json").expect("should write config fixture");

    let result = read_config(&path);

    assert!(matches!(result, Err(ConfigError::Parse { .. })));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn normalize_resets_unsupported_values() {
    let mut config = AppConfig {
        window_title: "  ".to_string(),
        log_level: "chatty".to_string(),
        initial_page_size: 25,
        include_checkbox_column: true,
    };

    let reset = config.normalize();

    assert_eq!(reset, vec!["initial_page_size", "log_level", "window_title"]);
    assert_eq!(config.initial_page_size, 10);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.window_title, "Deltadesk");
}

#[test]
fn ensure_webview_data_dir_creates_webview2_subdir() {
    let temp_dir = unique_test_dir("webview-data-dir");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");

    let webview_dir =
        ensure_webview_data_dir(&temp_dir).expect("webview data dir should be created");

    assert_eq!(webview_dir, temp_dir.join("webview2"));
    assert!(webview_dir.is_dir(), "webview2 directory should exist");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn sticky_header_styles_include_positioning() {
    let style = table_header_cell_style(true);

    assert!(style.contains("position: sticky"));
    assert!(style.contains("top: 0"));
    assert!(style.contains("z-index"));
    assert!(style.contains("cursor: pointer"));
    assert!(table_header_cell_style(false).contains("cursor: default"));
}

#[test]
fn table_container_style_allows_scroll() {
    let style = table_container_style();

    assert!(style.contains("overflow: auto"));
    assert!(style.contains("flex: 1"));
}

#[test]
fn column_alignment_right_aligns_numbers_only() {
    let customers = vec![customer("C-1", "Ada", "Oslo", 3, 10.0)];
    let columns = customer_columns();
    let alignment = |id: &str| {
        let column = columns
            .iter()
            .find(|column| column.id == id)
            .expect("column should exist");
        column_alignment(column, &customers)
    };

    assert_eq!(alignment("orders"), "right");
    assert_eq!(alignment("spent"), "right");
    assert_eq!(alignment("name"), "left");
    assert_eq!(alignment("last_order"), "left", "blank column stays left");
}

#[test]
fn format_number_with_commas_handles_decimals() {
    assert_eq!(format_number_with_commas(12345.678, 0), "12,346");
    assert_eq!(format_number_with_commas(12345.678, 2), "12,345.68");
    assert_eq!(format_number_with_commas(-1234.5, 2), "-1,234.50");
}

#[test]
fn cell_values_render_by_type() {
    let date = NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date");

    assert_eq!(CellValue::from(date).to_string(), "2026-10-18");
    assert_eq!(CellValue::Integer(1500).to_string(), "1,500");
    assert_eq!(CellValue::from("").to_string(), "");
    assert_eq!(CellValue::from(None::<i64>), CellValue::Empty);
}

thread_local! {
    static HOSTED_ROWS: RefCell<Vec<Greeting>> = RefCell::new(Vec::new());
}

fn hosted_greeting_table() -> Element {
    let data = HOSTED_ROWS.with(|rows| rows.borrow().clone());
    rsx! {
        DataTable::<Greeting> {
            columns: greeting_columns(),
            data,
            initial_page_index: 2,
        }
    }
}

fn host_rows(rows: Vec<Greeting>) {
    HOSTED_ROWS.with(|hosted| *hosted.borrow_mut() = rows);
}

fn labelled_rows(labels: &[&str]) -> Vec<Greeting> {
    labels
        .iter()
        .enumerate()
        .map(|(id, label)| Greeting {
            id,
            col1: label.to_string(),
            col2: String::new(),
        })
        .collect()
}

#[test]
fn data_table_renders_latest_rows_on_the_same_pass() {
    host_rows(labelled_rows(&["OLD0", "OLD1"]));
    let mut dom = VirtualDom::new(hosted_greeting_table);
    dom.rebuild_in_place();
    assert!(dioxus_ssr::render(&dom).contains("OLD0"));

    host_rows(labelled_rows(&["NEW0", "NEW1"]));
    dom.mark_dirty(ScopeId::APP);
    dom.render_immediate(&mut NoOpMutations);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("NEW0"), "table should render the new rows");
    assert!(!html.contains("OLD0"), "table should drop the old rows");
}

#[test]
fn data_table_applies_initial_page_once_rows_arrive() {
    host_rows(Vec::new());
    let mut dom = VirtualDom::new(hosted_greeting_table);
    dom.rebuild_in_place();
    assert!(dioxus_ssr::render(&dom).contains("No records found"));

    host_rows(numbered_rows(45));
    dom.mark_dirty(ScopeId::APP);
    dom.render_immediate(&mut NoOpMutations);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("row-020"), "third page should start at row 20");
    assert!(!html.contains("row-000"), "first page should not be shown");
}

#[test]
fn row_click_reports_only_the_clicked_row_once() {
    let rows = greetings();
    let mut selection = SelectionTracker::default();
    let mut reported = Vec::new();

    let selected = toggle_row_selection(
        &mut selection,
        &rows[1],
        Some(|row: Greeting| reported.push(row)),
    );

    assert!(selected);
    assert_eq!(reported, vec![rows[1].clone()], "callback should fire once with row 2");
    assert!(!selection.is_selected(&rows[0].row_key()));
    assert!(!selection.is_selected(&rows[2].row_key()));
}

#[test]
fn row_click_without_callback_still_updates_selection() {
    let rows = greetings();
    let mut selection = SelectionTracker::default();

    assert!(toggle_row_selection(&mut selection, &rows[0], None::<fn(Greeting)>));
    assert!(selection.is_selected(&rows[0].row_key()));

    assert!(!toggle_row_selection(&mut selection, &rows[0], None::<fn(Greeting)>));
    assert!(selection.is_empty());
}

#[test]
fn select_all_click_reports_new_state() {
    let rows = numbered_rows(25);
    let mut selection = SelectionTracker::default();
    let mut reported = Vec::new();

    assert!(toggle_all_selection(&mut selection, &rows, Some(|selected: bool| reported.push(selected))));
    assert!(!toggle_all_selection(&mut selection, &rows, Some(|selected: bool| reported.push(selected))));

    assert_eq!(reported, vec![true, false]);
    assert!(toggle_all_selection(&mut selection, &rows, None::<fn(bool)>));
    assert_eq!(selection.len(), 25, "missing callback should still select every row");
}

#[test]
fn jump_input_shows_current_page_after_commit() {
    assert_eq!(jump_input_value(Some("99"), 5), "99");
    assert_eq!(jump_input_value(None, 5), "5");
}

#[test]
fn indeterminate_script_targets_header_checkbox() {
    let script = indeterminate_script("select-all-3", true);

    assert!(script.contains("getElementById('select-all-3')"));
    assert!(script.contains("indeterminate = true"));
}
