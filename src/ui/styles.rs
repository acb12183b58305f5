use crate::domain::table::cell::CellValue;
use crate::domain::table::column::{ColumnDef, TableRow};

pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; overflow: hidden; font-family: system-ui, sans-serif; color: #1e293b;"
}

pub fn content_area_style() -> &'static str {
    "position: relative; display: flex; flex-direction: column; flex: 1; min-width: 0; overflow-y: auto; overflow-x: hidden; background: #f1f5f9;"
}

pub fn sidebar_style(open: bool) -> String {
    let width = if open { 240 } else { 64 };
    format!(
        "width: {width}px; flex-shrink: 0; background: #1e293b; color: #e2e8f0; display: flex; flex-direction: column; gap: 4px; padding: 16px 8px; transition: width 150ms ease;"
    )
}

pub fn sidebar_link_style(active: bool) -> &'static str {
    if active {
        "display: block; padding: 8px 12px; border-radius: 6px; color: #fff; background: #334155; text-decoration: none;"
    } else {
        "display: block; padding: 8px 12px; border-radius: 6px; color: #cbd5e1; text-decoration: none;"
    }
}

pub fn header_style() -> &'static str {
    "position: sticky; top: 0; z-index: 30; display: flex; align-items: center; justify-content: space-between; height: 64px; padding: 0 24px; background: #fff; border-bottom: 1px solid #e2e8f0;"
}

pub fn button_style(primary: bool) -> &'static str {
    if primary {
        "border: none; background: #6366f1; color: #fff; padding: 6px 14px; border-radius: 6px; cursor: pointer;"
    } else {
        "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    }
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd;"
}

pub fn table_header_cell_style(sortable: bool) -> String {
    let cursor = if sortable { "pointer" } else { "default" };
    format!(
        "position: sticky; top: 0; z-index: 2; background: aliceblue; color: black; font-weight: bold; border-bottom: solid 3px red; padding: 6px 10px; text-align: left; white-space: nowrap; user-select: none; cursor: {cursor};"
    )
}

pub fn checkbox_cell_style() -> &'static str {
    "width: 40px; border: solid 1px gray; text-align: center;"
}

pub fn table_cell_style(alignment: &str) -> String {
    format!("padding: 10px; border: solid 1px gray; background: papayawhip; text-align: {alignment};")
}

pub fn table_row_style(selected: bool) -> &'static str {
    if selected {
        "cursor: pointer; outline: 2px solid #6366f1; outline-offset: -2px;"
    } else {
        "cursor: pointer;"
    }
}

pub fn pagination_bar_style() -> &'static str {
    "display: flex; flex-wrap: wrap; gap: 8px; align-items: center; padding: 8px 0;"
}

/// Numeric columns are right-aligned; anything else, or a column with no
/// values, stays left-aligned.
pub fn column_alignment<T: TableRow>(column: &ColumnDef<T>, rows: &[T]) -> &'static str {
    let mut saw_value = false;
    for row in rows {
        let value = column.value(row);
        if value == CellValue::Empty {
            continue;
        }
        if !value.is_numeric() {
            return "left";
        }
        saw_value = true;
    }
    if saw_value {
        "right"
    } else {
        "left"
    }
}
