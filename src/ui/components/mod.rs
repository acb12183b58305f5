pub mod app_header;
pub mod data_table;
pub mod delete_button;
pub mod pagination_controls;
pub mod sidebar;
