pub mod customer_service;
pub mod table_adapter;
