pub mod table_engine;
