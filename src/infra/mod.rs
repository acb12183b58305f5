pub mod engine;
pub mod import;
