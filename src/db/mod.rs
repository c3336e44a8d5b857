pub mod catalog;
pub mod database;
pub mod output;
pub mod row_store;
pub mod store;
pub mod table;
