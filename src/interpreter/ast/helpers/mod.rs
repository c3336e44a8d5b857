pub mod common;
pub mod order_by_clause;
pub mod where_clause;
