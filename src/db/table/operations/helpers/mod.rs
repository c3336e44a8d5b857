pub mod binding;
pub mod order_by_clause;
pub mod predicate;
