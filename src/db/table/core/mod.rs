pub mod column;
pub mod row;
pub mod schema;
pub mod value;
