pub mod core;
pub mod operations;
#[cfg(test)]
pub mod test_utils;
