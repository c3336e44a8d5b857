pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod interpreter;
