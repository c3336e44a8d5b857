use clap::Parser;

use crate::db::database::Database;
use crate::db::store::{SqliteStore, StoreResult};

pub const DEFAULT_PROMPT: &str = "DB_2025> ";

#[derive(Parser, Debug, Clone)]
#[command(name = "kvrel")]
#[command(about = "kvrel - relational tables on top of a key-value store", long_about = None)]
pub struct Config {
    #[arg(short, long, default_value = "kvrel.db", env = "KVREL_DATABASE")]
    pub database: String,

    #[arg(long, env = "KVREL_IN_MEMORY", help = "Use the in-memory store (nothing is persisted)")]
    pub in_memory: bool,

    #[arg(long, default_value = DEFAULT_PROMPT, env = "KVREL_PROMPT", help = "Prompt, also prefixed to single-line results")]
    pub prompt: String,

    #[arg(long, default_value = "warn", env = "KVREL_LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    pub fn load() -> Self {
        Config::parse()
    }

    pub fn open_database(&self) -> StoreResult<Database> {
        if self.in_memory {
            return Ok(Database::in_memory());
        }
        let store = SqliteStore::open(&self.database)?;
        Ok(Database::new(Box::new(store)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: "kvrel.db".to_string(),
            in_memory: false,
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parsed_defaults() {
        let parsed = Config::parse_from(["kvrel"]);
        let default = Config::default();
        assert_eq!(default.database, parsed.database);
        assert_eq!(default.prompt, parsed.prompt);
        assert_eq!(default.log_level, parsed.log_level);
        assert!(!parsed.in_memory);
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = Config::parse_from([
            "kvrel",
            "-d",
            "/tmp/other.db",
            "--in-memory",
            "--prompt",
            "> ",
            "--log-level",
            "debug",
        ]);
        assert_eq!("/tmp/other.db", parsed.database);
        assert!(parsed.in_memory);
        assert_eq!("> ", parsed.prompt);
        assert_eq!("debug", parsed.log_level);
    }

    #[test]
    fn in_memory_flag_opens_memory_store() {
        let config = Config {
            in_memory: true,
            ..Config::default()
        };
        let database = config.open_database().unwrap();
        assert!(database.records().unwrap().is_empty());
    }
}
