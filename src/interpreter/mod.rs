use tracing::{debug, warn};

use crate::db::database::Database;
use crate::db::output::StatementOutput;
use crate::error::{DbError, DbResult};
use crate::interpreter::ast::SqlStatement;

pub mod ast;
pub mod tokenizer;

/// Parses every statement in `sql` and runs them in order. A statement that
/// fails to parse yields a syntax error and does not stop the ones after it.
/// Nothing after an EXIT statement runs.
pub fn run_sql(database: &mut Database, sql: &str) -> Vec<DbResult<StatementOutput>> {
    let tokens = tokenizer::tokenize(sql);
    let ast = ast::generate(tokens);

    let mut results = vec![];
    for sql_statement in ast {
        match sql_statement {
            Ok(SqlStatement::Exit) => {
                results.push(Ok(StatementOutput::Exit));
                break;
            }
            Ok(statement) => {
                debug!(?statement, "executing statement");
                results.push(database.execute(statement));
            }
            Err(error) => {
                warn!(%error, "rejected statement");
                results.push(Err(DbError::Syntax(error)));
            }
        }
    }
    return results;
}
