//! Interactive prompt loop.
//!
//! Input is buffered line by line until a line ends with `;`, then every
//! statement in the buffer runs in order. Single-line results and errors are
//! printed after the prompt; listings and query tables are printed bare.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::db::database::Database;
use crate::db::output::StatementOutput;
use crate::error::DbResult;
use crate::interpreter::run_sql;

pub fn cli<R: BufRead, W: Write>(
    mut database: Database,
    prompt: &str,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    let mut lines = input.lines();
    let mut buffer = String::new();

    loop {
        if buffer.is_empty() {
            write!(output, "{}", prompt)?;
            output.flush()?;
        }
        let Some(line) = lines.next() else {
            debug!("end of input");
            break;
        };
        let line = line?;
        buffer.push_str(&line);
        buffer.push('\n');
        if !line.trim_end().ends_with(';') {
            continue;
        }

        let results = run_sql(&mut database, &buffer);
        buffer.clear();
        if print_results(results, prompt, output)? {
            info!("exit requested");
            break;
        }
    }

    close(database, prompt, output)
}

/// Prints each result. Returns true once an EXIT statement is reached;
/// anything after it is dropped.
fn print_results<W: Write>(
    results: Vec<DbResult<StatementOutput>>,
    prompt: &str,
    output: &mut W,
) -> io::Result<bool> {
    for result in results {
        match result {
            Ok(StatementOutput::Exit) => return Ok(true),
            Ok(statement_output) if statement_output.is_message() => {
                writeln!(output, "{}{}", prompt, statement_output)?
            }
            Ok(statement_output) => writeln!(output, "{}", statement_output)?,
            Err(error) => writeln!(output, "{}{}", prompt, error)?,
        }
    }
    Ok(false)
}

fn close<W: Write>(database: Database, prompt: &str, output: &mut W) -> io::Result<()> {
    if let Err(error) = database.close() {
        writeln!(output, "{}{}", prompt, error)?;
    }
    Ok(())
}
