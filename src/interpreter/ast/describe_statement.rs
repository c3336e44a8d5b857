use crate::interpreter::{
    ast::{
        DescribeCommand, DescribeStatement, SqlStatement,
        helpers::common::{consume_token, get_table_name},
        parser::Parser,
    },
    tokenizer::token::TokenTypes,
};

// (EXPLAIN | DESCRIBE | DESC) name
pub fn build(parser: &mut Parser) -> Result<SqlStatement, String> {
    let command = match parser.current_token()?.token_type {
        TokenTypes::Explain => DescribeCommand::Explain,
        TokenTypes::Describe => DescribeCommand::Describe,
        TokenTypes::Desc => DescribeCommand::Desc,
        _ => return Err(parser.format_error()),
    };
    parser.advance()?;
    let table_name = get_table_name(parser)?;
    return Ok(SqlStatement::Describe(DescribeStatement {
        command,
        table_name,
    }));
}

// SHOW TABLES
pub fn build_show(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    consume_token(parser, TokenTypes::Tables)?;
    return Ok(SqlStatement::ShowTables);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::tokenizer::tokenize;

    #[test]
    fn every_describe_spelling_is_kept() {
        for (sql, command) in [
            ("explain users;", DescribeCommand::Explain),
            ("DESCRIBE users;", DescribeCommand::Describe),
            ("desc users;", DescribeCommand::Desc),
        ] {
            let mut parser = Parser::new(tokenize(sql));
            let expected = SqlStatement::Describe(DescribeStatement {
                command,
                table_name: "users".to_string(),
            });
            assert_eq!(Ok(expected), build(&mut parser));
        }
    }

    #[test]
    fn show_requires_tables_keyword() {
        let mut parser = Parser::new(tokenize("show tables;"));
        assert_eq!(Ok(SqlStatement::ShowTables), build_show(&mut parser));
        let mut parser = Parser::new(tokenize("show users;"));
        assert!(build_show(&mut parser).is_err());
    }
}
