use crate::interpreter::{
    ast::{
        InsertIntoStatement, SqlStatement,
        helpers::common::{
            consume_token, get_table_name, parenthesized_identifier_list, tokens_to_literal_list,
        },
        parser::Parser,
    },
    tokenizer::token::TokenTypes,
};

pub fn build(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    consume_token(parser, TokenTypes::Into)?;
    let table_name = get_table_name(parser)?;

    let mut columns = None;
    if parser.current_token()?.token_type == TokenTypes::LeftParen {
        columns = Some(parenthesized_identifier_list(parser)?);
    }

    consume_token(parser, TokenTypes::Values)?;
    consume_token(parser, TokenTypes::LeftParen)?;
    let values = tokens_to_literal_list(parser)?;
    consume_token(parser, TokenTypes::RightParen)?;

    return Ok(SqlStatement::InsertInto(InsertIntoStatement {
        table_name,
        columns,
        values,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::ast::Literal;
    use crate::interpreter::tokenizer::tokenize;

    fn parse(sql: &str) -> Result<SqlStatement, String> {
        let mut parser = Parser::new(tokenize(sql));
        build(&mut parser)
    }

    #[test]
    fn insert_statement_without_columns_is_generated_correctly() {
        let expected = SqlStatement::InsertInto(InsertIntoStatement {
            table_name: "users".to_string(),
            columns: None,
            values: vec![
                Literal::Int(1),
                Literal::Str("Alice".to_string()),
                Literal::Null,
            ],
        });
        assert_eq!(Ok(expected), parse("INSERT INTO users VALUES (1, 'Alice', null);"));
    }

    #[test]
    fn insert_statement_with_columns_is_generated_correctly() {
        let expected = SqlStatement::InsertInto(InsertIntoStatement {
            table_name: "users".to_string(),
            columns: Some(vec!["joined".to_string(), "id".to_string()]),
            values: vec![Literal::Date("2021-03-04".to_string()), Literal::Int(2)],
        });
        assert_eq!(
            Ok(expected),
            parse("insert into Users (Joined, ID) values (2021-03-04, 2);")
        );
    }

    #[test]
    fn insert_statement_with_missing_parts_errors() {
        assert!(parse("insert users values (1);").is_err());
        assert!(parse("insert into users (1);").is_err());
        assert!(parse("insert into users values ();").is_err());
        assert!(parse("insert into users values (1, id);").is_err());
    }
}
