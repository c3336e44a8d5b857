use crate::interpreter::{
    ast::{
        DeleteStatement, SqlStatement,
        helpers::common::{consume_token, get_table_name},
        helpers::where_clause::get_where_clause,
        parser::Parser,
    },
    tokenizer::token::TokenTypes,
};

pub fn build(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    consume_token(parser, TokenTypes::From)?;
    let table_name = get_table_name(parser)?;

    let mut where_clause = None;
    if parser.current_token()?.token_type == TokenTypes::Where {
        parser.advance()?;
        where_clause = Some(get_where_clause(parser)?);
    }
    return Ok(SqlStatement::Delete(DeleteStatement {
        table_name,
        where_clause,
    }));
}
