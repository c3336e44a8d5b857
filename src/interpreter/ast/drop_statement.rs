use crate::interpreter::{
    ast::{
        DropTableStatement, SqlStatement,
        helpers::common::{consume_token, get_table_name},
        parser::Parser,
    },
    tokenizer::token::TokenTypes,
};

pub fn build(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    consume_token(parser, TokenTypes::Table)?;
    let table_name = get_table_name(parser)?;
    return Ok(SqlStatement::DropTable(DropTableStatement { table_name }));
}
