use crate::interpreter::ast::SqlStatement;
use crate::interpreter::ast::parser::Parser;
use crate::interpreter::ast::{
    create_statement, delete_statement, describe_statement, drop_statement, insert_statement,
    select_statement,
};
use crate::interpreter::ast::helpers::common::expect_token_type;
use crate::interpreter::tokenizer::token::TokenTypes;

pub trait StatementBuilder {
    fn build_create(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_drop(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_describe(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_show(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_insert(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_delete(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_select(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
    fn build_exit(&self, parser: &mut Parser) -> Result<SqlStatement, String>;
}

pub struct DefaultStatementBuilder;

impl StatementBuilder for DefaultStatementBuilder {
    fn build_create(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        create_statement::build(parser)
    }

    fn build_drop(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        drop_statement::build(parser)
    }

    fn build_describe(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        describe_statement::build(parser)
    }

    fn build_show(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        describe_statement::build_show(parser)
    }

    fn build_insert(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        insert_statement::build(parser)
    }

    fn build_delete(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        delete_statement::build(parser)
    }

    fn build_select(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        select_statement::build(parser)
    }

    fn build_exit(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        parser.advance()?;
        expect_token_type(parser, TokenTypes::SemiColon)?;
        return Ok(SqlStatement::Exit);
    }
}

#[cfg(test)]
pub struct MockStatementBuilder;

#[cfg(test)]
use crate::interpreter::ast::DropTableStatement;

// Consumes `<keyword> ;` and returns a fixed statement.
#[cfg(test)]
impl StatementBuilder for MockStatementBuilder {
    fn build_create(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        parser.advance()?;
        return Err("create is not mocked".to_string());
    }

    fn build_drop(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        parser.advance()?;
        parser.advance_past_semicolon()?;
        return Ok(SqlStatement::DropTable(DropTableStatement {
            table_name: "users".to_string(),
        }));
    }

    fn build_describe(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        parser.advance()?;
        return Err("describe is not mocked".to_string());
    }

    fn build_show(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        parser.advance()?;
        parser.advance_past_semicolon()?;
        return Ok(SqlStatement::ShowTables);
    }

    fn build_insert(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        parser.advance()?;
        return Err("insert is not mocked".to_string());
    }

    fn build_delete(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        parser.advance()?;
        return Err("delete is not mocked".to_string());
    }

    fn build_select(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        parser.advance()?;
        return Err("select is not mocked".to_string());
    }

    fn build_exit(&self, parser: &mut Parser) -> Result<SqlStatement, String> {
        parser.advance()?;
        return Ok(SqlStatement::Exit);
    }
}
