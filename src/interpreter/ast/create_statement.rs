use crate::interpreter::{
    ast::{
        ColumnSpec, CreateTableStatement, DataTypeSpec, ForeignKeySpec, SqlStatement,
        helpers::common::{
            consume_token, get_identifier, get_table_name, parenthesized_identifier_list,
        },
        parser::Parser,
    },
    tokenizer::token::TokenTypes,
};

pub fn build(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    consume_token(parser, TokenTypes::Table)?;
    let table_name = get_table_name(parser)?;
    consume_token(parser, TokenTypes::LeftParen)?;

    let mut statement = CreateTableStatement {
        table_name,
        columns: vec![],
        primary_keys: vec![],
        foreign_keys: vec![],
    };
    loop {
        table_element(parser, &mut statement)?;
        let token = parser.current_token()?;
        if token.token_type != TokenTypes::Comma {
            break;
        }
        parser.advance()?;
    }
    consume_token(parser, TokenTypes::RightParen)?;
    return Ok(SqlStatement::CreateTable(statement));
}

fn table_element(parser: &mut Parser, statement: &mut CreateTableStatement) -> Result<(), String> {
    let token_type = parser.current_token()?.token_type;
    match token_type {
        TokenTypes::Primary => {
            parser.advance()?;
            consume_token(parser, TokenTypes::Key)?;
            statement
                .primary_keys
                .push(parenthesized_identifier_list(parser)?);
        }
        TokenTypes::Foreign => {
            parser.advance()?;
            consume_token(parser, TokenTypes::Key)?;
            let columns = parenthesized_identifier_list(parser)?;
            consume_token(parser, TokenTypes::References)?;
            let referenced_table = get_table_name(parser)?;
            let referenced_columns = parenthesized_identifier_list(parser)?;
            statement.foreign_keys.push(ForeignKeySpec {
                columns,
                referenced_table,
                referenced_columns,
            });
        }
        _ => statement.columns.push(column_definition(parser)?),
    }
    Ok(())
}

// column := name type [NOT NULL]
fn column_definition(parser: &mut Parser) -> Result<ColumnSpec, String> {
    let name = get_identifier(parser)?;
    let data_type = data_type(parser)?;
    let mut not_null = false;
    if parser.current_token()?.token_type == TokenTypes::Not {
        parser.advance()?;
        consume_token(parser, TokenTypes::Null)?;
        not_null = true;
    }
    return Ok(ColumnSpec {
        name,
        data_type,
        not_null,
    });
}

fn data_type(parser: &mut Parser) -> Result<DataTypeSpec, String> {
    let token_type = parser.current_token()?.token_type;
    return match token_type {
        TokenTypes::Int => {
            parser.advance()?;
            Ok(DataTypeSpec::Int)
        }
        TokenTypes::Date => {
            parser.advance()?;
            Ok(DataTypeSpec::Date)
        }
        TokenTypes::Char => {
            parser.advance()?;
            consume_token(parser, TokenTypes::LeftParen)?;
            let token = parser.current_token()?;
            if token.token_type != TokenTypes::IntLiteral {
                return Err(parser.format_error());
            }
            let length = token
                .value
                .parse::<i64>()
                .map_err(|_| parser.format_error())?;
            parser.advance()?;
            consume_token(parser, TokenTypes::RightParen)?;
            Ok(DataTypeSpec::Char(length))
        }
        _ => Err(parser.format_error()),
    };
}
