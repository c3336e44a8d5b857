use crate::interpreter::ast::{ColumnRef, Literal, parser::Parser};
use crate::interpreter::tokenizer::token::TokenTypes;

// Returns an error if the current token does not match the given token type
pub fn expect_token_type(parser: &Parser, token_type: TokenTypes) -> Result<(), String> {
    let token = parser.current_token()?;
    if token.token_type != token_type {
        return Err(parser.format_error());
    }
    Ok(())
}

// Checks the current token type and moves past it
pub fn consume_token(parser: &mut Parser, token_type: TokenTypes) -> Result<(), String> {
    expect_token_type(parser, token_type)?;
    parser.advance()
}

// Identifiers are case-insensitive, so they are stored in lower case
pub fn get_identifier(parser: &mut Parser) -> Result<String, String> {
    let token = parser.current_token()?;
    expect_token_type(parser, TokenTypes::Identifier)?;
    let result = token.value.to_ascii_lowercase();
    parser.advance()?;
    Ok(result)
}

pub fn get_table_name(parser: &mut Parser) -> Result<String, String> {
    get_identifier(parser)
}

// Returns a list of Strings from the tokens when they are formated as "identifier, identifier, ..."
pub fn tokens_to_identifier_list(parser: &mut Parser) -> Result<Vec<String>, String> {
    let mut identifiers: Vec<String> = vec![];
    loop {
        identifiers.push(get_identifier(parser)?);
        let token = parser.current_token()?;
        if token.token_type != TokenTypes::Comma {
            break;
        }
        parser.advance()?;
    }
    return Ok(identifiers);
}

// Same as tokens_to_identifier_list, wrapped in parentheses
pub fn parenthesized_identifier_list(parser: &mut Parser) -> Result<Vec<String>, String> {
    consume_token(parser, TokenTypes::LeftParen)?;
    let identifiers = tokens_to_identifier_list(parser)?;
    consume_token(parser, TokenTypes::RightParen)?;
    return Ok(identifiers);
}

pub fn token_to_literal(parser: &Parser) -> Result<Literal, String> {
    let token = parser.current_token()?;

    match token.token_type {
        TokenTypes::IntLiteral => {
            let num = token
                .value
                .parse::<i64>()
                .map_err(|_| parser.format_error())?;
            Ok(Literal::Int(num))
        }
        TokenTypes::String => Ok(Literal::Str(token.value.to_string())),
        TokenTypes::DateLiteral => Ok(Literal::Date(token.value.to_string())),
        TokenTypes::Null => Ok(Literal::Null),
        _ => Err(parser.format_error()),
    }
}

// Returns a list of literals from the tokens when they are formated as "value, value, ..."
pub fn tokens_to_literal_list(parser: &mut Parser) -> Result<Vec<Literal>, String> {
    let mut values: Vec<Literal> = vec![];
    loop {
        values.push(token_to_literal(parser)?);
        parser.advance()?;
        let token = parser.current_token()?;
        if token.token_type != TokenTypes::Comma {
            break;
        }
        parser.advance()?;
    }
    return Ok(values);
}

// Parses `column` or `table.column`
pub fn get_column_ref(parser: &mut Parser) -> Result<ColumnRef, String> {
    let first = get_identifier(parser)?;
    if parser.current_token()?.token_type != TokenTypes::Dot {
        return Ok(ColumnRef {
            table: None,
            column: first,
        });
    }
    parser.advance()?;
    let column = get_identifier(parser)?;
    return Ok(ColumnRef {
        table: Some(first),
        column,
    });
}
