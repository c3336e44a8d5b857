use crate::interpreter::tokenizer::scanner::Token;
use crate::interpreter::tokenizer::token::TokenTypes;

pub fn token(token_type: TokenTypes, value: &'static str) -> Token<'static> {
    token_with_location(token_type, value, 0, 1)
}

pub fn token_with_location(
    token_type: TokenTypes,
    value: &'static str,
    col_num: usize,
    line_num: usize,
) -> Token<'static> {
    Token {
        token_type,
        value,
        col_num,
        line_num,
    }
}
