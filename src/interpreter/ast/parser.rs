use crate::interpreter::{
    ast::{
        SqlStatement,
        statement_builder::{DefaultStatementBuilder, StatementBuilder},
    },
    tokenizer::scanner::Token,
    tokenizer::token::TokenTypes,
};

pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    current: usize,
    builder: &'a dyn StatementBuilder,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        return Self {
            tokens,
            current: 0,
            builder: &DefaultStatementBuilder {},
        };
    }

    pub fn current_token(&self) -> Result<&Token<'a>, String> {
        if self.current >= self.tokens.len() {
            return Err(self.format_error());
        }
        return Ok(&self.tokens[self.current]);
    }

    pub fn advance(&mut self) -> Result<(), String> {
        if let Ok(token) = self.current_token() {
            if token.token_type == TokenTypes::SemiColon {
                return Err(self.format_error());
            }
        }
        self.current += 1;
        Ok(())
    }

    pub fn advance_past_semicolon(&mut self) -> Result<(), String> {
        if let Ok(token) = self.current_token() {
            if token.token_type == TokenTypes::SemiColon {
                self.current += 1;
                return Ok(());
            }
        }
        return Err(self.format_error());
    }

    pub fn format_error(&self) -> String {
        if self.current < self.tokens.len() {
            let token = &self.tokens[self.current];
            if token.token_type == TokenTypes::EOF {
                return "Error at end of input.".to_string();
            }
            return format!(
                "Error at line {:?}, column {:?}: Unexpected value: {}",
                token.line_num, token.col_num, token.value
            );
        } else {
            return "Error at end of input.".to_string();
        }
    }

    pub fn next_statement(&mut self) -> Option<Result<SqlStatement, String>> {
        let token_type = match self.current_token() {
            Ok(token) => token.token_type,
            Err(error) => return Some(Err(error)),
        };
        let builder = self.builder;
        return match token_type {
            TokenTypes::EOF => None,
            TokenTypes::Create => Some(builder.build_create(self)),
            TokenTypes::Drop => Some(builder.build_drop(self)),
            TokenTypes::Explain | TokenTypes::Describe | TokenTypes::Desc => {
                Some(builder.build_describe(self))
            }
            TokenTypes::Show => Some(builder.build_show(self)),
            TokenTypes::Insert => Some(builder.build_insert(self)),
            TokenTypes::Delete => Some(builder.build_delete(self)),
            TokenTypes::Select => Some(builder.build_select(self)),
            TokenTypes::Exit => Some(builder.build_exit(self)),
            _ => Some(Err(self.format_error())),
        };
    }
}
