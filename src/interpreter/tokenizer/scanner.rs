use crate::interpreter::tokenizer::token::TokenTypes;

#[derive(Debug, PartialEq)]
pub struct Token<'a> {
    pub token_type: TokenTypes,
    pub value: &'a str,
    pub col_num: usize,
    pub line_num: usize,
}

pub struct Scanner<'a> {
    input: &'a str,
    current: usize,
    line_num: usize,
    col_num: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        return Self {
            input,
            current: 0,
            line_num: 1,
            col_num: 0,
        };
    }

    fn handle_skips(&mut self) -> bool {
        match self.current_char() {
            ' ' | '\t' | '\r' => {
                self.advance();
                return true;
            }
            '\n' => {
                self.advance();
                self.line_num += 1;
                self.col_num = self.current;
                return true;
            }
            '-' if self.peek_char() == '-' => {
                while self.current < self.input.len() && self.current_char() != '\n' {
                    self.advance();
                }
                return true;
            }
            _ => return false,
        }
    }

    fn advance(&mut self) {
        self.current += self.current_char().len_utf8().max(1);
    }

    fn current_char(&self) -> char {
        return self.input[self.current..].chars().next().unwrap_or('\0');
    }

    fn peek_char(&self) -> char {
        return self.char_at(1);
    }

    fn char_at(&self, offset: usize) -> char {
        return self.input[self.current..].chars().nth(offset).unwrap_or('\0');
    }

    fn build_token(&mut self, start: usize, token_type: TokenTypes) -> Token<'a> {
        self.advance();
        return Token {
            token_type,
            value: &self.input[start..self.current],
            col_num: start - self.col_num,
            line_num: self.line_num,
        };
    }

    fn build_string_token(&mut self, start: usize, token_type: TokenTypes) -> Token<'a> {
        return match token_type {
            TokenTypes::String => {
                self.advance();
                Token {
                    token_type,
                    value: &self.input[start + 1..self.current - 1],
                    col_num: start - self.col_num,
                    line_num: self.line_num,
                }
            }
            _ => Token {
                token_type,
                value: &self.input[start..self.current],
                col_num: start - self.col_num,
                line_num: self.line_num,
            },
        };
    }

    // Leaves `current` on the closing quote, or at the end of input when the
    // string is unterminated.
    fn read_string(&mut self, quote: char) -> TokenTypes {
        self.advance();
        while self.current_char() != quote {
            if self.current >= self.input.len() {
                return TokenTypes::Error;
            }
            if self.current_char() == '\n' {
                self.line_num += 1;
            }
            self.advance();
        }
        return TokenTypes::String;
    }

    fn read_identifier(&mut self, start: usize) -> TokenTypes {
        while self.peek_char().is_ascii_alphanumeric() || self.peek_char() == '_' {
            self.advance();
        }
        return match &self.input[start..=self.current] {
            slice if slice.eq_ignore_ascii_case("CREATE") => TokenTypes::Create,
            slice if slice.eq_ignore_ascii_case("TABLE") => TokenTypes::Table,
            slice if slice.eq_ignore_ascii_case("DROP") => TokenTypes::Drop,
            slice if slice.eq_ignore_ascii_case("EXPLAIN") => TokenTypes::Explain,
            slice if slice.eq_ignore_ascii_case("DESCRIBE") => TokenTypes::Describe,
            slice if slice.eq_ignore_ascii_case("DESC") => TokenTypes::Desc,
            slice if slice.eq_ignore_ascii_case("SHOW") => TokenTypes::Show,
            slice if slice.eq_ignore_ascii_case("TABLES") => TokenTypes::Tables,
            slice if slice.eq_ignore_ascii_case("INSERT") => TokenTypes::Insert,
            slice if slice.eq_ignore_ascii_case("INTO") => TokenTypes::Into,
            slice if slice.eq_ignore_ascii_case("VALUES") => TokenTypes::Values,
            slice if slice.eq_ignore_ascii_case("DELETE") => TokenTypes::Delete,
            slice if slice.eq_ignore_ascii_case("FROM") => TokenTypes::From,
            slice if slice.eq_ignore_ascii_case("WHERE") => TokenTypes::Where,
            slice if slice.eq_ignore_ascii_case("SELECT") => TokenTypes::Select,
            slice if slice.eq_ignore_ascii_case("AS") => TokenTypes::As,
            slice if slice.eq_ignore_ascii_case("JOIN") => TokenTypes::Join,
            slice if slice.eq_ignore_ascii_case("ON") => TokenTypes::On,
            slice if slice.eq_ignore_ascii_case("ORDER") => TokenTypes::Order,
            slice if slice.eq_ignore_ascii_case("BY") => TokenTypes::By,
            slice if slice.eq_ignore_ascii_case("ASC") => TokenTypes::Asc,
            slice if slice.eq_ignore_ascii_case("EXIT") => TokenTypes::Exit,
            slice if slice.eq_ignore_ascii_case("INT") => TokenTypes::Int,
            slice if slice.eq_ignore_ascii_case("CHAR") => TokenTypes::Char,
            slice if slice.eq_ignore_ascii_case("DATE") => TokenTypes::Date,
            slice if slice.eq_ignore_ascii_case("NULL") => TokenTypes::Null,
            slice if slice.eq_ignore_ascii_case("PRIMARY") => TokenTypes::Primary,
            slice if slice.eq_ignore_ascii_case("FOREIGN") => TokenTypes::Foreign,
            slice if slice.eq_ignore_ascii_case("KEY") => TokenTypes::Key,
            slice if slice.eq_ignore_ascii_case("REFERENCES") => TokenTypes::References,
            slice if slice.eq_ignore_ascii_case("NOT") => TokenTypes::Not,
            slice if slice.eq_ignore_ascii_case("AND") => TokenTypes::And,
            slice if slice.eq_ignore_ascii_case("OR") => TokenTypes::Or,
            slice if slice.eq_ignore_ascii_case("IS") => TokenTypes::Is,
            slice if slice.eq_ignore_ascii_case("COUNT") => TokenTypes::Count,
            slice if slice.eq_ignore_ascii_case("SUM") => TokenTypes::Sum,
            slice if slice.eq_ignore_ascii_case("MIN") => TokenTypes::Min,
            slice if slice.eq_ignore_ascii_case("MAX") => TokenTypes::Max,
            _ => TokenTypes::Identifier,
        };
    }

    fn matches_date_shape(&self) -> bool {
        let digits_at = |offsets: &[usize]| offsets.iter().all(|i| self.char_at(*i).is_ascii_digit());
        return digits_at(&[0, 1, 2, 3, 5, 6, 8, 9])
            && self.char_at(4) == '-'
            && self.char_at(7) == '-'
            && !self.char_at(10).is_ascii_alphanumeric();
    }

    fn read_digit(&mut self) -> TokenTypes {
        if self.matches_date_shape() {
            for _ in 0..9 {
                self.advance();
            }
            return TokenTypes::DateLiteral;
        }
        while self.peek_char().is_ascii_digit() {
            self.advance();
        }
        if self.peek_char().is_ascii_alphabetic() || self.peek_char() == '_' {
            return TokenTypes::Error;
        }
        return TokenTypes::IntLiteral;
    }

    pub fn next_token(&mut self) -> Option<Token<'a>> {
        while self.handle_skips() {}

        if self.current >= self.input.len() {
            return None;
        }
        let start = self.current;
        return match self.current_char() {
            quote @ ('\'' | '"') => {
                let token_type = self.read_string(quote);
                Some(self.build_string_token(start, token_type))
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let token_type = self.read_identifier(start);
                Some(self.build_token(start, token_type))
            }
            c if c.is_ascii_digit() => {
                let token_type = self.read_digit();
                Some(self.build_token(start, token_type))
            }
            '-' if self.peek_char().is_ascii_digit() => {
                self.advance();
                let token_type = match self.read_digit() {
                    TokenTypes::DateLiteral => TokenTypes::Error,
                    token_type => token_type,
                };
                Some(self.build_token(start, token_type))
            }
            '*' => Some(self.build_token(start, TokenTypes::Asterisk)),
            ';' => Some(self.build_token(start, TokenTypes::SemiColon)),
            '(' => Some(self.build_token(start, TokenTypes::LeftParen)),
            ')' => Some(self.build_token(start, TokenTypes::RightParen)),
            ',' => Some(self.build_token(start, TokenTypes::Comma)),
            '.' => Some(self.build_token(start, TokenTypes::Dot)),
            '=' => Some(self.build_token(start, TokenTypes::Equals)),
            '!' => {
                if self.peek_char() == '=' {
                    self.advance();
                    Some(self.build_token(start, TokenTypes::NotEquals))
                } else {
                    Some(self.build_token(start, TokenTypes::Error))
                }
            }
            '<' => {
                if self.peek_char() == '=' {
                    self.advance();
                    Some(self.build_token(start, TokenTypes::LessEquals))
                } else if self.peek_char() == '>' {
                    self.advance();
                    Some(self.build_token(start, TokenTypes::NotEquals))
                } else {
                    Some(self.build_token(start, TokenTypes::LessThan))
                }
            }
            '>' => {
                if self.peek_char() == '=' {
                    self.advance();
                    Some(self.build_token(start, TokenTypes::GreaterEquals))
                } else {
                    Some(self.build_token(start, TokenTypes::GreaterThan))
                }
            }
            _ => Some(self.build_token(start, TokenTypes::Error)),
        };
    }
}
