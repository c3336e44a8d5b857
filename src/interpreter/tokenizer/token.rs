#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TokenTypes {
    // Keywords
    Create, Table, Drop, Explain, Describe, Desc, Show, Tables,
    Insert, Into, Values, Delete, From, Where, Select, As,
    Join, On, Order, By, Asc, Exit,
    // Data Types
    Int, Char, Date, Null,
    // Constraints
    Primary, Foreign, Key, References, Not,
    // Logical Operators
    And, Or, Is,
    Equals, NotEquals, LessThan, LessEquals, GreaterThan, GreaterEquals,
    // Aggregate Functions
    Count, Sum, Min, Max,
    // Single Character Tokens
    Asterisk, SemiColon, LeftParen, RightParen, Comma, Dot,
    // Literals
    String, IntLiteral, DateLiteral,
    // Others
    Identifier,
    EOF, Error,
}
