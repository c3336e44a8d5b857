use crate::interpreter::ast::{
    Operand, Operator, Predicate, PredicateKind, WhereClause,
    helpers::common::{consume_token, get_column_ref, token_to_literal},
    parser::Parser,
};
use crate::interpreter::tokenizer::token::TokenTypes;

// condition := factor [(AND | OR) factor]
pub fn get_where_clause(parser: &mut Parser) -> Result<WhereClause, String> {
    let first = get_factor(parser)?;
    let token_type = parser.current_token()?.token_type;
    return match token_type {
        TokenTypes::And => {
            parser.advance()?;
            Ok(WhereClause::And(first, get_factor(parser)?))
        }
        TokenTypes::Or => {
            parser.advance()?;
            Ok(WhereClause::Or(first, get_factor(parser)?))
        }
        _ => Ok(WhereClause::Single(first)),
    };
}

// factor := [NOT] (predicate | '(' condition ')')
fn get_factor(parser: &mut Parser) -> Result<Predicate, String> {
    let mut negated = false;
    if parser.current_token()?.token_type == TokenTypes::Not {
        negated = true;
        parser.advance()?;
    }
    if parser.current_token()?.token_type != TokenTypes::LeftParen {
        let mut predicate = get_predicate(parser)?;
        predicate.negated ^= negated;
        return Ok(predicate);
    }

    parser.advance()?;
    // Only a single parenthesized predicate flattens to the two-predicate form.
    let inner = match get_where_clause(parser)? {
        WhereClause::Single(predicate) => predicate,
        _ => return Err(parser.format_error()),
    };
    consume_token(parser, TokenTypes::RightParen)?;
    return Ok(Predicate {
        negated: inner.negated ^ negated,
        kind: inner.kind,
    });
}

// predicate := operand op operand | colref IS [NOT] NULL
fn get_predicate(parser: &mut Parser) -> Result<Predicate, String> {
    let left = get_operand(parser)?;
    if parser.current_token()?.token_type == TokenTypes::Is {
        let column = match left {
            Operand::Column(column) => column,
            Operand::Literal(_) => return Err(parser.format_error()),
        };
        parser.advance()?;
        let mut is_null = true;
        if parser.current_token()?.token_type == TokenTypes::Not {
            is_null = false;
            parser.advance()?;
        }
        consume_token(parser, TokenTypes::Null)?;
        return Ok(Predicate {
            negated: false,
            kind: PredicateKind::NullCheck { column, is_null },
        });
    }

    let operator = get_operator(parser)?;
    let right = get_operand(parser)?;
    return Ok(Predicate {
        negated: false,
        kind: PredicateKind::Comparison {
            left,
            operator,
            right,
        },
    });
}

fn get_operand(parser: &mut Parser) -> Result<Operand, String> {
    let token_type = parser.current_token()?.token_type;
    return match token_type {
        TokenTypes::Identifier => Ok(Operand::Column(get_column_ref(parser)?)),
        TokenTypes::IntLiteral | TokenTypes::String | TokenTypes::DateLiteral => {
            let literal = token_to_literal(parser)?;
            parser.advance()?;
            Ok(Operand::Literal(literal))
        }
        _ => Err(parser.format_error()),
    };
}

fn get_operator(parser: &mut Parser) -> Result<Operator, String> {
    let operator = match parser.current_token()?.token_type {
        TokenTypes::Equals => Operator::Equals,
        TokenTypes::NotEquals => Operator::NotEquals,
        TokenTypes::LessThan => Operator::LessThan,
        TokenTypes::LessEquals => Operator::LessEquals,
        TokenTypes::GreaterThan => Operator::GreaterThan,
        TokenTypes::GreaterEquals => Operator::GreaterEquals,
        _ => return Err(parser.format_error()),
    };
    parser.advance()?;
    return Ok(operator);
}
