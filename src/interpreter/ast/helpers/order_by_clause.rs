use crate::interpreter::ast::{
    OrderByDirection, OrderByItem,
    helpers::common::{consume_token, get_column_ref},
    parser::Parser,
};
use crate::interpreter::tokenizer::token::TokenTypes;

pub fn get_order_by(parser: &mut Parser) -> Result<Vec<OrderByItem>, String> {
    if parser.current_token()?.token_type != TokenTypes::Order {
        return Ok(vec![]);
    }
    parser.advance()?;
    consume_token(parser, TokenTypes::By)?;

    let mut items = vec![];
    loop {
        let column = get_column_ref(parser)?;
        let direction = match parser.current_token()?.token_type {
            TokenTypes::Asc => {
                parser.advance()?;
                OrderByDirection::Asc
            }
            TokenTypes::Desc => {
                parser.advance()?;
                OrderByDirection::Desc
            }
            _ => OrderByDirection::Asc,
        };
        items.push(OrderByItem { column, direction });

        if parser.current_token()?.token_type != TokenTypes::Comma {
            break;
        }
        parser.advance()?;
    }
    return Ok(items);
}
