use crate::interpreter::{
    ast::{
        AggregateFunction, ColumnRef, JoinClause, SelectItem, SelectStatement, Selectable,
        SqlStatement, TableReference,
        helpers::common::{consume_token, get_column_ref, get_identifier, get_table_name},
        helpers::order_by_clause::get_order_by,
        helpers::where_clause::get_where_clause,
        parser::Parser,
    },
    tokenizer::token::TokenTypes,
};

pub fn build(parser: &mut Parser) -> Result<SqlStatement, String> {
    parser.advance()?;
    let columns = get_select_items(parser)?;

    consume_token(parser, TokenTypes::From)?;
    let mut from = vec![];
    loop {
        from.push(get_table_reference(parser)?);
        if parser.current_token()?.token_type != TokenTypes::Comma {
            break;
        }
        parser.advance()?;
    }

    let mut joins = vec![];
    while parser.current_token()?.token_type == TokenTypes::Join {
        joins.push(get_join(parser)?);
    }

    let mut where_clause = None;
    if parser.current_token()?.token_type == TokenTypes::Where {
        parser.advance()?;
        where_clause = Some(get_where_clause(parser)?);
    }

    let order_by = get_order_by(parser)?;

    return Ok(SqlStatement::Select(SelectStatement {
        columns,
        from,
        joins,
        where_clause,
        order_by,
    }));
}

fn get_select_items(parser: &mut Parser) -> Result<Vec<SelectItem>, String> {
    if parser.current_token()?.token_type == TokenTypes::Asterisk {
        parser.advance()?;
        return Ok(vec![]);
    }

    let mut items = vec![];
    loop {
        let selectable = get_selectable(parser)?;
        let mut alias = None;
        if parser.current_token()?.token_type == TokenTypes::As {
            parser.advance()?;
            alias = Some(get_identifier(parser)?);
        }
        items.push(SelectItem { selectable, alias });

        if parser.current_token()?.token_type != TokenTypes::Comma {
            break;
        }
        parser.advance()?;
    }
    return Ok(items);
}

fn get_selectable(parser: &mut Parser) -> Result<Selectable, String> {
    let function = match parser.current_token()?.token_type {
        TokenTypes::Count => AggregateFunction::Count,
        TokenTypes::Sum => AggregateFunction::Sum,
        TokenTypes::Max => AggregateFunction::Max,
        TokenTypes::Min => AggregateFunction::Min,
        _ => return Ok(Selectable::Column(get_column_ref(parser)?)),
    };
    parser.advance()?;
    consume_token(parser, TokenTypes::LeftParen)?;

    if parser.current_token()?.token_type == TokenTypes::Asterisk {
        if function != AggregateFunction::Count {
            return Err(parser.format_error());
        }
        parser.advance()?;
        consume_token(parser, TokenTypes::RightParen)?;
        return Ok(Selectable::CountAll);
    }

    let column = get_column_ref(parser)?;
    consume_token(parser, TokenTypes::RightParen)?;
    return Ok(Selectable::Aggregate { function, column });
}

// table_ref := name [[AS] name]
fn get_table_reference(parser: &mut Parser) -> Result<TableReference, String> {
    let name = get_table_name(parser)?;
    let alias = match parser.current_token()?.token_type {
        TokenTypes::As => {
            parser.advance()?;
            Some(get_identifier(parser)?)
        }
        TokenTypes::Identifier => Some(get_identifier(parser)?),
        _ => None,
    };
    return Ok(TableReference { name, alias });
}

// JOIN name ON alias.column = alias.column
fn get_join(parser: &mut Parser) -> Result<JoinClause, String> {
    parser.advance()?;
    let table_name = get_table_name(parser)?;
    consume_token(parser, TokenTypes::On)?;
    let left = get_qualified_column_ref(parser)?;
    consume_token(parser, TokenTypes::Equals)?;
    let right = get_qualified_column_ref(parser)?;
    return Ok(JoinClause {
        table_name,
        left,
        right,
    });
}

fn get_qualified_column_ref(parser: &mut Parser) -> Result<ColumnRef, String> {
    let column = get_column_ref(parser)?;
    if column.table.is_none() {
        return Err(parser.format_error());
    }
    return Ok(column);
}
