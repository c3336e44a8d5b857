//! WHERE condition validation and three-valued evaluation.
//!
//! A condition is bound against a [`BindingContext`] before any row is
//! scanned, so resolution and type errors surface even for empty tables.

use std::cmp::Ordering;

use crate::db::table::core::value::{TypeFamily, Value};
use crate::db::table::operations::helpers::binding::BindingContext;
use crate::error::{Clause, DbError, DbResult};
use crate::interpreter::ast::{
    Literal, Operand, Operator, Predicate, PredicateKind, WhereClause,
};

#[derive(Debug, PartialEq, Clone)]
enum BoundOperand {
    Column(usize),
    Literal(Value),
}

#[derive(Debug, PartialEq, Clone)]
enum BoundPredicateKind {
    Comparison {
        left: BoundOperand,
        operator: Operator,
        right: BoundOperand,
    },
    NullCheck {
        index: usize,
        is_null: bool,
    },
}

#[derive(Debug, PartialEq, Clone)]
pub struct BoundPredicate {
    negated: bool,
    kind: BoundPredicateKind,
}

#[derive(Debug, PartialEq, Clone)]
pub enum BoundCondition {
    Single(BoundPredicate),
    And(BoundPredicate, BoundPredicate),
    Or(BoundPredicate, BoundPredicate),
}

pub fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::Int(val) => Value::Int(*val),
        Literal::Str(val) => Value::Char(val.clone()),
        Literal::Date(val) => Value::Date(val.clone()),
        Literal::Null => Value::Null,
    }
}

pub fn literal_family(literal: &Literal) -> Option<TypeFamily> {
    match literal {
        Literal::Int(_) => Some(TypeFamily::Int),
        Literal::Str(_) => Some(TypeFamily::Char),
        Literal::Date(_) => Some(TypeFamily::Date),
        Literal::Null => None,
    }
}

pub fn bind_where_clause(
    where_clause: &WhereClause,
    context: &BindingContext,
    clause: Clause,
) -> DbResult<BoundCondition> {
    Ok(match where_clause {
        WhereClause::Single(predicate) => {
            BoundCondition::Single(bind_predicate(predicate, context, clause)?)
        }
        WhereClause::And(first, second) => BoundCondition::And(
            bind_predicate(first, context, clause)?,
            bind_predicate(second, context, clause)?,
        ),
        WhereClause::Or(first, second) => BoundCondition::Or(
            bind_predicate(first, context, clause)?,
            bind_predicate(second, context, clause)?,
        ),
    })
}

fn check_qualifiers(predicate: &Predicate, context: &BindingContext, clause: Clause) -> DbResult<()> {
    let qualifiers = match &predicate.kind {
        PredicateKind::NullCheck { column, .. } => vec![&column.table],
        PredicateKind::Comparison { left, right, .. } => [left, right]
            .into_iter()
            .filter_map(|operand| match operand {
                Operand::Column(column) => Some(&column.table),
                Operand::Literal(_) => None,
            })
            .collect(),
    };
    for alias in qualifiers.into_iter().flatten() {
        if !context.has_alias(alias) {
            return Err(DbError::TableNotSpecified(clause));
        }
    }
    Ok(())
}

fn bind_operand(
    operand: &Operand,
    context: &BindingContext,
    clause: Clause,
) -> DbResult<(BoundOperand, Option<TypeFamily>)> {
    match operand {
        Operand::Column(column) => {
            let resolved = context.resolve(column, clause)?;
            Ok((
                BoundOperand::Column(resolved.index),
                Some(resolved.definition.data_type.family()),
            ))
        }
        Operand::Literal(literal) => Ok((
            BoundOperand::Literal(literal_value(literal)),
            literal_family(literal),
        )),
    }
}

pub fn bind_predicate(
    predicate: &Predicate,
    context: &BindingContext,
    clause: Clause,
) -> DbResult<BoundPredicate> {
    if context.is_single_table() {
        check_qualifiers(predicate, context, clause)?;
    }

    let kind = match &predicate.kind {
        PredicateKind::NullCheck { column, is_null } => BoundPredicateKind::NullCheck {
            index: context.resolve(column, clause)?.index,
            is_null: *is_null,
        },
        PredicateKind::Comparison {
            left,
            operator,
            right,
        } => {
            let (left, left_family) = bind_operand(left, context, clause)?;
            let (right, right_family) = bind_operand(right, context, clause)?;
            match (left_family, right_family) {
                (Some(first), Some(second)) if first == second => {
                    if first == TypeFamily::Char && operator.is_ordering() {
                        return Err(DbError::Incomparable);
                    }
                }
                _ => return Err(DbError::Incomparable),
            }
            BoundPredicateKind::Comparison {
                left,
                operator: *operator,
                right,
            }
        }
    };
    Ok(BoundPredicate {
        negated: predicate.negated,
        kind,
    })
}

impl BoundOperand {
    fn value<'a>(&'a self, row: &'a [Value]) -> &'a Value {
        match self {
            BoundOperand::Column(index) => &row[*index],
            BoundOperand::Literal(value) => value,
        }
    }
}

impl BoundPredicate {
    /// NULL never compares, not even to NULL: comparing it is an error.
    pub fn evaluate(&self, row: &[Value]) -> DbResult<bool> {
        let result = match &self.kind {
            BoundPredicateKind::NullCheck { index, is_null } => row[*index].is_null() == *is_null,
            BoundPredicateKind::Comparison {
                left,
                operator,
                right,
            } => {
                let ordering = left
                    .value(row)
                    .compare(right.value(row))
                    .ok_or(DbError::Incomparable)?;
                match operator {
                    Operator::Equals => ordering == Ordering::Equal,
                    Operator::NotEquals => ordering != Ordering::Equal,
                    Operator::LessThan => ordering == Ordering::Less,
                    Operator::LessEquals => ordering != Ordering::Greater,
                    Operator::GreaterThan => ordering == Ordering::Greater,
                    Operator::GreaterEquals => ordering != Ordering::Less,
                }
            }
        };
        Ok(result != self.negated)
    }
}

impl BoundCondition {
    /// Both sides of AND/OR are always evaluated.
    pub fn evaluate(&self, row: &[Value]) -> DbResult<bool> {
        Ok(match self {
            BoundCondition::Single(predicate) => predicate.evaluate(row)?,
            BoundCondition::And(first, second) => {
                let first = first.evaluate(row)?;
                let second = second.evaluate(row)?;
                first && second
            }
            BoundCondition::Or(first, second) => {
                let first = first.evaluate(row)?;
                let second = second.evaluate(row)?;
                first || second
            }
        })
    }
}
