//! Ergonomic construction helpers for the query tree.
//!
//! These avoid the verbosity of assembling the structs directly:
//!
//! ```
//! use sqlrender::prelude::*;
//!
//! let def = SelectBuilder::from_table("robots")
//!     .column(star())
//!     .filter(binary(col("type"), "=", text("mechanical")))
//!     .limit(10)
//!     .build();
//! ```

use crate::ast::expr::{CaseWhen, Expr, FunctionCall, ScalarValue};
use crate::ast::select::{
    ColumnSpec, GroupSpec, Join, JoinKind, LimitSpec, LimitValue, OrderDirection, OrderItem,
    OrderSpec, Predicate, Select, TableSpec,
};

/// An unqualified column reference.
pub fn col(name: impl Into<String>) -> Expr {
    Expr::Qualified {
        name: name.into(),
        domain: None,
    }
}

/// A `domain.name` column reference.
pub fn qualified(domain: impl Into<String>, name: impl Into<String>) -> Expr {
    Expr::Qualified {
        name: name.into(),
        domain: Some(domain.into()),
    }
}

/// All columns, `*`.
pub fn star() -> Expr {
    Expr::All { domain: None }
}

/// All columns of one domain, `domain.*`.
pub fn star_of(domain: impl Into<String>) -> Expr {
    Expr::All {
        domain: Some(domain.into()),
    }
}

/// A raw SQL fragment injected verbatim.
pub fn lit(value: impl Into<String>) -> Expr {
    Expr::Literal {
        value: value.into(),
    }
}

/// A single-quoted string literal with embedded quotes doubled.
pub fn text(value: &str) -> Expr {
    Expr::Literal {
        value: format!("'{}'", value.replace('\'', "''")),
    }
}

/// A bare bind placeholder token.
pub fn placeholder(value: impl Into<String>) -> Expr {
    Expr::Placeholder {
        value: value.into(),
        raw_value: None,
        times: None,
    }
}

/// An IN-list placeholder that expands to `times` numbered tokens, with
/// the count overridable through the definition's bind-count table.
pub fn placeholder_times(
    value: impl Into<String>,
    raw_value: impl Into<String>,
    times: usize,
) -> Expr {
    Expr::Placeholder {
        value: value.into(),
        raw_value: Some(raw_value.into()),
        times: Some(times),
    }
}

/// `left op right`.
pub fn binary(left: Expr, op: impl Into<String>, right: Expr) -> Expr {
    Expr::BinaryOp {
        op: op.into(),
        left: Box::new(left),
        right: Box::new(right),
    }
}

/// A postfix unary operator, `operand OP`.
pub fn unary_left(operand: Expr, op: impl Into<String>) -> Expr {
    Expr::UnaryOp {
        op: op.into(),
        left: Some(Box::new(operand)),
        right: None,
    }
}

/// A prefix unary operator, `OP operand`.
pub fn unary_right(op: impl Into<String>, operand: Expr) -> Expr {
    Expr::UnaryOp {
        op: op.into(),
        left: None,
        right: Some(Box::new(operand)),
    }
}

/// Parenthesized sub-expression.
pub fn parens(expr: Expr) -> Expr {
    Expr::Parentheses {
        left: Box::new(expr),
    }
}

/// A function call, `NAME(args)`.
pub fn func(name: impl Into<String>, arguments: Vec<Expr>) -> Expr {
    Expr::FunctionCall(FunctionCall {
        name: name.into(),
        arguments,
        distinct: false,
    })
}

/// A function call over distinct inputs, `NAME(DISTINCT args)`.
pub fn func_distinct(name: impl Into<String>, arguments: Vec<Expr>) -> Expr {
    Expr::FunctionCall(FunctionCall {
        name: name.into(),
        arguments,
        distinct: true,
    })
}

/// A comma-joined, parenthesized list of sub-expressions.
pub fn list(value: Vec<Expr>) -> Expr {
    Expr::List {
        value,
        separator: None,
        parentheses: None,
    }
}

/// `CAST(expr AS target)` where target is a raw type name.
pub fn cast(expr: Expr, target: impl Into<String>) -> Expr {
    Expr::Cast {
        left: Box::new(expr),
        right: Box::new(lit(target)),
    }
}

/// `CONVERT(expr USING charset)`.
pub fn convert(expr: Expr, using: impl Into<String>) -> Expr {
    Expr::Convert {
        left: Box::new(expr),
        right: Box::new(lit(using)),
    }
}

/// A scalar wrapper around a nested expression.
pub fn scalar(expr: Expr) -> Expr {
    Expr::Scalar {
        value: ScalarValue::Expr(Box::new(expr)),
    }
}

/// An embedded sub-select, rendered parenthesized.
pub fn subselect(def: Select) -> Expr {
    Expr::Select {
        value: Box::new(def),
    }
}

/// Start a CASE expression over `operand`.
pub fn case(operand: Expr) -> CaseBuilder {
    CaseBuilder {
        expr: operand,
        when_clauses: Vec::new(),
    }
}

pub struct CaseBuilder {
    expr: Expr,
    when_clauses: Vec<CaseWhen>,
}

impl CaseBuilder {
    pub fn when(mut self, when: Expr, then: Expr) -> Self {
        self.when_clauses.push(CaseWhen::When { when, then });
        self
    }

    pub fn otherwise(mut self, then: Expr) -> Self {
        self.when_clauses.push(CaseWhen::Else { then });
        self
    }

    pub fn build(self) -> Expr {
        Expr::Case {
            expr: Box::new(self.expr),
            when_clauses: self.when_clauses,
        }
    }
}

/// Fluent assembly of a [`Select`] definition.
pub struct SelectBuilder {
    def: Select,
}

impl SelectBuilder {
    pub fn from_table(table: impl Into<TableSpec>) -> Self {
        Self {
            def: Select {
                tables: vec![table.into()],
                ..Select::default()
            },
        }
    }

    /// Add another FROM table.
    pub fn table(mut self, table: impl Into<TableSpec>) -> Self {
        self.def.tables.push(table.into());
        self
    }

    pub fn column(mut self, column: impl Into<ColumnSpec>) -> Self {
        self.def.columns.push(column.into());
        self
    }

    pub fn columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnSpec>,
    {
        self.def.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn distinct(mut self) -> Self {
        self.def.distinct = Some(true);
        self
    }

    /// Explicit `SELECT ALL`.
    pub fn all(mut self) -> Self {
        self.def.distinct = Some(false);
        self
    }

    pub fn join(mut self, kind: Option<JoinKind>, source: impl Into<TableSpec>, conditions: Vec<Expr>) -> Self {
        self.def.joins.push(Join {
            kind,
            source: source.into(),
            conditions,
        });
        self
    }

    /// AND-merge a condition into the WHERE clause. A previously set raw
    /// WHERE fragment is replaced.
    pub fn filter(mut self, expr: Expr) -> Self {
        self.def.where_clause = Some(match self.def.where_clause.take() {
            Some(Predicate::Expr(existing)) => Predicate::Expr(binary(existing, "AND", expr)),
            _ => Predicate::Expr(expr),
        });
        self
    }

    /// Replace the WHERE clause with a raw fragment used verbatim.
    pub fn where_raw(mut self, sql: impl Into<String>) -> Self {
        self.def.where_clause = Some(Predicate::Raw(sql.into()));
        self
    }

    pub fn group_by(mut self, fields: Vec<Expr>) -> Self {
        self.def.group = Some(GroupSpec::Fields(fields));
        self
    }

    pub fn having(mut self, expr: Expr) -> Self {
        self.def.having = Some(expr);
        self
    }

    pub fn order_by(mut self, expr: Expr, direction: Option<OrderDirection>) -> Self {
        let item = OrderItem { expr, direction };
        match &mut self.def.order {
            Some(OrderSpec::Fields(items)) => items.push(item),
            _ => self.def.order = Some(OrderSpec::Fields(vec![item])),
        }
        self
    }

    pub fn limit(mut self, limit: impl Into<LimitSpec>) -> Self {
        self.def.limit = Some(limit.into());
        self
    }

    pub fn offset(mut self, offset: impl Into<LimitValue>) -> Self {
        self.def.limit = Some(match self.def.limit.take() {
            Some(LimitSpec::Value(number)) | Some(LimitSpec::Clause { number, .. }) => {
                LimitSpec::Clause {
                    number,
                    offset: Some(offset.into()),
                }
            }
            None => LimitSpec::Clause {
                number: LimitValue::Number(0),
                offset: Some(offset.into()),
            },
        });
        self
    }

    pub fn for_update(mut self) -> Self {
        self.def.for_update = true;
        self
    }

    /// Record the driver-level expansion count for one IN-list parameter.
    pub fn bind_count(mut self, raw: impl Into<String>, count: usize) -> Self {
        self.def.bind_counts.insert(raw.into(), count);
        self
    }

    pub fn build(self) -> Select {
        self.def
    }
}
