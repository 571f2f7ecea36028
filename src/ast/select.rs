use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ast::expr::{Expr, ScalarValue};

/// A table reference: a plain name (escaped as-is) or the positional
/// `[name, schema?, alias?]` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableSpec {
    Name(String),
    Triple {
        name: String,
        schema: Option<String>,
        alias: Option<String>,
    },
}

impl From<&str> for TableSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TableSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// First slot of a legacy positional column triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnItem {
    Star,
    Name(String),
    Expr(Box<Expr>),
}

/// An output column: a plain qualified-name string, a legacy
/// `[expr_or_name, domain?, alias?]` triple, or a full expression node
/// with an optional alias. `sql_alias` wins over `alias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnSpec {
    Name(String),
    Triple {
        column: ColumnItem,
        domain: Option<String>,
        alias: Option<String>,
    },
    Node {
        expr: Expr,
        sql_alias: Option<String>,
        alias: Option<String>,
    },
}

impl ColumnSpec {
    /// Normalize the legacy positional form into a canonical expression
    /// node. Plain names and expression nodes come back unchanged.
    pub fn canonicalize(&self) -> ColumnSpec {
        match self {
            ColumnSpec::Triple {
                column,
                domain,
                alias,
            } => {
                let expr = match column {
                    ColumnItem::Star => Expr::All {
                        domain: domain.clone(),
                    },
                    ColumnItem::Name(name) => Expr::Qualified {
                        name: name.clone(),
                        domain: domain.clone(),
                    },
                    ColumnItem::Expr(e) => Expr::Scalar {
                        value: ScalarValue::Expr(e.clone()),
                    },
                };
                ColumnSpec::Node {
                    expr,
                    sql_alias: None,
                    alias: alias.clone(),
                }
            }
            other => other.clone(),
        }
    }
}

impl From<&str> for ColumnSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ColumnSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Expr> for ColumnSpec {
    fn from(expr: Expr) -> Self {
        Self::Node {
            expr,
            sql_alias: None,
            alias: None,
        }
    }
}

/// Join flavor token. `None` on a [`Join`] renders a plain `JOIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Full => "FULL",
            JoinKind::Cross => "CROSS",
        }
    }
}

/// A join definition. Multiple condition nodes are AND-joined; an empty
/// condition list renders the always-true literal `1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    #[serde(default)]
    pub kind: Option<JoinKind>,
    pub source: TableSpec,
    #[serde(default)]
    pub conditions: Vec<Expr>,
}

/// WHERE/HAVING payload: a structured expression or a raw fragment used
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    Expr(Expr),
    Raw(String),
}

/// GROUP BY payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupSpec {
    Raw(String),
    Fields(Vec<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// One ORDER BY field with an optional direction token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub expr: Expr,
    #[serde(default)]
    pub direction: Option<OrderDirection>,
}

/// ORDER BY payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderSpec {
    Raw(String),
    Fields(Vec<OrderItem>),
}

/// One side of a LIMIT clause; either side may itself be an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LimitValue {
    Number(u64),
    Expr(Box<Expr>),
}

impl From<u64> for LimitValue {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<Expr> for LimitValue {
    fn from(e: Expr) -> Self {
        Self::Expr(Box::new(e))
    }
}

/// LIMIT payload: a bare row count or a `{number, offset?}` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LimitSpec {
    Value(LimitValue),
    Clause {
        number: LimitValue,
        offset: Option<LimitValue>,
    },
}

impl From<u64> for LimitSpec {
    fn from(n: u64) -> Self {
        Self::Value(LimitValue::Number(n))
    }
}

impl From<(u64, u64)> for LimitSpec {
    fn from((number, offset): (u64, u64)) -> Self {
        Self::Clause {
            number: LimitValue::Number(number),
            offset: Some(LimitValue::Number(offset)),
        }
    }
}

/// A complete SELECT definition. Built once by the caller for a single
/// render call; the renderer never mutates or retains it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Select {
    pub tables: Vec<TableSpec>,
    pub columns: Vec<ColumnSpec>,
    /// `Some(true)` renders `SELECT DISTINCT`, `Some(false)` renders
    /// `SELECT ALL`, `None` a plain `SELECT`.
    #[serde(default)]
    pub distinct: Option<bool>,
    #[serde(default)]
    pub joins: Vec<Join>,
    #[serde(default)]
    pub where_clause: Option<Predicate>,
    #[serde(default)]
    pub group: Option<GroupSpec>,
    #[serde(default)]
    pub having: Option<Expr>,
    #[serde(default)]
    pub order: Option<OrderSpec>,
    #[serde(default)]
    pub limit: Option<LimitSpec>,
    #[serde(default)]
    pub for_update: bool,
    /// Expansion counts for `times` placeholders, keyed by raw
    /// placeholder name.
    #[serde(default)]
    pub bind_counts: HashMap<String, usize>,
}

impl Select {
    /// Deserialize a definition from its mapping form.
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}
