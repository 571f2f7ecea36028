use serde::{Deserialize, Serialize};

use crate::ast::select::{ColumnSpec, Select};

/// One fragment of the engine-agnostic query tree.
///
/// The renderer matches exhaustively over this enum, so an unrecognized
/// node kind is a type error at compile time rather than a runtime failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A literal or column wrapped as a scalar expression.
    Scalar { value: ScalarValue },
    /// Shorthand for "all columns of domain".
    Object { domain: Option<String> },
    /// A column reference, optionally table/schema-qualified.
    Qualified {
        name: String,
        domain: Option<String>,
    },
    /// Raw SQL fragment injected verbatim, no escaping.
    Literal { value: String },
    /// A bind placeholder token.
    ///
    /// When `times` is set the node expands to N comma-joined placeholders
    /// numbered `value0..valueN-1`; N is taken from the definition's
    /// bind-count table keyed by `raw_value` when present, else from
    /// `times` itself.
    Placeholder {
        value: String,
        raw_value: Option<String>,
        times: Option<usize>,
    },
    /// `left OP right`.
    BinaryOp {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Operator applied before or after its single operand, depending on
    /// which side is populated. At least one side must be set.
    UnaryOp {
        op: String,
        left: Option<Box<Expr>>,
        right: Option<Box<Expr>>,
    },
    /// Wraps a sub-expression in `( ... )`.
    Parentheses { left: Box<Expr> },
    /// `NAME(args)` or `NAME(DISTINCT args)`; may be taken over by a
    /// registered custom-function renderer keyed by name.
    FunctionCall(FunctionCall),
    /// Sub-expressions joined with `separator` (default `", "`),
    /// parenthesized unless suppressed.
    List {
        value: Vec<Expr>,
        separator: Option<String>,
        parentheses: Option<bool>,
    },
    /// `*` or `domain.*`.
    All { domain: Option<String> },
    /// Correlated/scalar sub-select, rendered parenthesized.
    Select { value: Box<Select> },
    /// `CAST(left AS right)`.
    Cast { left: Box<Expr>, right: Box<Expr> },
    /// `CONVERT(left USING right)`.
    Convert { left: Box<Expr>, right: Box<Expr> },
    /// `CASE expr WHEN ... THEN ... ELSE ... END`. Clause order is
    /// preserved and not validated; a stray second ELSE is a caller error.
    Case {
        expr: Box<Expr>,
        when_clauses: Vec<CaseWhen>,
    },
}

/// Payload of a scalar node. The variants are mutually exclusive by
/// construction, so a column reference always wins over a loose value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    /// Delegate to column-spec resolution.
    Column(Box<ColumnSpec>),
    /// A nested expression.
    Expr(Box<Expr>),
    /// An opaque fragment passed through unescaped.
    Raw(String),
}

/// A function-call node, split out so custom renderers receive it whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<Expr>,
    #[serde(default)]
    pub distinct: bool,
}

/// One clause of a CASE expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CaseWhen {
    When { when: Expr, then: Expr },
    Else { then: Expr },
}
