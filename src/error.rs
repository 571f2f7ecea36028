//! Error types for SQL rendering.

use thiserror::Error;

/// Rendering failures. Every variant aborts the compile immediately;
/// no partial SQL is ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A SELECT definition is missing `tables` or `columns`.
    #[error("missing required key '{0}' in SELECT definition")]
    MissingRequiredKey(&'static str),

    /// A unary operator node has neither a left nor a right operand.
    #[error("invalid unary operator expression: no operand")]
    InvalidUnaryOperand,

    /// A LIST expression has no items to join.
    #[error("invalid LIST expression: empty item collection")]
    InvalidListExpression,

    /// A structured GROUP BY was given with no fields.
    #[error("invalid GROUP BY expression: empty field list")]
    InvalidGroupByExpression,

    /// A structured ORDER BY was given with no fields.
    #[error("invalid ORDER BY expression: empty field list")]
    InvalidOrderByExpression,

    /// A registered custom function renderer reported a failure.
    #[error("custom function '{name}' failed: {message}")]
    CustomFunction { name: String, message: String },
}

impl RenderError {
    /// Create a custom-function error.
    pub fn custom_function(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CustomFunction {
            name: name.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
