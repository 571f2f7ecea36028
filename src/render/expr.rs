//! Expression rendering: an exhaustive match over every node kind.

use std::collections::HashMap;

use crate::ast::{CaseWhen, ColumnSpec, Expr, FunctionCall, ScalarValue, TableSpec};
use crate::error::{RenderError, Result};
use crate::render::Renderer;

impl Renderer {
    /// Render one expression node to SQL text.
    pub fn render_expr(
        &self,
        expr: &Expr,
        escape_char: Option<char>,
        bind_counts: &HashMap<String, usize>,
    ) -> Result<String> {
        match expr {
            Expr::Scalar { value } => match value {
                ScalarValue::Column(spec) => self.render_column(spec, escape_char, bind_counts),
                ScalarValue::Expr(inner) => self.render_expr(inner, escape_char, bind_counts),
                ScalarValue::Raw(raw) => Ok(raw.clone()),
            },
            Expr::Object { domain } | Expr::All { domain } => Ok(match domain {
                Some(domain) => format!("{}.*", self.escape(domain, escape_char)),
                None => "*".to_string(),
            }),
            Expr::Qualified { name, domain } => {
                Ok(self.prepare_qualified(name, domain.as_deref(), escape_char))
            }
            Expr::Literal { value } => Ok(value.clone()),
            Expr::Placeholder {
                value,
                raw_value,
                times,
            } => Ok(render_placeholder(
                value,
                raw_value.as_deref(),
                *times,
                bind_counts,
            )),
            Expr::BinaryOp { op, left, right } => Ok(format!(
                "{} {} {}",
                self.render_expr(left, escape_char, bind_counts)?,
                op,
                self.render_expr(right, escape_char, bind_counts)?,
            )),
            Expr::UnaryOp { op, left, right } => match (left, right) {
                (Some(operand), _) => Ok(format!(
                    "{} {}",
                    self.render_expr(operand, escape_char, bind_counts)?,
                    op
                )),
                (None, Some(operand)) => Ok(format!(
                    "{} {}",
                    op,
                    self.render_expr(operand, escape_char, bind_counts)?
                )),
                (None, None) => Err(RenderError::InvalidUnaryOperand),
            },
            Expr::Parentheses { left } => Ok(format!(
                "({})",
                self.render_expr(left, escape_char, bind_counts)?
            )),
            Expr::FunctionCall(call) => self.render_function_call(call, escape_char, bind_counts),
            Expr::List {
                value,
                separator,
                parentheses,
            } => self.render_list(
                value,
                separator.as_deref(),
                parentheses.unwrap_or(true),
                escape_char,
                bind_counts,
            ),
            Expr::Select { value } => Ok(format!("({})", self.select(value)?)),
            Expr::Cast { left, right } => Ok(format!(
                "CAST({} AS {})",
                self.render_expr(left, escape_char, bind_counts)?,
                self.render_expr(right, escape_char, bind_counts)?,
            )),
            Expr::Convert { left, right } => Ok(format!(
                "CONVERT({} USING {})",
                self.render_expr(left, escape_char, bind_counts)?,
                self.render_expr(right, escape_char, bind_counts)?,
            )),
            Expr::Case { expr, when_clauses } => {
                self.render_case(expr, when_clauses, escape_char, bind_counts)
            }
        }
    }

    /// Render a column spec, normalizing the legacy positional form and
    /// appending the alias (`sql_alias` wins over `alias`).
    pub fn render_column(
        &self,
        spec: &ColumnSpec,
        escape_char: Option<char>,
        bind_counts: &HashMap<String, usize>,
    ) -> Result<String> {
        match spec {
            ColumnSpec::Name(name) => Ok(self.escape(name, escape_char)),
            ColumnSpec::Triple { .. } => {
                self.render_column(&spec.canonicalize(), escape_char, bind_counts)
            }
            ColumnSpec::Node {
                expr,
                sql_alias,
                alias,
            } => {
                let sql = self.render_expr(expr, escape_char, bind_counts)?;
                Ok(match sql_alias.as_deref().or(alias.as_deref()) {
                    Some(alias) => format!("{} AS {}", sql, self.escape(alias, escape_char)),
                    None => sql,
                })
            }
        }
    }

    /// Render every column spec and join with `", "`.
    pub fn column_list(
        &self,
        columns: &[ColumnSpec],
        escape_char: Option<char>,
        bind_counts: &HashMap<String, usize>,
    ) -> Result<String> {
        Ok(columns
            .iter()
            .map(|spec| self.render_column(spec, escape_char, bind_counts))
            .collect::<Result<Vec<_>>>()?
            .join(", "))
    }

    /// Render a table spec, schema-qualifying and aliasing as needed.
    pub fn render_table(&self, spec: &TableSpec, escape_char: Option<char>) -> String {
        match spec {
            TableSpec::Name(name) => self.escape(name, escape_char),
            TableSpec::Triple {
                name,
                schema,
                alias,
            } => {
                let mut sql = self.escape(name, escape_char);
                if let Some(schema) = schema {
                    sql = format!("{}.{}", self.escape_schema(schema, escape_char), sql);
                }
                if let Some(alias) = alias {
                    sql = format!("{} AS {}", sql, self.escape(alias, escape_char));
                }
                sql
            }
        }
    }

    fn prepare_qualified(
        &self,
        name: &str,
        domain: Option<&str>,
        escape_char: Option<char>,
    ) -> String {
        match domain {
            Some(domain) => self.escape(&format!("{}.{}", domain, name), escape_char),
            None => self.escape(name, escape_char),
        }
    }

    fn render_function_call(
        &self,
        call: &FunctionCall,
        escape_char: Option<char>,
        bind_counts: &HashMap<String, usize>,
    ) -> Result<String> {
        if let Some(custom) = self.custom_function(&call.name) {
            return custom(self, call, escape_char);
        }
        let arguments = call
            .arguments
            .iter()
            .map(|arg| self.render_expr(arg, escape_char, bind_counts))
            .collect::<Result<Vec<_>>>()?
            .join(", ");
        Ok(if call.distinct {
            format!("{}(DISTINCT {})", call.name, arguments)
        } else {
            format!("{}({})", call.name, arguments)
        })
    }

    fn render_list(
        &self,
        items: &[Expr],
        separator: Option<&str>,
        parentheses: bool,
        escape_char: Option<char>,
        bind_counts: &HashMap<String, usize>,
    ) -> Result<String> {
        if items.is_empty() {
            return Err(RenderError::InvalidListExpression);
        }
        let joined = items
            .iter()
            .map(|item| self.render_expr(item, escape_char, bind_counts))
            .collect::<Result<Vec<_>>>()?
            .join(separator.unwrap_or(", "));
        Ok(if parentheses {
            format!("({})", joined)
        } else {
            joined
        })
    }

    fn render_case(
        &self,
        operand: &Expr,
        clauses: &[CaseWhen],
        escape_char: Option<char>,
        bind_counts: &HashMap<String, usize>,
    ) -> Result<String> {
        let mut sql = format!(
            "CASE {}",
            self.render_expr(operand, escape_char, bind_counts)?
        );
        for clause in clauses {
            match clause {
                CaseWhen::When { when, then } => {
                    sql.push_str(&format!(
                        " WHEN {} THEN {}",
                        self.render_expr(when, escape_char, bind_counts)?,
                        self.render_expr(then, escape_char, bind_counts)?,
                    ));
                }
                CaseWhen::Else { then } => {
                    sql.push_str(&format!(
                        " ELSE {}",
                        self.render_expr(then, escape_char, bind_counts)?
                    ));
                }
            }
        }
        sql.push_str(" END");
        Ok(sql)
    }
}

/// Expand a placeholder token. With `times`, emits `value0..valueN-1`
/// joined with `", "`; the count comes from the bind-count table keyed by
/// `raw_value` when present. Numbering restarts at 0 per expansion, so
/// output is deterministic.
fn render_placeholder(
    value: &str,
    raw_value: Option<&str>,
    times: Option<usize>,
    bind_counts: &HashMap<String, usize>,
) -> String {
    let Some(times) = times else {
        return value.to_string();
    };
    let count = raw_value
        .and_then(|key| bind_counts.get(key).copied())
        .unwrap_or(times);
    (0..count)
        .map(|i| format!("{}{}", value, i))
        .collect::<Vec<_>>()
        .join(", ")
}
