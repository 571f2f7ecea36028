//! SELECT statement assembly.
//!
//! Clauses are appended in fixed order:
//! `SELECT [DISTINCT|ALL] cols FROM tables [joins] [WHERE] [GROUP BY]
//! [HAVING] [ORDER BY] [LIMIT] [FOR UPDATE]`.

use std::collections::HashMap;

use crate::ast::{GroupSpec, Join, LimitSpec, LimitValue, OrderSpec, Predicate, Select};
use crate::error::{RenderError, Result};
use crate::render::Renderer;

impl Renderer {
    /// Render a complete SELECT definition.
    pub fn select(&self, def: &Select) -> Result<String> {
        if def.tables.is_empty() {
            return Err(RenderError::MissingRequiredKey("tables"));
        }
        if def.columns.is_empty() {
            return Err(RenderError::MissingRequiredKey("columns"));
        }

        let escape_char = None;
        let bind_counts = &def.bind_counts;

        let mut sql = match def.distinct {
            Some(true) => String::from("SELECT DISTINCT "),
            Some(false) => String::from("SELECT ALL "),
            None => String::from("SELECT "),
        };

        sql.push_str(&self.column_list(&def.columns, escape_char, bind_counts)?);

        sql.push_str(" FROM ");
        let tables = def
            .tables
            .iter()
            .map(|table| self.render_table(table, escape_char))
            .collect::<Vec<_>>()
            .join(", ");
        sql.push_str(&tables);

        for join in &def.joins {
            sql.push_str(&self.render_join(join, escape_char, bind_counts)?);
        }

        if let Some(predicate) = &def.where_clause {
            sql.push_str(" WHERE ");
            match predicate {
                Predicate::Expr(expr) => {
                    sql.push_str(&self.render_expr(expr, escape_char, bind_counts)?)
                }
                Predicate::Raw(raw) => sql.push_str(raw),
            }
        }

        if let Some(group) = &def.group {
            sql.push_str(" GROUP BY ");
            match group {
                GroupSpec::Raw(raw) => sql.push_str(raw),
                GroupSpec::Fields(fields) => {
                    if fields.is_empty() {
                        return Err(RenderError::InvalidGroupByExpression);
                    }
                    let fields = fields
                        .iter()
                        .map(|field| self.render_expr(field, escape_char, bind_counts))
                        .collect::<Result<Vec<_>>>()?
                        .join(", ");
                    sql.push_str(&fields);
                }
            }
        }

        if let Some(having) = &def.having {
            sql.push_str(" HAVING ");
            sql.push_str(&self.render_expr(having, escape_char, bind_counts)?);
        }

        if let Some(order) = &def.order {
            sql.push_str(" ORDER BY ");
            match order {
                OrderSpec::Raw(raw) => sql.push_str(raw),
                OrderSpec::Fields(items) => {
                    if items.is_empty() {
                        return Err(RenderError::InvalidOrderByExpression);
                    }
                    let fields = items
                        .iter()
                        .map(|item| {
                            let field = self.render_expr(&item.expr, escape_char, bind_counts)?;
                            Ok(match item.direction {
                                Some(direction) => format!("{} {}", field, direction.as_str()),
                                None => field,
                            })
                        })
                        .collect::<Result<Vec<_>>>()?
                        .join(", ");
                    sql.push_str(&fields);
                }
            }
        }

        if let Some(limit) = &def.limit {
            sql = self.render_limit(sql, limit, escape_char, bind_counts)?;
        }

        if def.for_update {
            sql = self.generator().for_update(sql);
        }

        Ok(sql)
    }

    /// Splice a LIMIT clause onto `sql` through the dialect primitive.
    pub fn limit(&self, sql: &str, limit: &LimitSpec) -> Result<String> {
        self.render_limit(sql.to_string(), limit, None, &HashMap::new())
    }

    fn render_join(
        &self,
        join: &Join,
        escape_char: Option<char>,
        bind_counts: &HashMap<String, usize>,
    ) -> Result<String> {
        let table = self.render_table(&join.source, escape_char);
        // Empty conditions degrade to the always-true join condition.
        let condition = if join.conditions.is_empty() {
            "1".to_string()
        } else {
            join.conditions
                .iter()
                .map(|cond| self.render_expr(cond, escape_char, bind_counts))
                .collect::<Result<Vec<_>>>()?
                .join(" AND ")
        };
        Ok(match join.kind {
            Some(kind) => format!(" {} JOIN {} ON {}", kind.as_str(), table, condition),
            None => format!(" JOIN {} ON {}", table, condition),
        })
    }

    fn render_limit(
        &self,
        sql: String,
        limit: &LimitSpec,
        escape_char: Option<char>,
        bind_counts: &HashMap<String, usize>,
    ) -> Result<String> {
        let (number, offset) = match limit {
            LimitSpec::Value(value) => {
                (self.render_limit_value(value, escape_char, bind_counts)?, None)
            }
            LimitSpec::Clause { number, offset } => (
                self.render_limit_value(number, escape_char, bind_counts)?,
                offset
                    .as_ref()
                    .map(|value| self.render_limit_value(value, escape_char, bind_counts))
                    .transpose()?,
            ),
        };
        Ok(self.generator().limit(sql, &number, offset.as_deref()))
    }

    fn render_limit_value(
        &self,
        value: &LimitValue,
        escape_char: Option<char>,
        bind_counts: &HashMap<String, usize>,
    ) -> Result<String> {
        match value {
            LimitValue::Number(n) => Ok(n.to_string()),
            LimitValue::Expr(expr) => self.render_expr(expr, escape_char, bind_counts),
        }
    }
}
