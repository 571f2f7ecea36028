//! SQL renderer for the intermediate query tree.
//!
//! Converts [`crate::ast`] values into dialect-correct SQL strings.
//! Rendering is a pure transformation: no I/O, no retained state beyond
//! the custom-function registry populated at setup time.

pub mod expr;
pub mod select;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::ast::FunctionCall;
use crate::dialect::{Dialect, SqlGenerator};
use crate::error::Result;

/// Renderer for a vendor-specific SQL function, consulted by name before
/// the built-in function-call rendering.
pub type CustomFunction =
    Box<dyn Fn(&Renderer, &FunctionCall, Option<char>) -> Result<String> + Send + Sync>;

/// A dialect-bound SQL renderer.
///
/// Holds the dialect primitives, the two independent escaping switches,
/// and the custom-function registry. Construct, register any custom
/// functions, then treat as frozen; concurrent rendering on distinct
/// inputs is safe.
pub struct Renderer {
    generator: Box<dyn SqlGenerator>,
    escape_identifiers: bool,
    escape_schemas: bool,
    custom_functions: HashMap<String, CustomFunction>,
}

impl Renderer {
    pub fn new(dialect: Dialect) -> Self {
        Self::with_generator(dialect.generator())
    }

    /// Build a renderer around user-supplied dialect primitives.
    pub fn with_generator(generator: Box<dyn SqlGenerator>) -> Self {
        Self {
            generator,
            escape_identifiers: true,
            escape_schemas: true,
            custom_functions: HashMap::new(),
        }
    }

    /// Toggle identifier escaping. When off, names pass through
    /// unescaped (trusted internal fragments, test fixtures).
    pub fn escaping(mut self, on: bool) -> Self {
        self.escape_identifiers = on;
        self
    }

    /// Toggle schema-name escaping, independently of identifiers.
    pub fn schema_escaping(mut self, on: bool) -> Self {
        self.escape_schemas = on;
        self
    }

    pub fn generator(&self) -> &dyn SqlGenerator {
        self.generator.as_ref()
    }

    /// Register a renderer for a vendor SQL function. Takes precedence
    /// over the built-in `NAME(args)` rendering for that name.
    pub fn register_custom_function(&mut self, name: impl Into<String>, renderer: CustomFunction) {
        self.custom_functions.insert(name.into(), renderer);
    }

    pub fn custom_functions(&self) -> &HashMap<String, CustomFunction> {
        &self.custom_functions
    }

    pub(crate) fn custom_function(&self, name: &str) -> Option<&CustomFunction> {
        self.custom_functions.get(name)
    }

    /// Escape an identifier, splitting on `.` for qualified names.
    ///
    /// An explicit `escape_char` wins over the dialect's quote character;
    /// a dialect without one disables quoting. The bare token `*` is
    /// never quoted.
    pub fn escape(&self, name: &str, escape_char: Option<char>) -> String {
        if !self.escape_identifiers {
            return name.to_string();
        }
        let Some(quote) = escape_char.or_else(|| self.generator.quote_char()) else {
            return name.to_string();
        };
        if !name.contains('.') {
            return quote_single(quote, name);
        }
        let trimmed = name.strip_prefix(quote).unwrap_or(name);
        let trimmed = trimmed.strip_suffix(quote).unwrap_or(trimmed);
        trimmed
            .split('.')
            .map(|part| {
                if part.is_empty() {
                    part.to_string()
                } else {
                    quote_single(quote, part)
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Restricted escape used only for schema qualification, gated by
    /// the schema-escaping switch.
    pub fn escape_schema(&self, schema: &str, escape_char: Option<char>) -> String {
        if !self.escape_schemas {
            return schema.to_string();
        }
        let Some(quote) = escape_char.or_else(|| self.generator.quote_char()) else {
            return schema.to_string();
        };
        let trimmed = schema.strip_prefix(quote).unwrap_or(schema);
        let trimmed = trimmed.strip_suffix(quote).unwrap_or(trimmed);
        quote_single(quote, trimmed)
    }

    /// Append the exclusive-lock clause per the dialect.
    pub fn for_update(&self, sql: &str) -> String {
        self.generator.for_update(sql.to_string())
    }

    /// Append the shared-lock clause per the dialect.
    pub fn shared_lock(&self, sql: &str) -> String {
        self.generator.shared_lock(sql.to_string())
    }

    pub fn savepoint(&self, name: &str) -> String {
        self.generator.savepoint(name)
    }

    pub fn release_savepoint(&self, name: &str) -> String {
        self.generator.release_savepoint(name)
    }

    pub fn rollback_savepoint(&self, name: &str) -> String {
        self.generator.rollback_savepoint(name)
    }
}

/// Quote one identifier segment, doubling internal quote characters.
/// `*` passes through untouched.
fn quote_single(quote: char, name: &str) -> String {
    if name == "*" {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for ch in name.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    out.push(quote);
    out
}
