//! Dialect primitives.
//!
//! A concrete dialect overrides a handful of small methods while the
//! shared rendering engine in [`crate::render`] stays untouched. The
//! defaults here are the generic/MySQL-ish forms.

/// The per-RDBMS customization surface.
pub trait SqlGenerator: Send + Sync {
    /// Identifier quote character. `None` disables quoting entirely for
    /// this dialect.
    fn quote_char(&self) -> Option<char> {
        Some('"')
    }

    /// Splice a LIMIT clause onto an already-assembled statement.
    fn limit(&self, sql: String, number: &str, offset: Option<&str>) -> String {
        match offset {
            Some(offset) => format!("{} LIMIT {} OFFSET {}", sql, number, offset),
            None => format!("{} LIMIT {}", sql, number),
        }
    }

    /// Append the exclusive-lock clause.
    fn for_update(&self, sql: String) -> String {
        format!("{} FOR UPDATE", sql)
    }

    /// Append the shared-lock clause.
    fn shared_lock(&self, sql: String) -> String {
        format!("{} LOCK IN SHARE MODE", sql)
    }

    /// Savepoint DDL. The name is interpolated unescaped; validating it
    /// is the caller's responsibility.
    fn savepoint(&self, name: &str) -> String {
        format!("SAVEPOINT {}", name)
    }

    fn release_savepoint(&self, name: &str) -> String {
        format!("RELEASE SAVEPOINT {}", name)
    }

    fn rollback_savepoint(&self, name: &str) -> String {
        format!("ROLLBACK TO SAVEPOINT {}", name)
    }
}
