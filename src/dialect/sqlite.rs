use crate::dialect::traits::SqlGenerator;

/// SQLite generator. SQLite has no row-level locking clauses, so both
/// lock primitives leave the statement unchanged.
pub struct SqliteGenerator;

impl SqliteGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SqlGenerator for SqliteGenerator {
    fn for_update(&self, sql: String) -> String {
        sql
    }

    fn shared_lock(&self, sql: String) -> String {
        sql
    }
}
