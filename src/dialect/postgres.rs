use crate::dialect::traits::SqlGenerator;

/// PostgreSQL generator.
pub struct PostgresGenerator;

impl PostgresGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SqlGenerator for PostgresGenerator {
    fn shared_lock(&self, sql: String) -> String {
        format!("{} FOR SHARE", sql)
    }
}
