pub mod generic;
pub mod mysql;
pub mod postgres;
pub mod sqlite;
pub mod traits;

pub use traits::SqlGenerator;

use generic::GenericGenerator;
use mysql::MysqlGenerator;
use postgres::PostgresGenerator;
use sqlite::SqliteGenerator;

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Generic,
    MySQL,
    Postgres,
    SQLite,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::Generic
    }
}

impl Dialect {
    pub fn generator(&self) -> Box<dyn SqlGenerator> {
        match self {
            Dialect::Generic => Box::new(GenericGenerator),
            Dialect::MySQL => Box::new(MysqlGenerator),
            Dialect::Postgres => Box::new(PostgresGenerator),
            Dialect::SQLite => Box::new(SqliteGenerator),
        }
    }
}
