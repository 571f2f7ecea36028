use crate::dialect::traits::SqlGenerator;

/// MySQL generator.
pub struct MysqlGenerator;

impl MysqlGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SqlGenerator for MysqlGenerator {
    fn quote_char(&self) -> Option<char> {
        Some('`')
    }
}
