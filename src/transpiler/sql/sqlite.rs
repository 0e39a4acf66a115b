use crate::transpiler::traits::{escape_identifier, SqlGenerator};

pub struct SqliteGenerator;

impl SqlGenerator for SqliteGenerator {
    fn quote_identifier(&self, name: &str) -> String {
        escape_identifier(name, '"', '"')
    }

    fn placeholder(&self, index: usize) -> String {
        format!("?{}", index)
    }

    fn bool_literal(&self, val: bool) -> String {
        if val { "1".to_string() } else { "0".to_string() }
    }
}
