use crate::transpiler::traits::{escape_identifier, SqlGenerator};

pub struct SqlServerGenerator;

impl SqlGenerator for SqlServerGenerator {
    fn quote_identifier(&self, name: &str) -> String {
        escape_identifier(name, '[', ']')
    }

    fn placeholder(&self, index: usize) -> String {
        format!("@P{}", index)
    }

    fn bool_literal(&self, val: bool) -> String {
        if val { "1".to_string() } else { "0".to_string() }
    }

    fn string_literal(&self, s: &str) -> String {
        // Unicode literal so non-ASCII text survives varchar collations
        if s.is_ascii() {
            format!("'{}'", s.replace('\'', "''"))
        } else {
            format!("N'{}'", s.replace('\'', "''"))
        }
    }
}
