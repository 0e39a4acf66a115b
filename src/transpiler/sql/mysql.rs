//! MySQL and MariaDB share token syntax.

use crate::transpiler::traits::{escape_identifier, SqlGenerator};

pub struct MySqlGenerator;

impl SqlGenerator for MySqlGenerator {
    fn quote_identifier(&self, name: &str) -> String {
        escape_identifier(name, '`', '`')
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn string_literal(&self, s: &str) -> String {
        // Backslash is an escape character under the default sql_mode
        format!("'{}'", s.replace('\\', "\\\\").replace('\'', "''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_escapes_backslash() {
        assert_eq!(MySqlGenerator.string_literal(r"a\b'c"), r"'a\\b''c'");
    }
}
