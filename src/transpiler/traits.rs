//! Dialect-specific SQL syntax strategy.

/// Words that always need quoting when used as identifiers.
const RESERVED: &[&str] = &[
    "all", "and", "as", "by", "case", "check", "column", "default", "from", "group", "index",
    "key", "limit", "not", "null", "or", "order", "select", "table", "user", "where",
];

/// Quote an identifier with the given delimiters, but only when it needs it.
///
/// Plain lower-case identifiers (`doc`, `order_id`) are emitted bare so the
/// rendered SQL stays readable. Anything else is delimited, doubling any
/// embedded closing delimiter.
pub fn escape_identifier(name: &str, open: char, close: char) -> String {
    let plain = !name.is_empty()
        && name.starts_with(|c: char| c.is_ascii_lowercase() || c == '_')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !RESERVED.contains(&name);
    if plain {
        return name.to_string();
    }
    let escaped = name.replace(close, &format!("{close}{close}"));
    format!("{open}{escaped}{close}")
}

/// Quote a string literal the SQL-standard way ('' for embedded quotes).
pub fn quote_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Per-dialect token syntax used by the translator.
pub trait SqlGenerator: Send + Sync {
    /// Quote an identifier (table/column name).
    fn quote_identifier(&self, name: &str) -> String;

    /// Placeholder for the 1-based parameter `index`.
    fn placeholder(&self, index: usize) -> String;

    /// Boolean literal.
    fn bool_literal(&self, val: bool) -> String {
        if val { "true".to_string() } else { "false".to_string() }
    }

    /// String literal.
    fn string_literal(&self, s: &str) -> String {
        quote_string(s)
    }
}
