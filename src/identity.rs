//! Retrieval of database-generated identifiers after an insert.
//!
//! Each dialect has one preferred way to hand back the keys an `insert`
//! generated (identity columns, sequences behind defaults, triggers).
//! [`GeneratedIdentifierDelegate`] rewrites the insert statement accordingly
//! and, where the keys have to be fetched separately, supplies the select
//! that does it.

use serde::Serialize;
use tracing::debug;

use crate::error::RenderError;
use crate::transpiler::Dialect;

/// How generated keys come back from an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierRetrieval {
    /// `insert ... returning id`
    Returning,
    /// `insert into t (..) output inserted.id values (..)`
    OutputInserted,
    /// Statement unchanged; keys come from the driver's generated-keys
    /// support or a follow-up identity select.
    GeneratedKeys,
}

/// Prepares identifier-generating inserts for one dialect.
#[derive(Debug, Clone)]
pub struct GeneratedIdentifierDelegate {
    dialect: Dialect,
    id_columns: Vec<String>,
}

impl GeneratedIdentifierDelegate {
    pub fn new<I, S>(dialect: Dialect, id_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dialect,
            id_columns: id_columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn retrieval(&self) -> IdentifierRetrieval {
        self.dialect.identifier_retrieval()
    }

    /// Append whatever the dialect needs to `insert_sql` so the generated
    /// key values are returned with the statement's results.
    pub fn prepare_identifier_generating_insert(
        &self,
        insert_sql: &str,
    ) -> Result<String, RenderError> {
        let insert_sql = insert_sql.trim().trim_end_matches(';').trim_end();
        if !starts_with_keyword(insert_sql, "insert") {
            return Err(RenderError::MalformedInsert(
                "statement is not an insert".to_string(),
            ));
        }
        if self.id_columns.is_empty() && self.retrieval() != IdentifierRetrieval::GeneratedKeys {
            return Err(RenderError::MalformedInsert(
                "no identifier columns given".to_string(),
            ));
        }

        let generator = self.dialect.generator();
        let prepared = match self.retrieval() {
            IdentifierRetrieval::Returning => {
                let columns: Vec<String> = self
                    .id_columns
                    .iter()
                    .map(|c| generator.quote_identifier(c))
                    .collect();
                format!("{} returning {}", insert_sql, columns.join(","))
            }
            IdentifierRetrieval::OutputInserted => {
                let at = find_values_clause(insert_sql).ok_or_else(|| {
                    RenderError::MalformedInsert(
                        "no values, select or default values clause to place output before"
                            .to_string(),
                    )
                })?;
                let columns: Vec<String> = self
                    .id_columns
                    .iter()
                    .map(|c| format!("inserted.{}", generator.quote_identifier(c)))
                    .collect();
                format!(
                    "{} output {} {}",
                    insert_sql[..at].trim_end(),
                    columns.join(","),
                    &insert_sql[at..]
                )
            }
            IdentifierRetrieval::GeneratedKeys => insert_sql.to_string(),
        };
        debug!(dialect = %self.dialect, retrieval = ?self.retrieval(), "prepared identifier-generating insert");
        Ok(prepared)
    }

    /// Follow-up select returning the last generated identity, for dialects
    /// that expose one.
    pub fn identity_select(&self) -> Option<&'static str> {
        match self.dialect {
            Dialect::MySql => Some("select last_insert_id()"),
            _ => None,
        }
    }
}

fn starts_with_keyword(sql: &str, keyword: &str) -> bool {
    sql.len() >= keyword.len()
        && sql.is_char_boundary(keyword.len())
        && sql[..keyword.len()].eq_ignore_ascii_case(keyword)
        && sql[keyword.len()..]
            .chars()
            .next()
            .is_none_or(|c| c.is_whitespace())
}

/// Byte offset of the first top-level `values`, `select` or `default values`
/// keyword, skipping quoted text and parenthesized column lists.
fn find_values_clause(sql: &str) -> Option<usize> {
    let bytes = sql.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
        } else {
            match b {
                b'\'' | b'"' => quote = Some(b),
                b'[' => quote = Some(b']'),
                b'(' => depth += 1,
                b')' => depth = depth.saturating_sub(1),
                _ if depth == 0 && (i == 0 || bytes[i - 1].is_ascii_whitespace() || bytes[i - 1] == b')') => {
                    let rest = &sql[i..];
                    if ["values", "select", "default"]
                        .iter()
                        .any(|kw| starts_with_keyword(rest, kw) || is_keyword_then_paren(rest, kw))
                    {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
        i += 1;
    }
    None
}

fn is_keyword_then_paren(sql: &str, keyword: &str) -> bool {
    sql.len() > keyword.len()
        && sql.is_char_boundary(keyword.len())
        && sql[..keyword.len()].eq_ignore_ascii_case(keyword)
        && sql.as_bytes()[keyword.len()] == b'('
}
