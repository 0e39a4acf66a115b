//! SQL transpiler for expression trees.
//!
//! Converts [`Expr`] nodes into SQL text for a target [`Dialect`].

pub mod appender;
pub mod dialect;
pub mod params;
pub mod sql;
pub mod traits;
pub mod translator;

#[cfg(test)]
mod tests;

use crate::ast::*;
use crate::error::RenderError;
pub use appender::SqlAppender;
pub use dialect::Dialect;
pub use params::ParamContext;
pub use traits::{escape_identifier, SqlGenerator};
pub use translator::{SqlAstTranslator, Translator};

/// Result of transpilation with extracted parameters.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct TranspileResult {
    /// The SQL template with placeholders (e.g., $1, $2 or ?, ?)
    pub sql: String,
    /// The extracted parameter values in order
    pub params: Vec<Value>,
}

/// Trait for converting AST nodes to SQL.
pub trait ToSql {
    /// Convert this node to a SQL string using default dialect.
    fn to_sql(&self) -> Result<String, RenderError> {
        self.to_sql_with_dialect(Dialect::default())
    }
    /// Convert this node to a SQL string with specific dialect.
    fn to_sql_with_dialect(&self, dialect: Dialect) -> Result<String, RenderError>;
}

/// Trait for converting AST nodes to parameterized SQL.
pub trait ToSqlParameterized {
    /// Convert to SQL with extracted parameters (default dialect).
    fn to_sql_parameterized(&self) -> Result<TranspileResult, RenderError> {
        self.to_sql_parameterized_with_dialect(Dialect::default())
    }
    /// Convert to SQL with extracted parameters for specific dialect.
    fn to_sql_parameterized_with_dialect(
        &self,
        dialect: Dialect,
    ) -> Result<TranspileResult, RenderError>;
}

impl ToSql for Expr {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> Result<String, RenderError> {
        let mut translator = Translator::new(dialect);
        translator.render(self)?;
        Ok(translator.finish().sql)
    }
}

impl ToSqlParameterized for Expr {
    fn to_sql_parameterized_with_dialect(
        &self,
        dialect: Dialect,
    ) -> Result<TranspileResult, RenderError> {
        let mut translator = Translator::new(dialect).parameterized();
        translator.render(self)?;
        Ok(translator.finish())
    }
}
