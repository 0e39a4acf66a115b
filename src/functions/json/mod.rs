//! JSON function renderings.
//!
//! `json_array_append(json, path, value)` appends `value` to the JSON array
//! found at `path` inside `json`. Each dialect expresses that differently:
//!
//! | Dialect    | Rendering |
//! |------------|-----------|
//! | MySQL      | native `json_array_append` |
//! | MariaDB    | `json_replace` + `json_merge` + `json_extract` composition |
//! | PostgreSQL | `jsonb_insert`/`jsonb_set` over a text-array path |
//! | Oracle     | `json_transform(... append ...)` |
//! | SQL Server | `json_modify` with an `append` path |
//! | SQLite     | `json_insert` at `path[#]` |

mod mariadb;
mod oracle;
mod postgres;
mod sqlite;
mod sqlserver;

pub use mariadb::MariaDbJsonArrayAppend;
pub use oracle::OracleJsonArrayAppend;
pub use postgres::PostgresJsonArrayAppend;
pub use sqlite::SqliteJsonArrayAppend;
pub use sqlserver::SqlServerJsonArrayAppend;

use crate::ast::{Expr, ReturnType};
use crate::error::RenderError;
use crate::functions::{Arity, FunctionRegistry, NamedFunction};
use crate::transpiler::traits::quote_string;
use crate::transpiler::{Dialect, SqlAstTranslator};

pub const JSON_ARRAY_APPEND: &str = "json_array_append";

/// Register the JSON functions `dialect` supports.
pub fn register_json_functions(dialect: Dialect, registry: &mut FunctionRegistry) {
    match dialect {
        Dialect::MySql => {
            registry.register(
                NamedFunction::new(JSON_ARRAY_APPEND, Arity::Exact(3)).returns(ReturnType::Json),
            );
            registry.register(json_array());
            registry.register(json_extract());
        }
        Dialect::MariaDb => {
            registry.register(MariaDbJsonArrayAppend);
            registry.register(json_array());
            registry.register(json_extract());
        }
        Dialect::Postgres => {
            registry.register(PostgresJsonArrayAppend);
        }
        Dialect::Oracle => {
            registry.register(OracleJsonArrayAppend);
            registry.register(json_array());
        }
        Dialect::SqlServer => {
            registry.register(SqlServerJsonArrayAppend);
            registry.register(json_array());
        }
        Dialect::Sqlite => {
            registry.register(SqliteJsonArrayAppend);
            registry.register(json_array());
            registry.register(json_extract());
        }
    }
}

fn json_array() -> NamedFunction {
    NamedFunction::new("json_array", Arity::AtLeast(0)).returns(ReturnType::Json)
}

fn json_extract() -> NamedFunction {
    NamedFunction::new("json_extract", Arity::AtLeast(2)).returns(ReturnType::Json)
}

/// Split the `(json, path, value)` operands of an append call.
///
/// The translator checks arity before dispatch; this only keeps a direct
/// call with a short slice from panicking.
fn append_operands(args: &[Expr]) -> Result<(&Expr, &Expr, &Expr), RenderError> {
    match args {
        [json, path, value] => Ok((json, path, value)),
        _ => Err(RenderError::ArityMismatch {
            function: JSON_ARRAY_APPEND.to_string(),
            expected: Arity::Exact(3).to_string(),
            found: args.len(),
        }),
    }
}

/// The path operand as a string literal, for dialects that inline it.
fn literal_path<'a>(path: &'a Expr, translator: &dyn SqlAstTranslator) -> Result<&'a str, RenderError> {
    path.as_string_literal().ok_or_else(|| RenderError::NonLiteralPath {
        function: JSON_ARRAY_APPEND.to_string(),
        dialect: translator.dialect(),
    })
}

fn append_quoted(translator: &mut dyn SqlAstTranslator, s: &str) {
    translator.append_sql(&quote_string(s));
}
