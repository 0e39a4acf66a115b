//! # sqlfn
//!
//! Dialect-aware rendering of abstract SQL function calls.
//!
//! A query compiler hands an [`ast::Expr`] tree to a [`transpiler::Translator`]
//! bound to a [`transpiler::Dialect`]. Function calls inside the tree are
//! resolved through the dialect's [`functions::FunctionRegistry`] and rendered
//! by the matching [`functions::SqlFunction`] implementation.
//!
//! ```
//! use sqlfn::prelude::*;
//!
//! let expr = Expr::call("json_array_append", vec![
//!     Expr::col("doc"),
//!     Expr::string("$.items"),
//!     Expr::int(42),
//! ]);
//! let sql = expr.to_sql_with_dialect(Dialect::MariaDb).unwrap();
//! assert_eq!(
//!     sql,
//!     "json_replace(doc,'$.items',json_merge(json_extract(doc,'$.items'),json_array(42)))"
//! );
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod functions;
pub mod identity;
pub mod parser;
pub mod transpiler;

pub use error::{Error, ParseError, RenderError, Result};
pub use parser::parse_expr;

pub mod prelude {
    pub use crate::ast::{Expr, ReturnType, Value};
    pub use crate::functions::{Arity, FunctionRegistry, SqlFunction};
    pub use crate::parser::parse_expr;
    pub use crate::transpiler::{
        Dialect, SqlAppender, SqlAstTranslator, ToSql, TranspileResult, Translator,
    };
}
