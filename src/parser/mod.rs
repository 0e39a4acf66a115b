//! Expression stand-in parser.
//!
//! Parses the textual form used by the CLI and tests into an [`Expr`]:
//!
//! ```text
//! json_array_append(coalesce(t.doc, '[]'), '$.items', $1)
//! ```
//!
//! - `name(arg, ...)`: function call
//! - `col` / `t.col`: column reference
//! - `'text'` / `"text"`: string literal (`''` escapes a quote)
//! - `42`, `-1.5`: numbers
//! - `true`, `false`, `null`
//! - `$1`: positional parameter
//! - `{ ... }`: raw SQL, emitted verbatim

pub mod json_path;
pub mod tokens;

#[cfg(test)]
mod tests;

use crate::ast::Expr;
use crate::error::ParseError;

/// Parse a complete expression, rejecting trailing input.
pub fn parse_expr(input: &str) -> Result<Expr, ParseError> {
    match tokens::parse_expression(input) {
        Ok((rest, expr)) => {
            let rest = rest.trim();
            if rest.is_empty() {
                Ok(expr)
            } else {
                Err(ParseError::new("unexpected trailing input", rest))
            }
        }
        Err(nom::Err::Failure(e)) if e.code == nom::error::ErrorKind::TooLarge => Err(
            ParseError::new("function calls nested too deeply", e.input),
        ),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(ParseError::new("invalid expression", e.input))
        }
        Err(nom::Err::Incomplete(_)) => Err(ParseError::new("incomplete expression", "")),
    }
}
