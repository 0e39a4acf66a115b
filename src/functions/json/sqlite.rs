use crate::ast::{Expr, ReturnType};
use crate::error::RenderError;
use crate::functions::{Arity, SqlFunction};
use crate::parser::json_path::{parse_json_path, to_path_string};
use crate::transpiler::SqlAstTranslator;
use super::{append_operands, append_quoted, JSON_ARRAY_APPEND};

/// SQLite `json_array_append`: `json_insert` at the `[#]` (one past the end)
/// position of the target array.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteJsonArrayAppend;

impl SqlFunction for SqliteJsonArrayAppend {
    fn name(&self) -> &str {
        JSON_ARRAY_APPEND
    }

    fn arity(&self) -> Arity {
        Arity::Exact(3)
    }

    fn return_type(&self) -> Option<ReturnType> {
        Some(ReturnType::Json)
    }

    fn render(
        &self,
        args: &[Expr],
        _return_type: Option<ReturnType>,
        translator: &mut dyn SqlAstTranslator,
    ) -> Result<(), RenderError> {
        let (json, json_path, value) = append_operands(args)?;
        translator.append_sql("json_insert(");
        translator.render(json)?;
        translator.append_char(',');
        match json_path.as_string_literal() {
            Some(path) => {
                let path = to_path_string(&parse_json_path(path)?);
                append_quoted(translator, &format!("{}[#]", path));
            }
            None => {
                translator.append_char('(');
                translator.render(json_path)?;
                translator.append_sql(")||'[#]'");
            }
        }
        translator.append_char(',');
        translator.render(value)?;
        translator.append_char(')');
        Ok(())
    }
}
