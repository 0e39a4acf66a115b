use crate::ast::{Expr, ReturnType};
use crate::error::RenderError;
use crate::functions::{Arity, SqlFunction};
use crate::transpiler::SqlAstTranslator;
use super::{append_operands, JSON_ARRAY_APPEND};

/// MariaDB `json_array_append`.
///
/// MariaDB has no single function that appends at an arbitrary path, so the
/// array is extracted, merged with a one-element array holding the value,
/// and written back in place:
///
/// ```text
/// json_replace(J,P,json_merge(json_extract(J,P),json_array(V)))
/// ```
///
/// `json` and `path` are each rendered twice, `value` once.
#[derive(Debug, Clone, Copy, Default)]
pub struct MariaDbJsonArrayAppend;

impl SqlFunction for MariaDbJsonArrayAppend {
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
        translator.append_sql("json_replace(");
        translator.render(json)?;
        translator.append_char(',');
        translator.render(json_path)?;
        translator.append_sql(",json_merge(json_extract(");
        translator.render(json)?;
        translator.append_char(',');
        translator.render(json_path)?;
        translator.append_sql("),json_array(");
        translator.render(value)?;
        translator.append_sql(")))");
        Ok(())
    }
}
