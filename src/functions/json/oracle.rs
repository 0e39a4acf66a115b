use crate::ast::{Expr, ReturnType};
use crate::error::RenderError;
use crate::functions::{Arity, SqlFunction};
use crate::parser::json_path::{parse_json_path, to_path_string};
use crate::transpiler::SqlAstTranslator;
use super::{append_operands, append_quoted, literal_path, JSON_ARRAY_APPEND};

/// Oracle `json_array_append` through `json_transform`.
///
/// The path is part of the operation syntax, so only literal paths work.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleJsonArrayAppend;

impl SqlFunction for OracleJsonArrayAppend {
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
        let path = to_path_string(&parse_json_path(literal_path(json_path, translator)?)?);

        translator.append_sql("json_transform(");
        translator.render(json)?;
        translator.append_sql(",append ");
        append_quoted(translator, &path);
        translator.append_char('=');
        translator.render(value)?;
        translator.append_sql(" create on missing)");
        Ok(())
    }
}
