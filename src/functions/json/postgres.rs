use crate::ast::{Expr, ReturnType, Value};
use crate::error::RenderError;
use crate::functions::{Arity, SqlFunction};
use crate::parser::json_path::{parse_json_path, JsonPathSegment};
use crate::transpiler::SqlAstTranslator;
use super::{append_operands, append_quoted, literal_path, JSON_ARRAY_APPEND};

/// PostgreSQL `json_array_append`.
///
/// The JSON path literal is converted to a `text[]` path. A missing target
/// leaves the document unchanged, an array target gets the value inserted at
/// its end, and a scalar target is wrapped into a two-element array.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresJsonArrayAppend;

impl SqlFunction for PostgresJsonArrayAppend {
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
        let segments = parse_json_path(literal_path(json_path, translator)?)?;

        translator.append_sql(
            "(select case when t.d#>t.p is null then t.d \
             when jsonb_typeof(t.d#>t.p)='array' then jsonb_insert(t.d,t.p||array['-1'],",
        );
        append_jsonb(translator, value)?;
        translator.append_sql(",true) else jsonb_set(t.d,t.p,jsonb_build_array(t.d#>t.p,");
        append_jsonb(translator, value)?;
        translator.append_sql(")) end from (values((");
        translator.render(json)?;
        translator.append_sql(")::jsonb,array[");
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                translator.append_char(',');
            }
            match segment {
                JsonPathSegment::Key(key) => append_quoted(translator, key),
                JsonPathSegment::Index(idx) => append_quoted(translator, &idx.to_string()),
            }
        }
        translator.append_sql("]::text[])) t(d,p))");
        Ok(())
    }
}

/// `value` as a jsonb operand.
///
/// `to_jsonb` is polymorphic, so untyped literals and bind parameters get an
/// explicit cast. Expressions already carry their own type.
fn append_jsonb(translator: &mut dyn SqlAstTranslator, value: &Expr) -> Result<(), RenderError> {
    let cast = match value {
        Expr::Literal(Value::Null) => {
            translator.append_sql("'null'::jsonb");
            return Ok(());
        }
        Expr::Literal(Value::Bool(_)) => Some("boolean"),
        Expr::Literal(Value::Int(_)) => Some("bigint"),
        Expr::Literal(Value::Float(_)) => Some("double precision"),
        Expr::Literal(Value::String(_)) | Expr::Literal(Value::Param(_)) => Some("text"),
        _ => None,
    };

    translator.append_sql("to_jsonb(");
    match cast {
        Some(ty) => {
            translator.append_sql("cast(");
            translator.render(value)?;
            translator.append_sql(" as ");
            translator.append_sql(ty);
            translator.append_char(')');
        }
        None => translator.render(value)?,
    }
    translator.append_char(')');
    Ok(())
}
