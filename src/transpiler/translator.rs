//! Translation context: renders expression nodes into an SQL sink.

use tracing::{debug, trace};

use crate::ast::{Expr, Value};
use crate::error::RenderError;
use crate::functions::FunctionRegistry;
use super::appender::SqlAppender;
use super::dialect::Dialect;
use super::params::ParamContext;
use super::traits::SqlGenerator;
use super::TranspileResult;

/// Renders arbitrary expression nodes into its own output sink.
///
/// Function renderers receive the translator as `&mut dyn SqlAstTranslator`
/// and use it both to emit literal SQL (through [`SqlAppender`]) and to
/// render their operands.
pub trait SqlAstTranslator: SqlAppender {
    /// Dialect this translator targets.
    fn dialect(&self) -> Dialect;

    /// Render `expr` into the sink.
    fn render(&mut self, expr: &Expr) -> Result<(), RenderError>;
}

/// Standard translator: one per compilation, owns its sink.
pub struct Translator<'r> {
    dialect: Dialect,
    generator: Box<dyn SqlGenerator>,
    functions: &'r FunctionRegistry,
    sql: String,
    /// `Some` when literals are extracted as bind parameters
    params: Option<ParamContext>,
}

impl Translator<'static> {
    /// Translator using the dialect's built-in function registry.
    pub fn new(dialect: Dialect) -> Self {
        Translator::with_registry(dialect, dialect.functions())
    }
}

impl<'r> Translator<'r> {
    /// Translator resolving function calls through a caller-supplied registry.
    pub fn with_registry(dialect: Dialect, functions: &'r FunctionRegistry) -> Self {
        Self {
            dialect,
            generator: dialect.generator(),
            functions,
            sql: String::new(),
            params: None,
        }
    }

    /// Extract literal values as bind parameters instead of inlining them.
    pub fn parameterized(mut self) -> Self {
        self.params = Some(ParamContext::new());
        self
    }

    /// SQL rendered so far.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn finish(self) -> TranspileResult {
        TranspileResult {
            sql: self.sql,
            params: self.params.map(ParamContext::into_params).unwrap_or_default(),
        }
    }

    fn render_value(&mut self, value: &Value) -> Result<(), RenderError> {
        if let Value::Float(n) = value {
            if !n.is_finite() {
                return Err(RenderError::NonFiniteNumber(*n));
            }
        }
        let text = match value {
            Value::Param(n) => self.generator.placeholder(*n),
            Value::Null => "null".to_string(),
            other => match self.params.as_mut() {
                Some(ctx) => ctx.add_param(other.clone(), self.generator.as_ref()),
                None => match other {
                    Value::Bool(b) => self.generator.bool_literal(*b),
                    Value::String(s) => self.generator.string_literal(s),
                    v => v.to_string(),
                },
            },
        };
        self.sql.push_str(&text);
        Ok(())
    }

    fn render_function(&mut self, name: &str, args: &[Expr]) -> Result<(), RenderError> {
        let functions = self.functions;
        let function = functions
            .resolve(name)
            .ok_or_else(|| RenderError::UnknownFunction {
                name: name.to_string(),
                dialect: self.dialect,
            })?;
        function.arity().validate(name, args.len())?;

        debug!(
            function = name,
            dialect = %self.dialect,
            args = args.len(),
            "rendering function call"
        );
        function.render(args, function.return_type(), self)
    }
}

impl SqlAppender for Translator<'_> {
    fn append_sql(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    fn append_char(&mut self, c: char) {
        self.sql.push(c);
    }
}

impl SqlAstTranslator for Translator<'_> {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn render(&mut self, expr: &Expr) -> Result<(), RenderError> {
        trace!(node = %expr, "render");
        match expr {
            Expr::Column { qualifier, name } => {
                if let Some(q) = qualifier {
                    let q = self.generator.quote_identifier(q);
                    self.sql.push_str(&q);
                    self.sql.push('.');
                }
                let name = self.generator.quote_identifier(name);
                self.sql.push_str(&name);
            }
            Expr::Literal(value) => self.render_value(value)?,
            Expr::Raw(sql) => self.sql.push_str(sql),
            Expr::Function { name, args } => self.render_function(name, args)?,
        }
        Ok(())
    }
}
