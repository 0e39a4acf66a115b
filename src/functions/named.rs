//! Plain `name(arg, ...)` rendering for functions a dialect supports natively.

use crate::ast::{Expr, ReturnType};
use crate::error::RenderError;
use crate::functions::{Arity, SqlFunction};
use crate::transpiler::SqlAstTranslator;

#[derive(Debug, Clone)]
pub struct NamedFunction {
    name: String,
    arity: Arity,
    return_type: Option<ReturnType>,
}

impl NamedFunction {
    pub fn new(name: impl Into<String>, arity: Arity) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            arity,
            return_type: None,
        }
    }

    pub fn returns(mut self, return_type: ReturnType) -> Self {
        self.return_type = Some(return_type);
        self
    }
}

impl SqlFunction for NamedFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> Arity {
        self.arity
    }

    fn return_type(&self) -> Option<ReturnType> {
        self.return_type
    }

    fn render(
        &self,
        args: &[Expr],
        _return_type: Option<ReturnType>,
        translator: &mut dyn SqlAstTranslator,
    ) -> Result<(), RenderError> {
        translator.append_sql(&self.name);
        translator.append_char('(');
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                translator.append_char(',');
            }
            translator.render(arg)?;
        }
        translator.append_char(')');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transpiler::{Dialect, Translator};

    #[test]
    fn test_render_named_call() {
        let f = NamedFunction::new("COALESCE", Arity::AtLeast(1));
        let mut t = Translator::new(Dialect::Postgres);
        f.render(&[Expr::col("a"), Expr::string("b")], None, &mut t).unwrap();
        assert_eq!(t.sql(), "coalesce(a,'b')");
    }

    #[test]
    fn test_render_zero_args() {
        let f = NamedFunction::new("json_array", Arity::AtLeast(0));
        let mut t = Translator::new(Dialect::MySql);
        f.render(&[], None, &mut t).unwrap();
        assert_eq!(t.sql(), "json_array()");
    }
}
