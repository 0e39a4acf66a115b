use crate::ast::Value;
use super::traits::SqlGenerator;

/// Context for parameterized query building.
#[derive(Debug, Default)]
pub struct ParamContext {
    /// Current parameter index (1-based for Postgres $1, $2, etc.)
    pub index: usize,
    /// Collected parameter values in order
    pub params: Vec<Value>,
}

impl ParamContext {
    pub fn new() -> Self {
        Self { index: 0, params: Vec::new() }
    }

    /// Add a value and return the placeholder for it.
    pub fn add_param(&mut self, value: Value, generator: &dyn SqlGenerator) -> String {
        self.index += 1;
        self.params.push(value);
        generator.placeholder(self.index)
    }

    pub fn into_params(self) -> Vec<Value> {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transpiler::Dialect;

    #[test]
    fn test_add_param_numbers_placeholders() {
        let generator = Dialect::Postgres.generator();
        let mut ctx = ParamContext::new();
        assert_eq!(ctx.add_param(Value::Int(1), generator.as_ref()), "$1");
        assert_eq!(ctx.add_param(Value::from("a"), generator.as_ref()), "$2");
        assert_eq!(ctx.into_params(), vec![Value::Int(1), Value::from("a")]);
    }
}
