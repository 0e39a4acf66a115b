//! SQL function descriptors and the per-dialect registry.
//!
//! A [`SqlFunction`] turns an abstract call into native SQL for one dialect.
//! [`FunctionRegistry::for_dialect`] assembles the set a dialect supports;
//! the translator resolves names against it at render time.

pub mod json;
pub mod named;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::ast::{Expr, ReturnType};
use crate::error::RenderError;
use crate::transpiler::{Dialect, SqlAstTranslator};
pub use named::NamedFunction;

/// Number of operands a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// Inclusive bounds
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::Range(min, max) => (min..=max).contains(&count),
            Arity::AtLeast(min) => count >= min,
        }
    }

    /// Check `count` operands against this arity for `function`.
    pub fn validate(&self, function: &str, count: usize) -> Result<(), RenderError> {
        if self.accepts(count) {
            Ok(())
        } else {
            Err(RenderError::ArityMismatch {
                function: function.to_string(),
                expected: self.to_string(),
                found: count,
            })
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::Range(min, max) => write!(f, "{}..={}", min, max),
            Arity::AtLeast(min) => write!(f, "at least {}", min),
        }
    }
}

/// A dialect-specific rendering of one abstract SQL function.
///
/// Implementations are stateless apart from what they were constructed
/// with, so one instance can serve concurrent compilations.
pub trait SqlFunction: Send + Sync + fmt::Debug {
    /// Registry name (lower case).
    fn name(&self) -> &str;

    fn arity(&self) -> Arity;

    fn return_type(&self) -> Option<ReturnType> {
        None
    }

    /// Write the native SQL for a call with `args` into the translator.
    ///
    /// Callers validate operand count against [`SqlFunction::arity`] first.
    /// Errors raised while rendering an operand are returned unchanged.
    fn render(
        &self,
        args: &[Expr],
        return_type: Option<ReturnType>,
        translator: &mut dyn SqlAstTranslator,
    ) -> Result<(), RenderError>;
}

/// Name-to-function table for one dialect.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn SqlFunction>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Functions built into `dialect`.
    pub fn for_dialect(dialect: Dialect) -> Self {
        let mut registry = Self::new();
        registry.register(NamedFunction::new("coalesce", Arity::AtLeast(1)));
        registry.register(NamedFunction::new("lower", Arity::Exact(1)).returns(ReturnType::Text));
        registry.register(NamedFunction::new("upper", Arity::Exact(1)).returns(ReturnType::Text));
        json::register_json_functions(dialect, &mut registry);
        debug!(dialect = %dialect, functions = registry.len(), "built function registry");
        registry
    }

    /// Register `function` under its name, replacing any previous entry.
    pub fn register(&mut self, function: impl SqlFunction + 'static) -> &mut Self {
        let name = function.name().to_ascii_lowercase();
        self.functions.insert(name, Arc::new(function));
        self
    }

    /// Case-insensitive lookup.
    pub fn resolve(&self, name: &str) -> Option<&Arc<dyn SqlFunction>> {
        self.functions
            .get(name)
            .or_else(|| self.functions.get(&name.to_ascii_lowercase()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
