//! Error types.

use thiserror::Error;

use crate::transpiler::Dialect;

/// Errors raised while turning an expression tree into SQL text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// No function with this name is registered for the dialect.
    #[error("function '{name}' is not registered for dialect {dialect}")]
    UnknownFunction { name: String, dialect: Dialect },

    /// A function call carries the wrong number of operands.
    #[error("function '{function}' expects {expected} argument(s), got {found}")]
    ArityMismatch {
        function: String,
        expected: String,
        found: usize,
    },

    /// The dialect needs the JSON path inlined as a string literal.
    #[error("function '{function}' on {dialect} requires a string literal JSON path")]
    NonLiteralPath { function: String, dialect: Dialect },

    /// NaN and infinities have no SQL literal form.
    #[error("non-finite number {0} cannot be rendered as SQL")]
    NonFiniteNumber(f64),

    #[error("invalid JSON path '{path}': {reason}")]
    InvalidJsonPath { path: String, reason: String },

    /// Insert statement could not be rewritten for identifier retrieval.
    #[error("cannot prepare identifier-generating insert: {0}")]
    MalformedInsert(String),
}

/// Error parsing an expression stand-in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at '{remaining}': {message}")]
pub struct ParseError {
    pub message: String,
    /// Unconsumed input (truncated) at the point of failure.
    pub remaining: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>, remaining: &str) -> Self {
        let remaining: String = remaining.chars().take(32).collect();
        Self {
            message: message.into(),
            remaining,
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
