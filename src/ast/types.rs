use serde::{Deserialize, Serialize};

/// Result type a function call is expected to produce.
///
/// Passed through to [`crate::functions::SqlFunction::render`]. No renderer
/// in this crate branches on it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnType {
    Json,
    Text,
    Integer,
    Decimal,
    Boolean,
}

impl std::fmt::Display for ReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnType::Json => write!(f, "JSON"),
            ReturnType::Text => write!(f, "TEXT"),
            ReturnType::Integer => write!(f, "INTEGER"),
            ReturnType::Decimal => write!(f, "DECIMAL"),
            ReturnType::Boolean => write!(f, "BOOLEAN"),
        }
    }
}
