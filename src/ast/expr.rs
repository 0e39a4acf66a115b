use serde::{Deserialize, Serialize};

use crate::ast::Value;

/// A node in the SQL expression tree.
///
/// Nodes are read-only while being rendered; the same node may be rendered
/// any number of times and always yields the same text for a given
/// translator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Column reference, optionally qualified (`t.doc`)
    Column {
        qualifier: Option<String>,
        name: String,
    },
    /// Literal value
    Literal(Value),
    /// Abstract function call, resolved per dialect at render time
    Function { name: String, args: Vec<Expr> },
    /// Verbatim SQL, emitted as-is
    Raw(String),
}

impl Expr {
    /// Column reference. A dotted name (`t.doc`) becomes a qualified column.
    pub fn col(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.split_once('.') {
            Some((qualifier, col)) if !qualifier.is_empty() && !col.is_empty() => Expr::Column {
                qualifier: Some(qualifier.to_string()),
                name: col.to_string(),
            },
            _ => Expr::Column {
                qualifier: None,
                name,
            },
        }
    }

    pub fn string(s: impl Into<String>) -> Self {
        Expr::Literal(Value::String(s.into()))
    }

    pub fn int(n: i64) -> Self {
        Expr::Literal(Value::Int(n))
    }

    pub fn param(n: usize) -> Self {
        Expr::Literal(Value::Param(n))
    }

    pub fn lit(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Expr::Raw(sql.into())
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Function {
            name: name.into(),
            args,
        }
    }

    /// The string payload when this node is a string literal.
    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Expr::Literal(v) => v.as_str(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Column {
                qualifier: Some(q),
                name,
            } => write!(f, "{}.{}", q, name),
            Expr::Column {
                qualifier: None,
                name,
            } => write!(f, "{}", name),
            Expr::Literal(v) => write!(f, "{}", v),
            Expr::Function { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expr::Raw(sql) => write!(f, "{{{}}}", sql),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_splits_qualifier() {
        assert_eq!(
            Expr::col("t.doc"),
            Expr::Column {
                qualifier: Some("t".to_string()),
                name: "doc".to_string()
            }
        );
        assert_eq!(
            Expr::col("doc"),
            Expr::Column {
                qualifier: None,
                name: "doc".to_string()
            }
        );
    }

    #[test]
    fn test_display_nested_call() {
        let expr = Expr::call(
            "json_array_append",
            vec![Expr::col("doc"), Expr::string("$.items"), Expr::raw("now()")],
        );
        assert_eq!(expr.to_string(), "json_array_append(doc, '$.items', {now()})");
    }
}
