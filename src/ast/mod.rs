pub mod expr;
pub mod types;
pub mod values;

pub use self::expr::Expr;
pub use self::types::ReturnType;
pub use self::values::Value;
