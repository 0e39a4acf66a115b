//! Per-dialect [`SqlGenerator`](super::SqlGenerator) implementations.

pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod sqlite;
pub mod sqlserver;

pub use mysql::MySqlGenerator;
pub use oracle::OracleGenerator;
pub use postgres::PostgresGenerator;
pub use sqlite::SqliteGenerator;
pub use sqlserver::SqlServerGenerator;
