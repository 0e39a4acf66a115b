//! Target database dialects.

use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::functions::FunctionRegistry;
use crate::identity::IdentifierRetrieval;
use super::sql::*;
use super::traits::SqlGenerator;

/// Supported target dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Postgres,
    MySql,
    MariaDb,
    Sqlite,
    Oracle,
    SqlServer,
}

/// One lazily-built registry per dialect, indexed by [`Dialect::index`].
static REGISTRIES: [OnceLock<FunctionRegistry>; 6] = [
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
];

impl Dialect {
    pub const ALL: [Dialect; 6] = [
        Dialect::Postgres,
        Dialect::MySql,
        Dialect::MariaDb,
        Dialect::Sqlite,
        Dialect::Oracle,
        Dialect::SqlServer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
            Dialect::MariaDb => "mariadb",
            Dialect::Sqlite => "sqlite",
            Dialect::Oracle => "oracle",
            Dialect::SqlServer => "sqlserver",
        }
    }

    fn index(&self) -> usize {
        match self {
            Dialect::Postgres => 0,
            Dialect::MySql => 1,
            Dialect::MariaDb => 2,
            Dialect::Sqlite => 3,
            Dialect::Oracle => 4,
            Dialect::SqlServer => 5,
        }
    }

    /// Token syntax strategy for this dialect.
    pub fn generator(&self) -> Box<dyn SqlGenerator> {
        match self {
            Dialect::Postgres => Box::new(PostgresGenerator),
            Dialect::MySql | Dialect::MariaDb => Box::new(MySqlGenerator),
            Dialect::Sqlite => Box::new(SqliteGenerator),
            Dialect::Oracle => Box::new(OracleGenerator),
            Dialect::SqlServer => Box::new(SqlServerGenerator),
        }
    }

    /// The dialect's function registry, built on first use and shared afterwards.
    pub fn functions(&self) -> &'static FunctionRegistry {
        REGISTRIES[self.index()].get_or_init(|| FunctionRegistry::for_dialect(*self))
    }

    /// How database-generated keys come back from an insert.
    pub fn identifier_retrieval(&self) -> IdentifierRetrieval {
        match self {
            Dialect::Postgres | Dialect::MariaDb | Dialect::Sqlite => IdentifierRetrieval::Returning,
            Dialect::SqlServer => IdentifierRetrieval::OutputInserted,
            Dialect::MySql | Dialect::Oracle => IdentifierRetrieval::GeneratedKeys,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "mysql" => Ok(Dialect::MySql),
            "mariadb" | "maria" => Ok(Dialect::MariaDb),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "oracle" => Ok(Dialect::Oracle),
            "sqlserver" | "mssql" | "tsql" => Ok(Dialect::SqlServer),
            other => Err(format!(
                "unknown dialect '{}' (expected one of: postgres, mysql, mariadb, sqlite, oracle, sqlserver)",
                other
            )),
        }
    }
}
