//! sqlfn CLI: render abstract SQL function calls for a target dialect.
//!
//! ```text
//! sqlfn render -d mariadb "json_array_append(doc, '$.items', 42)"
//! sqlfn functions -d postgres
//! sqlfn identity -d sqlserver --id id "insert into t (a) values (@P1)"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use sqlfn::ast::Expr;
use sqlfn::config::{Config, LogFormat};
use sqlfn::identity::GeneratedIdentifierDelegate;
use sqlfn::parse_expr;
use sqlfn::transpiler::{Dialect, SqlAstTranslator, TranspileResult, Translator};

#[derive(Parser)]
#[command(name = "sqlfn")]
#[command(about = "Dialect-aware SQL function rendering")]
#[command(version)]
struct Cli {
    /// Config file (default: search sqlfn.toml, .sqlfn/config.toml, user config dir)
    #[arg(long, global = true, env = "SQLFN_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an expression to SQL
    Render {
        /// Expression, e.g. "json_array_append(doc, '$.items', 42)"
        expr: String,

        /// Target dialect
        #[arg(short, long, value_parser = parse_dialect)]
        dialect: Option<Dialect>,

        /// Extract literals as bind parameters
        #[arg(short, long)]
        params: bool,

        /// Treat EXPR as a JSON-serialized expression tree
        #[arg(long)]
        ast: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the functions a dialect supports
    Functions {
        #[arg(short, long, value_parser = parse_dialect)]
        dialect: Option<Dialect>,
    },
    /// Prepare an insert so it returns generated identifiers
    Identity {
        /// The insert statement
        sql: String,

        #[arg(short, long, value_parser = parse_dialect)]
        dialect: Option<Dialect>,

        /// Identifier column(s)
        #[arg(long = "id", default_value = "id")]
        ids: Vec<String>,
    },
}

fn parse_dialect(s: &str) -> Result<Dialect, String> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Render {
            expr,
            dialect,
            params,
            ast,
            json,
        } => {
            let dialect = dialect.unwrap_or(config.dialect);
            let result = render(&expr, ast, dialect, params || config.parameterize)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.sql);
                for (i, param) in result.params.iter().enumerate() {
                    println!("  {} {}", format!("[{}]", i + 1).dimmed(), param.to_string().yellow());
                }
            }
        }
        Commands::Functions { dialect } => {
            let dialect = dialect.unwrap_or(config.dialect);
            let registry = dialect.functions();
            println!("{} {}", "Functions for".bold(), dialect.to_string().cyan());
            for name in registry.names() {
                if let Some(f) = registry.resolve(name) {
                    let returns = f
                        .return_type()
                        .map(|t| format!(" -> {}", t))
                        .unwrap_or_default();
                    println!("  {} ({} args){}", name.green(), f.arity(), returns.dimmed());
                }
            }
        }
        Commands::Identity { sql, dialect, ids } => {
            let dialect = dialect.unwrap_or(config.dialect);
            let delegate = GeneratedIdentifierDelegate::new(dialect, ids);
            let prepared = delegate.prepare_identifier_generating_insert(&sql)?;
            println!("{}", prepared);
            if let Some(select) = delegate.identity_select() {
                println!("{} {}", "then:".dimmed(), select);
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> sqlfn::Result<Config> {
    Ok(match path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    })
}

/// Parse `source` (stand-in text, or a JSON tree with `ast`) and render it.
fn render(
    source: &str,
    ast: bool,
    dialect: Dialect,
    parameterized: bool,
) -> sqlfn::Result<TranspileResult> {
    let expr: Expr = if ast {
        serde_json::from_str(source)?
    } else {
        parse_expr(source)?
    };

    let mut translator = Translator::new(dialect);
    if parameterized {
        translator = translator.parameterized();
    }
    translator.render(&expr)?;
    Ok(translator.finish())
}

fn init_logging(config: &Config, verbose: u8) {
    let level = match verbose {
        0 => config.log.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match config.log.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }
}
