//! sql2gorm — MySQL DDL to GORM models
//!
//! # Usage
//!
//! ```bash
//! # Print Go models for a schema dump
//! sql2gorm --file schema.sql
//!
//! # Custom package, written to a file
//! sql2gorm --file schema.sql --package entity --output models.go
//!
//! # Inspect the parse tree
//! sql2gorm tree schema.sql
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use sql2gorm::config::ConfigBuilder;
use sql2gorm::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sql2gorm")]
#[command(version)]
#[command(about = "Generate GORM model structs from MySQL CREATE TABLE statements", long_about = None)]
#[command(after_help = "EXAMPLES:
    sql2gorm --file schema.sql
    sql2gorm --file schema.sql --package entity --output models.go
    sql2gorm --file schema.sql --format json
    sql2gorm tree schema.sql")]
struct Cli {
    /// Path to the SQL file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Go package name (overrides the config file)
    #[arg(short, long, env = "SQL2GORM_PACKAGE")]
    package: Option<String>,

    /// Config file (default: ./sql2gorm.toml, then the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "go")]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Go,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parse tree of a SQL file
    Tree {
        /// The SQL file to parse
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Some(Commands::Tree { file }) => show_tree(file),
        None => match &cli.file {
            Some(file) => generate(file, &cli),
            None => {
                println!("{}", "sql2gorm — MySQL DDL to GORM models".cyan().bold());
                println!();
                println!("Usage: sql2gorm --file <PATH> [OPTIONS]");
                println!();
                println!("Try: sql2gorm --help");
                return;
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        if e.chain().any(|cause| cause.is::<std::io::Error>()) {
            eprintln!("{}", "Check the --file path. Try: sql2gorm --help".dimmed());
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the generated source.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "sql2gorm=debug" } else { "sql2gorm=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_sql(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn generate(path: &Path, cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(package) = &cli.package {
        config = ConfigBuilder::from_config(config).package(package.as_str()).build();
    }

    let sql = read_sql(path)?;
    let model = build_model(&sql, &config)?;
    let text = match cli.format {
        OutputFormat::Go => model.to_gorm(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&model)?;
            json.push('\n');
            json
        }
    };

    match &cli.output {
        Some(out) => {
            std::fs::write(out, &text)
                .with_context(|| format!("cannot write {}", out.display()))?;
            eprintln!(
                "{} Wrote {} model(s) to {}",
                "✓".green(),
                model.tables.len(),
                out.display().to_string().cyan()
            );
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn show_tree(path: &Path) -> anyhow::Result<()> {
    let sql = read_sql(path)?;
    let tree = parse(&sql)?;
    print!("{}", tree.dump());
    Ok(())
}
