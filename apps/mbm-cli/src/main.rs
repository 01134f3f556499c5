use clap::{Parser, Subcommand};
use mbm_app::{
    AppError, AppResult, Catalog, CatalogConfig, calc_service, load_catalog, operation_table,
};
use mbm_core::{Operator, Outcome, Value};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mbm-cli")]
#[command(about = "Measurement-Based Mathematics engine - evaluate 0m, 0bm and 1t axioms", long_about = None)]
struct Cli {
    /// YAML file describing the operand menu (defaults to the built-in menu)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log each evaluation to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one binary operation
    Eval {
        /// Left operand: a menu label or a value token (5, -2.5, 0m, 0bm, 1t)
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// Operation: +, × (or *), /
        op: String,
        /// Right operand: a menu label or a value token
        #[arg(allow_hyphen_values = true)]
        rhs: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the selectable operands and operations
    Menu {
        /// Print the menu as a YAML config file
        #[arg(long)]
        yaml: bool,
    },
    /// Print the full table of one operation over the menu
    Table {
        /// Operation: +, × (or *), /
        op: String,
    },
}

/// JSON form of one evaluation.
#[derive(Serialize)]
struct EvalReport {
    expression: String,
    lhs: Value,
    op: Operator,
    rhs: Value,
    outcome: Outcome,
    result: String,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = load_catalog(cli.config.as_deref())?;
    debug!(operands = catalog.len(), "operand menu ready");

    match cli.command {
        Commands::Eval { lhs, op, rhs, json } => cmd_eval(&catalog, &lhs, &op, &rhs, json),
        Commands::Menu { yaml } => cmd_menu(&catalog, yaml),
        Commands::Table { op } => cmd_table(&catalog, &op),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_eval(catalog: &Catalog, lhs: &str, op: &str, rhs: &str, json: bool) -> AppResult<()> {
    let calc = calc_service::calculate(catalog, lhs, op, rhs)?;

    if json {
        let report = EvalReport {
            expression: format!("{} {} {}", calc.lhs, calc.op, calc.rhs),
            lhs: calc.lhs,
            op: calc.op,
            rhs: calc.rhs,
            outcome: calc.outcome,
            result: calc.outcome.to_string(),
        };
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        println!("{}", text);
    } else {
        println!("{}", calc);
    }
    Ok(())
}

fn cmd_menu(catalog: &Catalog, yaml: bool) -> AppResult<()> {
    if yaml {
        let text = CatalogConfig::from(catalog)
            .to_yaml()
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        print!("{}", text);
        return Ok(());
    }

    println!("Operands:");
    for entry in catalog.entries() {
        println!(
            "  {:<22} {:>4}  ({})",
            entry.label,
            entry.value.to_string(),
            entry.value.kind_name()
        );
    }

    let symbols: Vec<&str> = Operator::ALL.iter().map(|op| op.symbol()).collect();
    println!("\nOperations: {}", symbols.join("  "));
    Ok(())
}

fn cmd_table(catalog: &Catalog, op: &str) -> AppResult<()> {
    let op: Operator = op.parse()?;
    let table = operation_table(catalog, op);
    println!("{}", table);
    Ok(())
}
