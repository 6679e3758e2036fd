//! SLDLog CLI - query fact/rule knowledge bases by SLD resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sldlog::parser::parse_query;
use sldlog::repl::{render_outcome, Repl};
use sldlog::session::Session;
use sldlog::sld::SolveConfig;

/// Backward-chaining queries over facts and rules
#[derive(Parser)]
#[command(name = "sldlog")]
#[command(version)]
#[command(about = "Backward-chaining queries over facts and rules")]
struct Cli {
    /// Knowledge base files (.json documents or clause files)
    files: Vec<PathBuf>,

    /// Run one query and exit (status 1 when it has no answers)
    #[arg(short, long)]
    query: Option<String>,

    /// Maximum resolution steps along one branch
    #[arg(long)]
    max_depth: Option<usize>,

    /// Maximum answers reported per query
    #[arg(long)]
    max_solutions: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::with_config(SolveConfig {
        max_depth: cli.max_depth,
        max_solutions: cli.max_solutions,
    });
    for file in &cli.files {
        session
            .load_file(file)
            .with_context(|| format!("failed to load {}", file.display()))?;
    }
    tracing::info!(
        facts = session.knowledge_base().facts().len(),
        rules = session.knowledge_base().rules().len(),
        "knowledge base ready"
    );

    if let Some(query) = &cli.query {
        let goals = parse_query(query).with_context(|| format!("invalid query: {}", query))?;
        let outcome = session.query(goals);
        println!("{}", render_outcome(&outcome));
        std::process::exit(if outcome.is_satisfied() { 0 } else { 1 });
    }

    println!("SLDLog - backward chaining over facts and rules");
    println!("Type :help for help, :quit to exit.\n");

    let mut repl = Repl::with_session(session);
    repl.run().context("REPL failed")?;
    Ok(())
}
