use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufWriter, Write};

use opsuite::{GenerationPipeline, MissingInputPolicy};

#[derive(Parser)]
#[command(name = "opsuite")]
#[command(author, version, about = "Generate exhaustive int/long operator test suites", long_about = None)]
struct Cli {
    /// Name of the generated test class
    class_name: Option<String>,

    /// Binary operator to test, e.g. `%` or `>>`
    operator: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Substitute empty strings for missing arguments instead of failing
    #[arg(long)]
    allow_empty: bool,

    /// Print the suite plan as JSON instead of Java source
    #[arg(long)]
    dump_plan: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over the verbose flag
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let policy = if cli.allow_empty {
        MissingInputPolicy::Substitute
    } else {
        MissingInputPolicy::Reject
    };
    let pipeline = GenerationPipeline::new(policy);

    let plan = pipeline.plan(cli.class_name.as_deref(), cli.operator.as_deref())?;
    log::debug!(
        "{} methods, {} values each",
        plan.cases.len(),
        plan.values_per_case
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.dump_plan {
        writeln!(out, "{}", plan.to_json()?).context("Failed to write suite plan")?;
        out.flush().context("Failed to write suite plan")?;
        return Ok(());
    }

    pipeline
        .emit(&plan, &mut out)
        .with_context(|| format!("Failed to emit test class {}", plan.class_name))?;
    Ok(())
}
