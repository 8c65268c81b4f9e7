mod cmd;
mod output;
mod render;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;
use testgen_core::types::RunMode;

#[derive(Parser)]
#[command(
    name = "testgen",
    about = "Scan user stories and print the steps that generate their missing test plans, suites, and cases",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from docs/user-stories/ or .git/)
    #[arg(long, global = true, env = "TESTGEN_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log scan details to stderr
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    /// Pause between steps for verification
    #[arg(long, env = "TESTGEN_REVIEW")]
    review: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan user stories and print the generation workflow (default)
    Plan {
        /// Pause between steps for verification
        #[arg(long, env = "TESTGEN_REVIEW")]
        review: bool,
    },

    /// Show the artifact status of every user story
    Status,

    /// Inspect and validate testgen.yaml
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG directives apply on top of WARN; -v forces DEBUG everywhere.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::builder()
            .with_default_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
            .from_env_lossy()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved project root");

    let result = match cli.command {
        None => cmd::plan::run(&root, RunMode::from_review_flag(cli.review), cli.json),
        Some(Commands::Plan { review }) => cmd::plan::run(
            &root,
            RunMode::from_review_flag(review || cli.review),
            cli.json,
        ),
        Some(Commands::Status) => cmd::status::run(&root, cli.json),
        Some(Commands::Config { subcommand }) => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
