use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod output;
mod state;

use commands::RunOptions;
use output::OutputFormat;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TASKSCORE_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "taskscore", version = VERSION, about = "Rank tasks by urgency, importance, effort and dependencies")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Task file: .csv, or JSON (array of tasks or {"tasks": [...], "strategy": ..., "count": ...})
    #[arg(long, short)]
    input: PathBuf,

    /// smart_balance | fastest_wins | high_impact | deadline_driven
    #[arg(long, short)]
    strategy: Option<String>,

    /// Reference date (YYYY-MM-DD); defaults to today in the configured timezone
    #[arg(long)]
    today: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every task and print them by priority
    Analyze {
        #[command(flatten)]
        args: InputArgs,
    },

    /// Print the top N tasks with recommendations
    Suggest {
        #[command(flatten)]
        args: InputArgs,

        /// Number of suggestions (1-10; default from config)
        #[arg(long, short)]
        count: Option<i64>,
    },

    /// List the built-in scoring strategies and their weights
    Strategies,

    /// Write a default config to ~/.taskscore/config.toml
    InitConfig,
}

impl InputArgs {
    fn options(&self, count: Option<i64>) -> RunOptions {
        RunOptions {
            strategy: self.strategy.clone(),
            today: self.today.clone(),
            count,
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { args } => {
            let cfg = config::load_config()?;
            let req = commands::load_request(&args.input)?;
            let run = commands::prepare(req, &args.options(None), &cfg)?;
            let analyzed = commands::run_analyze(&run);
            print!(
                "{}",
                output::render_analysis(run.engine.strategy(), &analyzed, args.format)?
            );
        }

        Command::Suggest { args, count } => {
            let cfg = config::load_config()?;
            let req = commands::load_request(&args.input)?;
            let run = commands::prepare(req, &args.options(count), &cfg)?;
            let suggestions = commands::run_suggest(&run);
            print!(
                "{}",
                output::render_suggestions(run.engine.strategy(), &suggestions, args.format)?
            );
        }

        Command::Strategies => {
            print!("{}", output::render_strategies());
        }

        Command::InitConfig => {
            config::init_config()?;
        }
    }

    Ok(())
}
