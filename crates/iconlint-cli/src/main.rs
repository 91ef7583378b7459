//! iconlint CLI - Icon resource consistency checker

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, issues};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "iconlint")]
#[command(about = "Check density-bucketed icon resources for consistency problems", long_about = None)]
#[command(version)]
struct Cli {
    /// Log progress to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a project or resource directory
    Check {
        /// Project directory (containing res/) or resource directory
        #[arg(default_value = ".")]
        path: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Read settings from this file instead of the project layers
        #[arg(long)]
        config: Option<String>,

        /// Minimum supported platform level
        #[arg(long)]
        min_sdk: Option<u32>,

        /// List every name instead of truncating long lists
        #[arg(long)]
        no_abbreviate: bool,

        /// Diagnostic order (path or priority)
        #[arg(long)]
        order: Option<String>,

        /// Enable an issue (repeatable)
        #[arg(long = "enable", value_name = "ID")]
        enable: Vec<String>,

        /// Disable an issue (repeatable)
        #[arg(long = "disable", value_name = "ID")]
        disable: Vec<String>,

        /// Run only these issues (repeatable)
        #[arg(long = "only", value_name = "ID")]
        only: Vec<String>,

        /// Don't guess icon roles from ic_* names
        #[arg(long)]
        no_conventions: bool,
    },

    /// List known issues
    Issues {
        /// Show the full explanation of one issue
        #[arg(long, value_name = "ID")]
        explain: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            path,
            format,
            config,
            min_sdk,
            no_abbreviate,
            order,
            enable,
            disable,
            only,
            no_conventions,
        } => check::run(check::CheckArgs {
            path,
            format,
            config,
            min_sdk,
            no_abbreviate,
            order,
            enable,
            disable,
            only,
            no_conventions,
        }),
        Commands::Issues { explain } => issues::run(explain.as_deref()),
    }
}
