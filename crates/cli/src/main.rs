//! Thunk CLI
//!
//! Command-line driver that demonstrates deferred logic and infinite lazy
//! lists, printing one value per line.

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use thunk_cli::config::{self, DemoConfig, FilterConfig, RangeConfig};
use thunk_cli::{demo, logging};
use tracing::debug;

#[derive(ClapParser)]
#[command(name = "thunk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Demonstrate lazy evaluation with thunks and infinite lists", long_about = None)]
struct Cli {
    /// TOML configuration file (merged over the built-in defaults)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the truth tables of short-circuit and/or
    Logic,

    /// Show that unneeded operands are never forced
    First,

    /// Print a finite list built from the given items
    List {
        /// Items to print (defaults to the configured list)
        #[arg(allow_negative_numbers = true)]
        items: Vec<i64>,
    },

    /// Print the first COUNT numbers of the infinite range from START
    Range {
        #[arg(short, long, allow_negative_numbers = true)]
        start: Option<i64>,

        #[arg(short, long, allow_negative_numbers = true)]
        count: Option<i64>,
    },

    /// Print the first COUNT multiples of DIVISOR in the infinite range from START
    Filter {
        #[arg(short, long, allow_negative_numbers = true)]
        start: Option<i64>,

        #[arg(short, long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Keep numbers divisible by this (non-zero)
        #[arg(short, long, allow_negative_numbers = true)]
        divisor: Option<i64>,
    },

    /// Run every demonstration in order
    Tour,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config.logging.level, cli.verbose) {
        eprintln!("Warning: {}; falling back to 'warn'", e);
    }
    debug!(?config, "configuration loaded");

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig, String> {
    match path {
        Some(path) => DemoConfig::load(path),
        None => DemoConfig::default_config(),
    }
}

fn run(command: Commands, config: &DemoConfig) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match command {
        Commands::Logic => demo::logic(&mut out),
        Commands::First => demo::unforced(&mut out),
        Commands::List { items } => {
            let items = if items.is_empty() {
                &config.list.items
            } else {
                &items
            };
            demo::list(&mut out, items).map(|_| ())
        }
        Commands::Range { start, count } => {
            let settings = RangeConfig {
                start: start.unwrap_or(config.range.start),
                count: count.unwrap_or(config.range.count),
            };
            demo::bounded_range(&mut out, &settings).map(|_| ())
        }
        Commands::Filter {
            start,
            count,
            divisor,
        } => {
            let settings = FilterConfig {
                start: start.unwrap_or(config.filter.start),
                count: count.unwrap_or(config.filter.count),
                divisor: divisor.unwrap_or(config.filter.divisor),
            };
            config::validate_divisor(settings.divisor)?;
            demo::bounded_multiples(&mut out, &settings).map(|_| ())
        }
        Commands::Tour => demo::tour(&mut out, config),
        Commands::Completions { shell } => {
            run_completions(shell, &mut out);
            Ok(())
        }
    };

    result
        .and_then(|_| out.flush())
        .map_err(|e| format!("Failed to write output: {}", e))
}

fn run_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "thunk", out);
}
