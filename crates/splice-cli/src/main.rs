/// SPLICE command-line tool. Prints, inspects and validates `.splice`
/// drum pattern files.
///
/// # Command overview
///
/// ```text
/// splice <COMMAND> [OPTIONS]
///
/// Commands:
///   show       Print a pattern as a step grid (or JSON)
///   inspect    Print the frame layout: body length, track offsets, trailing bytes
///   validate   Check a pattern file for structural correctness
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log decode progress to stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid file, etc.) |
///
/// Errors and logs go to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_inspect;
mod cmd_show;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Decode and display SPLICE drum machine patterns.
#[derive(Parser)]
#[command(name = "splice", version, about = "SPLICE drum pattern tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decode progress (debug level) to stderr. `RUST_LOG` overrides.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print a pattern as a step grid or JSON.
    Show(ShowArgs),
    /// Print the frame layout of a pattern file.
    Inspect(InspectArgs),
    /// Check a pattern file for structural correctness.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `splice show`.
///
/// ```text
/// ┌───────────────┬──────────────────────────────────────────────┐
/// │ Flag          │ Values / default                             │
/// ├───────────────┼──────────────────────────────────────────────┤
/// │ --format      │ text (default) | json                        │
/// │ --tracks      │ comma-separated track ids to render          │
/// │ -o / --output │ write to file instead of stdout              │
/// └───────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Path to the `.splice` file.
    pub file: PathBuf,

    /// Output format: `text` or `json`.
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Comma-separated track ids to include (e.g. `0,1,5`).
    #[arg(long)]
    pub tracks: Option<String>,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `splice inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the `.splice` file.
    pub file: PathBuf,

    /// Also print a hex dump of bytes after the declared body.
    #[arg(long)]
    pub show_trailing: bool,
}

/// Arguments for `splice validate`.
///
/// Exits 0 when the file decodes, 1 otherwise.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the `.splice` file.
    pub file: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Show(args) => cmd_show::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
