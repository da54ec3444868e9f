//! base16-builder: mirror base16 scheme and template sources and render
//! every scheme through every template.
//!
//! # Usage
//!
//! ```text
//! base16-builder [--config <file>] [--cache-dir <dir>] [--dry-run] [-v…] build [--update]
//!     [--scheme <fragment>] [--template <family>] [--json] [--output-dir <dir>]
//! base16-builder update [--json]
//! base16-builder list [--scheme <fragment>] [--template <family>] [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{build::BuildArgs, list::ListArgs, update::UpdateArgs, GlobalArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "base16-builder",
    version,
    about = "Build base16 color scheme files for every template",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render every selected scheme through every selected template.
    Build(BuildArgs),

    /// Clone missing mirrors and pull existing ones, without building.
    Update(UpdateArgs),

    /// List the schemes and template units found in the mirrors.
    List(ListArgs),
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// `RUST_LOG` wins; otherwise `-v` raises the default `warn` level.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    match cli.command {
        Commands::Build(args) => args.run(&cli.global),
        Commands::Update(args) => args.run(&cli.global),
        Commands::List(args) => args.run(&cli.global),
    }
}
