use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::manifest::FsManifestReader;
use crate::result::CliResult;
use crate::{run_cli, run_cli_in};

#[derive(Debug, Parser)]
#[command(
    name = "starter-cli",
    version,
    about = "Print a greeting for the package in the current directory"
)]
pub struct Cli {
    /// Package name to greet instead of reading package.json
    #[arg(long)]
    name: Option<String>,
    /// Directory containing package.json (defaults to the working directory)
    #[arg(long, value_name = "PATH")]
    dir: Option<PathBuf>,
    /// Print the full result as JSON instead of the message
    #[arg(long)]
    json: bool,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

pub fn run() -> anyhow::Result<CliResult> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    execute(&cli, &mut stdout.lock())
}

pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<CliResult> {
    let name = cli.name.as_deref();
    let result = match &cli.dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "resolving against explicit directory");
            run_cli_in(name, dir, &FsManifestReader)
        }
        None => run_cli(name),
    };

    if cli.json {
        let rendered = serde_json::to_string(&result).context("serializing result")?;
        writeln!(out, "{rendered}").context("writing result")?;
    } else {
        writeln!(out, "{}", result.message).context("writing result")?;
    }

    Ok(result)
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
