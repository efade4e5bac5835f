//! CLI entry point for acknow.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and
//! exit codes. All business logic lives in the `acknow-app` crate.

use acknow_app::{DecodeInput, LockSource, list_schema_json, render_output, run_decode};
use acknow_settings::Overrides;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`tracing_subscriber::EnvFilter` syntax).
const LOG_ENV: &str = "ACKNOW_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "acknow",
    version,
    about = "Acknowledgement lists from Swift Package Manager lock files"
)]
struct Cli {
    /// Path to acknow config TOML (missing file means defaults).
    #[arg(long, default_value = "acknow.toml")]
    config: Utf8PathBuf,

    /// Override version check (lenient|strict).
    #[arg(long)]
    version_check: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one or more Package.resolved files into a single acknowledgement list.
    Decode {
        /// Lock files, in output order.
        #[arg(required = true)]
        files: Vec<Utf8PathBuf>,

        /// Output format (json|markdown).
        #[arg(long)]
        format: Option<String>,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Print the JSON schema of the emitted acknowledgement list.
    Schema {
        /// Where to write the schema (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match &cli.cmd {
        Commands::Decode {
            files,
            format,
            output,
        } => cmd_decode(&cli, files, format.clone(), output.as_deref()),
        Commands::Schema { output } => cmd_schema(output.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("acknow error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_decode(
    cli: &Cli,
    files: &[Utf8PathBuf],
    format: Option<String>,
    output: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let cfg_text = read_config(&cli.config)?;

    let sources = files
        .iter()
        .map(|path| {
            let data = std::fs::read(path).with_context(|| format!("read {}", path))?;
            Ok(LockSource {
                label: path.to_string(),
                data,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let decoded = run_decode(DecodeInput {
        sources,
        config_text: &cfg_text,
        overrides: Overrides {
            version_check: cli.version_check.clone(),
            format,
        },
    })?;

    let text = render_output(&decoded.list, decoded.resolved_config.effective.format)?;
    write_or_print(output, &text)
}

/// Missing config file is allowed (defaults apply); any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn cmd_schema(output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let text = list_schema_json()?;
    write_or_print(output, &text)
}

fn write_or_print(output: Option<&Utf8Path>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => write_text_file(path, text),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
