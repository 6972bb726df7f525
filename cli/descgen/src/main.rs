//! descgen — generate a robot's `.urdf.xacro` description from its configuration.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "descgen",
    version,
    about = "Generate a robot description (.urdf.xacro) from a robot configuration"
)]
struct Cli {
    /// Robot configuration file (default: /etc/clearpath/robot.yaml)
    config: Option<PathBuf>,
    /// Directory the description is written to (default: current directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Write the description to standard output instead of a file
    #[arg(long, conflicts_with = "output_dir")]
    stdout: bool,
    /// List supported platforms, decorations and mounts
    #[arg(long)]
    list_supported: bool,
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.list_supported {
        return commands::list::run();
    }

    let config_path = commands::generate::resolve_config_path(cli.config.as_deref())?;
    if cli.stdout {
        return commands::generate::to_stdout(&config_path);
    }

    let output_dir = match cli.output_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let path = commands::generate::to_dir(&config_path, &output_dir)?;
    println!("Generated {}", path.display());
    Ok(())
}

/// Log to stderr so `--stdout` output stays clean.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
