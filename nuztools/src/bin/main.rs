use clap::{Parser, Subcommand};
use nuztools::{decode, inspect, logging, mappings::MappingsFile};
use std::path::PathBuf;

#[derive(Parser)]
struct Opts {
    #[arg(long, short = 'c')]
    config_dir: Option<PathBuf>,
    /// Log to a file in this directory instead of stderr.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    #[arg(long)]
    enable_debug: bool,
    #[command(subcommand)]
    tool: ToolOpts,
}

#[derive(Subcommand)]
enum ToolOpts {
    Decode(decode::Opts),
    Inspect(inspect::Opts),
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    match &opts.log_dir {
        Some(log_dir) => logging::initialize_file(opts.enable_debug, log_dir)?,
        None => logging::initialize_stderr(opts.enable_debug),
    }

    let box_mappings = MappingsFile::locate(opts.config_dir)?.load()?;

    match opts.tool {
        ToolOpts::Decode(opts) => decode::run(opts, box_mappings),
        ToolOpts::Inspect(opts) => inspect::run(opts, box_mappings),
    }
    .map_err(|err| {
        eprintln!("Failed to execute command: {err}");
        err
    })
}
