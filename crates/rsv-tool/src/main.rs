//! `rsv`: inspect, concatenate and convert RSV files.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rsv_tool::commands;
use rsv_tool::config::Config;
use rsv_tool::io_util::{display_name, open_input, open_output};

#[derive(Parser)]
#[clap(name = "rsv")]
#[clap(about = "Inspect, concatenate and convert Row of String Value files")]
struct Cli {
    /// Reader/writer buffer size in bytes (overrides RSV_BUFFER_SIZE)
    #[clap(long, global = true)]
    buffer_size: Option<usize>,

    /// Reject fields containing 0xFF or 0xFD when writing RSV
    #[clap(long, global = true)]
    strict: bool,

    /// Enable debug logging
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print each record as a JSON array, one per line
    Dump {
        /// RSV input (default: stdin)
        input: Option<PathBuf>,

        /// Replace invalid UTF-8 instead of failing
        #[clap(long)]
        lossy: bool,
    },

    /// Count records and fields
    Count {
        /// RSV input (default: stdin)
        input: Option<PathBuf>,

        /// Print the statistics as JSON
        #[clap(long)]
        json: bool,
    },

    /// Concatenate RSV files
    Cat {
        /// RSV inputs, in order
        #[clap(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (default: stdout)
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// Decode every input first and refuse malformed ones
        #[clap(long)]
        check: bool,
    },

    /// Convert CSV to RSV
    FromCsv {
        /// CSV input (default: stdin)
        input: Option<PathBuf>,

        /// RSV output (default: stdout)
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// CSV field delimiter
        #[clap(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Convert RSV to CSV
    ToCsv {
        /// RSV input (default: stdin)
        input: Option<PathBuf>,

        /// CSV output (default: stdout)
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// CSV field delimiter
        #[clap(short, long, default_value = ",")]
        delimiter: char,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.buffer_size, cli.strict);

    init_logging(&config, cli.verbose)?;
    debug!(?config, "starting");

    run(cli.command, &config)
}

fn init_logging(config: &Config, verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        config.env_filter()?
    };

    // Records go to stdout; keep logs on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Dump { input, lossy } => {
            let rdr = open_input(input.as_deref())?;
            commands::dump(rdr, std::io::stdout().lock(), config, lossy)?;
        }
        Command::Count { input, json } => {
            let rdr = open_input(input.as_deref())?;
            let stats = commands::count(rdr, config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}", stats);
            }
        }
        Command::Cat {
            inputs,
            output,
            check,
        } => {
            let mut opened = Vec::with_capacity(inputs.len());
            for path in &inputs {
                let name = display_name(Some(path.as_path()));
                opened.push((name, open_input(Some(path.as_path()))?));
            }
            let out = open_output(output.as_deref())?;
            commands::cat(opened, out, config, check)?;
        }
        Command::FromCsv {
            input,
            output,
            delimiter,
        } => {
            let rdr = open_input(input.as_deref())?;
            let out = open_output(output.as_deref())?;
            commands::from_csv(rdr, out, config, delimiter)?;
        }
        Command::ToCsv {
            input,
            output,
            delimiter,
        } => {
            let rdr = open_input(input.as_deref())?;
            let out = open_output(output.as_deref())?;
            commands::to_csv(rdr, out, config, delimiter)?;
        }
    }

    Ok(())
}
