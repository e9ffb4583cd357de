use super::commands;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, short = 'l', default_value = "info", global = true)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise the sequence coverage of an A3M alignment as JSON.
    Msa {
        #[arg(short, long)]
        input: PathBuf,
        /// Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Renumber residues of a predicted PDB structure across chains.
    Renumber {
        #[arg(short, long)]
        input: PathBuf,
        /// Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Comma separated residue count of every chain, e.g. `120,80`.
        #[arg(short = 'L', long, value_delimiter = ',')]
        lengths: Vec<usize>,
    },
    /// Print a name for a job submitted now.
    JobName {
        #[arg(short, long)]
        suffix: Option<String>,
    },
    /// Print the legend of a structure color scheme.
    Legend {
        /// One of `lDDT`, `chain` or `rainbow`.
        #[arg(short, long, default_value = "lDDT")]
        color: String,
        #[arg(long)]
        chains: Option<usize>,
    },
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        TermLogger::init(
            self.log_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?;

        match self.command {
            Commands::Msa { input, output } => commands::msa::execute(&input, output.as_deref()),
            Commands::Renumber {
                input,
                output,
                lengths,
            } => {
                let lengths = (!lengths.is_empty()).then_some(lengths);
                commands::renumber::execute(&input, output.as_deref(), lengths)
            }
            Commands::JobName { suffix } => commands::job_name::execute(suffix.as_deref()),
            Commands::Legend { color, chains } => commands::legend::execute(&color, chains),
        }
    }
}
