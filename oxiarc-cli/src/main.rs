//! OxiArc BWT CLI
//!
//! Burrows-Wheeler and Move-to-Front transforms over byte streams.

mod commands;
mod utils;

use clap::{Args, Parser, Subcommand, ValueEnum};
use commands::{cmd_info, cmd_suffixes, cmd_test, cmd_transform};
use oxiarc_bwt::{BwtCodec, BwtConfig, MoveToFront, SortStrategy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxibwt")]
#[command(
    author,
    version,
    about = "Block-sorting text transforms - Burrows-Wheeler and Move-to-Front"
)]
#[command(long_about = "
oxibwt applies the reversible transforms used by block-sorting compressors.
A direction switch of '-' encodes and '+' decodes; any other switch does nothing.

Examples:
  oxibwt bwt - < abra.txt > abra.bwt
  oxibwt bwt + < abra.bwt
  oxibwt mtf - -i abra.bwt -o abra.mtf
  oxibwt pipeline - -i book.txt -o book.bmf
  oxibwt pipeline + --verify -i book.bmf
  oxibwt suffixes ABRACADABRA!
  oxibwt test -i book.bmf
  oxibwt info -i book.bmf
")]
struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Input/output selection shared by the stream commands.
#[derive(Args)]
struct IoArgs {
    /// Input file (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Options for the Burrows-Wheeler stage.
#[derive(Args)]
struct BwtArgs {
    /// Rotation sort algorithm
    #[arg(short, long, value_enum, default_value = "auto")]
    strategy: Strategy,

    /// Check the LF mapping before reconstructing
    #[arg(long)]
    verify: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Burrows-Wheeler transform ('-' forward, '+' inverse)
    #[command(alias = "bwt")]
    BurrowsWheeler {
        /// Direction switch: '-' or '+'
        direction: Option<String>,

        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        bwt: BwtArgs,
    },

    /// Move-to-front recoding ('-' encode, '+' decode)
    #[command(alias = "mtf")]
    MoveToFront {
        /// Direction switch: '-' or '+'
        direction: Option<String>,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Burrows-Wheeler followed by move-to-front ('-' encode, '+' decode)
    #[command(alias = "p")]
    Pipeline {
        /// Direction switch: '-' or '+'
        direction: Option<String>,

        #[command(flatten)]
        io: IoArgs,

        #[command(flatten)]
        bwt: BwtArgs,
    },

    /// Print the circular suffix index of a text
    Suffixes {
        /// Text to index
        text: String,

        /// Rotation sort algorithm
        #[arg(short, long, value_enum, default_value = "auto")]
        strategy: Strategy,
    },

    /// Check that a pipeline stream decodes consistently
    #[command(alias = "t")]
    Test {
        /// Stream file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// The stream has no move-to-front stage
        #[arg(long)]
        bwt_only: bool,
    },

    /// Show information about a stream
    #[command(alias = "i")]
    Info {
        /// Stream file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// The stream has no move-to-front stage
        #[arg(long)]
        bwt_only: bool,
    },
}

/// Rotation sort algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum Strategy {
    /// Comparison sort for small inputs, prefix doubling above 4 KiB
    #[default]
    Auto,
    /// Full rotation comparison sort
    Comparison,
    /// Rank doubling over cyclic prefixes
    PrefixDoubling,
}

impl From<Strategy> for SortStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Auto => SortStrategy::Auto,
            Strategy::Comparison => SortStrategy::Comparison,
            Strategy::PrefixDoubling => SortStrategy::PrefixDoubling,
        }
    }
}

impl BwtArgs {
    fn config(&self, base: BwtConfig) -> BwtConfig {
        base.with_strategy(self.strategy.into())
            .with_verify(self.verify)
    }
}

fn base_config(bwt_only: bool) -> BwtConfig {
    if bwt_only {
        BwtConfig::BWT_ONLY
    } else {
        BwtConfig::DEFAULT
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = utils::init_logging(cli.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::BurrowsWheeler { direction, io, bwt } => cmd_transform(
            &BwtCodec::new(bwt.config(BwtConfig::BWT_ONLY)),
            direction.as_deref(),
            io.input.as_deref(),
            io.output.as_deref(),
        ),
        Commands::MoveToFront { direction, io } => cmd_transform(
            &MoveToFront,
            direction.as_deref(),
            io.input.as_deref(),
            io.output.as_deref(),
        ),
        Commands::Pipeline { direction, io, bwt } => cmd_transform(
            &BwtCodec::new(bwt.config(BwtConfig::DEFAULT)),
            direction.as_deref(),
            io.input.as_deref(),
            io.output.as_deref(),
        ),
        Commands::Suffixes { text, strategy } => {
            cmd_suffixes(&text, strategy.into(), cli.verbose)
        }
        Commands::Test { input, bwt_only } => {
            cmd_test(input.as_deref(), base_config(bwt_only), cli.verbose)
        }
        Commands::Info { input, bwt_only } => cmd_info(input.as_deref(), base_config(bwt_only)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_switches() {
        let cli = Cli::try_parse_from(["oxibwt", "bwt", "-"]).unwrap();
        match cli.command {
            Commands::BurrowsWheeler { direction, .. } => {
                assert_eq!(direction.as_deref(), Some("-"))
            }
            _ => panic!("expected burrows-wheeler"),
        }

        let cli = Cli::try_parse_from(["oxibwt", "mtf", "+"]).unwrap();
        assert!(matches!(cli.command, Commands::MoveToFront { .. }));

        let cli = Cli::try_parse_from(["oxibwt", "pipeline"]).unwrap();
        match cli.command {
            Commands::Pipeline { direction, .. } => assert!(direction.is_none()),
            _ => panic!("expected pipeline"),
        }
    }

    #[test]
    fn test_bwt_args_config() {
        let cli = Cli::try_parse_from([
            "oxibwt",
            "pipeline",
            "+",
            "--strategy",
            "prefix-doubling",
            "--verify",
        ])
        .unwrap();
        match cli.command {
            Commands::Pipeline { bwt, .. } => {
                let config = bwt.config(BwtConfig::DEFAULT);
                assert_eq!(config.strategy, SortStrategy::PrefixDoubling);
                assert!(config.verify);
                assert!(config.move_to_front);
            }
            _ => panic!("expected pipeline"),
        }
    }
}
