use anyhow::Context;
use clap::{Parser, Subcommand};
use standings_sheets::cli;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "standings")]
#[command(about = "Standings-table formulas and Sheets batchUpdate requests for league score sheets.")]
#[command(long_about = "Standings - league score sheets without hand-written formulas

Reads a season file describing a scores-and-standings sheet and generates the
Sheets API batchUpdate requests that fill in every round's formulas.

COMMANDS:
  generate  - Season file to batchUpdate JSON
  validate  - Check season files without generating
  columns   - Show the column letter of every header
  formula   - Show the formula a column gets in a round

EXAMPLES:
  standings generate season.yaml -o requests.json
  standings generate season.yaml --compact | my-sheets-client batch-update
  standings formula season.yaml GP --round 2

Set RUST_LOG=standings_sheets=debug for request-level logging.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Generate batchUpdate requests for a season file.

Each round gets a label row, a header row, the game winner formula for its
game rows and the standings formulas for its team rows. Counts and goals are
cumulative: from round 2 on, each formula adds the previous round's value.
Rounds with 'counts_for_standings: false' are scrimmages and their game counts
are written as 0.

SEASON FILE:
  sheet_id: 0
  first_team_cell: \"Teams!A2\"
  num_teams: 8
  games_per_round: 4
  team_name_column_width: 120
  standings_columns: [TEAM, GP, W, L, D, PTS, TOTAL, RANK, GF, GA, GD]
  rounds:
    - label: \"Week 1\"
    - label: \"Week 2\"
      counts_for_standings: false

Without --output the JSON is written to stdout.")]
    /// Generate batchUpdate requests for a season file
    Generate {
        /// Path to the season YAML file
        file: PathBuf,

        /// Write the JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,

        /// Show the round layout and debug logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate season files without generating
    Validate {
        /// Path to season YAML file(s) to validate
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show the column letter of every header
    Columns {
        /// Path to the season YAML file
        file: PathBuf,
    },

    /// Show the formula a column gets in a round
    Formula {
        /// Path to the season YAML file
        file: PathBuf,

        /// Column header, e.g. GP
        header: String,

        /// Round number (1-based)
        #[arg(short, long, default_value = "1")]
        round: u32,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "standings_sheets=debug"
    } else {
        "standings_sheets=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Generate { verbose: true, .. });
    init_logging(verbose);

    match cli.command {
        Commands::Generate {
            file,
            output,
            compact,
            verbose,
        } => cli::generate(file.clone(), output, compact, verbose)
            .with_context(|| format!("generating requests for {}", file.display())),

        Commands::Validate { files } => cli::validate(files).map_err(Into::into),

        Commands::Columns { file } => cli::columns(file).map_err(Into::into),

        Commands::Formula {
            file,
            header,
            round,
        } => cli::formula(file, header, round).map_err(Into::into),
    }
}
