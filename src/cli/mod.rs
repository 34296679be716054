//! CLI argument definitions and parsing.

pub mod types;

use crate::dataset::loader::{DEFAULT_PLAYERS_FILE, DEFAULT_RATINGS_FILE, DEFAULT_TAGS_FILE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{PlayerId, Position, UserId};

/// Where to find the three CSV files
#[derive(Debug, Args)]
pub struct DatasetArgs {
    /// Directory holding the CSV files (or set `FIFA_INDEX_DATA_DIR` env var).
    #[clap(long, short = 'd')]
    pub data_dir: Option<PathBuf>,

    /// Players table, relative to the data directory.
    #[clap(long, default_value = DEFAULT_PLAYERS_FILE)]
    pub players: PathBuf,

    /// Ratings table (use `rating.csv` for the full set).
    #[clap(long, default_value = DEFAULT_RATINGS_FILE)]
    pub ratings: PathBuf,

    /// Tags table.
    #[clap(long, default_value = DEFAULT_TAGS_FILE)]
    pub tags: PathBuf,
}

#[derive(Debug, Parser)]
#[clap(name = "fifa-index", about = "In-memory search over FIFA player data")]
pub struct FifaIndex {
    #[clap(flatten)]
    pub dataset: DatasetArgs,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Log load and index build progress to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    /// Runs the interactive shell when omitted.
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read queries interactively from stdin
    Shell,

    /// Players whose short or long name starts with a prefix (max 20).
    Player {
        /// Name prefix; several words are joined with spaces.
        #[clap(required = true, num_args = 1..)]
        prefix: Vec<String>,
    },

    /// A single player by sofifa_id
    Id {
        id: PlayerId,
    },

    /// The 20 highest ratings a user gave.
    User {
        user_id: UserId,
    },

    /// Best N players at a position by average user rating.
    Top {
        /// How many players to list.
        n: usize,

        /// Position code, e.g. ST, GK, CAM (case-insensitive).
        position: Position,
    },

    /// Players carrying every listed tag (max 20).
    Tags {
        #[clap(required = true, num_args = 1..)]
        tags: Vec<String>,
    },
}
