//! Command implementations for the fifa-index CLI
//!
//! - `query`: the five query kinds as one typed value, and its execution
//! - `output`: text and JSON rendering of query results
//! - `shell`: the interactive command loop and its line grammar

pub mod output;
pub mod query;
pub mod shell;

pub use output::{render, QueryOutput};
pub use query::{run_query, Query};
pub use shell::{run_shell, ShellCommand};

use crate::{
    cli::DatasetArgs, dataset::DatasetPaths, index::Indexes, Result, DATA_DIR_ENV_VAR,
};
use std::{io::Write, path::PathBuf};


/// Run one query and print the rendered result to `out`.
pub fn handle_query<W: Write>(
    indexes: &Indexes,
    query: &Query,
    as_json: bool,
    out: &mut W,
) -> Result<()> {
    let result = run_query(indexes, query);
    writeln!(out, "{}", render(&result, as_json)?)?;
    Ok(())
}

/// Resolve the data directory from the option, then the environment
/// variable, then the working directory.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir
        .or_else(|| {
            std::env::var(DATA_DIR_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Full paths of the three CSV files. File arguments that are already
/// absolute are used as given.
pub fn resolve_dataset_paths(args: &DatasetArgs) -> DatasetPaths {
    let dir = resolve_data_dir(args.data_dir.clone());
    DatasetPaths {
        players: dir.join(&args.players),
        ratings: dir.join(&args.ratings),
        tags: dir.join(&args.tags),
    }
}
