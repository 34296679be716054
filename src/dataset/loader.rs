//! CSV loading for the players, ratings and tags tables

use super::models::{Dataset, PlayerRecord, RatingRow, TagRow};
use crate::{
    cli::types::PlayerId,
    error::{IndexError, Result},
};
use csv::{ReaderBuilder, StringRecord};
use std::{
    collections::BTreeMap,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{debug, info};

pub const DEFAULT_PLAYERS_FILE: &str = "players.csv";
pub const DEFAULT_RATINGS_FILE: &str = "minirating.csv";
pub const DEFAULT_TAGS_FILE: &str = "tags.csv";

const REQUIRED_PLAYER_COLUMNS: [&str; 4] =
    ["sofifa_id", "short_name", "long_name", "player_positions"];

/// Locations of the three input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub players: PathBuf,
    pub ratings: PathBuf,
    pub tags: PathBuf,
}

impl DatasetPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            players: dir.join(DEFAULT_PLAYERS_FILE),
            ratings: dir.join(DEFAULT_RATINGS_FILE),
            tags: dir.join(DEFAULT_TAGS_FILE),
        }
    }
}

/// Load all three tables. Fails on the first table that cannot be read, so
/// callers never see a partial dataset.
pub fn load_dataset(paths: &DatasetPaths) -> Result<Dataset> {
    let started = Instant::now();

    let players = load_players(open(&paths.players)?, &source_name(&paths.players))?;
    info!(file = %paths.players.display(), rows = players.len(), "loaded players");

    let ratings = load_ratings(open(&paths.ratings)?, &source_name(&paths.ratings))?;
    info!(file = %paths.ratings.display(), rows = ratings.len(), "loaded ratings");

    let tags = load_tags(open(&paths.tags)?, &source_name(&paths.tags))?;
    info!(file = %paths.tags.display(), rows = tags.len(), "loaded tags");

    debug!(elapsed_ms = started.elapsed().as_millis() as u64, "dataset loaded");
    Ok(Dataset {
        players,
        ratings,
        tags,
    })
}

/// Parse the players table.
///
/// The four identity columns are required; any other column is kept as an
/// opaque string attribute under its header name.
pub fn load_players<R: Read>(reader: R, source: &str) -> Result<Vec<PlayerRecord>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut required = [0usize; 4];
    for (slot, name) in required.iter_mut().zip(REQUIRED_PLAYER_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IndexError::MalformedRecord {
                file: source.to_string(),
                line: 1,
                reason: format!("missing required column {name:?}"),
            })?;
    }
    let [id_col, short_col, long_col, positions_col] = required;

    let mut players = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = line_of(&record);

        let raw_id = field(&record, id_col);
        let sofifa_id: PlayerId = raw_id.parse().map_err(|_| IndexError::MalformedRecord {
            file: source.to_string(),
            line,
            reason: format!("sofifa_id {raw_id:?} is not an integer"),
        })?;

        let attributes: BTreeMap<String, String> = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| !required.contains(idx))
            .map(|(idx, name)| (name.to_string(), field(&record, idx).to_string()))
            .collect();

        players.push(PlayerRecord {
            sofifa_id,
            short_name: field(&record, short_col).to_string(),
            long_name: field(&record, long_col).to_string(),
            player_positions: field(&record, positions_col).to_string(),
            attributes,
        });
    }

    Ok(players)
}

/// Parse the ratings table (`user_id,sofifa_id,rating`; extra columns ignored).
pub fn load_ratings<R: Read>(reader: R, source: &str) -> Result<Vec<RatingRow>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    rdr.deserialize::<RatingRow>()
        .map(|row| row.map_err(|e| deserialize_error(source, e)))
        .collect()
}

/// Parse the tags table (`sofifa_id,tag`). Empty tag fields become `None`.
pub fn load_tags<R: Read>(reader: R, source: &str) -> Result<Vec<TagRow>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    rdr.deserialize::<TagRow>()
        .map(|row| row.map_err(|e| deserialize_error(source, e)))
        .collect()
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IndexError::MissingDataFile {
            path: path.to_path_buf(),
        },
        _ => IndexError::Io(e),
    })
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Type errors in a row are reported as malformed records; anything else
/// (IO, bad UTF-8, ragged rows) stays a CSV error.
fn deserialize_error(source: &str, err: csv::Error) -> IndexError {
    if let csv::ErrorKind::Deserialize { pos, err: de } = err.kind() {
        return IndexError::MalformedRecord {
            file: source.to_string(),
            line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
            reason: de.to_string(),
        };
    }
    IndexError::Csv(err)
}
