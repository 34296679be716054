//! FIFA Player Index Library
//!
//! Loads a static snapshot of FIFA player data (players, user ratings and
//! descriptive tags) and answers lookup queries from in-memory indexes.
//!
//! ## Features
//!
//! - **ID Lookup**: hash table from `sofifa_id` to the full player record
//! - **Name Search**: case-insensitive prefix search over short and long names
//! - **User Ratings**: each user's highest-rated players
//! - **Position Leaderboard**: best players per position by average rating
//! - **Tag Search**: players carrying every one of several tags
//!
//! Indexes are built once and are read-only afterwards, so a built
//! [`Indexes`] can be shared across threads without locking.
//!
//! ## Quick Start
//!
//! ```rust
//! use fifa_index::{
//!     dataset::{Dataset, PlayerRecord, RatingRow, TagRow},
//!     query, Indexes, PlayerId, UserId,
//! };
//!
//! let dataset = Dataset {
//!     players: vec![PlayerRecord::new(PlayerId::new(1), "leo", "leo messi", "RW,CF")],
//!     ratings: vec![RatingRow::new(UserId::new(9), PlayerId::new(1), 95.0)],
//!     tags: vec![TagRow::new(PlayerId::new(1), Some("Dribbler"))],
//! };
//! let indexes = Indexes::build(&dataset);
//!
//! let found = query::search_by_prefix(&indexes.names, &indexes.records, "mess");
//! assert_eq!(found[0].sofifa_id, PlayerId::new(1));
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at the directory holding the CSV files:
//! ```bash
//! export FIFA_INDEX_DATA_DIR=/path/to/data
//! ```

pub mod cli;
pub mod commands;
pub mod dataset;
pub mod error;
pub mod index;
pub mod query;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position, UserId};
pub use error::{IndexError, Result};
pub use index::Indexes;

pub const DATA_DIR_ENV_VAR: &str = "FIFA_INDEX_DATA_DIR";
