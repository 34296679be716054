//! Data models for the three input tables

use crate::cli::types::{PlayerId, Position, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the players table.
///
/// Only the identity columns are typed; every other column (age, club,
/// overall, ...) is carried verbatim in `attributes` and flattened back
/// into the same map when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub sofifa_id: PlayerId,
    pub short_name: String,
    pub long_name: String,
    pub player_positions: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl PlayerRecord {
    /// Build a record with no extra attributes.
    pub fn new(
        sofifa_id: PlayerId,
        short_name: impl Into<String>,
        long_name: impl Into<String>,
        player_positions: impl Into<String>,
    ) -> Self {
        Self {
            sofifa_id,
            short_name: short_name.into(),
            long_name: long_name.into(),
            player_positions: player_positions.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Attach an opaque attribute, replacing any previous value.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Parsed position codes, in listed order.
    pub fn positions(&self) -> Vec<Position> {
        Position::split_list(&self.player_positions)
    }
}

/// One user-submitted rating. Duplicate (user, player) pairs are legal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRow {
    pub user_id: UserId,
    pub sofifa_id: PlayerId,
    pub rating: f64,
}

impl RatingRow {
    pub fn new(user_id: UserId, sofifa_id: PlayerId, rating: f64) -> Self {
        Self {
            user_id,
            sofifa_id,
            rating,
        }
    }
}

/// One (player, tag) pair. `tag` is `None` when the CSV field was empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRow {
    pub sofifa_id: PlayerId,
    pub tag: Option<String>,
}

impl TagRow {
    pub fn new(sofifa_id: PlayerId, tag: Option<&str>) -> Self {
        Self {
            sofifa_id,
            tag: tag.map(str::to_string),
        }
    }
}

/// The three tables as handed over by the loader.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub players: Vec<PlayerRecord>,
    pub ratings: Vec<RatingRow>,
    pub tags: Vec<TagRow>,
}

impl Dataset {
    /// Row counts as (players, ratings, tags).
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.players.len(), self.ratings.len(), self.tags.len())
    }
}
