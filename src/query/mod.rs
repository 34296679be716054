//! Read-only queries over the built indexes.
//!
//! Every function borrows the structures it needs, never mutates them, and
//! treats absent keys as empty results. Player IDs that an index returns but
//! the record store does not know are skipped silently.

use crate::{
    cli::types::{PlayerId, UserId},
    dataset::PlayerRecord,
    index::{PositionLeaderboard, PrefixIndex, RecordStore, TagIndex, UserRatingIndex},
};
use serde::Serialize;


/// Cap on results for the prefix, per-user and tag queries.
pub const RESULT_LIMIT: usize = 20;

/// A player as rated by one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRatedPlayer {
    pub sofifa_id: PlayerId,
    pub long_name: String,
    pub player_positions: String,
    pub rating: f64,
}

/// A leaderboard entry, average rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionLeader {
    pub sofifa_id: PlayerId,
    pub long_name: String,
    pub player_positions: String,
    pub average_rating: f64,
}

/// Up to [`RESULT_LIMIT`] players whose short or long name starts with
/// `prefix`, in ascending ID order. An empty prefix matches nothing.
pub fn search_by_prefix(
    names: &PrefixIndex,
    records: &RecordStore,
    prefix: &str,
) -> Vec<PlayerRecord> {
    if prefix.is_empty() {
        return Vec::new();
    }

    names
        .search_prefix(prefix)
        .iter()
        .take(RESULT_LIMIT)
        .filter_map(|id| records.get(*id).cloned())
        .collect()
}

/// The full record for `player_id`, if loaded.
pub fn search_by_id(records: &RecordStore, player_id: PlayerId) -> Option<PlayerRecord> {
    records.get(player_id).cloned()
}

/// The [`RESULT_LIMIT`] highest ratings given by `user_id`, best first.
///
/// Ratings of players missing from the record store are skipped and do not
/// count toward the limit.
pub fn search_top_rated_by_user(
    user_ratings: &UserRatingIndex,
    records: &RecordStore,
    user_id: UserId,
) -> Vec<UserRatedPlayer> {
    user_ratings
        .lookup(user_id)
        .iter()
        .filter_map(|entry| {
            let record = records.get(entry.player_id)?;
            Some(UserRatedPlayer {
                sofifa_id: entry.player_id,
                long_name: record.long_name.clone(),
                player_positions: record.player_positions.clone(),
                rating: entry.rating,
            })
        })
        .take(RESULT_LIMIT)
        .collect()
}

/// The top `n` players at `position` by average rating. `position` is
/// case-insensitive and `n` has no upper cap.
pub fn search_top_by_position(
    positions: &PositionLeaderboard,
    records: &RecordStore,
    n: usize,
    position: &str,
) -> Vec<PositionLeader> {
    positions
        .lookup(position, n)
        .iter()
        .filter_map(|entry| {
            let record = records.get(entry.player_id)?;
            Some(PositionLeader {
                sofifa_id: entry.player_id,
                long_name: record.long_name.clone(),
                player_positions: record.player_positions.clone(),
                average_rating: round_to_cents(entry.average_rating),
            })
        })
        .collect()
}

/// Up to [`RESULT_LIMIT`] players carrying every tag in `tags`
/// (case-insensitive), in ascending ID order. No tags matches nothing.
pub fn search_by_tags<S: AsRef<str>>(
    tags: &TagIndex,
    records: &RecordStore,
    wanted: &[S],
) -> Vec<PlayerRecord> {
    if wanted.is_empty() {
        return Vec::new();
    }

    tags.lookup_all(wanted)
        .into_iter()
        .take(RESULT_LIMIT)
        .filter_map(|id| records.get(id).cloned())
        .collect()
}

/// Two decimals, exact halves to even.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
