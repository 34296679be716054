//! Per-position leaderboard ranked by average user rating.

use super::descending_score;
use crate::{
    cli::types::{PlayerId, Position},
    dataset::{PlayerRecord, RatingRow},
};
use serde::Serialize;
use std::collections::HashMap;

/// A player's average rating within one position bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedPlayer {
    pub average_rating: f64,
    pub player_id: PlayerId,
}

/// `position -> [(average_rating, player_id)]`, highest average first.
///
/// Only players that appear in both the players table and the ratings table
/// are ranked. A player listed under several positions appears in each of
/// those buckets; a code listed twice for the same player yields two entries.
#[derive(Debug, Clone, Default)]
pub struct PositionLeaderboard {
    by_position: HashMap<Position, Vec<RankedPlayer>>,
}

impl PositionLeaderboard {
    pub fn build(players: &[PlayerRecord], ratings: &[RatingRow]) -> Self {
        let averages = average_ratings(ratings);

        let mut by_position: HashMap<Position, Vec<RankedPlayer>> = HashMap::new();
        for player in players {
            let Some(&average_rating) = averages.get(&player.sofifa_id) else {
                continue;
            };
            for position in player.positions() {
                by_position.entry(position).or_default().push(RankedPlayer {
                    average_rating,
                    player_id: player.sofifa_id,
                });
            }
        }

        for bucket in by_position.values_mut() {
            bucket.sort_by(|a, b| {
                descending_score(a.average_rating, a.player_id, b.average_rating, b.player_id)
            });
        }

        Self { by_position }
    }

    /// Top `n` players for `position`, matched case-insensitively.
    pub fn lookup(&self, position: &str, n: usize) -> &[RankedPlayer] {
        let Some(position) = Position::normalize(position) else {
            return &[];
        };
        match self.by_position.get(&position) {
            Some(bucket) => &bucket[..n.min(bucket.len())],
            None => &[],
        }
    }

    /// Known position codes, sorted.
    pub fn positions(&self) -> Vec<&Position> {
        let mut positions: Vec<&Position> = self.by_position.keys().collect();
        positions.sort();
        positions
    }
}

/// Arithmetic mean of every rating each player received.
pub fn average_ratings(ratings: &[RatingRow]) -> HashMap<PlayerId, f64> {
    let mut totals: HashMap<PlayerId, (f64, u32)> = HashMap::new();
    for row in ratings {
        let (sum, count) = totals.entry(row.sofifa_id).or_insert((0.0, 0));
        *sum += row.rating;
        *count += 1;
    }

    totals
        .into_iter()
        .map(|(player_id, (sum, count))| (player_id, sum / f64::from(count)))
        .collect()
}
