//! Inverted index from rating user to the players they rated.

use super::descending_score;
use crate::{
    cli::types::{PlayerId, UserId},
    dataset::RatingRow,
};
use serde::Serialize;
use std::collections::HashMap;

/// One rating given by a user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatedPlayer {
    pub rating: f64,
    pub player_id: PlayerId,
}

/// `user_id -> [(rating, player_id)]`, each list sorted by rating, highest first.
///
/// Equal ratings are ordered by ascending player ID; repeated ratings of the
/// same player keep their table order.
#[derive(Debug, Clone, Default)]
pub struct UserRatingIndex {
    by_user: HashMap<UserId, Vec<RatedPlayer>>,
}

impl UserRatingIndex {
    pub fn build(ratings: &[RatingRow]) -> Self {
        let mut by_user: HashMap<UserId, Vec<RatedPlayer>> = HashMap::new();
        for row in ratings {
            by_user.entry(row.user_id).or_default().push(RatedPlayer {
                rating: row.rating,
                player_id: row.sofifa_id,
            });
        }

        for list in by_user.values_mut() {
            list.sort_by(|a, b| descending_score(a.rating, a.player_id, b.rating, b.player_id));
        }

        Self { by_user }
    }

    /// Full sorted list for `user_id`, empty if the user never rated anyone.
    pub fn lookup(&self, user_id: UserId) -> &[RatedPlayer] {
        self.by_user
            .get(&user_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct users.
    pub fn user_count(&self) -> usize {
        self.by_user.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(user: u64, player: u64, rating: f64) -> RatingRow {
        RatingRow::new(UserId::new(user), PlayerId::new(player), rating)
    }

    #[test]
    fn test_lookup_sorted_descending() {
        let index = UserRatingIndex::build(&[
            rating(9, 1, 90.0),
            rating(9, 2, 70.5),
            rating(9, 3, 99.0),
            rating(4, 1, 10.0),
        ]);

        let ratings: Vec<f64> = index.lookup(UserId::new(9)).iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![99.0, 90.0, 70.5]);
        assert!(index
            .lookup(UserId::new(9))
            .windows(2)
            .all(|w| w[0].rating >= w[1].rating));
        assert_eq!(index.user_count(), 2);
    }

    #[test]
    fn test_duplicate_pairs_retained() {
        let index = UserRatingIndex::build(&[rating(9, 1, 90.0), rating(9, 1, 95.0)]);

        assert_eq!(
            index.lookup(UserId::new(9)),
            &[
                RatedPlayer {
                    rating: 95.0,
                    player_id: PlayerId::new(1)
                },
                RatedPlayer {
                    rating: 90.0,
                    player_id: PlayerId::new(1)
                },
            ]
        );
    }

    #[test]
    fn test_ties_break_on_player_id() {
        let index = UserRatingIndex::build(&[
            rating(1, 30, 80.0),
            rating(1, 10, 80.0),
            rating(1, 20, 80.0),
        ]);

        let ids: Vec<u64> = index
            .lookup(UserId::new(1))
            .iter()
            .map(|r| r.player_id.as_u64())
            .collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_unknown_user_is_empty() {
        let index = UserRatingIndex::build(&[rating(9, 1, 90.0)]);
        assert!(index.lookup(UserId::new(10)).is_empty());
    }
}
