//! In-memory index structures over a loaded dataset
//!
//! - `record_store`: player ID to full record
//! - `prefix`: name-prefix trie
//! - `user_ratings`: user to their ratings, best first
//! - `leaderboard`: position to players ranked by average rating
//! - `tags`: tag to the set of tagged players
//!
//! All five are built once by [`Indexes::build`] and never mutated afterwards,
//! so a built `Indexes` can be shared freely between threads.

pub mod leaderboard;
pub mod prefix;
pub mod record_store;
pub mod tags;
pub mod user_ratings;

pub use leaderboard::{PositionLeaderboard, RankedPlayer};
pub use prefix::PrefixIndex;
pub use record_store::RecordStore;
pub use tags::TagIndex;
pub use user_ratings::{RatedPlayer, UserRatingIndex};

use crate::{cli::types::PlayerId, dataset::Dataset};
use std::{cmp::Ordering, time::Instant};
use tracing::{debug, info};

/// The five query structures built from one dataset snapshot.
#[derive(Debug, Clone, Default)]
pub struct Indexes {
    pub records: RecordStore,
    pub names: PrefixIndex,
    pub user_ratings: UserRatingIndex,
    pub positions: PositionLeaderboard,
    pub tags: TagIndex,
}

impl Indexes {
    /// Build every index from `dataset`.
    ///
    /// The structures do not depend on each other, so they are built in
    /// parallel; none is visible to callers until all are complete.
    pub fn build(dataset: &Dataset) -> Self {
        let started = Instant::now();

        let ((records, names), (user_ratings, (positions, tags))) = rayon::join(
            || {
                rayon::join(
                    || timed("record store", || RecordStore::build(&dataset.players)),
                    || timed("name trie", || PrefixIndex::build(&dataset.players)),
                )
            },
            || {
                rayon::join(
                    || timed("user ratings", || UserRatingIndex::build(&dataset.ratings)),
                    || {
                        rayon::join(
                            || {
                                timed("position leaderboard", || {
                                    PositionLeaderboard::build(&dataset.players, &dataset.ratings)
                                })
                            },
                            || timed("tag index", || TagIndex::build(&dataset.tags)),
                        )
                    },
                )
            },
        );

        info!(
            players = records.len(),
            trie_nodes = names.node_count(),
            users = user_ratings.user_count(),
            positions = positions.positions().len(),
            tags = tags.tag_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "indexes built"
        );

        Self {
            records,
            names,
            user_ratings,
            positions,
            tags,
        }
    }
}

fn timed<T>(name: &str, build: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let built = build();
    debug!(index = name, elapsed_us = started.elapsed().as_micros() as u64, "index built");
    built
}

/// Ordering for `(score, id)` lists: higher score first, then lower ID.
///
/// Uses `f64::total_cmp`, so a NaN score gets a fixed place instead of
/// breaking the sort.
pub(crate) fn descending_score(
    a_score: f64,
    a_id: PlayerId,
    b_score: f64,
    b_id: PlayerId,
) -> Ordering {
    b_score.total_cmp(&a_score).then_with(|| a_id.cmp(&b_id))
}
