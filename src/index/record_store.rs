//! Primary-key table: player ID to full player record.

use crate::{cli::types::PlayerId, dataset::PlayerRecord};
use std::collections::HashMap;

/// Immutable `sofifa_id -> PlayerRecord` lookup table.
///
/// Built once from the players table. When the table repeats an ID, the
/// later row replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: HashMap<PlayerId, PlayerRecord>,
}

impl RecordStore {
    pub fn build(players: &[PlayerRecord]) -> Self {
        let mut records = HashMap::with_capacity(players.len());
        for player in players {
            records.insert(player.sofifa_id, player.clone());
        }
        Self { records }
    }

    pub fn get(&self, player_id: PlayerId) -> Option<&PlayerRecord> {
        self.records.get(&player_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
