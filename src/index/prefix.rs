//! Prefix tree over lower-cased player names.

use crate::{cli::types::PlayerId, dataset::PlayerRecord};
use std::collections::{BTreeSet, HashMap};

static NO_MATCH: BTreeSet<PlayerId> = BTreeSet::new();

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Every player whose short or long name passes through this node.
    player_ids: BTreeSet<PlayerId>,
}

/// Character trie keyed by lower-cased `short_name` and `long_name`.
///
/// Every word of a name also starts its own path, so `"mess"` finds
/// `"Leo Messi"` as well as `"Messi"`. Each node stores the full set of IDs
/// below it, so a prefix lookup is a single walk with no subtree traversal.
/// Memory grows with the total number of characters inserted. Matching folds
/// case only; there is no accent stripping or other Unicode normalization, so
/// `"andrés"` does not match `"andres"`.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    root: TrieNode,
    node_count: usize,
}

impl PrefixIndex {
    pub fn build(players: &[PlayerRecord]) -> Self {
        let mut index = Self::default();
        for player in players {
            index.insert_name(&player.long_name, player.sofifa_id);
            index.insert_name(&player.short_name, player.sofifa_id);
        }
        index
    }

    /// Insert the whole name, then the tail starting at each later word.
    fn insert_name(&mut self, name: &str, player_id: PlayerId) {
        let lowered = name.to_lowercase();
        let mut prev_is_space = true;
        for (start, ch) in lowered.char_indices() {
            if prev_is_space && !ch.is_whitespace() {
                self.insert(&lowered[start..], player_id);
            }
            prev_is_space = ch.is_whitespace();
        }
    }

    fn insert(&mut self, lowered: &str, player_id: PlayerId) {
        let mut created = 0;
        let mut node = &mut self.root;
        for ch in lowered.chars() {
            node = node.children.entry(ch).or_insert_with(|| {
                created += 1;
                TrieNode::default()
            });
            node.player_ids.insert(player_id);
        }
        self.node_count += created;
    }

    /// IDs of every player with a name starting with `prefix`, ascending.
    ///
    /// Returns an empty set if the walk falls off the tree. The empty prefix
    /// resolves to the root, which carries no IDs.
    pub fn search_prefix(&self, prefix: &str) -> &BTreeSet<PlayerId> {
        let mut node = &self.root;
        for ch in prefix.to_lowercase().chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return &NO_MATCH,
            }
        }
        &node.player_ids
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }
}
