//! Inverted index from lower-cased tag to the players carrying it.

use crate::{cli::types::PlayerId, dataset::TagRow};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    by_tag: HashMap<String, BTreeSet<PlayerId>>,
}

impl TagIndex {
    /// Rows with a missing or empty tag are skipped.
    pub fn build(tags: &[TagRow]) -> Self {
        let mut by_tag: HashMap<String, BTreeSet<PlayerId>> = HashMap::new();
        for row in tags {
            let Some(tag) = row.tag.as_deref().filter(|t| !t.is_empty()) else {
                continue;
            };
            by_tag.entry(tag.to_lowercase()).or_default().insert(row.sofifa_id);
        }
        Self { by_tag }
    }

    /// Players tagged with `tag`, if any.
    pub fn lookup(&self, tag: &str) -> Option<&BTreeSet<PlayerId>> {
        self.by_tag.get(&tag.to_lowercase())
    }

    /// Players carrying every one of `tags`, ascending by ID.
    ///
    /// Starts from the first tag's set and narrows it; an unknown tag or an
    /// empty running intersection ends the walk early with no results.
    pub fn lookup_all<S: AsRef<str>>(&self, tags: &[S]) -> BTreeSet<PlayerId> {
        let Some((first, rest)) = tags.split_first() else {
            return BTreeSet::new();
        };
        let Some(initial) = self.lookup(first.as_ref()) else {
            return BTreeSet::new();
        };

        let mut matched = initial.clone();
        for tag in rest {
            let Some(ids) = self.lookup(tag.as_ref()) else {
                return BTreeSet::new();
            };
            matched.retain(|id| ids.contains(id));
            if matched.is_empty() {
                break;
            }
        }
        matched
    }

    /// Number of distinct tags.
    pub fn tag_count(&self) -> usize {
        self.by_tag.len()
    }
}
