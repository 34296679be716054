//! ID types for players and rating users.

use crate::error::{IndexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player IDs (the dataset's `sofifa_id`).
///
/// Keeps player IDs from being mixed up with user IDs, which share the same
/// numeric range in the ratings table.
///
/// # Examples
///
/// ```rust
/// use fifa_index::PlayerId;
///
/// let player_id = PlayerId::new(158023);
/// assert_eq!(player_id.as_u64(), 158023);
/// assert_eq!(player_id.to_string(), "158023");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new PlayerId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for the IDs of users who submitted ratings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_parse() {
        assert_eq!("20801".parse::<PlayerId>().unwrap(), PlayerId::new(20801));
        assert_eq!(" 7 ".parse::<PlayerId>().unwrap(), PlayerId::new(7));
        assert!("messi".parse::<PlayerId>().is_err());
        assert!("-1".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_user_id_parse() {
        assert_eq!("130556".parse::<UserId>().unwrap().as_u64(), 130556);
        match "12a".parse::<UserId>() {
            Err(IndexError::InvalidId(_)) => (),
            other => panic!("Expected InvalidId, got {:?}", other),
        }
    }

    #[test]
    fn test_ids_serialize_as_plain_numbers() {
        assert_eq!(serde_json::to_string(&PlayerId::new(1)).unwrap(), "1");
        assert_eq!(serde_json::to_string(&UserId::new(9)).unwrap(), "9");
    }

    #[test]
    fn test_player_ids_order_numerically() {
        let mut ids = vec![PlayerId::new(30), PlayerId::new(4), PlayerId::new(100)];
        ids.sort();
        assert_eq!(
            ids,
            vec![PlayerId::new(4), PlayerId::new(30), PlayerId::new(100)]
        );
    }
}
