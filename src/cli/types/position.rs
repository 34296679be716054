//! Position codes as they appear in the `player_positions` column.

use crate::error::IndexError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A normalized (trimmed, upper-cased) position code such as `ST` or `GK`.
///
/// The players table lists positions as a comma-separated string
/// (`"RW, ST, CF"`); each entry becomes one `PositionCode`. The set of codes
/// is open: any non-empty alphanumeric code is accepted, and an unknown code
/// simply has no leaderboard entries.
///
/// # Examples
///
/// ```rust
/// use fifa_index::Position;
///
/// let pos: Position = " cam ".parse().unwrap();
/// assert_eq!(pos.as_str(), "CAM");
/// assert_eq!(Position::split_list("RW, ST,CF").len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(String);

impl Position {
    /// Normalize a raw code. Returns `None` for codes that are blank after trimming.
    pub fn normalize(raw: &str) -> Option<Self> {
        let code = raw.trim();
        if code.is_empty() {
            None
        } else {
            Some(Self(code.to_uppercase()))
        }
    }

    /// Split a `player_positions` attribute into its codes, in listed order.
    ///
    /// Blank entries (`"ST,"`) are dropped; repeated codes are kept.
    pub fn split_list(positions: &str) -> Vec<Self> {
        positions.split(',').filter_map(Self::normalize).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| IndexError::InvalidCommand {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let position = Self::normalize(s).ok_or_else(|| invalid("position code is empty"))?;
        if !position.0.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("position code must be alphanumeric"));
        }
        Ok(position)
    }
}
