//! Rendering of query results as text lines or pretty JSON.

use crate::{
    dataset::PlayerRecord,
    query::{PositionLeader, UserRatedPlayer},
    Result,
};
use serde::Serialize;

/// Result of one query, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Players(Vec<PlayerRecord>),
    Player(Option<PlayerRecord>),
    UserRatings(Vec<UserRatedPlayer>),
    Leaders(Vec<PositionLeader>),
}

impl QueryOutput {
    /// Number of result rows.
    pub fn len(&self) -> usize {
        match self {
            QueryOutput::Players(players) => players.len(),
            QueryOutput::Player(player) => usize::from(player.is_some()),
            QueryOutput::UserRatings(rows) => rows.len(),
            QueryOutput::Leaders(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Render `output` as pretty JSON or as one text line per row.
pub fn render(output: &QueryOutput, as_json: bool) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(output)?);
    }

    if output.is_empty() {
        return Ok("No results.".to_string());
    }

    let lines: Vec<String> = match output {
        QueryOutput::Players(players) => players.iter().map(player_line).collect(),
        QueryOutput::Player(Some(player)) => std::iter::once(player_line(player))
            .chain(
                player
                    .attributes
                    .iter()
                    .map(|(key, value)| format!("  {key}: {value}")),
            )
            .collect(),
        QueryOutput::Player(None) => Vec::new(),
        QueryOutput::UserRatings(rows) => rows
            .iter()
            .map(|row| {
                format!(
                    "{} {} [{}] rating {:.1}",
                    row.sofifa_id, row.long_name, row.player_positions, row.rating
                )
            })
            .collect(),
        QueryOutput::Leaders(rows) => rows
            .iter()
            .enumerate()
            .map(|(rank, row)| {
                format!(
                    "{:>3}. {} {} [{}] avg {:.2}",
                    rank + 1,
                    row.sofifa_id,
                    row.long_name,
                    row.player_positions,
                    row.average_rating
                )
            })
            .collect(),
    };

    Ok(lines.join("\n"))
}

fn player_line(player: &PlayerRecord) -> String {
    format!(
        "{} {} ({}) [{}]",
        player.sofifa_id, player.short_name, player.long_name, player.player_positions
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;

    fn messi() -> PlayerRecord {
        PlayerRecord::new(PlayerId::new(1), "leo", "leo messi", "RW,CF").with_attribute("age", "33")
    }

    #[test]
    fn test_render_players_text() {
        let text = render(&QueryOutput::Players(vec![messi()]), false).unwrap();
        assert_eq!(text, "1 leo (leo messi) [RW,CF]");
    }

    #[test]
    fn test_render_single_player_shows_attributes() {
        let text = render(&QueryOutput::Player(Some(messi())), false).unwrap();
        assert!(text.starts_with("1 leo (leo messi) [RW,CF]"));
        assert!(text.contains("  age: 33"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&QueryOutput::Player(None), false).unwrap(), "No results.");
        assert_eq!(render(&QueryOutput::Leaders(vec![]), false).unwrap(), "No results.");
        assert_eq!(render(&QueryOutput::Player(None), true).unwrap(), "null");
        assert_eq!(render(&QueryOutput::Players(vec![]), true).unwrap(), "[]");
    }

    #[test]
    fn test_render_leaders_text() {
        let rows = vec![PositionLeader {
            sofifa_id: PlayerId::new(1),
            long_name: "leo messi".to_string(),
            player_positions: "RW,CF".to_string(),
            average_rating: 92.5,
        }];
        let text = render(&QueryOutput::Leaders(rows), false).unwrap();
        assert_eq!(text, "  1. 1 leo messi [RW,CF] avg 92.50");
    }

    #[test]
    fn test_render_user_ratings_json() {
        let rows = vec![UserRatedPlayer {
            sofifa_id: PlayerId::new(1),
            long_name: "leo messi".to_string(),
            player_positions: "RW,CF".to_string(),
            rating: 95.0,
        }];
        let json = render(&QueryOutput::UserRatings(rows), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["sofifa_id"], 1);
        assert_eq!(value[0]["rating"], 95.0);
        assert_eq!(value[0]["long_name"], "leo messi");
    }

    #[test]
    fn test_render_lines_joined_without_trailing_newline() {
        let neymar = PlayerRecord::new(PlayerId::new(2), "neymar", "neymar jr", "LW")
            .with_attribute("club", "PSG")
            .with_attribute("age", "28");

        let text = render(&QueryOutput::Players(vec![messi(), neymar.clone()]), false).unwrap();
        assert_eq!(text, "1 leo (leo messi) [RW,CF]\n2 neymar (neymar jr) [LW]");

        let text = render(&QueryOutput::Player(Some(neymar)), false).unwrap();
        assert_eq!(text, "2 neymar (neymar jr) [LW]\n  age: 28\n  club: PSG");
    }

    #[test]
    fn test_len() {
        assert_eq!(QueryOutput::Players(vec![messi(), messi()]).len(), 2);
        assert_eq!(QueryOutput::Player(Some(messi())).len(), 1);
        assert!(QueryOutput::UserRatings(vec![]).is_empty());
    }
}
