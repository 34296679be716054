//! Unit tests for shell parsing and the command loop

use super::*;
use crate::{
    dataset::{Dataset, PlayerRecord, RatingRow, TagRow},
    PlayerId, UserId,
};

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn parse(line: &str) -> ShellCommand {
        line.parse().unwrap()
    }

    fn query(line: &str) -> Query {
        match parse(line) {
            ShellCommand::Query(query) => query,
            other => panic!("Expected a query for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_exit_and_help() {
        assert_eq!(parse("exit"), ShellCommand::Exit);
        assert_eq!(parse("  EXIT "), ShellCommand::Exit);
        assert_eq!(parse("quit"), ShellCommand::Exit);
        assert_eq!(parse("help"), ShellCommand::Help);
    }

    #[test]
    fn test_player_prefix_keeps_all_words() {
        assert_eq!(query("player Neymar"), Query::Prefix("Neymar".to_string()));
        assert_eq!(
            query("player  Lionel   Andrés"),
            Query::Prefix("Lionel Andrés".to_string())
        );
        assert!("player".parse::<ShellCommand>().is_err());
        assert!("player    ".parse::<ShellCommand>().is_err());
    }

    #[test]
    fn test_id_and_user() {
        assert_eq!(query("id 20801"), Query::Id(PlayerId::new(20801)));
        assert_eq!(query("USER 130556"), Query::User(UserId::new(130556)));

        match "user abc".parse::<ShellCommand>() {
            Err(IndexError::InvalidId(_)) => (),
            other => panic!("Expected InvalidId, got {other:?}"),
        }
        assert!("id".parse::<ShellCommand>().is_err());
    }

    #[test]
    fn test_top_forms() {
        let expected = |n: usize, code: &str| Query::TopByPosition {
            n,
            position: code.parse().unwrap(),
        };

        assert_eq!(query("top5ST"), expected(5, "ST"));
        assert_eq!(query("top10gk"), expected(10, "GK"));
        assert_eq!(query("TOP3cam"), expected(3, "CAM"));
        assert_eq!(query("top 7 rw"), expected(7, "RW"));
    }

    #[test]
    fn test_top_rejects_malformed() {
        for line in ["top", "topST", "top5", "top5S1", "top-1ST", "topology"] {
            match line.parse::<ShellCommand>() {
                Err(IndexError::InvalidCommand { input, .. }) => assert_eq!(input, line),
                other => panic!("Expected InvalidCommand for {line:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_tags_quoted() {
        assert_eq!(
            query("tags 'Dribbler' 'Playmaker'"),
            Query::Tags(vec!["Dribbler".to_string(), "Playmaker".to_string()])
        );
        assert_eq!(
            query("tags 'Strength' 'Clinical Finisher'"),
            Query::Tags(vec!["Strength".to_string(), "Clinical Finisher".to_string()])
        );
        // Unterminated quote is dropped
        assert_eq!(
            query("tags 'Dribbler' 'Play"),
            Query::Tags(vec!["Dribbler".to_string()])
        );
        assert!("tags Dribbler".parse::<ShellCommand>().is_err());
        assert!("tags".parse::<ShellCommand>().is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!("search messi".parse::<ShellCommand>().is_err());
        assert!("".parse::<ShellCommand>().is_err());
    }
}

#[cfg(test)]
mod loop_tests {
    use super::*;

    fn indexes() -> Indexes {
        Indexes::build(&Dataset {
            players: vec![PlayerRecord::new(PlayerId::new(1), "leo", "leo messi", "RW,CF")],
            ratings: vec![
                RatingRow::new(UserId::new(9), PlayerId::new(1), 90.0),
                RatingRow::new(UserId::new(9), PlayerId::new(1), 95.0),
            ],
            tags: vec![TagRow::new(PlayerId::new(1), Some("Dribbler"))],
        })
    }

    fn run(script: &str) -> String {
        let mut out = Vec::new();
        run_shell(&indexes(), script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_loop_runs_queries_until_exit() {
        let output = run("player mess\ntop1rw\nexit\nplayer leo\n");

        assert!(output.contains("Players matching prefix 'mess':"));
        assert!(output.contains("1 leo (leo messi) [RW,CF]"));
        assert!(output.contains("Top 1 players at RW:"));
        assert!(output.contains("avg 92.50"));
        assert!(output.contains("Query executed in"));
        // Nothing after exit is processed
        assert!(!output.contains("prefix 'leo'"));
        assert!(output.trim_end().ends_with("Bye!"));
    }

    #[test]
    fn test_loop_survives_bad_input() {
        let output = run("\n   \nbogus\nuser x\ntags 'dribbler'\n");

        assert!(output.contains("Error: Invalid command \"bogus\""));
        assert!(output.contains("Error: Failed to parse identifier"));
        assert!(output.contains("Players tagged 'dribbler':"));
        assert!(output.contains("1 leo (leo messi)"));
    }

    #[test]
    fn test_loop_ends_at_eof() {
        let output = run("user 9");
        assert!(output.contains("rating 95.0"));
        assert!(output.contains("rating 90.0"));
        assert!(output.trim_end().ends_with("Bye!"));
    }

    #[test]
    fn test_loop_json_output() {
        let mut out = Vec::new();
        run_shell(&indexes(), "id 1\n".as_bytes(), &mut out, true).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("\"sofifa_id\": 1"));
        assert!(output.contains("\"long_name\": \"leo messi\""));
    }
}
