//! Interactive command loop.
//!
//! Line grammar:
//!
//! ```text
//! player <name prefix>       players whose name starts with the prefix
//! id <sofifa_id>             one player by ID
//! user <user_id>             a user's 20 highest ratings
//! top<N><POSITION>           e.g. top10ST, best N players at a position
//! tags '<tag1>' '<tag2>' ... players carrying every tag
//! help                       print this summary
//! exit | quit                leave the loop
//! ```

use super::{handle_query, query::Query};
use crate::{
    cli::types::Position,
    error::{IndexError, Result},
    index::Indexes,
};
use std::{
    io::{BufRead, Write},
    str::FromStr,
    time::Instant,
};

const HELP: &str = "\
Available commands:
  player <name prefix>
  id <sofifa_id>
  user <user_id>
  top<N><position>   (e.g. top5ST, top10GK)
  tags '<tag1>' '<tag2>' ...
  help
  exit";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Query(Query),
    Help,
    Exit,
}

impl FromStr for ShellCommand {
    type Err = IndexError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let invalid = |reason: &str| IndexError::InvalidCommand {
            input: line.to_string(),
            reason: reason.to_string(),
        };

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        let keyword = keyword.to_lowercase();

        match keyword.as_str() {
            "" => Err(invalid("empty command")),
            "exit" | "quit" => Ok(ShellCommand::Exit),
            "help" => Ok(ShellCommand::Help),
            "player" => {
                // Words are re-joined with single spaces
                let prefix = rest.split_whitespace().collect::<Vec<_>>().join(" ");
                if prefix.is_empty() {
                    return Err(invalid("usage: player <name prefix>"));
                }
                Ok(ShellCommand::Query(Query::Prefix(prefix)))
            }
            "id" => first_word(rest)
                .ok_or_else(|| invalid("usage: id <sofifa_id>"))?
                .parse()
                .map(|id| ShellCommand::Query(Query::Id(id))),
            "user" => first_word(rest)
                .ok_or_else(|| invalid("usage: user <user_id>"))?
                .parse()
                .map(|id| ShellCommand::Query(Query::User(id))),
            "tags" => {
                let tags = quoted_values(rest);
                if tags.is_empty() {
                    return Err(invalid("usage: tags '<tag1>' '<tag2>' ..."));
                }
                Ok(ShellCommand::Query(Query::Tags(tags)))
            }
            _ if keyword.starts_with("top") => parse_top(line)
                .map(ShellCommand::Query)
                .ok_or_else(|| invalid("usage: top<N><position>, e.g. top10ST")),
            _ => Err(invalid("unknown command, type 'help' for the list")),
        }
    }
}

fn first_word(rest: &str) -> Option<&str> {
    rest.split_whitespace().next()
}

/// `top<N><letters>`; spaces between the parts are tolerated (`top 5 st`).
fn parse_top(line: &str) -> Option<Query> {
    let rest = line.get(3..)?.trim_start();
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let n: usize = rest[..digits_end].parse().ok()?;

    let code = rest[digits_end..].trim();
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let position: Position = code.parse().ok()?;
    Some(Query::TopByPosition { n, position })
}

/// Every `'...'`-quoted value in `text`, in order. An unterminated quote is ignored.
fn quoted_values(text: &str) -> Vec<String> {
    let parts: Vec<&str> = text.split('\'').collect();
    parts
        .iter()
        .enumerate()
        .filter(|(idx, _)| idx % 2 == 1 && *idx + 1 < parts.len())
        .map(|(_, value)| value.to_string())
        .collect()
}

/// Read commands from `input` until `exit` or end of input, writing results
/// and errors to `out`. Bad commands are reported and the loop continues.
pub fn run_shell<R: BufRead, W: Write>(
    indexes: &Indexes,
    input: R,
    out: &mut W,
    as_json: bool,
) -> Result<()> {
    writeln!(out, "Ready. Type a query, 'help' for the formats, or 'exit' to quit.")?;
    writeln!(out, "{HELP}")?;
    writeln!(out, "{}", "-".repeat(35))?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let query = match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Exit) => break,
            Ok(ShellCommand::Help) => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Ok(ShellCommand::Query(query)) => query,
            Err(e) => {
                writeln!(out, "Error: {e}")?;
                continue;
            }
        };

        let started = Instant::now();
        writeln!(out, "\n{}:", query.describe())?;
        handle_query(indexes, &query, as_json, out)?;
        writeln!(
            out,
            "\nQuery executed in {:.6} seconds.",
            started.elapsed().as_secs_f64()
        )?;
        writeln!(out, "{}", "-".repeat(35))?;
    }

    writeln!(out, "Bye!")?;
    Ok(())
}

#[cfg(test)]
mod tests;
