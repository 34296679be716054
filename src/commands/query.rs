//! A parsed query and its dispatch onto the query layer.

use super::output::QueryOutput;
use crate::{
    cli::types::{PlayerId, Position, UserId},
    index::Indexes,
    query as lookup,
};

/// One of the five supported lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Players whose short or long name starts with the prefix
    Prefix(String),
    /// A single player by `sofifa_id`
    Id(PlayerId),
    /// A user's highest ratings
    User(UserId),
    /// Best `n` players at a position by average rating
    TopByPosition { n: usize, position: Position },
    /// Players carrying every listed tag
    Tags(Vec<String>),
}

impl Query {
    /// Heading printed above text results.
    pub fn describe(&self) -> String {
        match self {
            Query::Prefix(prefix) => format!("Players matching prefix '{prefix}'"),
            Query::Id(id) => format!("Player {id}"),
            Query::User(user_id) => format!("Top players rated by user {user_id}"),
            Query::TopByPosition { n, position } => format!("Top {n} players at {position}"),
            Query::Tags(tags) => format!("Players tagged {}", quote_all(tags)),
        }
    }
}

fn quote_all(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("'{t}'"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Execute `query` against the built indexes.
pub fn run_query(indexes: &Indexes, query: &Query) -> QueryOutput {
    match query {
        Query::Prefix(prefix) => {
            QueryOutput::Players(lookup::search_by_prefix(&indexes.names, &indexes.records, prefix))
        }
        Query::Id(id) => QueryOutput::Player(lookup::search_by_id(&indexes.records, *id)),
        Query::User(user_id) => QueryOutput::UserRatings(lookup::search_top_rated_by_user(
            &indexes.user_ratings,
            &indexes.records,
            *user_id,
        )),
        Query::TopByPosition { n, position } => {
            QueryOutput::Leaders(lookup::search_top_by_position(
                &indexes.positions,
                &indexes.records,
                *n,
                position.as_str(),
            ))
        }
        Query::Tags(tags) => {
            QueryOutput::Players(lookup::search_by_tags(&indexes.tags, &indexes.records, tags))
        }
    }
}
