//! Type-safe wrappers for player data identifiers and position codes.

pub mod ids;
pub mod position;

pub use ids::{PlayerId, UserId};
pub use position::Position;
