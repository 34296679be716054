//! Input tables for the index
//!
//! - `models`: typed rows for the players, ratings and tags tables
//! - `loader`: CSV reading into those rows

pub mod loader;
pub mod models;


pub use loader::{load_dataset, load_players, load_ratings, load_tags, DatasetPaths};
pub use models::*;
