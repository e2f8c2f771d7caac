//! Domain types describing the listing state and the ideas it shows.

pub mod idea;
pub mod query;
pub mod types;
