// Parser module: supplier listing-line parsing.

pub mod listing;

pub use listing::{ListingParser, Parser};
