// Analyzer module: derives prices and supplier shortlists from matched offers.

pub mod recommendation;

// Re-export the main Recommender implementation for ease of use.
pub use recommendation::RecommenderImpl;
