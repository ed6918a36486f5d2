pub mod graph;

// Re-exports
pub use graph::{feed_url, GraphClient};
