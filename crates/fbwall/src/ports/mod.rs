//! Ports (Interfaces)
//!
//! Abstract interfaces the wall uses to reach the outside world.
//! `services::GraphClient` is the production implementation.

pub mod feed_source;

pub use feed_source::FeedSource;
