//! Domain Entities
//!
//! Read-only views of the Graph API feed response.

pub mod comment;
pub mod connection;
pub mod feed;
pub mod post;
pub mod profile;

pub use comment::Comment;
pub use connection::{Connection, Summary};
pub use feed::{FeedResponse, Paging};
pub use post::Post;
pub use profile::{Profile, Recipients};
