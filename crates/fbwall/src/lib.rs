//! fbwall Library
//!
//! Renders a Facebook Page's recent wall posts as an embeddable HTML widget.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Graph API objects and value types
//!   - `entities/`: Post, Comment, Profile, Connection, FeedResponse
//!   - `value_objects/`: Language, PostType
//!   - `errors/`: WallError
//!
//! - **Ports** (`ports/`): the `FeedSource` interface the wall reads from
//! - **Services** (`services/`): `GraphClient`, the reqwest-backed `FeedSource`
//! - **Render** (`render/`): HTML fragments per post, dates, links, YouTube
//! - **Wall** (`wall`): the facade tying options, fetch and render together
//!
//! # Usage
//!
//! ```rust,ignore
//! use fbwall::FacebookWall;
//!
//! let mut wall = FacebookWall::new("123456789", "access-token");
//! wall.set_language("de");
//! let html = wall.render().await?;
//! ```

pub mod config;
pub mod domain;
pub mod i18n;
pub mod ports;
pub mod render;
pub mod script;
pub mod services;
pub mod wall;

// Re-export commonly used types
pub use config::WallOptions;
pub use domain::{
    Comment, Connection, FeedResponse, Language, Post, PostType, Profile, WallError,
};
pub use i18n::Labels;
pub use ports::FeedSource;
pub use render::WallRenderer;
pub use script::{embed_page, WALL_SCRIPT};
pub use services::GraphClient;
pub use wall::FacebookWall;
