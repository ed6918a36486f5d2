//! Value Objects
//!
//! Immutable value types used by the renderer.

pub mod language;
pub mod post_type;

pub use language::Language;
pub use post_type::PostType;
