//! Domain Layer
//!
//! Graph API objects as the wall reads them, plus value types and errors.
//! Nothing here performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
