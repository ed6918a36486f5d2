//! fbwall Routes
//!
//! - /health - liveness and configuration status
//! - /wall - rendered posts (HTML fragment)
//! - /wall/embed - fragment wrapped in #fb-wall plus the toggle script
//! - /wall.js - the toggle script alone

pub mod wall;
