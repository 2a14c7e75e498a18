//! End-to-end test utilities for the Climate Connect API
//!
//! Spawns the real server against the PostgreSQL and Redis instances named
//! in the environment and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
