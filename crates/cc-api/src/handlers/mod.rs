//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod ideas;
pub mod members;
pub mod notifications;
pub mod profile;
