//! Entity to model mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `TryFrom` where a row can be malformed (notification subjects)
//! - Helper functions where an entity is assembled from several queries

mod catalog;
mod idea;
mod membership;
mod notification;
mod profile;
mod user;

pub use notification::SubjectColumns;
pub use profile::{profile_with_skills, profiles_with_skills};
