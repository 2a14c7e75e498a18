//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in cc-core.

mod catalog;
mod error;
mod idea;
mod membership;
mod notification;
mod profile;
mod user;

pub use catalog::{PgAvailabilityRepository, PgSkillRepository};
pub use idea::{PgCommentRepository, PgIdeaRepository};
pub use membership::PgMembershipRepository;
pub use notification::PgNotificationRepository;
pub use profile::PgProfileRepository;
pub use user::PgUserRepository;
