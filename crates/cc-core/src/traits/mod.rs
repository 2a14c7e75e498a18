//! Ports implemented by the infrastructure crates

mod delivery;
mod repositories;

pub use delivery::{EmailMessage, ImageStore, LiveNotifier, Mailer};
pub use repositories::{
    AvailabilityRepository, CommentRepository, IdeaRepository, MembershipRepository,
    NotificationRepository, ProfileRepository, RepoResult, SkillRepository, UserRepository,
};
