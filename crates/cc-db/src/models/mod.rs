//! Database models - SQLx-compatible structs for PostgreSQL tables

mod catalog;
mod idea;
mod membership;
mod notification;
mod profile;
mod user;

pub use catalog::{AvailabilityModel, SkillModel};
pub use idea::{IdeaCommentModel, IdeaModel, IdeaSupporterModel};
pub use membership::{OrganizationMembershipModel, ProjectMembershipModel};
pub use notification::{InboxRowModel, NotificationModel, UserNotificationModel};
pub use profile::{ProfileModel, ProfileSkillModel};
pub use user::UserModel;
