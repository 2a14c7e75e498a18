//! Domain entities - core business objects

mod catalog;
mod idea;
mod membership;
mod notification;
mod profile;
mod user;

pub use catalog::{Availability, Skill};
pub use idea::{Idea, IdeaComment, IdeaSupporter, NewIdeaComment, MAX_COMMENT_LENGTH};
pub use membership::{OrganizationMembership, OrganizationStub, ProjectMembership, ProjectStub};
pub use notification::{
    comment_recipients, join_recipients, Notification, NotificationSubject, NotificationType,
    UserNotification,
};
pub use profile::{NewUserProfile, UserProfile, MAX_LOGIN_COUNT};
pub use user::{NewUser, User};
