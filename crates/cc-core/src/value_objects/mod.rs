//! Value objects - immutable types that represent domain concepts

mod ids;
mod page;
mod slug;

pub use ids::{
    AvailabilityId, CommentId, IdParseError, IdeaId, MembershipId, NotificationId,
    OrganizationId, ProfileId, ProjectId, SkillId, SupporterId, UserId, UserNotificationId,
};
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use slug::{derive_url_slug, display_name};
