//! # cc-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! the pure rules of the platform (slugs, login counter, notification recipients).
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    comment_recipients, join_recipients, Availability, Idea, IdeaComment, IdeaSupporter,
    NewIdeaComment, NewUser, NewUserProfile, Notification, NotificationSubject, NotificationType,
    OrganizationMembership, OrganizationStub, ProjectMembership, ProjectStub, Skill, User,
    UserNotification, UserProfile, MAX_COMMENT_LENGTH, MAX_LOGIN_COUNT,
};
pub use error::DomainError;
pub use traits::{
    AvailabilityRepository, CommentRepository, EmailMessage, IdeaRepository, ImageStore,
    LiveNotifier, Mailer, MembershipRepository, NotificationRepository, ProfileRepository,
    RepoResult, SkillRepository, UserRepository,
};
pub use value_objects::{
    derive_url_slug, display_name, AvailabilityId, CommentId, IdParseError, IdeaId,
    MembershipId, NotificationId, OrganizationId, Page, PageRequest, ProfileId, ProjectId,
    SkillId, SupporterId, UserId, UserNotificationId,
};
