//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Availability, Idea, IdeaComment, IdeaSupporter, NewIdeaComment, NewUser, NewUserProfile,
    Notification, NotificationSubject, OrganizationMembership, ProjectMembership, Skill, User,
    UserNotification, UserProfile,
};
use crate::error::DomainError;
use crate::value_objects::{
    AvailabilityId, CommentId, IdeaId, Page, PageRequest, SkillId, UserId, UserNotificationId,
};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user and return it with its assigned id
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Update first and last name
    async fn update_names(&self, id: UserId, first_name: &str, last_name: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile of a user
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<UserProfile>>;

    /// Find profile by URL slug
    async fn find_by_slug(&self, url_slug: &str) -> RepoResult<Option<UserProfile>>;

    /// Create the profile of a freshly signed up user
    async fn create(&self, profile: &NewUserProfile) -> RepoResult<UserProfile>;

    /// Save all scalar fields and the availability reference
    async fn update(&self, profile: &UserProfile) -> RepoResult<()>;

    /// Add skills to a profile, ignoring ones it already has
    async fn add_skills(&self, profile: &UserProfile, skill_ids: &[SkillId]) -> RepoResult<()>;

    /// List verified profiles ordered by id, optionally filtered by a
    /// case-insensitive substring of the display name
    async fn list_verified(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Page<UserProfile>>;
}

// ============================================================================
// Catalog Repositories
// ============================================================================

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Find skill by ID
    async fn find_by_id(&self, id: SkillId) -> RepoResult<Option<Skill>>;
}

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Find availability by ID
    async fn find_by_id(&self, id: AvailabilityId) -> RepoResult<Option<Availability>>;
}

// ============================================================================
// Membership Repository
// ============================================================================

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Project memberships of a user ordered by membership id.
    /// `search` matches the project's parent organization slug.
    async fn project_memberships(
        &self,
        user_id: UserId,
        search: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Page<ProjectMembership>>;

    /// Organization memberships of a user ordered by membership id.
    /// `search` matches the organization slug.
    async fn organization_memberships(
        &self,
        user_id: UserId,
        search: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Page<OrganizationMembership>>;
}

// ============================================================================
// Idea Repositories
// ============================================================================

#[async_trait]
pub trait IdeaRepository: Send + Sync {
    /// Find idea by ID
    async fn find_by_id(&self, id: IdeaId) -> RepoResult<Option<Idea>>;

    /// Record a user joining an idea.
    ///
    /// Fails with [`DomainError::AlreadySupporter`] if they already joined.
    async fn add_supporter(&self, idea_id: IdeaId, user_id: UserId) -> RepoResult<IdeaSupporter>;

    /// User ids of all supporters in the order they joined
    async fn supporter_user_ids(&self, idea_id: IdeaId) -> RepoResult<Vec<UserId>>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<IdeaComment>>;

    /// Create a comment
    async fn create(&self, comment: &NewIdeaComment) -> RepoResult<IdeaComment>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Create the notification shared by all recipients of an event
    async fn create(&self, subject: NotificationSubject) -> RepoResult<Notification>;

    /// Attach a notification to one recipient
    async fn create_for_user(
        &self,
        notification: &Notification,
        user_id: UserId,
    ) -> RepoResult<UserNotification>;

    /// A user's notifications, newest first
    async fn find_by_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> RepoResult<Page<(UserNotification, Notification)>>;

    /// Mark one of the user's notifications read.
    ///
    /// Returns `None` if the notification does not exist or belongs to someone else.
    async fn mark_read(
        &self,
        id: UserNotificationId,
        user_id: UserId,
    ) -> RepoResult<Option<UserNotification>>;
}
