//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Ids serialize as
//! JSON numbers.

use cc_common::TokenPair;
use cc_core::value_objects::{
    AvailabilityId, CommentId, IdeaId, MembershipId, NotificationId, OrganizationId, Page,
    PageRequest, ProfileId, ProjectId, SkillId, SupporterId, UserId, UserNotificationId,
};
use cc_core::NotificationType;
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Page-number paginated list
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Convert a repository page, mapping each item into its response type
    pub fn from_page<U>(page: Page<U>, request: PageRequest) -> Self
    where
        U: Into<T>,
    {
        let has_more = page.has_more(request);
        Self {
            data: page.items.into_iter().map(Into::into).collect(),
            pagination: PaginationMeta {
                page: request.page(),
                page_size: request.page_size(),
                total: page.total,
                has_more,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    /// Number of matching rows across all pages
    pub total: i64,
    pub has_more: bool,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Login response with tokens and the caller's profile
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: PersonalProfileResponse,
}

impl AuthResponse {
    pub fn new(tokens: TokenPair, user: PersonalProfileResponse) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
            user,
        }
    }
}

/// Token refresh response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<TokenPair> for TokenResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: String,
}

impl SignupResponse {
    pub fn for_email(email: &str) -> Self {
        Self {
            success: format!(
                "You're almost done! We have sent an email with a confirmation link to {email}. \
                 Finish creating your account by clicking the link."
            ),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VerificationResponse {
    pub message: String,
    pub already_verified: bool,
}

impl VerificationResponse {
    pub fn verified() -> Self {
        Self {
            message: "Your profile is successfully verified".to_string(),
            already_verified: false,
        }
    }

    pub fn already_verified() -> Self {
        Self {
            message: "Account already verified. Please contact us if you are having trouble \
                      signing in."
                .to_string(),
            already_verified: true,
        }
    }
}

// ============================================================================
// Profile Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SkillResponse {
    pub id: SkillId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityResponse {
    pub id: AvailabilityId,
    pub name: String,
}

/// Full profile, shown to signed-in users
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: ProfileId,
    pub user_id: UserId,
    pub name: String,
    pub url_slug: String,
    pub image: Option<String>,
    pub background_image: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub location: Option<String>,
    pub biography: Option<String>,
    pub availability: Option<AvailabilityResponse>,
    pub skills: Vec<SkillResponse>,
    pub is_profile_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Stub profile, shown in listings and to anonymous visitors
#[derive(Debug, Clone, Serialize)]
pub struct ProfileStubResponse {
    pub id: ProfileId,
    pub name: String,
    pub url_slug: String,
    pub image: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// The caller's own profile: the full profile plus account fields
#[derive(Debug, Clone, Serialize)]
pub struct PersonalProfileResponse {
    #[serde(flatten)]
    pub profile: ProfileResponse,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub has_logged_in: i16,
}

/// A member page renders one of two fixed shapes depending on who is looking
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MemberProfileResponse {
    Full(ProfileResponse),
    Stub(ProfileStubResponse),
}

// ============================================================================
// Membership Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProjectStubResponse {
    pub id: ProjectId,
    pub name: String,
    pub url_slug: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationStubResponse {
    pub id: OrganizationId,
    pub name: String,
    pub url_slug: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectMembershipResponse {
    pub id: MembershipId,
    pub project: ProjectStubResponse,
    pub role: String,
    pub role_in_project: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationMembershipResponse {
    pub id: MembershipId,
    pub organization: OrganizationStubResponse,
    pub role: String,
}

// ============================================================================
// Idea Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SupporterResponse {
    pub id: SupporterId,
    pub idea_id: IdeaId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub idea_id: IdeaId,
    pub author_id: UserId,
    pub content: String,
    pub parent_comment_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// One entry of the caller's inbox
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    /// Id of the per-user entry, used to mark it read
    pub id: UserNotificationId,
    pub notification_id: NotificationId,
    pub notification_type: NotificationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea_comment_id: Option<CommentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea_supporter_id: Option<SupporterId>,
    pub read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Delivery state after marking an entry read
#[derive(Debug, Clone, Serialize)]
pub struct UserNotificationResponse {
    pub id: UserNotificationId,
    pub notification_id: NotificationId,
    pub read_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Health Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let label = |healthy: bool| if healthy { "healthy" } else { "unhealthy" }.to_string();
        Self {
            status: if database_healthy && redis_healthy {
                "ready"
            } else {
                "not_ready"
            }
            .to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: label(database_healthy),
                redis: label(redis_healthy),
            },
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
