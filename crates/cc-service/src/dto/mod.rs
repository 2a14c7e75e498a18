//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, LinkUserId, LoginRequest, RefreshTokenRequest, SignupFields,
    SignupRequest, UpdateProfileRequest, VerifyEmailRequest,
};

pub use responses::{
    AuthResponse, AvailabilityResponse, CommentResponse, HealthChecks, HealthResponse,
    MemberProfileResponse, NotificationResponse, OrganizationMembershipResponse,
    OrganizationStubResponse, PaginatedResponse, PaginationMeta, PersonalProfileResponse,
    ProfileResponse, ProfileStubResponse, ProjectMembershipResponse, ProjectStubResponse,
    ReadinessResponse, SignupResponse, SkillResponse, SupporterResponse, TokenResponse,
    UserNotificationResponse, VerificationResponse,
};
