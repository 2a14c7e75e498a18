//! Domain errors - error types for the domain layer
//!
//! Display strings are the user-facing messages returned by the API.

use thiserror::Error;

use crate::value_objects::{
    AvailabilityId, CommentId, IdeaId, SkillId, UserId, UserNotificationId,
};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found.")]
    UserNotFound(UserId),

    #[error("Profile not found.")]
    ProfileNotFound,

    #[error("Skill not found.")]
    SkillNotFound(SkillId),

    #[error("Availability not found.")]
    AvailabilityNotFound(AvailabilityId),

    #[error("Idea not found.")]
    IdeaNotFound(IdeaId),

    #[error("Comment not found.")]
    CommentNotFound(CommentId),

    #[error("Notification not found.")]
    NotificationNotFound(UserNotificationId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Must include 'username' and 'password'")]
    MissingCredentials,

    #[error("Required parameter is missing")]
    MissingSignupParameter,

    #[error("Required parameters are missing.")]
    MissingVerificationParameters,

    #[error("Invalid expiry timestamp.")]
    InvalidExpiry,

    /// Verification link names a user that does not exist
    #[error("Bad request")]
    UnknownVerificationUser,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Email already in use.")]
    EmailAlreadyExists,

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Parent comment belongs to another idea")]
    ParentCommentMismatch,

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Username does not exist. Have you signed up yet?")]
    UnknownUsername,

    #[error("Invalid password.")]
    InvalidPassword,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Verification link expired.")]
    VerificationLinkExpired,

    #[error("Permission Denied")]
    PermissionDenied,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already supporting this idea")]
    AlreadySupporter,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Mail delivery failed: {0}")]
    MailDeliveryError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ProfileNotFound => "UNKNOWN_PROFILE",
            Self::SkillNotFound(_) => "UNKNOWN_SKILL",
            Self::AvailabilityNotFound(_) => "UNKNOWN_AVAILABILITY",
            Self::IdeaNotFound(_) => "UNKNOWN_IDEA",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::MissingSignupParameter | Self::MissingVerificationParameters => {
                "MISSING_PARAMETER"
            }
            Self::InvalidExpiry => "INVALID_EXPIRY",
            Self::UnknownVerificationUser => "BAD_REQUEST",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::InvalidImage(_) => "INVALID_IMAGE",
            Self::ParentCommentMismatch => "PARENT_COMMENT_MISMATCH",

            // Authentication
            Self::UnknownUsername => "UNKNOWN_USERNAME",
            Self::InvalidPassword => "INVALID_PASSWORD",

            // Authorization
            Self::VerificationLinkExpired => "VERIFICATION_LINK_EXPIRED",
            Self::PermissionDenied => "PERMISSION_DENIED",

            // Conflict
            Self::AlreadySupporter => "ALREADY_SUPPORTER",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::MailDeliveryError(_) => "MAIL_DELIVERY_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ProfileNotFound
                | Self::SkillNotFound(_)
                | Self::AvailabilityNotFound(_)
                | Self::IdeaNotFound(_)
                | Self::CommentNotFound(_)
                | Self::NotificationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingCredentials
                | Self::MissingSignupParameter
                | Self::MissingVerificationParameters
                | Self::InvalidExpiry
                | Self::UnknownVerificationUser
                | Self::InvalidEmail
                | Self::EmailAlreadyExists
                | Self::InvalidImage(_)
                | Self::ParentCommentMismatch
        )
    }

    /// Check if this is a failed login
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::UnknownUsername | Self::InvalidPassword)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::VerificationLinkExpired | Self::PermissionDenied)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadySupporter)
    }

    /// HTTP status this error maps to
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authentication() {
            401
        } else if self.is_authorization() {
            403
        } else if self.is_validation() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}
