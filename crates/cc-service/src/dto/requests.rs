//! Request DTOs for API endpoints
//!
//! Fields the API reports individually when missing are `Option`s; the
//! services turn an absent field into the matching domain error.

use cc_core::value_objects::{AvailabilityId, CommentId, SkillId};
use cc_core::DomainError;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

/// Deserialize a present field as `Some`, keeping JSON `null` as `Some(None)`.
///
/// Paired with `#[serde(default)]`, an absent field stays `None`, so callers
/// can tell "not sent" from "sent as null".
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Login request; `username` is the address the account signed up with
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Both credentials, or `MissingCredentials`
    pub fn credentials(&self) -> Result<(&str, &str), DomainError> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(DomainError::MissingCredentials),
        }
    }
}

/// Token refresh request. A missing token is an invalid one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}

/// Signup request. Every field is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

/// A [`SignupRequest`] with every field present
#[derive(Debug, Clone, Validate)]
pub struct SignupFields {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub city: String,
}

impl SignupRequest {
    pub fn require_fields(self) -> Result<SignupFields, DomainError> {
        match self {
            Self {
                email: Some(email),
                password: Some(password),
                first_name: Some(first_name),
                last_name: Some(last_name),
                country: Some(country),
                city: Some(city),
            } => Ok(SignupFields {
                email: email.trim().to_string(),
                password,
                first_name,
                last_name,
                country,
                city,
            }),
            _ => Err(DomainError::MissingSignupParameter),
        }
    }
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Partial profile update. Only fields present in the body are applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 150, message = "First name must be 1-150 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 150, message = "Last name must be 1-150 characters"))]
    pub last_name: Option<String>,

    /// `data:image/<ext>;base64,<payload>`
    pub image: Option<String>,

    /// `data:image/<ext>;base64,<payload>`
    pub background_image: Option<String>,

    #[serde(default, deserialize_with = "present")]
    pub country: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub state: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub city: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub biography: Option<Option<String>>,

    pub availability: Option<AvailabilityId>,

    /// Skills to add; existing ones are kept
    pub skills: Option<Vec<SkillId>>,
}

impl UpdateProfileRequest {
    #[must_use]
    pub fn renames(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }
}

// ============================================================================
// Verification Requests
// ============================================================================

/// User id as it appears in a link: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LinkUserId {
    Number(i64),
    Text(String),
}

impl LinkUserId {
    pub fn parse(&self) -> Option<i64> {
        match self {
            Self::Number(id) => Some(*id),
            Self::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

/// Values copied from an email verification link
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyEmailRequest {
    pub id: Option<LinkUserId>,
    /// ISO-8601 expiry, possibly with `%2B`/`%2D` left in place of `+`/`-`
    pub expires: Option<String>,
    pub token: Option<String>,
}

// ============================================================================
// Idea Requests
// ============================================================================

/// Create a comment on an idea, or a reply when `parent_comment_id` is set
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(
        length(min = 1, max = 5000, message = "Comment must be 1-5000 characters"),
        custom(function = "not_blank", message = "Comment must not be empty")
    )]
    pub content: String,

    pub parent_comment_id: Option<CommentId>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
