//! Test fixtures and data generators
//!
//! Request bodies and the response shapes the tests read back.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup request
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub city: String,
}

impl SignupRequest {
    /// Emails are unique across runs against the same database
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        let stamp = chrono::Utc::now().timestamp_micros();
        Self {
            email: format!("member{suffix}.{stamp}@example.com"),
            password: "TestPass123!".to_string(),
            first_name: "Test".to_string(),
            last_name: format!("Member{stamp}n{suffix}"),
            country: "Germany".to_string(),
            city: "Berlin".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn for_signup(signup: &SignupRequest) -> Self {
        Self {
            username: signup.email.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Email verification request
#[derive(Debug, Serialize)]
pub struct VerifyEmailRequest {
    pub id: String,
    pub expires: String,
    pub token: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: PersonalProfile,
}

/// The caller's own profile
#[derive(Debug, Deserialize)]
pub struct PersonalProfile {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub url_slug: String,
    pub email: String,
    pub city: Option<String>,
    pub biography: Option<String>,
    pub is_profile_verified: bool,
    pub has_logged_in: i16,
}

/// Token refresh response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Verification response
#[derive(Debug, Deserialize)]
pub struct VerificationResponse {
    pub message: String,
    pub already_verified: bool,
}

/// Error body returned for every 4xx/5xx
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Paginated list envelope
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total: i64,
    pub has_more: bool,
}

/// Listing entry
#[derive(Debug, Deserialize)]
pub struct ProfileStub {
    pub id: i64,
    pub name: String,
    pub url_slug: String,
}

#[derive(Debug, Deserialize)]
pub struct SupporterResponse {
    pub id: i64,
    pub idea_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
    pub parent_comment_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub idea_id: i64,
    pub author_id: i64,
    pub parent_comment_id: Option<i64>,
}

/// Inbox entry
#[derive(Debug, Deserialize)]
pub struct NotificationEntry {
    pub id: i64,
    pub notification_type: String,
    pub read: bool,
}
