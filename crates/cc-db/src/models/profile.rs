//! Profile database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of user_profiles joined with its availability
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub url_slug: String,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub biography: Option<String>,
    pub image: Option<String>,
    pub background_image: Option<String>,
    pub availability_id: Option<i64>,
    pub availability_name: Option<String>,
    pub is_profile_verified: bool,
    pub has_logged_in: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A skill attached to a profile
#[derive(Debug, Clone, FromRow)]
pub struct ProfileSkillModel {
    pub profile_id: i64,
    pub skill_id: i64,
    pub skill_name: String,
}

