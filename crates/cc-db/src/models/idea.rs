//! Idea database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct IdeaModel {
    pub id: i64,
    pub name: String,
    pub url_slug: String,
    pub user_id: i64,
    pub chat_uuid: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct IdeaSupporterModel {
    pub id: i64,
    pub idea_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct IdeaCommentModel {
    pub id: i64,
    pub idea_id: i64,
    pub author_id: i64,
    pub content: String,
    pub parent_comment_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}
