//! Notification database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    pub notification_type: String,
    pub idea_comment_id: Option<i64>,
    pub idea_supporter_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserNotificationModel {
    pub id: i64,
    pub notification_id: i64,
    pub user_id: i64,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// user_notifications joined with their notification, for inbox listings
#[derive(Debug, Clone, FromRow)]
pub struct InboxRowModel {
    pub id: i64,
    pub notification_id: i64,
    pub user_id: i64,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub notification_type: String,
    pub idea_comment_id: Option<i64>,
    pub idea_supporter_id: Option<i64>,
    pub notification_created_at: DateTime<Utc>,
}
