//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cc_core::entities::{Notification, NotificationSubject, UserNotification};
use cc_core::traits::{NotificationRepository, RepoResult};
use cc_core::value_objects::{Page, PageRequest, UserId, UserNotificationId};

use crate::mappers::SubjectColumns;
use crate::models::{InboxRowModel, NotificationModel, UserNotificationModel};

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self))]
    async fn create(&self, subject: NotificationSubject) -> RepoResult<Notification> {
        let columns = SubjectColumns::from(subject);

        let model = sqlx::query_as::<_, NotificationModel>(
            r"
            INSERT INTO notifications (notification_type, idea_comment_id, idea_supporter_id)
            VALUES ($1, $2, $3)
            RETURNING id, notification_type, idea_comment_id, idea_supporter_id, created_at
            ",
        )
        .bind(columns.notification_type)
        .bind(columns.idea_comment_id)
        .bind(columns.idea_supporter_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Notification::try_from(model)
    }

    #[instrument(skip(self, notification), fields(notification_id = %notification.id))]
    async fn create_for_user(
        &self,
        notification: &Notification,
        user_id: UserId,
    ) -> RepoResult<UserNotification> {
        let model = sqlx::query_as::<_, UserNotificationModel>(
            r"
            INSERT INTO user_notifications (notification_id, user_id)
            VALUES ($1, $2)
            RETURNING id, notification_id, user_id, read_at, created_at
            ",
        )
        .bind(notification.id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(UserNotification::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> RepoResult<Page<(UserNotification, Notification)>> {
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM user_notifications WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, InboxRowModel>(
            r"
            SELECT un.id, un.notification_id, un.user_id, un.read_at, un.created_at,
                   n.notification_type, n.idea_comment_id, n.idea_supporter_id,
                   n.created_at AS notification_created_at
            FROM user_notifications un
            JOIN notifications n ON n.id = un.notification_id
            WHERE un.user_id = $1
            ORDER BY un.created_at DESC, un.id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(user_id.into_inner())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let items = rows
            .into_iter()
            .map(<(UserNotification, Notification)>::try_from)
            .collect::<RepoResult<Vec<_>>>()?;

        Ok(Page::new(items, total))
    }

    #[instrument(skip(self))]
    async fn mark_read(
        &self,
        id: UserNotificationId,
        user_id: UserId,
    ) -> RepoResult<Option<UserNotification>> {
        let model = sqlx::query_as::<_, UserNotificationModel>(
            r"
            UPDATE user_notifications
            SET read_at = COALESCE(read_at, NOW())
            WHERE id = $1 AND user_id = $2
            RETURNING id, notification_id, user_id, read_at, created_at
            ",
        )
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(UserNotification::from))
    }
}
