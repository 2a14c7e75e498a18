//! Notification entity <-> model mapper
//!
//! The subject is stored as a type column plus one nullable reference per
//! kind. Rows that break that shape are reported as database errors.

use cc_core::entities::{Notification, NotificationSubject, NotificationType, UserNotification};
use cc_core::error::DomainError;
use cc_core::value_objects::{CommentId, NotificationId, SupporterId, UserId, UserNotificationId};

use crate::models::{InboxRowModel, NotificationModel, UserNotificationModel};

/// Column values for inserting a subject
pub struct SubjectColumns {
    pub notification_type: &'static str,
    pub idea_comment_id: Option<i64>,
    pub idea_supporter_id: Option<i64>,
}

impl From<NotificationSubject> for SubjectColumns {
    fn from(subject: NotificationSubject) -> Self {
        Self {
            notification_type: subject.notification_type().as_str(),
            idea_comment_id: subject.comment_id().map(CommentId::into_inner),
            idea_supporter_id: subject.supporter_id().map(SupporterId::into_inner),
        }
    }
}

fn subject_from_columns(
    id: i64,
    notification_type: &str,
    idea_comment_id: Option<i64>,
    idea_supporter_id: Option<i64>,
) -> Result<NotificationSubject, DomainError> {
    let kind = notification_type
        .parse::<NotificationType>()
        .map_err(DomainError::DatabaseError)?;

    NotificationSubject::from_parts(
        kind,
        idea_comment_id.map(CommentId::new),
        idea_supporter_id.map(SupporterId::new),
    )
    .ok_or_else(|| DomainError::DatabaseError(format!("notification {id} has no {kind} reference")))
}

impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        let subject = subject_from_columns(
            model.id,
            &model.notification_type,
            model.idea_comment_id,
            model.idea_supporter_id,
        )?;

        Ok(Notification {
            id: NotificationId::new(model.id),
            subject,
            created_at: model.created_at,
        })
    }
}

impl From<UserNotificationModel> for UserNotification {
    fn from(model: UserNotificationModel) -> Self {
        UserNotification {
            id: UserNotificationId::new(model.id),
            notification_id: NotificationId::new(model.notification_id),
            user_id: UserId::new(model.user_id),
            read_at: model.read_at,
            created_at: model.created_at,
        }
    }
}

impl TryFrom<InboxRowModel> for (UserNotification, Notification) {
    type Error = DomainError;

    fn try_from(row: InboxRowModel) -> Result<Self, Self::Error> {
        let subject = subject_from_columns(
            row.notification_id,
            &row.notification_type,
            row.idea_comment_id,
            row.idea_supporter_id,
        )?;

        Ok((
            UserNotification {
                id: UserNotificationId::new(row.id),
                notification_id: NotificationId::new(row.notification_id),
                user_id: UserId::new(row.user_id),
                read_at: row.read_at,
                created_at: row.created_at,
            },
            Notification {
                id: NotificationId::new(row.notification_id),
                subject,
                created_at: row.notification_created_at,
            },
        ))
    }
}
