//! Notification entities and recipient rules

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Idea, IdeaComment};
use crate::value_objects::{CommentId, NotificationId, SupporterId, UserId, UserNotificationId};

/// Kind of event a notification reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    IdeaComment,
    ReplyToIdeaComment,
    PersonJoinedIdea,
}

impl NotificationType {
    /// Stored and serialized name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IdeaComment => "IDEA_COMMENT",
            Self::ReplyToIdeaComment => "REPLY_TO_IDEA_COMMENT",
            Self::PersonJoinedIdea => "PERSON_JOINED_IDEA",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IDEA_COMMENT" => Ok(Self::IdeaComment),
            "REPLY_TO_IDEA_COMMENT" => Ok(Self::ReplyToIdeaComment),
            "PERSON_JOINED_IDEA" => Ok(Self::PersonJoinedIdea),
            other => Err(format!("unknown notification type: {other}")),
        }
    }
}

/// What a notification is about. Each kind carries exactly the reference it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationSubject {
    IdeaComment(CommentId),
    ReplyToIdeaComment(CommentId),
    PersonJoinedIdea(SupporterId),
}

impl NotificationSubject {
    pub const fn notification_type(&self) -> NotificationType {
        match self {
            Self::IdeaComment(_) => NotificationType::IdeaComment,
            Self::ReplyToIdeaComment(_) => NotificationType::ReplyToIdeaComment,
            Self::PersonJoinedIdea(_) => NotificationType::PersonJoinedIdea,
        }
    }

    /// Referenced comment, for comment kinds
    pub const fn comment_id(&self) -> Option<CommentId> {
        match self {
            Self::IdeaComment(id) | Self::ReplyToIdeaComment(id) => Some(*id),
            Self::PersonJoinedIdea(_) => None,
        }
    }

    /// Referenced supporter record, for join notifications
    pub const fn supporter_id(&self) -> Option<SupporterId> {
        match self {
            Self::PersonJoinedIdea(id) => Some(*id),
            _ => None,
        }
    }

    /// Rebuild a subject from its stored columns.
    ///
    /// Returns `None` if the column required by `kind` is missing.
    pub fn from_parts(
        kind: NotificationType,
        comment_id: Option<CommentId>,
        supporter_id: Option<SupporterId>,
    ) -> Option<Self> {
        match kind {
            NotificationType::IdeaComment => comment_id.map(Self::IdeaComment),
            NotificationType::ReplyToIdeaComment => comment_id.map(Self::ReplyToIdeaComment),
            NotificationType::PersonJoinedIdea => supporter_id.map(Self::PersonJoinedIdea),
        }
    }
}

/// One notification per event, shared by all its recipients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub subject: NotificationSubject,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    #[inline]
    pub fn notification_type(&self) -> NotificationType {
        self.subject.notification_type()
    }
}

/// Per-recipient delivery and read state of a [`Notification`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserNotification {
    pub id: UserNotificationId,
    pub notification_id: NotificationId,
    pub user_id: UserId,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserNotification {
    #[inline]
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}

/// Recipients of an idea-join notification.
///
/// The owner comes first, then every supporter in the given order. The
/// joining user is left out and each user appears at most once.
pub fn join_recipients(owner: UserId, supporters: &[UserId], joiner: UserId) -> Vec<UserId> {
    let mut recipients = Vec::with_capacity(supporters.len() + 1);
    for user_id in std::iter::once(owner).chain(supporters.iter().copied()) {
        if user_id != joiner && !recipients.contains(&user_id) {
            recipients.push(user_id);
        }
    }
    recipients
}

/// Recipients of a comment notification.
///
/// A reply goes to the parent comment's author, a top-level comment to the
/// idea owner. The commenter is never notified about their own comment.
pub fn comment_recipients(
    idea: &Idea,
    comment: &IdeaComment,
    parent: Option<&IdeaComment>,
) -> Vec<UserId> {
    let target = match parent {
        Some(parent) => parent.author_id,
        None => idea.owner_id,
    };

    if target == comment.author_id {
        Vec::new()
    } else {
        vec![target]
    }
}
