//! Idea entities - community ideas, their supporters and comments

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{CommentId, IdeaId, SupporterId, UserId};

/// Maximum comment length in characters
pub const MAX_COMMENT_LENGTH: usize = 5000;

/// An idea posted on the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idea {
    pub id: IdeaId,
    pub name: String,
    pub url_slug: String,
    pub owner_id: UserId,
    /// Group chat created for the idea's supporters, if any
    pub chat_uuid: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Idea {
    #[inline]
    pub fn is_owner(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// A user supporting (having joined) an idea
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaSupporter {
    pub id: SupporterId,
    pub idea_id: IdeaId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Comment on an idea; replies point at their parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaComment {
    pub id: CommentId,
    pub idea_id: IdeaId,
    pub author_id: UserId,
    pub content: String,
    pub parent_comment_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}

impl IdeaComment {
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_comment_id.is_some()
    }
}

/// Values needed to create a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdeaComment {
    pub idea_id: IdeaId,
    pub author_id: UserId,
    pub content: String,
    pub parent_comment_id: Option<CommentId>,
}
