//! Idea, supporter and comment mappers

use cc_core::entities::{Idea, IdeaComment, IdeaSupporter};
use cc_core::value_objects::{CommentId, IdeaId, SupporterId, UserId};

use crate::models::{IdeaCommentModel, IdeaModel, IdeaSupporterModel};

impl From<IdeaModel> for Idea {
    fn from(model: IdeaModel) -> Self {
        Idea {
            id: IdeaId::new(model.id),
            name: model.name,
            url_slug: model.url_slug,
            owner_id: UserId::new(model.user_id),
            chat_uuid: model.chat_uuid,
            created_at: model.created_at,
        }
    }
}

impl From<IdeaSupporterModel> for IdeaSupporter {
    fn from(model: IdeaSupporterModel) -> Self {
        IdeaSupporter {
            id: SupporterId::new(model.id),
            idea_id: IdeaId::new(model.idea_id),
            user_id: UserId::new(model.user_id),
            created_at: model.created_at,
        }
    }
}

impl From<IdeaCommentModel> for IdeaComment {
    fn from(model: IdeaCommentModel) -> Self {
        IdeaComment {
            id: CommentId::new(model.id),
            idea_id: IdeaId::new(model.idea_id),
            author_id: UserId::new(model.author_id),
            content: model.content,
            parent_comment_id: model.parent_comment_id.map(CommentId::new),
            created_at: model.created_at,
        }
    }
}
