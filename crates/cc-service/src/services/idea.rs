//! Idea service
//!
//! Joining and commenting on ideas, each followed by notification fan-out.

use cc_core::entities::{Idea, NewIdeaComment};
use cc_core::{DomainError, IdeaId, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CommentResponse, CreateCommentRequest, SupporterResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;

/// Idea service
pub struct IdeaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdeaService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Join an idea as a supporter
    #[instrument(skip(self))]
    pub async fn join(&self, user_id: UserId, idea_id: IdeaId) -> ServiceResult<SupporterResponse> {
        let idea = self.idea(idea_id).await?;
        let supporter = self.ctx.idea_repo().add_supporter(idea.id, user_id).await?;

        info!(idea_id = %idea.id, user_id = %user_id, "User joined idea");

        NotificationService::new(self.ctx)
            .create_idea_join_notification(&idea, &supporter, idea.chat_uuid)
            .await?;

        Ok(supporter.into())
    }

    /// Comment on an idea, or reply to one of its comments
    #[instrument(skip(self, request))]
    pub async fn comment(
        &self,
        user_id: UserId,
        idea_id: IdeaId,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let idea = self.idea(idea_id).await?;

        let parent = match request.parent_comment_id {
            Some(parent_id) => {
                let parent = self
                    .ctx
                    .comment_repo()
                    .find_by_id(parent_id)
                    .await?
                    .ok_or(DomainError::CommentNotFound(parent_id))?;
                if parent.idea_id != idea.id {
                    return Err(DomainError::ParentCommentMismatch.into());
                }
                Some(parent)
            }
            None => None,
        };

        let comment = self
            .ctx
            .comment_repo()
            .create(&NewIdeaComment {
                idea_id: idea.id,
                author_id: user_id,
                content: request.content,
                parent_comment_id: parent.as_ref().map(|p| p.id),
            })
            .await?;

        info!(idea_id = %idea.id, comment_id = %comment.id, "Comment created");

        let notifications = NotificationService::new(self.ctx);
        match &parent {
            Some(parent) => {
                notifications
                    .create_idea_comment_reply_notification(&idea, &comment, parent)
                    .await?
            }
            None => {
                notifications
                    .create_idea_comment_notification(&idea, &comment)
                    .await?
            }
        };

        Ok(comment.into())
    }

    async fn idea(&self, idea_id: IdeaId) -> ServiceResult<Idea> {
        self.ctx
            .idea_repo()
            .find_by_id(idea_id)
            .await?
            .ok_or_else(|| DomainError::IdeaNotFound(idea_id).into())
    }
}
