//! Notification service
//!
//! Fans idea events out to the people who should hear about them. Each
//! event creates one [`Notification`]; every recipient gets their own inbox
//! entry, a live signal and an email.
//!
//! Store failures abort the fan-out. Live signals and emails are best
//! effort: a failure is logged and delivery moves on to the next recipient.

use cc_core::entities::{Idea, IdeaComment, IdeaSupporter, Notification, NotificationSubject, User};
use cc_core::traits::EmailMessage;
use cc_core::{comment_recipients, join_recipients, DomainError, PageRequest, UserId, UserNotificationId};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::dto::{NotificationResponse, PaginatedResponse, UserNotificationResponse};
use crate::email::{idea_comment_email, idea_join_email, EmailLinks};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Tell the idea's owner and supporters that someone joined.
    ///
    /// Recipients are the owner followed by the other supporters in the
    /// order they joined, without the joining user.
    #[instrument(skip(self, idea, supporter), fields(idea_id = %idea.id, user_id = %supporter.user_id))]
    pub async fn create_idea_join_notification(
        &self,
        idea: &Idea,
        supporter: &IdeaSupporter,
        chat_uuid: Option<Uuid>,
    ) -> ServiceResult<Notification> {
        let notification = self
            .ctx
            .notification_repo()
            .create(NotificationSubject::PersonJoinedIdea(supporter.id))
            .await?;

        let supporters = self.ctx.idea_repo().supporter_user_ids(idea.id).await?;
        let recipients = join_recipients(idea.owner_id, &supporters, supporter.user_id);
        if !supporters.iter().any(|&id| id != supporter.user_id) {
            debug!("No other supporters to notify");
        }

        let joiner = self.actor(supporter.user_id).await?;
        let links = self.links();
        let template_id = self.ctx.settings().templates.idea_join;

        for &recipient in &recipients {
            self.deliver(&notification, recipient, |user| {
                idea_join_email(user, &joiner, idea, chat_uuid, links, template_id)
            })
            .await?;
        }

        info!(
            notification_id = %notification.id,
            recipients = recipients.len(),
            "Idea join notification sent"
        );
        Ok(notification)
    }

    /// Tell the idea's owner about a new top-level comment
    #[instrument(skip(self, idea, comment), fields(idea_id = %idea.id, comment_id = %comment.id))]
    pub async fn create_idea_comment_notification(
        &self,
        idea: &Idea,
        comment: &IdeaComment,
    ) -> ServiceResult<Option<Notification>> {
        self.create_comment_notification(idea, comment, None).await
    }

    /// Tell the author of `parent` that someone replied
    #[instrument(skip(self, idea, comment, parent), fields(idea_id = %idea.id, comment_id = %comment.id))]
    pub async fn create_idea_comment_reply_notification(
        &self,
        idea: &Idea,
        comment: &IdeaComment,
        parent: &IdeaComment,
    ) -> ServiceResult<Option<Notification>> {
        self.create_comment_notification(idea, comment, Some(parent)).await
    }

    /// Returns `None` when the only candidate recipient is the commenter
    async fn create_comment_notification(
        &self,
        idea: &Idea,
        comment: &IdeaComment,
        parent: Option<&IdeaComment>,
    ) -> ServiceResult<Option<Notification>> {
        let recipients = comment_recipients(idea, comment, parent);
        if recipients.is_empty() {
            debug!("Commenter is the only party; nothing to notify");
            return Ok(None);
        }

        let is_reply = parent.is_some();
        let subject = if is_reply {
            NotificationSubject::ReplyToIdeaComment(comment.id)
        } else {
            NotificationSubject::IdeaComment(comment.id)
        };
        let notification = self.ctx.notification_repo().create(subject).await?;

        let commenter = self.actor(comment.author_id).await?;
        let links = self.links();
        let templates = &self.ctx.settings().templates;
        let template_id = if is_reply {
            templates.idea_comment_reply
        } else {
            templates.idea_comment
        };

        for &recipient in &recipients {
            self.deliver(&notification, recipient, |user| {
                idea_comment_email(user, &commenter, idea, &comment.content, is_reply, links, template_id)
            })
            .await?;
        }

        info!(
            notification_id = %notification.id,
            notification_type = %notification.notification_type(),
            "Comment notification sent"
        );
        Ok(Some(notification))
    }

    /// The caller's inbox, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<NotificationResponse>> {
        let entries = self.ctx.notification_repo().find_by_user(user_id, page).await?;
        Ok(PaginatedResponse::from_page(entries, page))
    }

    /// Mark one of the caller's inbox entries read
    #[instrument(skip(self))]
    pub async fn mark_read(
        &self,
        user_id: UserId,
        id: UserNotificationId,
    ) -> ServiceResult<UserNotificationResponse> {
        let entry = self
            .ctx
            .notification_repo()
            .mark_read(id, user_id)
            .await?
            .ok_or(DomainError::NotificationNotFound(id))?;

        Ok(entry.into())
    }

    async fn actor(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    fn links(&self) -> EmailLinks<'_> {
        EmailLinks {
            frontend_url: &self.ctx.settings().frontend_url,
        }
    }

    /// Inbox entry, live signal, email
    async fn deliver<F>(&self, notification: &Notification, recipient: UserId, email: F) -> ServiceResult<()>
    where
        F: Fn(&User) -> EmailMessage,
    {
        self.ctx
            .notification_repo()
            .create_for_user(notification, recipient)
            .await?;

        if let Err(e) = self.ctx.live_notifier().notify_user(recipient, notification).await {
            warn!(user_id = %recipient, error = %e, "Failed to publish live notification");
        }

        let Some(user) = self.ctx.user_repo().find_by_id(recipient).await? else {
            warn!(user_id = %recipient, "Recipient has no account; email skipped");
            return Ok(());
        };

        if let Err(e) = self.ctx.mailer().send(&email(&user)).await {
            error!(user_id = %recipient, error = %e, "Failed to send notification email");
        }
        Ok(())
    }
}
