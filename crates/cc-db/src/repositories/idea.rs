//! PostgreSQL implementations of IdeaRepository and CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cc_core::entities::{Idea, IdeaComment, IdeaSupporter, NewIdeaComment};
use cc_core::error::DomainError;
use cc_core::traits::{CommentRepository, IdeaRepository, RepoResult};
use cc_core::value_objects::{CommentId, IdeaId, UserId};

use crate::models::{IdeaCommentModel, IdeaModel, IdeaSupporterModel};

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of IdeaRepository
#[derive(Clone)]
pub struct PgIdeaRepository {
    pool: PgPool,
}

impl PgIdeaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdeaRepository for PgIdeaRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: IdeaId) -> RepoResult<Option<Idea>> {
        let result = sqlx::query_as::<_, IdeaModel>(
            r"
            SELECT id, name, url_slug, user_id, chat_uuid, created_at
            FROM ideas
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Idea::from))
    }

    #[instrument(skip(self))]
    async fn add_supporter(&self, idea_id: IdeaId, user_id: UserId) -> RepoResult<IdeaSupporter> {
        let model = sqlx::query_as::<_, IdeaSupporterModel>(
            r"
            INSERT INTO idea_supporters (idea_id, user_id)
            VALUES ($1, $2)
            RETURNING id, idea_id, user_id, created_at
            ",
        )
        .bind(idea_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let is_unique = e
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation());
            if is_unique {
                DomainError::AlreadySupporter
            } else {
                map_foreign_key_violation(e, || DomainError::IdeaNotFound(idea_id))
            }
        })?;

        Ok(IdeaSupporter::from(model))
    }

    #[instrument(skip(self))]
    async fn supporter_user_ids(&self, idea_id: IdeaId) -> RepoResult<Vec<UserId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT user_id FROM idea_supporters
            WHERE idea_id = $1
            ORDER BY id
            ",
        )
        .bind(idea_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(UserId::new).collect())
    }
}

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<IdeaComment>> {
        let result = sqlx::query_as::<_, IdeaCommentModel>(
            r"
            SELECT id, idea_id, author_id, content, parent_comment_id, created_at
            FROM idea_comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(IdeaComment::from))
    }

    #[instrument(skip(self, comment), fields(idea_id = %comment.idea_id))]
    async fn create(&self, comment: &NewIdeaComment) -> RepoResult<IdeaComment> {
        let model = sqlx::query_as::<_, IdeaCommentModel>(
            r"
            INSERT INTO idea_comments (idea_id, author_id, content, parent_comment_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, idea_id, author_id, content, parent_comment_id, created_at
            ",
        )
        .bind(comment.idea_id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(&comment.content)
        .bind(comment.parent_comment_id.map(CommentId::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::IdeaNotFound(comment.idea_id)))?;

        Ok(IdeaComment::from(model))
    }
}
