//! PostgreSQL implementation of MembershipRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cc_core::entities::{OrganizationMembership, ProjectMembership};
use cc_core::traits::{MembershipRepository, RepoResult};
use cc_core::value_objects::{Page, PageRequest, UserId};

use crate::models::{OrganizationMembershipModel, ProjectMembershipModel};

use super::error::{like_pattern, map_db_error};

/// PostgreSQL implementation of MembershipRepository
#[derive(Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    #[instrument(skip(self))]
    async fn project_memberships(
        &self,
        user_id: UserId,
        search: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Page<ProjectMembership>> {
        let pattern = search.map(like_pattern);

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM project_members pm
            JOIN projects pr ON pr.id = pm.project_id
            LEFT JOIN organizations o ON o.id = pr.parent_organization_id
            WHERE pm.user_id = $1 AND ($2::TEXT IS NULL OR o.url_slug ILIKE $2)
            ",
        )
        .bind(user_id.into_inner())
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, ProjectMembershipModel>(
            r"
            SELECT pm.id, pm.user_id, pr.id AS project_id, pr.name AS project_name,
                   pr.url_slug AS project_url_slug, pr.image AS project_image,
                   o.url_slug AS parent_organization_slug,
                   r.name AS role_name, pm.role_in_project
            FROM project_members pm
            JOIN projects pr ON pr.id = pm.project_id
            JOIN member_roles r ON r.id = pm.role_id
            LEFT JOIN organizations o ON o.id = pr.parent_organization_id
            WHERE pm.user_id = $1 AND ($2::TEXT IS NULL OR o.url_slug ILIKE $2)
            ORDER BY pm.id
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(user_id.into_inner())
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(rows, total).map(ProjectMembership::from))
    }

    #[instrument(skip(self))]
    async fn organization_memberships(
        &self,
        user_id: UserId,
        search: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Page<OrganizationMembership>> {
        let pattern = search.map(like_pattern);

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM organization_members om
            JOIN organizations o ON o.id = om.organization_id
            WHERE om.user_id = $1 AND ($2::TEXT IS NULL OR o.url_slug ILIKE $2)
            ",
        )
        .bind(user_id.into_inner())
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, OrganizationMembershipModel>(
            r"
            SELECT om.id, om.user_id, o.id AS organization_id, o.name AS organization_name,
                   o.url_slug AS organization_url_slug, o.image AS organization_image,
                   r.name AS role_name
            FROM organization_members om
            JOIN organizations o ON o.id = om.organization_id
            JOIN member_roles r ON r.id = om.role_id
            WHERE om.user_id = $1 AND ($2::TEXT IS NULL OR o.url_slug ILIKE $2)
            ORDER BY om.id
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(user_id.into_inner())
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(rows, total).map(OrganizationMembership::from))
    }
}
