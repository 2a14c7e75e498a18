//! PostgreSQL implementations of SkillRepository and AvailabilityRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cc_core::entities::{Availability, Skill};
use cc_core::traits::{AvailabilityRepository, RepoResult, SkillRepository};
use cc_core::value_objects::{AvailabilityId, SkillId};

use crate::models::{AvailabilityModel, SkillModel};

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgSkillRepository {
    pool: PgPool,
}

impl PgSkillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillRepository for PgSkillRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: SkillId) -> RepoResult<Option<Skill>> {
        let result = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT id, name FROM skills WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Skill::from))
    }
}

#[derive(Clone)]
pub struct PgAvailabilityRepository {
    pool: PgPool,
}

impl PgAvailabilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PgAvailabilityRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: AvailabilityId) -> RepoResult<Option<Availability>> {
        let result = sqlx::query_as::<_, AvailabilityModel>(
            r"
            SELECT id, name FROM availabilities WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Availability::from))
    }
}
