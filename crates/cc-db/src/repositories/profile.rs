//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cc_core::entities::{NewUserProfile, Skill, UserProfile};
use cc_core::error::DomainError;
use cc_core::traits::{ProfileRepository, RepoResult};
use cc_core::value_objects::{Page, PageRequest, SkillId, UserId};

use crate::mappers::{profile_with_skills, profiles_with_skills};
use crate::models::{ProfileModel, ProfileSkillModel};

use super::error::{like_pattern, map_db_error, map_foreign_key_violation, map_unique_violation};

/// Columns of `ProfileModel`; queries alias `user_profiles` as `p`
const PROFILE_COLUMNS: &str = r"
    p.id, p.user_id, p.name, p.url_slug, p.country, p.state, p.city, p.biography,
    p.image, p.background_image, p.availability_id, a.name AS availability_name,
    p.is_profile_verified, p.has_logged_in, p.created_at, p.updated_at
";

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load skill rows for a batch of profiles
    async fn load_skills(&self, profile_ids: &[i64]) -> Result<Vec<ProfileSkillModel>, DomainError> {
        if profile_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, ProfileSkillModel>(
            r"
            SELECT ps.profile_id, s.id AS skill_id, s.name AS skill_name
            FROM user_profile_skills ps
            JOIN skills s ON s.id = ps.skill_id
            WHERE ps.profile_id = ANY($1)
            ORDER BY s.name
            ",
        )
        .bind(profile_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn hydrate(&self, model: Option<ProfileModel>) -> RepoResult<Option<UserProfile>> {
        match model {
            Some(model) => {
                let skills = self
                    .load_skills(&[model.id])
                    .await?
                    .into_iter()
                    .map(Skill::from)
                    .collect();
                Ok(Some(profile_with_skills(model, skills)))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<UserProfile>> {
        let model = sqlx::query_as::<_, ProfileModel>(&format!(
            r"
            SELECT {PROFILE_COLUMNS}
            FROM user_profiles p
            LEFT JOIN availabilities a ON a.id = p.availability_id
            WHERE p.user_id = $1
            "
        ))
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.hydrate(model).await
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, url_slug: &str) -> RepoResult<Option<UserProfile>> {
        let model = sqlx::query_as::<_, ProfileModel>(&format!(
            r"
            SELECT {PROFILE_COLUMNS}
            FROM user_profiles p
            LEFT JOIN availabilities a ON a.id = p.availability_id
            WHERE p.url_slug = $1
            "
        ))
        .bind(url_slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.hydrate(model).await
    }

    #[instrument(skip(self))]
    async fn create(&self, profile: &NewUserProfile) -> RepoResult<UserProfile> {
        let model = sqlx::query_as::<_, ProfileModel>(
            r"
            INSERT INTO user_profiles (user_id, name, url_slug, country, city)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, url_slug, country, state, city, biography,
                      image, background_image, availability_id,
                      NULL::TEXT AS availability_name,
                      is_profile_verified, has_logged_in, created_at, updated_at
            ",
        )
        .bind(profile.user_id.into_inner())
        .bind(&profile.name)
        .bind(&profile.url_slug)
        .bind(&profile.country)
        .bind(&profile.city)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError(format!("profile slug {} is taken", profile.url_slug))
            })
        })?;

        Ok(profile_with_skills(model, Vec::new()))
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn update(&self, profile: &UserProfile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE user_profiles
            SET name = $2, url_slug = $3, country = $4, state = $5, city = $6,
                biography = $7, image = $8, background_image = $9, availability_id = $10,
                is_profile_verified = $11, has_logged_in = $12, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(profile.id.into_inner())
        .bind(&profile.name)
        .bind(&profile.url_slug)
        .bind(&profile.country)
        .bind(&profile.state)
        .bind(&profile.city)
        .bind(&profile.biography)
        .bind(&profile.image)
        .bind(&profile.background_image)
        .bind(profile.availability.as_ref().map(|a| a.id.into_inner()))
        .bind(profile.is_profile_verified)
        .bind(profile.has_logged_in)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError(format!("profile slug {} is taken", profile.url_slug))
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProfileNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self, profile), fields(profile_id = %profile.id))]
    async fn add_skills(&self, profile: &UserProfile, skill_ids: &[SkillId]) -> RepoResult<()> {
        if skill_ids.is_empty() {
            return Ok(());
        }

        let ids: Vec<i64> = skill_ids.iter().map(|id| id.into_inner()).collect();
        sqlx::query(
            r"
            INSERT INTO user_profile_skills (profile_id, skill_id)
            SELECT $1, UNNEST($2::BIGINT[])
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(profile.id.into_inner())
        .bind(&ids)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::SkillNotFound(skill_ids[0])))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_verified(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Page<UserProfile>> {
        let pattern = search.map(like_pattern);

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM user_profiles p
            WHERE p.is_profile_verified AND ($1::TEXT IS NULL OR p.name ILIKE $1)
            ",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let models = sqlx::query_as::<_, ProfileModel>(&format!(
            r"
            SELECT {PROFILE_COLUMNS}
            FROM user_profiles p
            LEFT JOIN availabilities a ON a.id = p.availability_id
            WHERE p.is_profile_verified AND ($1::TEXT IS NULL OR p.name ILIKE $1)
            ORDER BY p.id
            LIMIT $2 OFFSET $3
            "
        ))
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let skills = self.load_skills(&ids).await?;

        Ok(Page::new(profiles_with_skills(models, skills), total))
    }
}
