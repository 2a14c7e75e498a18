//! Profile service
//!
//! The signed-in user's own profile: read and partial edit.

use cc_core::entities::{Skill, User, UserProfile};
use cc_core::{DomainError, UserId};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{PersonalProfileResponse, UpdateProfileRequest};
use crate::media::decode_data_url;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the caller's own profile
    #[instrument(skip(self))]
    pub async fn personal_profile(&self, user_id: UserId) -> ServiceResult<PersonalProfileResponse> {
        let user = self.user(user_id).await?;
        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or(DomainError::ProfileNotFound)?;

        Ok(PersonalProfileResponse::new(&user, &profile))
    }

    /// Apply the fields present in `request` to the caller's profile.
    ///
    /// References are resolved before anything is written, so an unknown
    /// skill or availability leaves the profile untouched.
    #[instrument(skip(self, request))]
    pub async fn edit(
        &self,
        user_id: UserId,
        request: UpdateProfileRequest,
    ) -> ServiceResult<PersonalProfileResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let mut user = self.user(user_id).await?;
        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let availability = match request.availability {
            Some(id) => Some(
                self.ctx
                    .availability_repo()
                    .find_by_id(id)
                    .await?
                    .ok_or(DomainError::AvailabilityNotFound(id))?,
            ),
            None => None,
        };
        let skills = self.resolve_skills(request.skills.as_deref().unwrap_or_default()).await?;

        if let Some(data_url) = request.image.as_deref() {
            profile.image = Some(self.store_image(data_url).await?);
        }
        if let Some(data_url) = request.background_image.as_deref() {
            profile.background_image = Some(self.store_image(data_url).await?);
        }

        if request.renames() {
            if let Some(first_name) = request.first_name.clone() {
                user.first_name = first_name;
            }
            if let Some(last_name) = request.last_name.clone() {
                user.last_name = last_name;
            }
            self.ctx
                .user_repo()
                .update_names(user.id, &user.first_name, &user.last_name)
                .await?;
        }
        profile.rename(&user.first_name, &user.last_name);

        if let Some(country) = request.country {
            profile.country = country;
        }
        if let Some(state) = request.state {
            profile.state = state;
        }
        if let Some(city) = request.city {
            profile.city = city;
        }
        if let Some(biography) = request.biography {
            profile.biography = biography;
        }
        if availability.is_some() {
            profile.availability = availability;
        }

        self.ctx.profile_repo().update(&profile).await?;
        self.add_skills(&mut profile, skills).await?;

        info!(user_id = %user_id, url_slug = %profile.url_slug, "Profile updated");

        Ok(PersonalProfileResponse::new(&user, &profile))
    }

    /// Decode a data URL and persist it, returning the served path
    #[instrument(skip(self, data_url))]
    pub async fn store_image(&self, data_url: &str) -> ServiceResult<String> {
        let image = decode_data_url(data_url)?;
        let path = self
            .ctx
            .image_store()
            .store(&image.extension, &image.bytes)
            .await?;
        debug!(path = %path, "Profile image stored");
        Ok(path)
    }

    async fn user(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    async fn resolve_skills(&self, ids: &[cc_core::SkillId]) -> ServiceResult<Vec<Skill>> {
        let mut skills = Vec::with_capacity(ids.len());
        for &id in ids {
            let skill = self
                .ctx
                .skill_repo()
                .find_by_id(id)
                .await?
                .ok_or(DomainError::SkillNotFound(id))?;
            skills.push(skill);
        }
        Ok(skills)
    }

    async fn add_skills(&self, profile: &mut UserProfile, skills: Vec<Skill>) -> ServiceResult<()> {
        let new_skills: Vec<Skill> = skills
            .into_iter()
            .filter(|skill| !profile.has_skill(skill))
            .collect();
        if new_skills.is_empty() {
            return Ok(());
        }

        let ids: Vec<_> = new_skills.iter().map(|skill| skill.id).collect();
        self.ctx.profile_repo().add_skills(profile, &ids).await?;
        for skill in new_skills {
            profile.add_skill(skill);
        }
        Ok(())
    }
}
