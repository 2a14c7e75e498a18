//! UserProfile entity <-> model mapper

use std::collections::HashMap;

use cc_core::entities::{Availability, Skill, UserProfile};
use cc_core::value_objects::{AvailabilityId, ProfileId, UserId};

use crate::models::{ProfileModel, ProfileSkillModel};

/// Build a profile from its row and its skills (loaded separately)
pub fn profile_with_skills(model: ProfileModel, skills: Vec<Skill>) -> UserProfile {
    let availability = match (model.availability_id, model.availability_name) {
        (Some(id), Some(name)) => Some(Availability {
            id: AvailabilityId::new(id),
            name,
        }),
        _ => None,
    };

    UserProfile {
        id: ProfileId::new(model.id),
        user_id: UserId::new(model.user_id),
        name: model.name,
        url_slug: model.url_slug,
        country: model.country,
        state: model.state,
        city: model.city,
        biography: model.biography,
        image: model.image,
        background_image: model.background_image,
        availability,
        skills,
        is_profile_verified: model.is_profile_verified,
        has_logged_in: model.has_logged_in,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// Attach batch-loaded skill rows to their profiles, keeping profile order
pub fn profiles_with_skills(
    models: Vec<ProfileModel>,
    skill_rows: Vec<ProfileSkillModel>,
) -> Vec<UserProfile> {
    let mut by_profile: HashMap<i64, Vec<Skill>> = HashMap::new();
    for row in skill_rows {
        by_profile.entry(row.profile_id).or_default().push(Skill::from(row));
    }

    models
        .into_iter()
        .map(|model| {
            let skills = by_profile.remove(&model.id).unwrap_or_default();
            profile_with_skills(model, skills)
        })
        .collect()
}
