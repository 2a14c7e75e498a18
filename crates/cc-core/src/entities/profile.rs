//! User profile entity - the public face of a user account

use chrono::{DateTime, Utc};

use crate::entities::{Availability, Skill};
use crate::value_objects::{derive_url_slug, display_name, ProfileId, UserId};

/// Upper bound of the login counter. The frontend only needs to tell
/// "never logged in", "first login" and "returning" apart.
pub const MAX_LOGIN_COUNT: i16 = 2;

/// Profile attached 1:1 to a [`User`](crate::entities::User)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub name: String,
    pub url_slug: String,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub biography: Option<String>,
    pub image: Option<String>,
    pub background_image: Option<String>,
    pub availability: Option<Availability>,
    pub skills: Vec<Skill>,
    pub is_profile_verified: bool,
    pub has_logged_in: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Count a successful login. The counter saturates at [`MAX_LOGIN_COUNT`].
    ///
    /// Returns `true` if the counter changed and the profile must be saved.
    pub fn record_login(&mut self) -> bool {
        if self.has_logged_in < MAX_LOGIN_COUNT {
            self.has_logged_in += 1;
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }

    /// Re-derive display name and slug from the owner's names
    pub fn rename(&mut self, first_name: &str, last_name: &str) {
        self.name = display_name(first_name, last_name);
        self.url_slug = derive_url_slug(first_name, last_name, self.user_id);
        self.updated_at = Utc::now();
    }

    /// Mark the profile verified.
    ///
    /// Returns `false` (and changes nothing) if it already was.
    pub fn mark_verified(&mut self) -> bool {
        if self.is_profile_verified {
            return false;
        }
        self.is_profile_verified = true;
        self.updated_at = Utc::now();
        true
    }

    /// Check if the profile lists a skill
    #[inline]
    pub fn has_skill(&self, skill: &Skill) -> bool {
        self.skills.iter().any(|s| s.id == skill.id)
    }

    /// Add a skill; adding one the profile already has is a no-op
    pub fn add_skill(&mut self, skill: Skill) {
        if !self.has_skill(&skill) {
            self.skills.push(skill);
            self.updated_at = Utc::now();
        }
    }

    /// Location as "city, state, country", skipping empty parts
    pub fn location(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.state, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Values needed to create a profile at signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserProfile {
    pub user_id: UserId,
    pub name: String,
    pub url_slug: String,
    pub country: String,
    pub city: String,
}

impl NewUserProfile {
    /// Build the signup profile, deriving display name and slug
    pub fn for_user(
        user_id: UserId,
        first_name: &str,
        last_name: &str,
        country: String,
        city: String,
    ) -> Self {
        Self {
            user_id,
            name: display_name(first_name, last_name),
            url_slug: derive_url_slug(first_name, last_name, user_id),
            country,
            city,
        }
    }
}

#[cfg(test)]
fn sample_profile(user_id: UserId) -> UserProfile {
    let now = Utc::now();
    UserProfile {
        id: ProfileId::new(user_id.into_inner() + 100),
        user_id,
        name: "Ada Lovelace".to_string(),
        url_slug: format!("adalovelace{user_id}"),
        country: Some("United Kingdom".to_string()),
        state: None,
        city: Some("London".to_string()),
        biography: None,
        image: None,
        background_image: None,
        availability: None,
        skills: Vec::new(),
        is_profile_verified: false,
        has_logged_in: 0,
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::SkillId;

    #[test]
    fn test_login_counter_is_capped() {
        let mut profile = sample_profile(UserId::new(1));

        assert!(profile.record_login());
        assert!(profile.record_login());
        assert_eq!(profile.has_logged_in, MAX_LOGIN_COUNT);

        for _ in 0..10 {
            assert!(!profile.record_login());
        }
        assert_eq!(profile.has_logged_in, MAX_LOGIN_COUNT);
    }

    #[test]
    fn test_rename_rederives_slug() {
        let mut profile = sample_profile(UserId::new(9));
        profile.rename("Grace", "Hopper");
        assert_eq!(profile.name, "Grace Hopper");
        assert_eq!(profile.url_slug, "gracehopper9");
    }

    #[test]
    fn test_mark_verified_is_idempotent() {
        let mut profile = sample_profile(UserId::new(1));
        assert!(profile.mark_verified());
        assert!(profile.is_profile_verified);
        assert!(!profile.mark_verified());
        assert!(profile.is_profile_verified);
    }

    #[test]
    fn test_add_skill_deduplicates() {
        let mut profile = sample_profile(UserId::new(1));
        let skill = Skill {
            id: SkillId::new(3),
            name: "Permaculture".to_string(),
        };

        profile.add_skill(skill.clone());
        profile.add_skill(skill.clone());
        assert_eq!(profile.skills.len(), 1);
        assert!(profile.has_skill(&skill));
    }

    #[test]
    fn test_location() {
        let mut profile = sample_profile(UserId::new(1));
        assert_eq!(profile.location().as_deref(), Some("London, United Kingdom"));

        profile.city = None;
        profile.country = Some(String::new());
        assert_eq!(profile.location(), None);
    }

    #[test]
    fn test_new_profile_for_user() {
        let profile = NewUserProfile::for_user(
            UserId::new(5),
            "Wangari",
            "Maathai",
            "Kenya".to_string(),
            "Nairobi".to_string(),
        );
        assert_eq!(profile.name, "Wangari Maathai");
        assert_eq!(profile.url_slug, "wangarimaathai5");
    }
}
