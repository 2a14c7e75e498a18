//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use cc_core::entities::{
    Availability, IdeaComment, IdeaSupporter, Notification, OrganizationMembership,
    ProjectMembership, Skill, User, UserNotification, UserProfile,
};

use super::responses::{
    AvailabilityResponse, CommentResponse, MemberProfileResponse, NotificationResponse,
    OrganizationMembershipResponse, OrganizationStubResponse, PersonalProfileResponse,
    ProfileResponse, ProfileStubResponse, ProjectMembershipResponse, ProjectStubResponse,
    SkillResponse, SupporterResponse, UserNotificationResponse,
};

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<&Skill> for SkillResponse {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name.clone(),
        }
    }
}

impl From<&Availability> for AvailabilityResponse {
    fn from(availability: &Availability) -> Self {
        Self {
            id: availability.id,
            name: availability.name.clone(),
        }
    }
}

impl From<&UserProfile> for ProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            name: profile.name.clone(),
            url_slug: profile.url_slug.clone(),
            image: profile.image.clone(),
            background_image: profile.background_image.clone(),
            country: profile.country.clone(),
            state: profile.state.clone(),
            city: profile.city.clone(),
            location: profile.location(),
            biography: profile.biography.clone(),
            availability: profile.availability.as_ref().map(AvailabilityResponse::from),
            skills: profile.skills.iter().map(SkillResponse::from).collect(),
            is_profile_verified: profile.is_profile_verified,
            created_at: profile.created_at,
        }
    }
}

impl From<&UserProfile> for ProfileStubResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name.clone(),
            url_slug: profile.url_slug.clone(),
            image: profile.image.clone(),
            city: profile.city.clone(),
            state: profile.state.clone(),
            country: profile.country.clone(),
        }
    }
}

impl From<UserProfile> for ProfileStubResponse {
    fn from(profile: UserProfile) -> Self {
        Self::from(&profile)
    }
}

impl PersonalProfileResponse {
    pub fn new(user: &User, profile: &UserProfile) -> Self {
        Self {
            profile: ProfileResponse::from(profile),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            has_logged_in: profile.has_logged_in,
        }
    }
}

impl MemberProfileResponse {
    /// Full shape for signed-in viewers, stub otherwise
    pub fn for_viewer(profile: &UserProfile, authenticated: bool) -> Self {
        if authenticated {
            Self::Full(ProfileResponse::from(profile))
        } else {
            Self::Stub(ProfileStubResponse::from(profile))
        }
    }
}

// ============================================================================
// Membership Mappers
// ============================================================================

impl From<ProjectMembership> for ProjectMembershipResponse {
    fn from(membership: ProjectMembership) -> Self {
        Self {
            id: membership.id,
            project: ProjectStubResponse {
                id: membership.project.id,
                name: membership.project.name,
                url_slug: membership.project.url_slug,
                image: membership.project.image,
            },
            role: membership.role,
            role_in_project: membership.role_in_project,
        }
    }
}

impl From<OrganizationMembership> for OrganizationMembershipResponse {
    fn from(membership: OrganizationMembership) -> Self {
        Self {
            id: membership.id,
            organization: OrganizationStubResponse {
                id: membership.organization.id,
                name: membership.organization.name,
                url_slug: membership.organization.url_slug,
                image: membership.organization.image,
            },
            role: membership.role,
        }
    }
}

// ============================================================================
// Idea Mappers
// ============================================================================

impl From<IdeaSupporter> for SupporterResponse {
    fn from(supporter: IdeaSupporter) -> Self {
        Self {
            id: supporter.id,
            idea_id: supporter.idea_id,
            user_id: supporter.user_id,
            created_at: supporter.created_at,
        }
    }
}

impl From<IdeaComment> for CommentResponse {
    fn from(comment: IdeaComment) -> Self {
        Self {
            id: comment.id,
            idea_id: comment.idea_id,
            author_id: comment.author_id,
            content: comment.content,
            parent_comment_id: comment.parent_comment_id,
            created_at: comment.created_at,
        }
    }
}

// ============================================================================
// Notification Mappers
// ============================================================================

impl From<(UserNotification, Notification)> for NotificationResponse {
    fn from((delivery, notification): (UserNotification, Notification)) -> Self {
        Self {
            id: delivery.id,
            notification_id: notification.id,
            notification_type: notification.notification_type(),
            idea_comment_id: notification.subject.comment_id(),
            idea_supporter_id: notification.subject.supporter_id(),
            read: delivery.is_read(),
            read_at: delivery.read_at,
            created_at: notification.created_at,
        }
    }
}

impl From<UserNotification> for UserNotificationResponse {
    fn from(delivery: UserNotification) -> Self {
        Self {
            id: delivery.id,
            notification_id: delivery.notification_id,
            read_at: delivery.read_at,
        }
    }
}
