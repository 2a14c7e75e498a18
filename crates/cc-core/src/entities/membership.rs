//! Project and organization memberships shown on a member's page

use crate::value_objects::{MembershipId, OrganizationId, ProjectId, UserId};

/// Minimal project data embedded in a membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStub {
    pub id: ProjectId,
    pub name: String,
    pub url_slug: String,
    pub image: Option<String>,
    /// Slug of the organization the project belongs to
    pub parent_organization_slug: Option<String>,
}

/// Minimal organization data embedded in a membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationStub {
    pub id: OrganizationId,
    pub name: String,
    pub url_slug: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMembership {
    pub id: MembershipId,
    pub user_id: UserId,
    pub project: ProjectStub,
    pub role: String,
    pub role_in_project: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationMembership {
    pub id: MembershipId,
    pub user_id: UserId,
    pub organization: OrganizationStub,
    pub role: String,
}
