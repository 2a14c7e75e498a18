//! Membership database models

use sqlx::FromRow;

/// project_members joined with project, role and parent organization
#[derive(Debug, Clone, FromRow)]
pub struct ProjectMembershipModel {
    pub id: i64,
    pub user_id: i64,
    pub project_id: i64,
    pub project_name: String,
    pub project_url_slug: String,
    pub project_image: Option<String>,
    pub parent_organization_slug: Option<String>,
    pub role_name: String,
    pub role_in_project: Option<String>,
}

/// organization_members joined with organization and role
#[derive(Debug, Clone, FromRow)]
pub struct OrganizationMembershipModel {
    pub id: i64,
    pub user_id: i64,
    pub organization_id: i64,
    pub organization_name: String,
    pub organization_url_slug: String,
    pub organization_image: Option<String>,
    pub role_name: String,
}
