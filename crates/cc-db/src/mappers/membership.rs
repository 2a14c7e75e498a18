//! Membership mappers

use cc_core::entities::{OrganizationMembership, OrganizationStub, ProjectMembership, ProjectStub};
use cc_core::value_objects::{MembershipId, OrganizationId, ProjectId, UserId};

use crate::models::{OrganizationMembershipModel, ProjectMembershipModel};

impl From<ProjectMembershipModel> for ProjectMembership {
    fn from(model: ProjectMembershipModel) -> Self {
        ProjectMembership {
            id: MembershipId::new(model.id),
            user_id: UserId::new(model.user_id),
            project: ProjectStub {
                id: ProjectId::new(model.project_id),
                name: model.project_name,
                url_slug: model.project_url_slug,
                image: model.project_image,
                parent_organization_slug: model.parent_organization_slug,
            },
            role: model.role_name,
            role_in_project: model.role_in_project,
        }
    }
}

impl From<OrganizationMembershipModel> for OrganizationMembership {
    fn from(model: OrganizationMembershipModel) -> Self {
        OrganizationMembership {
            id: MembershipId::new(model.id),
            user_id: UserId::new(model.user_id),
            organization: OrganizationStub {
                id: OrganizationId::new(model.organization_id),
                name: model.organization_name,
                url_slug: model.organization_url_slug,
                image: model.organization_image,
            },
            role: model.role_name,
        }
    }
}
