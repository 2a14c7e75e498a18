//! Member service
//!
//! Public listing of verified members and their memberships.

use cc_core::entities::UserProfile;
use cc_core::{DomainError, PageRequest};
use tracing::instrument;

use crate::dto::{
    MemberProfileResponse, OrganizationMembershipResponse, PaginatedResponse,
    ProfileStubResponse, ProjectMembershipResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List verified members, optionally filtered by name
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<ProfileStubResponse>> {
        let profiles = self
            .ctx
            .profile_repo()
            .list_verified(normalize_search(search), page)
            .await?;

        Ok(PaginatedResponse::from_page(profiles, page))
    }

    /// A member's profile: the full shape for signed-in viewers, the stub otherwise
    #[instrument(skip(self))]
    pub async fn get(&self, url_slug: &str, authenticated: bool) -> ServiceResult<MemberProfileResponse> {
        let profile = self.profile(url_slug).await?;
        Ok(MemberProfileResponse::for_viewer(&profile, authenticated))
    }

    /// Projects the member belongs to; `search` matches the parent organization slug
    #[instrument(skip(self))]
    pub async fn projects(
        &self,
        url_slug: &str,
        search: Option<&str>,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<ProjectMembershipResponse>> {
        let profile = self.profile(url_slug).await?;
        let memberships = self
            .ctx
            .membership_repo()
            .project_memberships(profile.user_id, normalize_search(search), page)
            .await?;

        Ok(PaginatedResponse::from_page(memberships, page))
    }

    /// Organizations the member belongs to; `search` matches the organization slug
    #[instrument(skip(self))]
    pub async fn organizations(
        &self,
        url_slug: &str,
        search: Option<&str>,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<OrganizationMembershipResponse>> {
        let profile = self.profile(url_slug).await?;
        let memberships = self
            .ctx
            .membership_repo()
            .organization_memberships(profile.user_id, normalize_search(search), page)
            .await?;

        Ok(PaginatedResponse::from_page(memberships, page))
    }

    async fn profile(&self, url_slug: &str) -> ServiceResult<UserProfile> {
        self.ctx
            .profile_repo()
            .find_by_slug(url_slug)
            .await?
            .ok_or_else(|| DomainError::ProfileNotFound.into())
    }
}

/// Blank searches match everything
fn normalize_search(search: Option<&str>) -> Option<&str> {
    search.map(str::trim).filter(|s| !s.is_empty())
}
