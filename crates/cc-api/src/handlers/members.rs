//! Member handlers
//!
//! Public listing of verified members and their project and organization
//! memberships.

use axum::{
    extract::{Path, State},
    Json,
};
use cc_service::dto::{
    MemberProfileResponse, OrganizationMembershipResponse, PaginatedResponse,
    ProfileStubResponse, ProjectMembershipResponse,
};
use cc_service::MemberService;

use crate::extractors::{OptionalAuthUser, Pagination};
use crate::response::ApiResult;
use crate::state::AppState;

/// List verified members
///
/// GET /members?search=&page=&page_size=
pub async fn list_members(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<ProfileStubResponse>>> {
    let service = MemberService::new(state.service_context());
    let members = service.list(pagination.search(), pagination.page).await?;
    Ok(Json(members))
}

/// Get a member by profile slug
///
/// GET /members/{url_slug}
pub async fn get_member(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(url_slug): Path<String>,
) -> ApiResult<Json<MemberProfileResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.get(&url_slug, viewer.is_authenticated()).await?;
    Ok(Json(member))
}

/// GET /members/{url_slug}/projects
pub async fn get_member_projects(
    State(state): State<AppState>,
    Path(url_slug): Path<String>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<ProjectMembershipResponse>>> {
    let service = MemberService::new(state.service_context());
    let projects = service
        .projects(&url_slug, pagination.search(), pagination.page)
        .await?;
    Ok(Json(projects))
}

/// GET /members/{url_slug}/organizations
pub async fn get_member_organizations(
    State(state): State<AppState>,
    Path(url_slug): Path<String>,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<OrganizationMembershipResponse>>> {
    let service = MemberService::new(state.service_context());
    let organizations = service
        .organizations(&url_slug, pagination.search(), pagination.page)
        .await?;
    Ok(Json(organizations))
}
