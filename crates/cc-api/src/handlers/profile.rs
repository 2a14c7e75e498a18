//! Personal profile handlers

use axum::{extract::State, Json};
use cc_service::dto::{PersonalProfileResponse, UpdateProfileRequest};
use cc_service::ProfileService;

use crate::extractors::{AuthUser, JsonBody};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the caller's profile
///
/// GET /profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<PersonalProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.personal_profile(auth.user_id).await?;
    Ok(Json(response))
}

/// Partially update the caller's profile
///
/// POST /profile
pub async fn edit_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(request): JsonBody<UpdateProfileRequest>,
) -> ApiResult<Json<PersonalProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.edit(auth.user_id, request).await?;
    Ok(Json(response))
}
