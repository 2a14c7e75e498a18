//! Idea handlers
//!
//! Joining and commenting; both fan out notifications before responding.

use axum::{
    extract::{Path, State},
    Json,
};
use cc_service::dto::{CommentResponse, CreateCommentRequest, SupporterResponse};
use cc_service::IdeaService;

use crate::extractors::{AuthUser, IdeaIdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Join an idea as a supporter
///
/// POST /ideas/{idea_id}/join
pub async fn join_idea(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdeaIdPath>,
) -> ApiResult<Created<Json<SupporterResponse>>> {
    let idea_id = path.idea_id()?;

    let service = IdeaService::new(state.service_context());
    let supporter = service.join(auth.user_id, idea_id).await?;
    Ok(Created(Json(supporter)))
}

/// Comment on an idea or reply to a comment
///
/// POST /ideas/{idea_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdeaIdPath>,
    JsonBody(request): JsonBody<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let idea_id = path.idea_id()?;

    let service = IdeaService::new(state.service_context());
    let comment = service.comment(auth.user_id, idea_id, request).await?;
    Ok(Created(Json(comment)))
}
