//! Notification handlers

use axum::{
    extract::{Path, State},
    Json,
};
use cc_service::dto::{NotificationResponse, PaginatedResponse, UserNotificationResponse};
use cc_service::NotificationService;

use crate::extractors::{AuthUser, NotificationIdPath, Pagination};
use crate::response::ApiResult;
use crate::state::AppState;

/// The caller's notifications, newest first
///
/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let notifications = service.list(auth.user_id, pagination.page).await?;
    Ok(Json(notifications))
}

/// Mark one of the caller's notifications read
///
/// POST /notifications/{notification_id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<NotificationIdPath>,
) -> ApiResult<Json<UserNotificationResponse>> {
    let notification_id = path.notification_id()?;

    let service = NotificationService::new(state.service_context());
    let entry = service.mark_read(auth.user_id, notification_id).await?;
    Ok(Json(entry))
}
