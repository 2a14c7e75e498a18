//! Authentication handlers
//!
//! Endpoints for signup, login, token refresh, and email verification.

use axum::{extract::State, Json};
use cc_service::dto::{
    AuthResponse, LoginRequest, RefreshTokenRequest, SignupRequest, SignupResponse,
    TokenResponse, VerificationResponse, VerifyEmailRequest,
};
use cc_service::{AuthService, VerificationService};

use crate::extractors::JsonBody;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create an account and send the verification email
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> ApiResult<Created<Json<SignupResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new pair
///
/// POST /token/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RefreshTokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_tokens(request).await?;
    Ok(Json(response))
}

/// Confirm an email address from the activation link
///
/// POST /verify-email
pub async fn verify_email(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<VerifyEmailRequest>,
) -> ApiResult<Json<VerificationResponse>> {
    let service = VerificationService::new(state.service_context());
    let response = service.verify(request).await?;
    Ok(Json(response))
}
