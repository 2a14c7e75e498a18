//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, ideas, members, notifications, profile};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately so they bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(member_routes())
        .merge(idea_routes())
        .merge(notification_routes())
}

/// Signup, login, refresh, and email verification
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/token/refresh", post(auth::refresh_token))
        .route("/verify-email", post(auth::verify_email))
}

fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(profile::get_profile).post(profile::edit_profile),
    )
}

fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members))
        .route("/members/:url_slug", get(members::get_member))
        .route("/members/:url_slug/projects", get(members::get_member_projects))
        .route(
            "/members/:url_slug/organizations",
            get(members::get_member_organizations),
        )
}

fn idea_routes() -> Router<AppState> {
    Router::new()
        .route("/ideas/:idea_id/join", post(ideas::join_idea))
        .route("/ideas/:idea_id/comments", post(ideas::create_comment))
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::list_notifications))
        .route(
            "/notifications/:notification_id/read",
            post(notifications::mark_read),
        )
}
