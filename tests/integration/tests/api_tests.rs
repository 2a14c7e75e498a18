//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Mail is only logged unless Mailjet keys are set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Utc};
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (signup, auth) = server.signup_and_login().await.unwrap();

    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert_eq!(auth.user.email, signup.email);
    assert_eq!(auth.user.name, format!("Test {}", signup.last_name));
    assert_eq!(
        auth.user.url_slug,
        format!("test{}{}", signup.last_name.to_lowercase(), auth.user.user_id)
    );
    assert!(!auth.user.is_profile_verified);
    assert_eq!(auth.user.has_logged_in, 1);
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/api/v1/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/v1/signup", &request).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.message, "Email already in use.");
}

#[tokio::test]
async fn test_login_counter_stops_at_two() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (signup, _) = server.signup_and_login().await.unwrap();

    for expected in [2, 2] {
        let response = server
            .post("/api/v1/login", &LoginRequest::for_signup(&signup))
            .await
            .unwrap();
        let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(auth.user.has_logged_in, expected);
    }
}

#[tokio::test]
async fn test_login_errors() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/v1/login",
            &json!({ "username": "nobody@example.com", "password": "x" }),
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.message, "Username does not exist. Have you signed up yet?");

    let (signup, _) = server.signup_and_login().await.unwrap();
    let response = server
        .post(
            "/api/v1/login",
            &json!({ "username": signup.email, "password": "wrong" }),
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.message, "Invalid password.");
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = server.signup_and_login().await.unwrap();

    let response = server
        .post(
            "/api/v1/token/refresh",
            &json!({ "refresh_token": auth.refresh_token }),
        )
        .await
        .unwrap();
    let tokens: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!tokens.access_token.is_empty());
    assert!(!tokens.refresh_token.is_empty());

    let response = server
        .post(
            "/api/v1/token/refresh",
            &json!({ "refresh_token": auth.access_token }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Verification Tests
// ============================================================================

#[tokio::test]
async fn test_verify_email_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = server.signup_and_login().await.unwrap();
    let request = server
        .verification_request(auth.user.user_id, Utc::now() + Duration::hours(1))
        .unwrap();

    let response = server.post("/api/v1/verify-email", &request).await.unwrap();
    let first: VerificationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!first.already_verified);
    assert_eq!(first.message, "Your profile is successfully verified");

    let response = server.post("/api/v1/verify-email", &request).await.unwrap();
    let second: VerificationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(second.already_verified);
}

#[tokio::test]
async fn test_verify_email_rejects_expired_and_tampered_links() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = server.signup_and_login().await.unwrap();

    let expired = server
        .verification_request(auth.user.user_id, Utc::now() - Duration::hours(1))
        .unwrap();
    let response = server.post("/api/v1/verify-email", &expired).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.message, "Verification link expired.");

    let mut tampered = server
        .verification_request(auth.user.user_id, Utc::now() + Duration::hours(1))
        .unwrap();
    tampered.expires = (Utc::now() + Duration::hours(2)).to_rfc3339();
    let response = server.post("/api/v1/verify-email", &tampered).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.message, "Permission Denied");

    let response = server
        .post("/api/v1/verify-email", &json!({ "token": "x" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_profile_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/profile").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_profile_partial_edit() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = server.signup_and_login().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/profile",
            &auth.access_token,
            &json!({ "biography": "Rewilding enthusiast", "last_name": "Renamed" }),
        )
        .await
        .unwrap();
    let profile: PersonalProfile = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.biography.as_deref(), Some("Rewilding enthusiast"));
    assert_eq!(profile.city.as_deref(), Some("Berlin"));
    assert_eq!(profile.name, "Test Renamed");
    assert_eq!(profile.url_slug, format!("testrenamed{}", profile.user_id));

    let response = server
        .get_auth("/api/v1/profile", &auth.access_token)
        .await
        .unwrap();
    let fetched: PersonalProfile = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.url_slug, profile.url_slug);

    let response = server
        .post_auth(
            "/api/v1/profile",
            &auth.access_token,
            &json!({ "skills": [i32::MAX] }),
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.message, "Skill not found.");
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_members_list_only_verified() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (verified, auth) = server.signup_and_login().await.unwrap();
    let (unverified, _) = server.signup_and_login().await.unwrap();

    let request = server
        .verification_request(auth.user.user_id, Utc::now() + Duration::hours(1))
        .unwrap();
    let response = server.post("/api/v1/verify-email", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/members?search={}", verified.last_name))
        .await
        .unwrap();
    let page: Paginated<ProfileStub> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.data[0].url_slug, auth.user.url_slug);

    let response = server
        .get(&format!("/api/v1/members?search={}", unverified.last_name))
        .await
        .unwrap();
    let page: Paginated<ProfileStub> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.pagination.total, 0);
    assert!(!page.pagination.has_more);
}

#[tokio::test]
async fn test_member_detail_shape_depends_on_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = server.signup_and_login().await.unwrap();
    let path = format!("/api/v1/members/{}", auth.user.url_slug);

    let response = server.get_auth(&path, &auth.access_token).await.unwrap();
    let full: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(full.get("biography").is_some());

    let response = server.get(&path).await.unwrap();
    let stub: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(stub.get("biography").is_none());
    assert_eq!(stub["url_slug"], auth.user.url_slug.as_str());

    let response = server.get("/api/v1/members/no-such-member").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.message, "Profile not found.");

    let response = server
        .get(&format!("{path}/projects"))
        .await
        .unwrap();
    let projects: Paginated<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(projects.pagination.total, 0);
}

// ============================================================================
// Idea and Notification Tests
// ============================================================================

#[tokio::test]
async fn test_join_idea_notifies_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = server.signup_and_login().await.unwrap();
    let (_, joiner) = server.signup_and_login().await.unwrap();
    let idea_id = server.seed_idea(owner.user.user_id).await.unwrap();
    let path = format!("/api/v1/ideas/{idea_id}/join");

    let response = server
        .post_auth(&path, &joiner.access_token, &json!({}))
        .await
        .unwrap();
    let supporter: SupporterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(supporter.user_id, joiner.user.user_id);

    let response = server
        .post_auth(&path, &joiner.access_token, &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .get_auth("/api/v1/notifications", &owner.access_token)
        .await
        .unwrap();
    let inbox: Paginated<NotificationEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(inbox.pagination.total, 1);
    assert_eq!(inbox.data[0].notification_type, "PERSON_JOINED_IDEA");
    assert!(!inbox.data[0].read);

    let response = server
        .get_auth("/api/v1/notifications", &joiner.access_token)
        .await
        .unwrap();
    let inbox: Paginated<NotificationEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(inbox.pagination.total, 0);
}

#[tokio::test]
async fn test_comment_and_reply_notifications() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = server.signup_and_login().await.unwrap();
    let (_, commenter) = server.signup_and_login().await.unwrap();
    let idea_id = server.seed_idea(owner.user.user_id).await.unwrap();
    let path = format!("/api/v1/ideas/{idea_id}/comments");

    let response = server
        .post_auth(
            &path,
            &commenter.access_token,
            &CreateCommentRequest {
                content: "Count me in".to_string(),
                parent_comment_id: None,
            },
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.author_id, commenter.user.user_id);

    let response = server
        .post_auth(
            &path,
            &owner.access_token,
            &CreateCommentRequest {
                content: "Welcome!".to_string(),
                parent_comment_id: Some(comment.id),
            },
        )
        .await
        .unwrap();
    let reply: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply.parent_comment_id, Some(comment.id));

    let response = server
        .get_auth("/api/v1/notifications", &owner.access_token)
        .await
        .unwrap();
    let inbox: Paginated<NotificationEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(inbox.data.len(), 1);
    assert_eq!(inbox.data[0].notification_type, "IDEA_COMMENT");

    let response = server
        .get_auth("/api/v1/notifications", &commenter.access_token)
        .await
        .unwrap();
    let inbox: Paginated<NotificationEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(inbox.data.len(), 1);
    assert_eq!(inbox.data[0].notification_type, "REPLY_TO_IDEA_COMMENT");

    let read_path = format!("/api/v1/notifications/{}/read", inbox.data[0].id);
    let response = server
        .post_auth(&read_path, &owner.access_token, &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_auth(&read_path, &commenter.access_token, &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_comment_on_unknown_idea() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = server.signup_and_login().await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/ideas/{}/comments", i64::MAX),
            &auth.access_token,
            &json!({ "content": "hello" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
