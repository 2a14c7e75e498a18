//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and seeding rows the API has no endpoint for.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use cc_api::{create_app, create_app_state};
use cc_common::{AppConfig, JwtService};
use cc_core::UserId;
use cc_db::PgPool;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{unique_suffix, AuthResponse, LoginRequest, SignupRequest, VerifyEmailRequest};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub config: AppConfig,
    pub pool: PgPool,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config.clone()).await?;
        let pool = state.pool().clone();
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            config,
            pool,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Sign up a fresh member and log in as them
    pub async fn signup_and_login(&self) -> Result<(SignupRequest, AuthResponse)> {
        let signup = SignupRequest::unique();
        let response = self.post("/api/v1/signup", &signup).await?;
        assert_status(response, StatusCode::CREATED).await?;

        let response = self
            .post("/api/v1/login", &LoginRequest::for_signup(&signup))
            .await?;
        let auth = assert_json(response, StatusCode::OK).await?;
        Ok((signup, auth))
    }

    /// The values the activation link emailed to `user_id` would carry
    pub fn verification_request(&self, user_id: i64, expires: DateTime<Utc>) -> Result<VerifyEmailRequest> {
        let jwt = JwtService::new(
            &self.config.jwt.secret,
            self.config.jwt.access_token_expiry,
            self.config.jwt.refresh_token_expiry,
        );
        let token = jwt.sign_verification_link(UserId::new(user_id), expires)?;

        Ok(VerifyEmailRequest {
            id: user_id.to_string(),
            expires: expires.to_rfc3339().replace('+', "%2B"),
            token,
        })
    }

    /// Insert an idea owned by `owner_id`; ideas are created outside this API
    pub async fn seed_idea(&self, owner_id: i64) -> Result<i64> {
        let suffix = unique_suffix();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO ideas (name, url_slug, user_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(format!("Test idea {suffix}"))
        .bind(format!("test-idea-{suffix}-{}", Utc::now().timestamp_millis()))
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("REDIS_URL").is_err() {
        eprintln!("Skipping test: REDIS_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
