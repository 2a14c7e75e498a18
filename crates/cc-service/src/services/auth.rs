//! Authentication service
//!
//! Handles signup, login, and token refresh.

use cc_common::AppError;
use cc_core::entities::{NewUser, NewUserProfile};
use cc_core::DomainError;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    AuthResponse, LoginRequest, PersonalProfileResponse, RefreshTokenRequest, SignupRequest,
    SignupResponse, TokenResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::verification::VerificationService;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account and its profile, then email a verification link.
    ///
    /// A failed email is logged; the account is still created.
    #[instrument(skip(self, request))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<SignupResponse> {
        let fields = request.require_fields()?;
        fields.validate().map_err(|_| DomainError::InvalidEmail)?;

        if self.ctx.user_repo().username_exists(&fields.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = self.ctx.password_service().hash(&fields.password)?;

        let user = self
            .ctx
            .user_repo()
            .create(
                &NewUser::from_email(fields.email, fields.first_name, fields.last_name),
                &password_hash,
            )
            .await?;

        let profile = self
            .ctx
            .profile_repo()
            .create(&NewUserProfile::for_user(
                user.id,
                &user.first_name,
                &user.last_name,
                fields.country,
                fields.city,
            ))
            .await?;

        info!(user_id = %user.id, url_slug = %profile.url_slug, "User signed up");

        VerificationService::new(self.ctx)
            .send_verification_email(&user)
            .await;

        Ok(SignupResponse::for_email(&user.email))
    }

    /// Log in with username and password
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let (username, password) = request.credentials()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown username");
                DomainError::UnknownUsername
            })?;

        if !user.is_active {
            warn!(user_id = %user.id, "Login failed: inactive account");
            return Err(DomainError::InvalidPassword.into());
        }

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or(DomainError::InvalidPassword)?;

        if let Err(e) = self
            .ctx
            .password_service()
            .verify_or_error(password, &password_hash)
        {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(e.into());
        }

        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_user(user.id)
            .await?
            .ok_or(DomainError::ProfileNotFound)?;

        if profile.record_login() {
            self.ctx.profile_repo().update(&profile).await?;
        }

        let tokens = self.ctx.jwt_service().generate_token_pair(user.id)?;

        info!(user_id = %user.id, has_logged_in = profile.has_logged_in, "User logged in");

        Ok(AuthResponse::new(
            tokens,
            PersonalProfileResponse::new(&user, &profile),
        ))
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<TokenResponse> {
        let token = request.refresh_token.ok_or(AppError::InvalidToken)?;
        let claims = self.ctx.jwt_service().validate_refresh_token(&token)?;
        let user_id = claims.user_id()?;

        // Tokens outlive deleted accounts
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or(AppError::InvalidToken)?;

        let tokens = self.ctx.jwt_service().generate_token_pair(user.id)?;
        Ok(tokens.into())
    }
}
