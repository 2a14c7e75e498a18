//! Email verification service
//!
//! A verification link carries the user id, its expiry and a signature over
//! both. Following it marks the profile verified.

use cc_core::entities::User;
use cc_core::{DomainError, UserId};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use tracing::{error, info, instrument, warn};

use crate::dto::{VerificationResponse, VerifyEmailRequest};
use crate::email::verification_email;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Email verification service
pub struct VerificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VerificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build a signed activation link for the frontend
    pub fn verification_link(&self, user_id: UserId) -> ServiceResult<String> {
        let settings = self.ctx.settings();
        let expires = truncate_to_seconds(Utc::now() + settings.verification_link_ttl);
        let token = self
            .ctx
            .jwt_service()
            .sign_verification_link(user_id, expires)?;

        Ok(format!(
            "{}/activate?id={user_id}&expires={}&token={token}",
            settings.frontend_url,
            encode_expiry(expires),
        ))
    }

    /// Email a fresh verification link. Failures are logged, not returned.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn send_verification_email(&self, user: &User) {
        let url = match self.verification_link(user.id) {
            Ok(url) => url,
            Err(e) => {
                error!(error = %e, "Failed to sign verification link");
                return;
            }
        };

        let message = verification_email(user, &url, self.ctx.settings().templates.verification);
        if let Err(e) = self.ctx.mailer().send(&message).await {
            error!(error = %e, "Failed to send verification email");
        }
    }

    /// Check a verification link and mark the profile verified.
    ///
    /// Following a link a second time succeeds with `already_verified`.
    #[instrument(skip(self, request))]
    pub async fn verify(&self, request: VerifyEmailRequest) -> ServiceResult<VerificationResponse> {
        let (Some(raw_id), Some(raw_expires)) = (request.id.as_ref(), request.expires.as_deref())
        else {
            return Err(DomainError::MissingVerificationParameters.into());
        };

        let expires = parse_expiry(raw_expires).ok_or(DomainError::InvalidExpiry)?;

        let user_id = raw_id
            .parse()
            .map(UserId::new)
            .ok_or(DomainError::UnknownVerificationUser)?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UnknownVerificationUser)?;

        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_user(user.id)
            .await?
            .ok_or(DomainError::PermissionDenied)?;

        if link_expired(expires, Utc::now()) {
            warn!(user_id = %user.id, "Verification link expired");
            return Err(DomainError::VerificationLinkExpired.into());
        }

        let token = request
            .token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or(DomainError::PermissionDenied)?;
        if self
            .ctx
            .jwt_service()
            .verify_verification_link(token, user.id, expires)
            .is_err()
        {
            warn!(user_id = %user.id, "Verification link signature mismatch");
            return Err(DomainError::PermissionDenied.into());
        }

        if !profile.mark_verified() {
            return Ok(VerificationResponse::already_verified());
        }

        self.ctx.profile_repo().update(&profile).await?;
        info!(user_id = %user.id, "Email verified");

        Ok(VerificationResponse::verified())
    }
}

/// A link is dead from the instant of its expiry onwards
fn link_expired(expires: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    expires <= now
}

fn truncate_to_seconds(instant: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp(instant.timestamp(), 0).unwrap_or(instant)
}

/// RFC 3339 with the `+` of the offset escaped so it survives a query string
fn encode_expiry(expires: DateTime<Utc>) -> String {
    expires
        .to_rfc3339_opts(SecondsFormat::Secs, false)
        .replace('+', "%2B")
}

/// Parse the `expires` parameter of a link.
///
/// Mail clients tend to mangle the offset: the escaped `%2B` may survive
/// literally, or arrive decoded to a space.
fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    let normalized = raw
        .trim()
        .replace("%2B", "+")
        .replace("%2b", "+")
        .replace("%2D", "-")
        .replace("%2d", "-")
        .replace(' ', "+");

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(parsed.with_timezone(&Utc));
    }

    // Offset-less timestamps are UTC
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
