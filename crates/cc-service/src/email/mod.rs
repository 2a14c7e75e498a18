//! Outgoing email.
//!
//! Messages are rendered by Mailjet from stored templates; this side only
//! picks the template and fills in its variables.

mod templates;

pub use templates::{
    idea_comment_email, idea_join_email, linkify_mentions, verification_email, EmailLinks,
};

use std::sync::Arc;

use async_trait::async_trait;
use cc_common::MailConfig;
use cc_core::error::DomainError;
use cc_core::traits::{EmailMessage, Mailer, RepoResult};
use serde::Serialize;
use tracing::{info, instrument};

const MAILJET_SEND_URL: &str = "https://api.mailjet.com/v3.1/send";

/// Pick the mailer for this configuration: Mailjet when both API keys are
/// set, otherwise one that only logs.
pub fn create_mailer(config: &MailConfig) -> Arc<dyn Mailer> {
    match config.credentials() {
        Some((public_key, private_key)) => Arc::new(MailjetMailer::new(
            public_key,
            private_key,
            &config.sender_email,
            &config.sender_name,
        )),
        None => {
            info!("Mailjet keys not configured; emails will only be logged");
            Arc::new(LogMailer)
        }
    }
}

/// Mailjet Send API v3.1 client
#[derive(Clone)]
pub struct MailjetMailer {
    client: reqwest::Client,
    endpoint: String,
    public_key: String,
    private_key: String,
    sender_email: String,
    sender_name: String,
}

impl std::fmt::Debug for MailjetMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailjetMailer")
            .field("endpoint", &self.endpoint)
            .field("sender_email", &self.sender_email)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendRequest<'a> {
    messages: [MailjetMessage<'a>; 1],
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct MailjetMessage<'a> {
    from: Address<'a>,
    to: [Address<'a>; 1],
    #[serde(rename = "TemplateID")]
    template_id: u64,
    template_language: bool,
    subject: &'a str,
    variables: &'a serde_json::Value,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Address<'a> {
    email: &'a str,
    name: &'a str,
}

impl MailjetMailer {
    pub fn new(public_key: &str, private_key: &str, sender_email: &str, sender_name: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: MAILJET_SEND_URL.to_string(),
            public_key: public_key.to_string(),
            private_key: private_key.to_string(),
            sender_email: sender_email.to_string(),
            sender_name: sender_name.to_string(),
        }
    }

    /// Send to a different endpoint (a local mock in tests)
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn request_body<'a>(&'a self, message: &'a EmailMessage) -> SendRequest<'a> {
        SendRequest {
            messages: [MailjetMessage {
                from: Address {
                    email: &self.sender_email,
                    name: &self.sender_name,
                },
                to: [Address {
                    email: &message.to_email,
                    name: &message.to_name,
                }],
                template_id: message.template_id,
                template_language: true,
                subject: &message.subject,
                variables: &message.variables,
            }],
        }
    }
}

#[async_trait]
impl Mailer for MailjetMailer {
    #[instrument(skip(self, message), fields(template_id = message.template_id))]
    async fn send(&self, message: &EmailMessage) -> RepoResult<()> {
        self.client
            .post(&self.endpoint)
            .basic_auth(&self.public_key, Some(&self.private_key))
            .json(&self.request_body(message))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| DomainError::MailDeliveryError(e.to_string()))?;

        info!(to = %message.to_email, "Email sent");
        Ok(())
    }
}

/// Mailer used when no provider is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &EmailMessage) -> RepoResult<()> {
        info!(
            to = %message.to_email,
            subject = %message.subject,
            template_id = message.template_id,
            variables = %message.variables,
            "Email not sent (no mail provider configured)"
        );
        Ok(())
    }
}
