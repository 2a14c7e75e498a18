//! Outbound collaborators: live push, email, and image storage

use async_trait::async_trait;
use serde_json::Value;

use crate::entities::Notification;
use crate::traits::RepoResult;
use crate::value_objects::UserId;

/// Pushes a "you have a new notification" signal to a connected user
#[async_trait]
pub trait LiveNotifier: Send + Sync {
    async fn notify_user(&self, user_id: UserId, notification: &Notification) -> RepoResult<()>;
}

/// A templated email to a single recipient
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to_email: String,
    pub to_name: String,
    pub subject: String,
    /// Provider-side template to render
    pub template_id: u64,
    /// Values substituted into the template
    pub variables: Value,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> RepoResult<()>;
}

/// Persists uploaded images and returns the path they are served from
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, extension: &str, bytes: &[u8]) -> RepoResult<String>;
}
