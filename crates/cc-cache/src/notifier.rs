//! `LiveNotifier` backed by Redis Pub/Sub

use async_trait::async_trait;
use cc_core::entities::Notification;
use cc_core::error::DomainError;
use cc_core::traits::{LiveNotifier, RepoResult};
use cc_core::value_objects::UserId;
use serde_json::json;
use tracing::instrument;

use crate::pool::RedisPool;
use crate::pubsub::Publisher;

/// Event type published on a user's channel when a notification lands in their inbox
pub const NOTIFICATION_EVENT: &str = "NOTIFICATION";

/// Signals "you have a new notification" on `user:<id>`
#[derive(Debug, Clone)]
pub struct RedisLiveNotifier {
    publisher: Publisher,
}

impl RedisLiveNotifier {
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            publisher: Publisher::new(pool),
        }
    }
}

/// Body of the live signal; clients refetch the inbox for details
fn notification_payload(notification: &Notification) -> serde_json::Value {
    json!({
        "notification_id": notification.id,
        "notification_type": notification.notification_type(),
        "created_at": notification.created_at,
    })
}

#[async_trait]
impl LiveNotifier for RedisLiveNotifier {
    #[instrument(skip(self, notification), fields(notification_id = %notification.id))]
    async fn notify_user(&self, user_id: UserId, notification: &Notification) -> RepoResult<()> {
        self.publisher
            .publish_to_user(user_id, NOTIFICATION_EVENT, notification_payload(notification))
            .await
            .map(|_| ())
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }
}
