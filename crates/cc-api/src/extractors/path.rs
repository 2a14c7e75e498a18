//! Path parameter extractors

use cc_core::{IdeaId, UserNotificationId};
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with idea_id
#[derive(Debug, Deserialize)]
pub struct IdeaIdPath {
    pub idea_id: String,
}

impl IdeaIdPath {
    pub fn idea_id(&self) -> Result<IdeaId, ApiError> {
        self.idea_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid idea_id format"))
    }
}

/// Path parameters with a user notification id
#[derive(Debug, Deserialize)]
pub struct NotificationIdPath {
    pub notification_id: String,
}

impl NotificationIdPath {
    pub fn notification_id(&self) -> Result<UserNotificationId, ApiError> {
        self.notification_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid notification_id format"))
    }
}
