//! Pub/Sub channel naming.

use cc_core::value_objects::UserId;

/// Channel prefix for per-user signals
pub const USER_CHANNEL_PREFIX: &str = "user:";

/// Pub/Sub channel types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PubSubChannel {
    /// Everything addressed to one user, across all their sessions
    User(UserId),
    Custom(String),
}

impl PubSubChannel {
    #[must_use]
    pub fn user(user_id: UserId) -> Self {
        Self::User(user_id)
    }

    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Redis channel name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::User(id) => format!("{USER_CHANNEL_PREFIX}{id}"),
            Self::Custom(name) => name.clone(),
        }
    }

    /// Parse a channel name back, falling back to `Custom`
    #[must_use]
    pub fn parse(name: &str) -> Self {
        name.strip_prefix(USER_CHANNEL_PREFIX)
            .and_then(|id| id.parse::<UserId>().ok())
            .map_or_else(|| Self::Custom(name.to_string()), Self::User)
    }
}

impl std::fmt::Display for PubSubChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
