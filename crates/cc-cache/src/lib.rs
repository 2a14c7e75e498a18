//! # cc-cache
//!
//! Redis layer: a managed connection pool and the Pub/Sub publisher that
//! carries live notification signals to connected clients.
//!
//! ## Example
//!
//! ```ignore
//! use cc_cache::{RedisLiveNotifier, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let notifier = RedisLiveNotifier::new(pool.clone());
//! notifier.notify_user(user_id, &notification).await?;
//! ```

pub mod notifier;
pub mod pool;
pub mod pubsub;

pub use notifier::{RedisLiveNotifier, NOTIFICATION_EVENT};
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use pubsub::{PubSubChannel, PubSubEvent, Publisher, USER_CHANNEL_PREFIX};
