//! # cc-db
//!
//! Database layer implementing the cc-core repository traits with PostgreSQL via SQLx.
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cc_db::{create_pool, run_migrations, default_migrations_dir, PoolSettings};
//! use cc_db::PgUserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolSettings::new("postgres://localhost/climate_connect")).await?;
//!     run_migrations(&pool, &default_migrations_dir()).await?;
//!     let users = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, default_migrations_dir, ping, run_migrations, PgPool, PoolSettings};
pub use repositories::{
    PgAvailabilityRepository, PgCommentRepository, PgIdeaRepository, PgMembershipRepository,
    PgNotificationRepository, PgProfileRepository, PgSkillRepository, PgUserRepository,
};
