//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod idea;
pub mod member;
pub mod notification;
pub mod profile;
pub mod verification;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder, ServiceSettings};
pub use error::{ServiceError, ServiceResult};
pub use idea::IdeaService;
pub use member::MemberService;
pub use notification::NotificationService;
pub use profile::ProfileService;
pub use verification::VerificationService;
