//! # cc-service
//!
//! Application layer containing business logic, services, and DTOs, plus
//! the outbound mail and image storage adapters the services use.

pub mod dto;
pub mod email;
pub mod media;
pub mod services;

pub use email::{create_mailer, LogMailer, MailjetMailer};
pub use media::FileImageStore;
pub use services::{
    AuthService, IdeaService, MemberService, NotificationService, ProfileService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, ServiceSettings, VerificationService,
};
