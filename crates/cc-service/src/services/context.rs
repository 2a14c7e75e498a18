//! Service context - dependency container for services
//!
//! Holds the repositories, outbound collaborators and settings the services need.

use std::sync::Arc;

use cc_common::auth::{JwtService, PasswordService};
use cc_common::{AppConfig, MailTemplates};
use cc_core::traits::{
    AvailabilityRepository, CommentRepository, IdeaRepository, ImageStore, LiveNotifier, Mailer,
    MembershipRepository, NotificationRepository, ProfileRepository, SkillRepository,
    UserRepository,
};
use chrono::Duration;

use super::error::{ServiceError, ServiceResult};

/// Settings the services read at request time
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Base URL of the web frontend, without trailing slash
    pub frontend_url: String,
    pub templates: MailTemplates,
    /// How long an email verification link stays valid
    pub verification_link_ttl: Duration,
}

impl ServiceSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            frontend_url: config.frontend.url.clone(),
            templates: config.mail.templates.clone(),
            verification_link_ttl: Duration::hours(config.verification.link_ttl_hours),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:3000".to_string(),
            templates: MailTemplates::default(),
            verification_link_ttl: Duration::hours(72),
        }
    }
}

/// Service context containing all dependencies
///
/// Every collaborator sits behind its cc-core trait, so the same services run
/// against PostgreSQL/Redis/Mailjet in production and in-memory fakes in tests.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    skill_repo: Arc<dyn SkillRepository>,
    availability_repo: Arc<dyn AvailabilityRepository>,
    membership_repo: Arc<dyn MembershipRepository>,
    idea_repo: Arc<dyn IdeaRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    notification_repo: Arc<dyn NotificationRepository>,

    // Outbound
    live_notifier: Arc<dyn LiveNotifier>,
    mailer: Arc<dyn Mailer>,
    image_store: Arc<dyn ImageStore>,

    // Auth
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,

    settings: Arc<ServiceSettings>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    pub fn skill_repo(&self) -> &dyn SkillRepository {
        self.skill_repo.as_ref()
    }

    pub fn availability_repo(&self) -> &dyn AvailabilityRepository {
        self.availability_repo.as_ref()
    }

    pub fn membership_repo(&self) -> &dyn MembershipRepository {
        self.membership_repo.as_ref()
    }

    pub fn idea_repo(&self) -> &dyn IdeaRepository {
        self.idea_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    // === Outbound ===

    pub fn live_notifier(&self) -> &dyn LiveNotifier {
        self.live_notifier.as_ref()
    }

    pub fn mailer(&self) -> &dyn Mailer {
        self.mailer.as_ref()
    }

    pub fn image_store(&self) -> &dyn ImageStore {
        self.image_store.as_ref()
    }

    // === Auth ===

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ServiceContext`]
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    skill_repo: Option<Arc<dyn SkillRepository>>,
    availability_repo: Option<Arc<dyn AvailabilityRepository>>,
    membership_repo: Option<Arc<dyn MembershipRepository>>,
    idea_repo: Option<Arc<dyn IdeaRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    live_notifier: Option<Arc<dyn LiveNotifier>>,
    mailer: Option<Arc<dyn Mailer>>,
    image_store: Option<Arc<dyn ImageStore>>,
    jwt_service: Option<Arc<JwtService>>,
    settings: Option<ServiceSettings>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn skill_repo(mut self, repo: Arc<dyn SkillRepository>) -> Self {
        self.skill_repo = Some(repo);
        self
    }

    pub fn availability_repo(mut self, repo: Arc<dyn AvailabilityRepository>) -> Self {
        self.availability_repo = Some(repo);
        self
    }

    pub fn membership_repo(mut self, repo: Arc<dyn MembershipRepository>) -> Self {
        self.membership_repo = Some(repo);
        self
    }

    pub fn idea_repo(mut self, repo: Arc<dyn IdeaRepository>) -> Self {
        self.idea_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn live_notifier(mut self, notifier: Arc<dyn LiveNotifier>) -> Self {
        self.live_notifier = Some(notifier);
        self
    }

    pub fn mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn image_store(mut self, store: Arc<dyn ImageStore>) -> Self {
        self.image_store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn settings(mut self, settings: ServiceSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            user_repo: required(self.user_repo, "user_repo")?,
            profile_repo: required(self.profile_repo, "profile_repo")?,
            skill_repo: required(self.skill_repo, "skill_repo")?,
            availability_repo: required(self.availability_repo, "availability_repo")?,
            membership_repo: required(self.membership_repo, "membership_repo")?,
            idea_repo: required(self.idea_repo, "idea_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            notification_repo: required(self.notification_repo, "notification_repo")?,
            live_notifier: required(self.live_notifier, "live_notifier")?,
            mailer: required(self.mailer, "mailer")?,
            image_store: required(self.image_store, "image_store")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            password_service: PasswordService::new(),
            settings: Arc::new(self.settings.unwrap_or_default()),
        })
    }
}
