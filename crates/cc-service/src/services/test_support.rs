//! In-memory implementations of the repository and delivery traits

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cc_common::auth::{JwtService, PasswordService};
use cc_core::entities::*;
use cc_core::traits::*;
use cc_core::value_objects::*;
use cc_core::DomainError;
use chrono::Utc;
use uuid::Uuid;

use super::context::ServiceContext;

fn next(counter: &AtomicI64) -> i64 {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

fn paginate<T: Clone>(items: &[T], page: PageRequest) -> Page<T> {
    let offset = page.offset() as usize;
    let limit = page.limit() as usize;
    let slice = items.iter().skip(offset).take(limit).cloned().collect();
    Page::new(slice, items.len() as i64)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub struct InMemoryUsers {
    ids: AtomicI64,
    users: Mutex<Vec<(User, String)>>,
    unreachable: Mutex<Vec<UserId>>,
}

impl InMemoryUsers {
    /// Make `find_by_id` fail with a database error for `id`
    pub fn fail_lookup(&self, id: UserId) {
        self.unreachable.lock().unwrap().push(id);
    }

    pub fn insert(&self, new_user: &NewUser, password_hash: &str) -> User {
        let user = User {
            id: UserId::new(next(&self.ids)),
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            first_name: new_user.first_name.clone(),
            last_name: new_user.last_name.clone(),
            is_active: true,
            created_at: Utc::now(),
        };
        self.users
            .lock()
            .unwrap()
            .push((user.clone(), password_hash.to_string()));
        user
    }

    pub fn by_id(&self, id: UserId) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|(user, _)| user.id == id)
            .map(|(user, _)| user.clone())
    }

    pub fn by_username(&self, username: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|(user, _)| user.username == username)
            .map(|(user, _)| user.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        if self.unreachable.lock().unwrap().contains(&id) {
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }
        Ok(self.by_id(id))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self.by_username(username))
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.by_username(username).is_some())
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        if self.by_username(&user.username).is_some() {
            return Err(DomainError::EmailAlreadyExists);
        }
        Ok(self.insert(user, password_hash))
    }

    async fn update_names(&self, id: UserId, first_name: &str, last_name: &str) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let (user, _) = users
            .iter_mut()
            .find(|(user, _)| user.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        user.first_name = first_name.to_string();
        user.last_name = last_name.to_string();
        Ok(())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(user, _)| user.id == id)
            .map(|(_, hash)| hash.clone()))
    }
}

// ============================================================================
// Profiles and catalog
// ============================================================================

pub fn catalog_skills() -> Vec<Skill> {
    vec![
        Skill {
            id: SkillId::new(1),
            name: "Permaculture".to_string(),
        },
        Skill {
            id: SkillId::new(2),
            name: "Data science".to_string(),
        },
    ]
}

#[derive(Default)]
pub struct InMemoryProfiles {
    ids: AtomicI64,
    profiles: Mutex<Vec<UserProfile>>,
}

impl InMemoryProfiles {
    pub fn insert(&self, new_profile: &NewUserProfile) -> UserProfile {
        let now = Utc::now();
        let profile = UserProfile {
            id: ProfileId::new(next(&self.ids)),
            user_id: new_profile.user_id,
            name: new_profile.name.clone(),
            url_slug: new_profile.url_slug.clone(),
            country: Some(new_profile.country.clone()),
            state: None,
            city: Some(new_profile.city.clone()),
            biography: None,
            image: None,
            background_image: None,
            availability: None,
            skills: Vec::new(),
            is_profile_verified: false,
            has_logged_in: 0,
            created_at: now,
            updated_at: now,
        };
        self.profiles.lock().unwrap().push(profile.clone());
        profile
    }

    pub fn by_user(&self, user_id: UserId) -> Option<UserProfile> {
        self.profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned()
    }

    pub fn set_verified(&self, user_id: UserId) {
        if let Some(profile) = self
            .profiles
            .lock()
            .unwrap()
            .iter_mut()
            .find(|p| p.user_id == user_id)
        {
            profile.is_profile_verified = true;
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<UserProfile>> {
        Ok(self.by_user(user_id))
    }

    async fn find_by_slug(&self, url_slug: &str) -> RepoResult<Option<UserProfile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.url_slug == url_slug)
            .cloned())
    }

    async fn create(&self, profile: &NewUserProfile) -> RepoResult<UserProfile> {
        Ok(self.insert(profile))
    }

    async fn update(&self, profile: &UserProfile) -> RepoResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        let stored = profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or(DomainError::ProfileNotFound)?;
        // Skills are written through add_skills only
        let skills = std::mem::take(&mut stored.skills);
        *stored = UserProfile {
            skills,
            ..profile.clone()
        };
        Ok(())
    }

    async fn add_skills(&self, profile: &UserProfile, skill_ids: &[SkillId]) -> RepoResult<()> {
        let catalog = catalog_skills();
        let mut profiles = self.profiles.lock().unwrap();
        let stored = profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or(DomainError::ProfileNotFound)?;
        for id in skill_ids {
            let skill = catalog
                .iter()
                .find(|s| s.id == *id)
                .cloned()
                .ok_or(DomainError::SkillNotFound(*id))?;
            stored.add_skill(skill);
        }
        Ok(())
    }

    async fn list_verified(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Page<UserProfile>> {
        let mut matching: Vec<UserProfile> = self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_profile_verified)
            .filter(|p| search.map_or(true, |s| contains_ignore_case(&p.name, s)))
            .cloned()
            .collect();
        matching.sort_by_key(|p| p.id);
        Ok(paginate(&matching, page))
    }
}

pub struct InMemoryCatalog;

#[async_trait]
impl SkillRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: SkillId) -> RepoResult<Option<Skill>> {
        Ok(catalog_skills().into_iter().find(|s| s.id == id))
    }
}

#[async_trait]
impl AvailabilityRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: AvailabilityId) -> RepoResult<Option<Availability>> {
        Ok((id == AvailabilityId::new(1)).then(|| Availability {
            id,
            name: "A few hours a week".to_string(),
        }))
    }
}

// ============================================================================
// Memberships
// ============================================================================

#[derive(Default)]
pub struct InMemoryMemberships {
    ids: AtomicI64,
    projects: Mutex<Vec<ProjectMembership>>,
    organizations: Mutex<Vec<OrganizationMembership>>,
}

#[async_trait]
impl MembershipRepository for InMemoryMemberships {
    async fn project_memberships(
        &self,
        user_id: UserId,
        search: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Page<ProjectMembership>> {
        let matching: Vec<_> = self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.user_id == user_id)
            .filter(|m| {
                search.map_or(true, |s| {
                    m.project
                        .parent_organization_slug
                        .as_deref()
                        .is_some_and(|slug| contains_ignore_case(slug, s))
                })
            })
            .cloned()
            .collect();
        Ok(paginate(&matching, page))
    }

    async fn organization_memberships(
        &self,
        user_id: UserId,
        search: Option<&str>,
        page: PageRequest,
    ) -> RepoResult<Page<OrganizationMembership>> {
        let matching: Vec<_> = self
            .organizations
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.user_id == user_id)
            .filter(|m| search.map_or(true, |s| contains_ignore_case(&m.organization.url_slug, s)))
            .cloned()
            .collect();
        Ok(paginate(&matching, page))
    }
}

// ============================================================================
// Ideas and comments
// ============================================================================

#[derive(Default)]
pub struct InMemoryIdeas {
    ids: AtomicI64,
    ideas: Mutex<Vec<Idea>>,
    supporters: Mutex<Vec<IdeaSupporter>>,
}

#[async_trait]
impl IdeaRepository for InMemoryIdeas {
    async fn find_by_id(&self, id: IdeaId) -> RepoResult<Option<Idea>> {
        Ok(self.ideas.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn add_supporter(&self, idea_id: IdeaId, user_id: UserId) -> RepoResult<IdeaSupporter> {
        if !self.ideas.lock().unwrap().iter().any(|i| i.id == idea_id) {
            return Err(DomainError::IdeaNotFound(idea_id));
        }
        let mut supporters = self.supporters.lock().unwrap();
        if supporters
            .iter()
            .any(|s| s.idea_id == idea_id && s.user_id == user_id)
        {
            return Err(DomainError::AlreadySupporter);
        }
        let supporter = IdeaSupporter {
            id: SupporterId::new(next(&self.ids)),
            idea_id,
            user_id,
            created_at: Utc::now(),
        };
        supporters.push(supporter.clone());
        Ok(supporter)
    }

    async fn supporter_user_ids(&self, idea_id: IdeaId) -> RepoResult<Vec<UserId>> {
        Ok(self
            .supporters
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.idea_id == idea_id)
            .map(|s| s.user_id)
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryComments {
    ids: AtomicI64,
    comments: Mutex<Vec<IdeaComment>>,
}

impl InMemoryComments {
    pub fn insert(&self, new_comment: &NewIdeaComment) -> IdeaComment {
        let comment = IdeaComment {
            id: CommentId::new(next(&self.ids)),
            idea_id: new_comment.idea_id,
            author_id: new_comment.author_id,
            content: new_comment.content.clone(),
            parent_comment_id: new_comment.parent_comment_id,
            created_at: Utc::now(),
        };
        self.comments.lock().unwrap().push(comment.clone());
        comment
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<IdeaComment>> {
        Ok(self.comments.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, comment: &NewIdeaComment) -> RepoResult<IdeaComment> {
        Ok(self.insert(comment))
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Default)]
pub struct InMemoryNotifications {
    ids: AtomicI64,
    entry_ids: AtomicI64,
    notifications: Mutex<Vec<Notification>>,
    entries: Mutex<Vec<UserNotification>>,
}

impl InMemoryNotifications {
    pub fn count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    pub fn types(&self) -> Vec<NotificationType> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(Notification::notification_type)
            .collect()
    }

    pub fn recipients(&self, notification_id: NotificationId) -> Vec<UserId> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.notification_id == notification_id)
            .map(|e| e.user_id)
            .collect()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotifications {
    async fn create(&self, subject: NotificationSubject) -> RepoResult<Notification> {
        let notification = Notification {
            id: NotificationId::new(next(&self.ids)),
            subject,
            created_at: Utc::now(),
        };
        self.notifications.lock().unwrap().push(notification.clone());
        Ok(notification)
    }

    async fn create_for_user(
        &self,
        notification: &Notification,
        user_id: UserId,
    ) -> RepoResult<UserNotification> {
        let entry = UserNotification {
            id: UserNotificationId::new(next(&self.entry_ids)),
            notification_id: notification.id,
            user_id,
            read_at: None,
            created_at: Utc::now(),
        };
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn find_by_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> RepoResult<Page<(UserNotification, Notification)>> {
        let notifications = self.notifications.lock().unwrap();
        let mut matching: Vec<_> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .filter_map(|e| {
                notifications
                    .iter()
                    .find(|n| n.id == e.notification_id)
                    .map(|n| (e.clone(), n.clone()))
            })
            .collect();
        matching.sort_by(|(a, _), (b, _)| b.id.cmp(&a.id));
        Ok(paginate(&matching, page))
    }

    async fn mark_read(
        &self,
        id: UserNotificationId,
        user_id: UserId,
    ) -> RepoResult<Option<UserNotification>> {
        let mut entries = self.entries.lock().unwrap();
        Ok(entries
            .iter_mut()
            .find(|e| e.id == id && e.user_id == user_id)
            .map(|e| {
                e.read_at.get_or_insert_with(Utc::now);
                e.clone()
            }))
    }
}

// ============================================================================
// Delivery
// ============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    failing: Mutex<bool>,
    signalled: Mutex<Vec<UserId>>,
}

impl RecordingNotifier {
    pub fn fail_all(&self) {
        *self.failing.lock().unwrap() = true;
    }

    pub fn signalled(&self) -> Vec<UserId> {
        self.signalled.lock().unwrap().clone()
    }
}

#[async_trait]
impl LiveNotifier for RecordingNotifier {
    async fn notify_user(&self, user_id: UserId, _notification: &Notification) -> RepoResult<()> {
        if *self.failing.lock().unwrap() {
            return Err(DomainError::CacheError("connection refused".to_string()));
        }
        self.signalled.lock().unwrap().push(user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    failing: Mutex<bool>,
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
    pub fn fail_all(&self) {
        *self.failing.lock().unwrap() = true;
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> RepoResult<()> {
        if *self.failing.lock().unwrap() {
            return Err(DomainError::MailDeliveryError("503 Service Unavailable".to_string()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingImageStore {
    stored: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingImageStore {
    pub fn stored(&self) -> Vec<(String, Vec<u8>)> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn store(&self, extension: &str, bytes: &[u8]) -> RepoResult<String> {
        let mut stored = self.stored.lock().unwrap();
        stored.push((extension.to_string(), bytes.to_vec()));
        Ok(format!("/media/profile_images/{}.{extension}", stored.len()))
    }
}

// ============================================================================
// Harness
// ============================================================================

/// All fakes plus seeding helpers. Seeded members are named after the local
/// part of their email with last name "Tester" and live in London.
pub struct TestHarness {
    pub users: Arc<InMemoryUsers>,
    pub profiles: Arc<InMemoryProfiles>,
    pub memberships: Arc<InMemoryMemberships>,
    pub ideas: Arc<InMemoryIdeas>,
    pub comments: Arc<InMemoryComments>,
    pub notifications: Arc<InMemoryNotifications>,
    pub live: Arc<RecordingNotifier>,
    pub mailer: Arc<RecordingMailer>,
    pub images: Arc<RecordingImageStore>,
    pub jwt: Arc<JwtService>,
    idea_ids: AtomicI64,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            users: Arc::default(),
            profiles: Arc::default(),
            memberships: Arc::default(),
            ideas: Arc::default(),
            comments: Arc::default(),
            notifications: Arc::default(),
            live: Arc::default(),
            mailer: Arc::default(),
            images: Arc::default(),
            jwt: Arc::new(JwtService::new("test-secret-key-for-service-tests", 900, 604_800)),
            idea_ids: AtomicI64::new(0),
        }
    }

    pub fn context(&self) -> ServiceContext {
        ServiceContext::builder()
            .user_repo(self.users.clone())
            .profile_repo(self.profiles.clone())
            .skill_repo(Arc::new(InMemoryCatalog))
            .availability_repo(Arc::new(InMemoryCatalog))
            .membership_repo(self.memberships.clone())
            .idea_repo(self.ideas.clone())
            .comment_repo(self.comments.clone())
            .notification_repo(self.notifications.clone())
            .live_notifier(self.live.clone())
            .mailer(self.mailer.clone())
            .image_store(self.images.clone())
            .jwt_service(self.jwt.clone())
            .build()
            .expect("all collaborators are set")
    }

    pub fn seed_member(&self, email: &str, password: &str) -> (User, UserProfile) {
        let local = email.split('@').next().unwrap_or(email);
        let mut chars = local.chars();
        let first_name: String = chars
            .next()
            .map(|c| c.to_uppercase().chain(chars).collect())
            .unwrap_or_default();

        let hash = PasswordService::new().hash(password).unwrap();
        let user = self.users.insert(
            &NewUser::from_email(email.to_string(), first_name, "Tester".to_string()),
            &hash,
        );
        let profile = self.profiles.insert(&NewUserProfile::for_user(
            user.id,
            &user.first_name,
            &user.last_name,
            "United Kingdom".to_string(),
            "London".to_string(),
        ));
        (user, profile)
    }

    pub fn verify(&self, user_id: UserId) {
        self.profiles.set_verified(user_id);
    }

    pub fn seed_idea(&self, owner_id: UserId, chat_uuid: Option<Uuid>) -> Idea {
        let id = next(&self.idea_ids);
        let idea = Idea {
            id: IdeaId::new(id),
            name: format!("Idea {id}"),
            url_slug: format!("idea-{id}"),
            owner_id,
            chat_uuid,
            created_at: Utc::now(),
        };
        self.ideas.ideas.lock().unwrap().push(idea.clone());
        idea
    }

    pub fn seed_comment(&self, idea_id: IdeaId, author_id: UserId, parent: Option<CommentId>) -> IdeaComment {
        self.comments.insert(&NewIdeaComment {
            idea_id,
            author_id,
            content: "Seeded comment".to_string(),
            parent_comment_id: parent,
        })
    }

    /// Two projects and two organizations
    pub fn seed_memberships(&self, user_id: UserId) {
        let ids = &self.memberships.ids;
        let organization = |name: &str, slug: &str| OrganizationStub {
            id: OrganizationId::new(next(ids)),
            name: name.to_string(),
            url_slug: slug.to_string(),
            image: None,
        };
        let project = |name: &str, parent: &str| ProjectStub {
            id: ProjectId::new(next(ids)),
            name: name.to_string(),
            url_slug: name.to_lowercase().replace(' ', "-"),
            image: None,
            parent_organization_slug: Some(parent.to_string()),
        };

        let mut projects = self.memberships.projects.lock().unwrap();
        for (name, parent) in [("Solar co-op", "greenfuture"), ("Bike repair cafe", "cityworks")] {
            projects.push(ProjectMembership {
                id: MembershipId::new(next(ids)),
                user_id,
                project: project(name, parent),
                role: "Member".to_string(),
                role_in_project: Some("Volunteer".to_string()),
            });
        }

        let mut organizations = self.memberships.organizations.lock().unwrap();
        for (name, slug) in [("Green Future", "greenfuture"), ("City Works", "cityworks")] {
            organizations.push(OrganizationMembership {
                id: MembershipId::new(next(ids)),
                user_id,
                organization: organization(name, slug),
                role: "Administrator".to_string(),
            });
        }
    }
}
