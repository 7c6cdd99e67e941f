//! The in-memory store.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use newsroom_config::NewsroomConfig;
use newsroom_rbac::{AccessPolicy, PolicyEnforcer};
use newsroom_types::{
    Article, ArticleId, ArticleStatus, Category, CategoryId, DEFAULT_CATEGORY_COLOR,
    NotificationPreferences, SiteSettings, User, UserId,
};
use tracing::{debug, info};

use crate::dashboard::{Dashboard, QuickAction};
use crate::error::{Result, StoreError, ValidationError};
use crate::forms::{ArticleDraft, CategoryDraft, ProfileUpdate, UserDraft, validate_site_settings};
use crate::query::{ArticleQuery, UserQuery};
use crate::seed;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the id after the highest one in use, or `first` when none are.
fn allocate_id<T>(
    highest: Option<T>,
    first: T,
    next: impl FnOnce(T) -> Option<T>,
    kind: &'static str,
) -> Result<T> {
    match highest {
        None => Ok(first),
        Some(highest) => next(highest).ok_or(StoreError::IdsExhausted(kind)),
    }
}

/// Owns every newsroom entity.
///
/// Callers only ever receive snapshots (clones). Every mutation takes the
/// acting user and is checked by a [`PolicyEnforcer`] before anything
/// changes; a rejected mutation leaves the store untouched.
#[derive(Debug, Clone)]
pub struct Store {
    users: Vec<User>,
    articles: Vec<Article>,
    categories: Vec<Category>,
    site: SiteSettings,
    default_notifications: NotificationPreferences,
    notifications: HashMap<UserId, NotificationPreferences>,
    recent_limit: usize,
    enforcer: PolicyEnforcer,
    clock: fn() -> NaiveDate,
}

impl Store {
    /// Creates an empty store with default settings.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            articles: Vec::new(),
            categories: Vec::new(),
            site: SiteSettings::default(),
            default_notifications: NotificationPreferences::default(),
            notifications: HashMap::new(),
            recent_limit: 5,
            enforcer: PolicyEnforcer::new(),
            clock: today,
        }
    }

    /// Creates a store seeded with the sample newsroom.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        store.users = seed::users();
        store.categories = seed::categories();
        store.articles = seed::articles();
        store
    }

    /// Creates a store from loaded configuration.
    pub fn from_config(config: &NewsroomConfig) -> Self {
        let mut store = if config.store.seed_sample_data {
            Self::with_sample_data()
        } else {
            Self::new()
        };
        store.site = config.site.clone();
        store.default_notifications = config.notifications;
        store.recent_limit = config.store.recent_articles;

        info!(
            users = store.users.len(),
            articles = store.articles.len(),
            categories = store.categories.len(),
            "Store initialized from configuration"
        );
        store
    }

    /// Replaces the enforcer (e.g. one with audit logging disabled).
    pub fn with_enforcer(mut self, enforcer: PolicyEnforcer) -> Self {
        self.enforcer = enforcer;
        self
    }

    /// Replaces the source of "today" used for publication and join dates.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Adds a user directly, bypassing policy. For bootstrapping only.
    pub fn insert_user(&mut self, user: User) {
        self.users.retain(|u| u.id != user.id);
        self.users.push(user);
    }

    /// Looks up a user by id without a policy check.
    ///
    /// This resolves the signed-in account; listing users goes through
    /// [`users`](Self::users).
    pub fn user_by_id(&self, id: UserId) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    // ------------------------------------------------------------------
    // Articles
    // ------------------------------------------------------------------

    /// Lists the articles the actor may see that match the query.
    ///
    /// Visibility is applied before search and status filters.
    pub fn articles(&self, actor: &User, query: &ArticleQuery) -> Vec<Article> {
        AccessPolicy::visible_articles(actor, &self.articles)
            .into_iter()
            .filter(|article| query.matches(article))
            .collect()
    }

    pub fn article(&self, actor: &User, id: ArticleId) -> Result<Article> {
        self.articles
            .iter()
            .find(|a| a.id == id && AccessPolicy::can_view_article(actor, a))
            .cloned()
            .ok_or(StoreError::ArticleNotFound(id))
    }

    /// Saves a new article authored by the actor.
    pub fn create_article(
        &mut self,
        actor: &User,
        draft: ArticleDraft,
        status: ArticleStatus,
    ) -> Result<Article> {
        draft.validate()?;
        self.require_category(&draft.category)?;
        self.enforcer.enforce_create_article(actor)?;

        let id = allocate_id(
            self.articles.iter().map(|a| a.id).max(),
            ArticleId::new(1),
            ArticleId::next,
            "article",
        )?;

        let mut article = Article::draft(id, draft.title.trim(), actor.name.clone(), draft.category);
        article.excerpt = draft.excerpt;
        article.content = draft.content;
        article.set_tags(&draft.tags);
        if status == ArticleStatus::Published {
            article.publish((self.clock)());
        }

        self.adjust_category_count(&article.category, 1);
        self.adjust_author_count(&article.author, 1);
        self.articles.push(article.clone());

        info!(article_id = %id, author = %article.author, status = %status, "Article created");
        Ok(article)
    }

    /// Replaces an article's contents and sets its status.
    ///
    /// Publishing an unpublished article stamps today's date; an article
    /// that stays published keeps its original date. An article the actor
    /// cannot see is reported as not found.
    pub fn update_article(
        &mut self,
        actor: &User,
        id: ArticleId,
        draft: ArticleDraft,
        status: ArticleStatus,
    ) -> Result<Article> {
        draft.validate()?;
        let index = self.visible_article_index(actor, id)?;
        self.require_category(&draft.category)?;
        self.enforcer.enforce_edit_article(actor, &self.articles[index])?;

        let today = (self.clock)();
        let previous_category = self.articles[index].category.clone();
        let author = self.articles[index].author.clone();
        if previous_category != draft.category {
            self.adjust_category_count(&previous_category, -1);
            self.adjust_category_count(&draft.category, 1);
        }

        let article = &mut self.articles[index];
        article.title = draft.title.trim().to_string();
        article.excerpt = draft.excerpt;
        article.content = draft.content;
        article.category = draft.category;
        article.set_tags(&draft.tags);
        match status {
            ArticleStatus::Published if !article.is_published() => article.publish(today),
            ArticleStatus::Published => {}
            ArticleStatus::Draft => article.unpublish(),
        }

        info!(article_id = %id, author = %author, status = %status, "Article updated");
        Ok(article.clone())
    }

    pub fn delete_article(&mut self, actor: &User, id: ArticleId) -> Result<Article> {
        let index = self.visible_article_index(actor, id)?;
        self.enforcer.enforce_delete_article(actor, &self.articles[index])?;

        let article = self.articles.remove(index);
        self.adjust_category_count(&article.category, -1);
        self.adjust_author_count(&article.author, -1);

        info!(article_id = %id, title = %article.title, "Article deleted");
        Ok(article)
    }

    fn visible_article_index(&self, actor: &User, id: ArticleId) -> Result<usize> {
        self.articles
            .iter()
            .position(|a| a.id == id && AccessPolicy::can_view_article(actor, a))
            .ok_or(StoreError::ArticleNotFound(id))
    }

    /// Articles can only be filed under an existing category.
    fn require_category(&self, name: &str) -> Result<()> {
        if self.categories.iter().any(|c| c.name() == name) {
            Ok(())
        } else {
            Err(StoreError::UnknownCategory(name.to_string()))
        }
    }

    fn adjust_category_count(&mut self, name: &str, delta: i32) {
        if let Some(c) = self.categories.iter_mut().find(|c| c.name() == name) {
            c.set_article_count(c.article_count().saturating_add_signed(delta));
        }
    }

    fn adjust_author_count(&mut self, name: &str, delta: i32) {
        if let Some(u) = self.users.iter_mut().find(|u| u.name == name) {
            u.article_count = u.article_count.saturating_add_signed(delta);
        }
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    pub fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    pub fn category(&self, id: CategoryId) -> Result<Category> {
        self.categories
            .iter()
            .find(|c| c.id() == id)
            .cloned()
            .ok_or(StoreError::CategoryNotFound(id))
    }

    pub fn create_category(&mut self, actor: &User, draft: CategoryDraft) -> Result<Category> {
        draft.validate()?;
        self.require_unique_category_name(draft.name.trim(), None)?;
        self.enforcer.enforce_manage_categories(actor)?;

        let id = allocate_id(
            self.categories.iter().map(Category::id).max(),
            CategoryId::new(1),
            CategoryId::next,
            "category",
        )?;
        let color = draft
            .color
            .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string());
        let category = Category::new(id, draft.name.trim(), draft.description, color);
        self.categories.push(category.clone());

        info!(category_id = %id, slug = %category.slug(), "Category created");
        Ok(category)
    }

    /// Updates a category. Renaming recomputes the slug and re-files the
    /// category's articles under the new name.
    pub fn update_category(
        &mut self,
        actor: &User,
        id: CategoryId,
        draft: CategoryDraft,
    ) -> Result<Category> {
        draft.validate()?;
        let index = self.category_index(id)?;
        self.require_unique_category_name(draft.name.trim(), Some(id))?;
        self.enforcer.enforce_manage_categories(actor)?;

        let category = &mut self.categories[index];
        let old_name = category.name().to_string();
        category.rename(draft.name.trim());
        category.set_description(draft.description);
        if let Some(color) = draft.color {
            category.set_color(color);
        }
        let updated = category.clone();

        if old_name != updated.name() {
            let mut refiled = 0usize;
            for article in self.articles.iter_mut().filter(|a| a.category == old_name) {
                article.category = updated.name().to_string();
                refiled += 1;
            }
            debug!(from = %old_name, to = %updated.name(), refiled, "Category renamed");
        }

        info!(category_id = %id, slug = %updated.slug(), "Category updated");
        Ok(updated)
    }

    pub fn delete_category(&mut self, actor: &User, id: CategoryId) -> Result<Category> {
        let index = self.category_index(id)?;
        self.enforcer
            .enforce_delete_category(actor, &self.categories[index])?;

        let category = self.categories.remove(index);
        info!(category_id = %id, name = %category.name(), "Category deleted");
        Ok(category)
    }

    fn category_index(&self, id: CategoryId) -> Result<usize> {
        self.categories
            .iter()
            .position(|c| c.id() == id)
            .ok_or(StoreError::CategoryNotFound(id))
    }

    /// Article counts are kept by category name, so names must be unique.
    fn require_unique_category_name(&self, name: &str, except: Option<CategoryId>) -> Result<()> {
        let taken = self
            .categories
            .iter()
            .any(|c| c.name() == name && Some(c.id()) != except);
        if taken {
            return Err(ValidationError::CategoryNameTaken.into());
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub fn users(&self, actor: &User, query: &UserQuery) -> Result<Vec<User>> {
        self.enforcer.enforce_manage_users(actor)?;
        Ok(self
            .users
            .iter()
            .filter(|u| query.matches(u))
            .cloned()
            .collect())
    }

    pub fn create_user(&mut self, actor: &User, draft: UserDraft) -> Result<User> {
        draft.validate()?;
        self.enforcer.enforce_manage_users(actor)?;

        let id = allocate_id(
            self.users.iter().map(|u| u.id).max(),
            UserId::new(1),
            UserId::next,
            "user",
        )?;
        let today = (self.clock)();
        let user = User {
            joined_at: Some(today),
            last_active: Some(today),
            ..User::new(id, draft.name.trim(), draft.email.trim(), draft.role)
        };
        self.users.push(user.clone());

        info!(user_id = %id, role = %user.role, "User created");
        Ok(user)
    }

    /// Updates name, email and role. Articles keep their author string.
    pub fn update_user(&mut self, actor: &User, id: UserId, draft: UserDraft) -> Result<User> {
        draft.validate()?;
        let index = self.user_index(id)?;
        self.enforcer.enforce_manage_users(actor)?;

        let user = &mut self.users[index];
        user.name = draft.name.trim().to_string();
        user.email = draft.email.trim().to_string();
        user.role = draft.role;

        info!(user_id = %id, role = %user.role, "User updated");
        Ok(user.clone())
    }

    pub fn toggle_user_status(&mut self, actor: &User, id: UserId) -> Result<User> {
        let index = self.user_index(id)?;
        self.enforcer.enforce_manage_users(actor)?;

        let user = &mut self.users[index];
        user.status = user.status.toggled();

        info!(user_id = %id, status = %user.status, "User status changed");
        Ok(user.clone())
    }

    /// Deletes a user. Their articles are left in place.
    pub fn delete_user(&mut self, actor: &User, id: UserId) -> Result<User> {
        let index = self.user_index(id)?;
        self.enforcer.enforce_delete_user(actor, &self.users[index])?;

        let user = self.users.remove(index);
        self.notifications.remove(&id);

        info!(user_id = %id, name = %user.name, "User deleted");
        Ok(user)
    }

    fn user_index(&self, id: UserId) -> Result<usize> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::UserNotFound(id))
    }

    // ------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------

    pub fn dashboard(&self, actor: &User) -> Dashboard {
        let published = self.articles.iter().filter(|a| a.is_published()).count();

        let mut recent = AccessPolicy::visible_articles(actor, &self.articles);
        recent.sort_by(|a, b| b.id.cmp(&a.id));
        recent.truncate(self.recent_limit);

        Dashboard {
            total_articles: self.articles.len(),
            published,
            drafts: self.articles.len() - published,
            categories: self.categories.len(),
            total_users: AccessPolicy::can_view_user_statistics(actor).then_some(self.users.len()),
            recent_articles: recent,
            quick_actions: QuickAction::available_to(actor),
        }
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    pub fn site_settings(&self) -> SiteSettings {
        self.site.clone()
    }

    pub fn update_site_settings(
        &mut self,
        actor: &User,
        settings: SiteSettings,
    ) -> Result<SiteSettings> {
        validate_site_settings(&settings)?;
        self.enforcer.enforce_manage_site_settings(actor)?;

        self.site = settings;
        info!(user_id = %actor.id, site_name = %self.site.site_name, "Site settings updated");
        Ok(self.site.clone())
    }

    pub fn notification_preferences(&self, user_id: UserId) -> NotificationPreferences {
        self.notifications
            .get(&user_id)
            .copied()
            .unwrap_or(self.default_notifications)
    }

    /// Saves the actor's own notification preferences.
    pub fn update_notification_preferences(
        &mut self,
        actor: &User,
        preferences: NotificationPreferences,
    ) -> Result<NotificationPreferences> {
        self.user_index(actor.id)?;
        self.notifications.insert(actor.id, preferences);

        debug!(user_id = %actor.id, "Notification preferences updated");
        Ok(preferences)
    }

    pub fn update_profile(
        &mut self,
        actor: &User,
        target: UserId,
        update: ProfileUpdate,
    ) -> Result<User> {
        update.validate()?;
        let index = self.user_index(target)?;
        self.enforcer.enforce_edit_profile(actor, &self.users[index])?;

        let user = &mut self.users[index];
        user.name = update.name.trim().to_string();
        user.email = update.email.trim().to_string();
        user.last_active = Some((self.clock)());

        info!(user_id = %target, "Profile updated");
        Ok(user.clone())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

