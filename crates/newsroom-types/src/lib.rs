//! # newsroom-types: Core types for `Newsroom`
//!
//! This crate contains the entity model shared by every admin screen:
//! - Entity IDs ([`UserId`], [`ArticleId`], [`CategoryId`])
//! - Roles and statuses ([`Role`], [`UserStatus`], [`ArticleStatus`])
//! - Entities ([`User`], [`Article`], [`Category`])
//! - Derived fields ([`slugify`])
//! - Settings ([`SiteSettings`], [`NotificationPreferences`])

use std::fmt::{Debug, Display};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Entity IDs - All Copy (cheap 8-byte values)
// ============================================================================

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the id that follows this one, or `None` at `u64::MAX`.
            pub fn next(self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id! {
    /// Unique identifier for a user account.
    UserId
}

entity_id! {
    /// Unique identifier for an article.
    ArticleId
}

entity_id! {
    /// Unique identifier for a category.
    CategoryId
}

/// The distinguished administrator account. It can never be deleted.
pub const PRIMARY_ADMIN_ID: UserId = UserId::new(1);

// ============================================================================
// Roles
// ============================================================================

/// Role of a user in the newsroom.
///
/// Roles are capability levels, not an inheritance chain. Permissions are
/// checked per action (an editor manages categories but not users; an author
/// manages only their own articles).
///
/// Parsing never fails: an absent or unrecognised role is treated as
/// [`Role::Author`], the least privileged role. This covers non-string
/// values such as `null` or numbers as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Writes articles and manages only the ones they own.
    #[default]
    Author,

    /// Manages every article and the category taxonomy.
    Editor,

    /// Full access, including user management and site settings.
    Admin,
}

impl Role {
    /// All roles, least privileged first.
    pub const ALL: [Role; 3] = [Role::Author, Role::Editor, Role::Admin];

    /// Parses a role tag, falling back to [`Role::Author`].
    ///
    /// # Examples
    ///
    /// ```
    /// use newsroom_types::Role;
    ///
    /// assert_eq!(Role::parse_lenient("editor"), Role::Editor);
    /// assert_eq!(Role::parse_lenient(" Admin "), Role::Admin);
    /// assert_eq!(Role::parse_lenient("superuser"), Role::Author);
    /// assert_eq!(Role::parse_lenient(""), Role::Author);
    /// ```
    pub fn parse_lenient(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "editor" => Role::Editor,
            _ => Role::Author,
        }
    }

    /// Returns the lowercase tag for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Author => "author",
            Role::Editor => "editor",
            Role::Admin => "admin",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Role {
    fn from(tag: &str) -> Self {
        Self::parse_lenient(tag)
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        Self::parse_lenient(&tag)
    }
}

/// Any serialized value: a tag string, or something to discard.
#[derive(Deserialize)]
#[serde(untagged)]
enum RoleRepr {
    Tag(String),
    Other(serde::de::IgnoredAny),
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match RoleRepr::deserialize(deserializer)? {
            RoleRepr::Tag(tag) => Self::parse_lenient(&tag),
            RoleRepr::Other(_) => Role::Author,
        })
    }
}

// ============================================================================
// Statuses
// ============================================================================

/// Whether a user account is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    /// Returns the opposite status.
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publication state of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }
}

impl Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub article_count: u32,
    pub joined_at: Option<NaiveDate>,
    pub last_active: Option<NaiveDate>,
}

impl User {
    /// Creates an active user with no articles and no activity dates.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            status: UserStatus::Active,
            article_count: 0,
            joined_at: None,
            last_active: None,
        }
    }

    /// Returns whether this is the primary admin account.
    pub fn is_primary_admin(&self) -> bool {
        self.id == PRIMARY_ADMIN_ID
    }

    /// Returns whether this user owns the given article.
    ///
    /// Ownership is by name: `article.author` is a weak reference to the
    /// user's display name.
    pub fn owns(&self, article: &Article) -> bool {
        article.author == self.name
    }
}

/// A news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: ArticleStatus,
    /// Name of the owning user.
    pub author: String,
    /// Name of the category the article is filed under.
    pub category: String,
    #[serde(default)]
    tags: Vec<String>,
    pub published_at: Option<NaiveDate>,
    #[serde(default)]
    pub views: u64,
}

impl Article {
    /// Creates an unpublished draft with no views.
    pub fn draft(
        id: ArticleId,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            excerpt: String::new(),
            content: String::new(),
            status: ArticleStatus::Draft,
            author: author.into(),
            category: category.into(),
            tags: Vec::new(),
            published_at: None,
            views: 0,
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    /// Marks the article published on `date`.
    pub fn publish(&mut self, date: NaiveDate) {
        self.status = ArticleStatus::Published;
        self.published_at = Some(date);
    }

    /// Moves the article back to draft and clears its publication date.
    pub fn unpublish(&mut self) {
        self.status = ArticleStatus::Draft;
        self.published_at = None;
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Adds a tag. Returns `false` if it is blank or already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Replaces all tags, keeping first-seen order and dropping duplicates.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags.clear();
        for tag in tags {
            self.add_tag(tag.as_ref());
        }
    }
}

/// A category in the article taxonomy.
///
/// The slug is always derived from the name; it is recomputed on every
/// rename and ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CategoryFields")]
pub struct Category {
    id: CategoryId,
    name: String,
    slug: String,
    description: String,
    color: String,
    article_count: u32,
}

#[derive(Deserialize)]
struct CategoryFields {
    id: CategoryId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_category_color")]
    color: String,
    #[serde(default)]
    article_count: u32,
}

impl From<CategoryFields> for Category {
    fn from(fields: CategoryFields) -> Self {
        Category::new(fields.id, fields.name, fields.description, fields.color)
            .with_article_count(fields.article_count)
    }
}

/// Color assigned to categories created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "bg-blue-500";

fn default_category_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

impl Category {
    /// Creates an empty category; the slug is derived from `name`.
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id,
            slug: slugify(&name),
            name,
            description: description.into(),
            color: color.into(),
            article_count: 0,
        }
    }

    pub fn with_article_count(mut self, article_count: u32) -> Self {
        self.article_count = article_count;
        self
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn article_count(&self) -> u32 {
        self.article_count
    }

    /// Renames the category and recomputes its slug.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.slug = slugify(&self.name);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_article_count(&mut self, article_count: u32) {
        self.article_count = article_count;
    }
}

/// Derives a URL slug from a category name.
///
/// Lowercases the name and replaces every run of whitespace with a single
/// hyphen. Nothing else is stripped.
///
/// # Examples
///
/// ```
/// use newsroom_types::slugify;
///
/// assert_eq!(slugify("Technology"), "technology");
/// assert_eq!(slugify("World  News"), "world-news");
/// assert_eq!(slugify("Arts & Culture"), "arts-&-culture");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            slug.extend(c.to_lowercase());
        }
    }

    slug
}

// ============================================================================
// Settings
// ============================================================================

/// Global site configuration, editable by admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_description: String,
    pub contact_email: String,
    pub allow_registrations: bool,
    /// New users need admin approval before they can sign in.
    pub require_approval: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "News Platform".to_string(),
            site_description: "Your trusted source for news and information".to_string(),
            contact_email: "contact@newsplatform.com".to_string(),
            allow_registrations: false,
            require_approval: true,
        }
    }
}

/// Per-user notification preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    pub email_articles: bool,
    pub email_comments: bool,
    pub push_notifications: bool,
    pub weekly_digest: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_articles: true,
            email_comments: false,
            push_notifications: true,
            weekly_digest: true,
        }
    }
}
