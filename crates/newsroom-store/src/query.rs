//! List filters for the article and user screens.

use newsroom_types::{Article, ArticleStatus, Role, User, UserStatus};
use serde::{Deserialize, Serialize};

/// Case-insensitive substring match; an empty needle matches everything.
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Filter for the article list.
///
/// `None` for a field means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleQuery {
    /// Matched against title and author.
    pub search: String,
    pub status: Option<ArticleStatus>,
}

impl ArticleQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, article: &Article) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = contains_ignore_case(&article.title, &needle)
            || contains_ignore_case(&article.author, &needle);
        let matches_status = self.status.is_none_or(|status| article.status == status);

        matches_search && matches_status
    }
}

/// Filter for the user list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserQuery {
    /// Matched against name and email.
    pub search: String,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

impl UserQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, user: &User) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = contains_ignore_case(&user.name, &needle)
            || contains_ignore_case(&user.email, &needle);
        let matches_role = self.role.is_none_or(|role| user.role == role);
        let matches_status = self.status.is_none_or(|status| user.status == status);

        matches_search && matches_role && matches_status
    }
}
