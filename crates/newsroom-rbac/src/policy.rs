//! Access control policy.
//!
//! Every permission decision in the admin core is made here, so that no
//! role comparison is duplicated at call sites. All functions are pure and
//! total: they never fail, never mutate, and never consult a store.

use newsroom_types::{Article, Category, PRIMARY_ADMIN_ID, Role, User};

use crate::permissions::{Permission, PermissionSet};

/// Stateless access policy.
///
/// Decisions combine the role's [`PermissionSet`] with ownership
/// (authors act on the articles whose `author` is their name) and two hard
/// rules that hold for every role:
/// - a category with articles is never deletable
/// - the primary admin is never deletable
pub struct AccessPolicy;

impl AccessPolicy {
    /// Returns the permissions carried by the user's role.
    pub fn permissions(user: &User) -> PermissionSet {
        PermissionSet::for_role(user.role)
    }

    fn has(user: &User, permission: Permission) -> bool {
        Self::permissions(user).contains(permission)
    }

    /// Returns whether the user may write new articles.
    pub fn can_create_article(user: &User) -> bool {
        Self::has(user, Permission::CreateArticle)
    }

    /// Returns whether the user may see the article at all.
    pub fn can_view_article(user: &User, article: &Article) -> bool {
        user.role != Role::Author || user.owns(article)
    }

    /// Editors and admins edit any article; authors edit only their own.
    pub fn can_edit_article(user: &User, article: &Article) -> bool {
        Self::has(user, Permission::EditAnyArticle)
            || (user.role == Role::Author && user.owns(article))
    }

    /// Editors and admins delete any article; authors delete only their own.
    ///
    /// Identical to [`can_edit_article`](Self::can_edit_article) today, kept
    /// separate so the two rules can diverge.
    pub fn can_delete_article(user: &User, article: &Article) -> bool {
        Self::has(user, Permission::DeleteAnyArticle)
            || (user.role == Role::Author && user.owns(article))
    }

    /// A category is deletable only once no article is filed under it.
    ///
    /// Independent of who asks.
    pub fn can_delete_category(category: &Category) -> bool {
        category.article_count() == 0
    }

    pub fn can_manage_categories(user: &User) -> bool {
        Self::has(user, Permission::ManageCategories)
    }

    pub fn can_manage_users(user: &User) -> bool {
        Self::has(user, Permission::ManageUsers)
    }

    /// Admins delete any account except the primary admin.
    pub fn can_delete_user(user: &User, target: &User) -> bool {
        Self::can_manage_users(user) && target.id != PRIMARY_ADMIN_ID
    }

    pub fn can_manage_site_settings(user: &User) -> bool {
        Self::has(user, Permission::ManageSiteSettings)
    }

    /// Whether the user-count statistic is shown on the dashboard.
    pub fn can_view_user_statistics(user: &User) -> bool {
        Self::can_manage_users(user)
    }

    /// Users edit their own profile; user managers edit anyone's.
    pub fn can_edit_profile(user: &User, target: &User) -> bool {
        user.id == target.id || Self::can_manage_users(user)
    }

    /// Returns the articles the user may see, preserving input order.
    ///
    /// Authors see only their own articles; editors and admins see all.
    /// Apply this before any search or status filter.
    pub fn visible_articles(user: &User, articles: &[Article]) -> Vec<Article> {
        articles
            .iter()
            .filter(|article| Self::can_view_article(user, article))
            .cloned()
            .collect()
    }
}
