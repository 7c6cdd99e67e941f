//! Dashboard summary.

use newsroom_rbac::AccessPolicy;
use newsroom_types::{Article, User};
use serde::{Deserialize, Serialize};

/// Shortcut shown in the dashboard's quick-actions panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuickAction {
    CreateArticle,
    ViewArticles,
    ManageCategories,
    ManageUsers,
}

impl QuickAction {
    /// Returns the shortcuts the user may follow, in display order.
    pub fn available_to(user: &User) -> Vec<QuickAction> {
        let mut actions = Vec::with_capacity(4);
        if AccessPolicy::can_create_article(user) {
            actions.push(QuickAction::CreateArticle);
        }
        actions.push(QuickAction::ViewArticles);
        if AccessPolicy::can_manage_categories(user) {
            actions.push(QuickAction::ManageCategories);
        }
        if AccessPolicy::can_manage_users(user) {
            actions.push(QuickAction::ManageUsers);
        }
        actions
    }
}

/// Snapshot of the dashboard for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub total_articles: usize,
    pub published: usize,
    pub drafts: usize,
    pub categories: usize,
    /// Only present for users allowed to see user statistics.
    pub total_users: Option<usize>,
    /// Newest articles visible to the user, newest first.
    pub recent_articles: Vec<Article>,
    pub quick_actions: Vec<QuickAction>,
}
