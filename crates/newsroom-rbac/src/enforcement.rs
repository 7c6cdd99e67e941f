//! Policy enforcement logic.
//!
//! Turns [`AccessPolicy`] decisions into `Result`s on the mutation path and
//! records an audit event for every attempt.

use std::fmt;

use newsroom_types::{Article, Category, User};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::permissions::Permission;
use crate::policy::AccessPolicy;

/// Action a user attempts against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    CreateArticle,
    EditArticle,
    DeleteArticle,
    ManageCategories,
    DeleteCategory,
    ManageUsers,
    DeleteUser,
    ManageSiteSettings,
    EditProfile,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CreateArticle => "create article",
            Action::EditArticle => "edit article",
            Action::DeleteArticle => "delete article",
            Action::ManageCategories => "manage categories",
            Action::DeleteCategory => "delete category",
            Action::ManageUsers => "manage users",
            Action::DeleteUser => "delete user",
            Action::ManageSiteSettings => "manage site settings",
            Action::EditProfile => "edit profile",
        }
    }

    /// Returns the role permission this action is primarily gated on, if any.
    pub fn permission(&self) -> Option<Permission> {
        match self {
            Action::CreateArticle => Some(Permission::CreateArticle),
            Action::EditArticle => Some(Permission::EditAnyArticle),
            Action::DeleteArticle => Some(Permission::DeleteAnyArticle),
            Action::ManageCategories | Action::DeleteCategory => {
                Some(Permission::ManageCategories)
            }
            Action::ManageUsers | Action::DeleteUser => Some(Permission::ManageUsers),
            Action::ManageSiteSettings => Some(Permission::ManageSiteSettings),
            Action::EditProfile => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for policy enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnforcementError {
    /// The actor's role or ownership does not allow the action.
    #[error("Access denied: cannot {action}: {reason}")]
    AccessDenied { action: Action, reason: String },

    /// The primary admin account can never be deleted.
    #[error("Cannot delete the primary admin user (id {id})")]
    PrimaryAdminProtected { id: u64 },

    /// A category with articles filed under it can never be deleted.
    #[error("\"{name}\" has {article_count} articles. Move or delete articles first.")]
    CategoryInUse { name: String, article_count: u32 },
}

/// Result type for enforcement operations.
pub type Result<T> = std::result::Result<T, EnforcementError>;

/// Policy enforcement engine.
///
/// Wraps the stateless [`AccessPolicy`] for callers that mutate data:
/// - denials become [`EnforcementError`]s
/// - the hard rules (primary admin, categories in use) get dedicated errors
/// - every attempt is audit-logged through `tracing`
#[derive(Debug, Clone, Copy)]
pub struct PolicyEnforcer {
    /// Whether to log access attempts.
    audit_enabled: bool,
}

impl PolicyEnforcer {
    /// Creates a new policy enforcer with audit logging on.
    pub fn new() -> Self {
        Self {
            audit_enabled: true,
        }
    }

    /// Disables audit logging (for testing).
    pub fn without_audit(mut self) -> Self {
        self.audit_enabled = false;
        self
    }

    pub fn audit_enabled(&self) -> bool {
        self.audit_enabled
    }

    /// Emits the single audit event for a decided attempt and returns it.
    fn audit(&self, actor: &User, action: Action, outcome: Result<()>) -> Result<()> {
        if !self.audit_enabled {
            return outcome;
        }

        match &outcome {
            Ok(()) if action.permission().is_some_and(|p| p.is_high_risk()) => {
                warn!(
                    user_id = %actor.id,
                    role = %actor.role,
                    action = %action,
                    "High-risk action granted"
                );
            }
            Ok(()) => {
                info!(
                    user_id = %actor.id,
                    role = %actor.role,
                    action = %action,
                    "Action granted"
                );
            }
            Err(err) => {
                warn!(
                    user_id = %actor.id,
                    role = %actor.role,
                    action = %action,
                    reason = %err,
                    "Action denied"
                );
            }
        }

        outcome
    }

    fn role_check(action: Action, allowed: bool, reason: &str) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(EnforcementError::AccessDenied {
                action,
                reason: reason.to_string(),
            })
        }
    }

    fn decide(&self, actor: &User, action: Action, allowed: bool, reason: &str) -> Result<()> {
        self.audit(actor, action, Self::role_check(action, allowed, reason))
    }

    pub fn enforce_create_article(&self, actor: &User) -> Result<()> {
        self.decide(
            actor,
            Action::CreateArticle,
            AccessPolicy::can_create_article(actor),
            "role cannot write articles",
        )
    }

    pub fn enforce_edit_article(&self, actor: &User, article: &Article) -> Result<()> {
        self.decide(
            actor,
            Action::EditArticle,
            AccessPolicy::can_edit_article(actor, article),
            "authors can only edit their own articles",
        )
    }

    pub fn enforce_delete_article(&self, actor: &User, article: &Article) -> Result<()> {
        self.decide(
            actor,
            Action::DeleteArticle,
            AccessPolicy::can_delete_article(actor, article),
            "authors can only delete their own articles",
        )
    }

    pub fn enforce_manage_categories(&self, actor: &User) -> Result<()> {
        self.decide(
            actor,
            Action::ManageCategories,
            AccessPolicy::can_manage_categories(actor),
            "only editors and admins manage categories",
        )
    }

    /// Enforces category deletion.
    ///
    /// The role check runs first; the in-use rule then applies to every
    /// role, admins included.
    pub fn enforce_delete_category(&self, actor: &User, category: &Category) -> Result<()> {
        let outcome = Self::role_check(
            Action::DeleteCategory,
            AccessPolicy::can_manage_categories(actor),
            "only editors and admins manage categories",
        )
        .and_then(|()| {
            if AccessPolicy::can_delete_category(category) {
                Ok(())
            } else {
                Err(EnforcementError::CategoryInUse {
                    name: category.name().to_string(),
                    article_count: category.article_count(),
                })
            }
        });

        self.audit(actor, Action::DeleteCategory, outcome)
    }

    pub fn enforce_manage_users(&self, actor: &User) -> Result<()> {
        self.decide(
            actor,
            Action::ManageUsers,
            AccessPolicy::can_manage_users(actor),
            "only administrators can manage users",
        )
    }

    /// Enforces user deletion.
    ///
    /// Deleting the primary admin is rejected for every caller.
    pub fn enforce_delete_user(&self, actor: &User, target: &User) -> Result<()> {
        let outcome = Self::role_check(
            Action::DeleteUser,
            AccessPolicy::can_manage_users(actor),
            "only administrators can manage users",
        )
        .and_then(|()| {
            if AccessPolicy::can_delete_user(actor, target) {
                Ok(())
            } else {
                Err(EnforcementError::PrimaryAdminProtected {
                    id: u64::from(target.id),
                })
            }
        });

        self.audit(actor, Action::DeleteUser, outcome)
    }

    pub fn enforce_manage_site_settings(&self, actor: &User) -> Result<()> {
        self.decide(
            actor,
            Action::ManageSiteSettings,
            AccessPolicy::can_manage_site_settings(actor),
            "only administrators change site settings",
        )
    }

    pub fn enforce_edit_profile(&self, actor: &User, target: &User) -> Result<()> {
        self.decide(
            actor,
            Action::EditProfile,
            AccessPolicy::can_edit_profile(actor, target),
            "users can only edit their own profile",
        )
    }
}

impl Default for PolicyEnforcer {
    fn default() -> Self {
        Self::new()
    }
}
