#![allow(clippy::match_same_arms)]
//! Permission types for access control.
//!
//! Defines the coarse capabilities each role carries. Ownership rules
//! (authors acting on their own articles) are layered on top in
//! [`crate::policy`].

use newsroom_types::Role;
use serde::{Deserialize, Serialize};

/// Capability that a role may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Write new articles.
    CreateArticle,

    /// Edit articles regardless of who owns them.
    EditAnyArticle,

    /// Delete articles regardless of who owns them.
    DeleteAnyArticle,

    /// Create, rename and delete categories.
    ManageCategories,

    /// Create, edit, deactivate and delete user accounts.
    ///
    /// **Security Impact:**
    /// - Can change other users' roles (privilege escalation)
    /// - Restricted to Admin role only
    ManageUsers,

    /// Change global site settings.
    ManageSiteSettings,
}

impl Permission {
    /// Returns whether this permission is high-risk.
    ///
    /// High-risk permissions get a warning-level audit event when granted.
    pub fn is_high_risk(&self) -> bool {
        matches!(
            self,
            Permission::DeleteAnyArticle | Permission::ManageUsers | Permission::ManageSiteSettings
        )
    }
}

/// Set of permissions granted to a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    permissions: Vec<Permission>,
}

impl PermissionSet {
    /// Creates a new permission set.
    pub fn new(permissions: Vec<Permission>) -> Self {
        let mut set = Self::empty();
        for permission in permissions {
            set.grant(permission);
        }
        set
    }

    /// Creates an empty permission set.
    pub fn empty() -> Self {
        Self {
            permissions: Vec::new(),
        }
    }

    /// Returns the standard permission set for a role.
    ///
    /// | Role   | Create | Edit any | Delete any | Categories | Users | Site |
    /// |--------|--------|----------|------------|------------|-------|------|
    /// | Author | ✓      | ✗        | ✗          | ✗          | ✗     | ✗    |
    /// | Editor | ✓      | ✓        | ✓          | ✓          | ✗     | ✗    |
    /// | Admin  | ✓      | ✓        | ✓          | ✓          | ✓     | ✓    |
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Author => Self::new(vec![Permission::CreateArticle]),
            Role::Editor => Self::new(vec![
                Permission::CreateArticle,
                Permission::EditAnyArticle,
                Permission::DeleteAnyArticle,
                Permission::ManageCategories,
            ]),
            Role::Admin => Self::new(vec![
                Permission::CreateArticle,
                Permission::EditAnyArticle,
                Permission::DeleteAnyArticle,
                Permission::ManageCategories,
                Permission::ManageUsers,
                Permission::ManageSiteSettings,
            ]),
        }
    }

    /// Returns whether this set contains the given permission.
    pub fn contains(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Adds a permission to the set.
    pub fn grant(&mut self, permission: Permission) {
        if !self.permissions.contains(&permission) {
            self.permissions.push(permission);
        }
    }

    /// Removes a permission from the set.
    pub fn revoke(&mut self, permission: Permission) {
        self.permissions.retain(|p| *p != permission);
    }

    /// Returns all permissions in the set.
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter()
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Returns whether any permission in the set is high-risk.
    pub fn has_high_risk_permission(&self) -> bool {
        self.permissions.iter().any(Permission::is_high_risk)
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Permission>> for PermissionSet {
    fn from(permissions: Vec<Permission>) -> Self {
        Self::new(permissions)
    }
}
