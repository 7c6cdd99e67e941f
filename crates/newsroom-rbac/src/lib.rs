//! # newsroom-rbac: Role-Based Access Control
//!
//! Centralizes every permission decision made by the newsroom admin screens:
//! - **Role permissions** (3 roles: Author, Editor, Admin)
//! - **Ownership** (authors act only on their own articles)
//! - **Visibility filtering** (authors see only their own articles)
//! - **Hard rules** (primary admin and categories in use are never deletable)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Presentation layer                          │
//! └──────────┬──────────────────────┬───────────┘
//!            │ show/hide controls   │ mutations
//!            ▼                      ▼
//! ┌────────────────────┐  ┌──────────────────────┐
//! │  AccessPolicy      │◄─┤  PolicyEnforcer      │
//! │  (pure decisions)  │  │  (Result + audit)    │
//! └────────────────────┘  └──────────────────────┘
//! ```
//!
//! The policy is advisory for rendering. Anything that mutates data goes
//! through the enforcer, which re-checks the same rules.
//!
//! ## Roles
//!
//! | Role   | Own articles | Any article | Categories | Users | Site settings |
//! |--------|--------------|-------------|------------|-------|---------------|
//! | Author | ✓            | ✗           | ✗          | ✗     | ✗             |
//! | Editor | ✓            | ✓           | ✓          | ✗     | ✗             |
//! | Admin  | ✓            | ✓           | ✓          | ✓     | ✓             |
//!
//! ## Examples
//!
//! ```
//! use newsroom_rbac::AccessPolicy;
//! use newsroom_types::{Article, ArticleId, Role, User, UserId};
//!
//! let john = User::new(UserId::new(3), "John Doe", "john@example.com", Role::Author);
//! let own = Article::draft(ArticleId::new(1), "AI launch", "John Doe", "Technology");
//! let other = Article::draft(ArticleId::new(2), "Q4 results", "Jane Smith", "Business");
//!
//! assert!(AccessPolicy::can_edit_article(&john, &own));
//! assert!(!AccessPolicy::can_edit_article(&john, &other));
//!
//! let visible = AccessPolicy::visible_articles(&john, &[own, other]);
//! assert_eq!(visible.len(), 1);
//! ```
//!
//! ### Enforcement
//!
//! ```
//! use newsroom_rbac::{EnforcementError, PolicyEnforcer};
//! use newsroom_types::{Role, User, UserId};
//!
//! let enforcer = PolicyEnforcer::new();
//! let admin = User::new(UserId::new(2), "Jane Smith", "jane@example.com", Role::Admin);
//! let primary = User::new(UserId::new(1), "Admin", "admin@example.com", Role::Admin);
//!
//! let result = enforcer.enforce_delete_user(&admin, &primary);
//! assert!(matches!(result, Err(EnforcementError::PrimaryAdminProtected { id: 1 })));
//! ```

pub mod enforcement;
pub mod permissions;
pub mod policy;

// Re-export commonly used types
pub use enforcement::{Action, EnforcementError, PolicyEnforcer};
pub use permissions::{Permission, PermissionSet};
pub use policy::AccessPolicy;

// Kani proofs for bounded model checking
#[cfg(kani)]
mod kani_proofs;
