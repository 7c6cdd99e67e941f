//! # newsroom-store: In-memory data store for `Newsroom`
//!
//! The store owns every user, article and category, plus site settings and
//! per-user notification preferences. Reads hand out snapshots; every
//! mutation names the acting user and passes through
//! [`PolicyEnforcer`](newsroom_rbac::PolicyEnforcer) first.
//!
//! ```text
//! form ──► validate ──► PolicyEnforcer ──► Store mutation ──► snapshot
//!              │               │
//!              ▼               ▼
//!       ValidationError  EnforcementError
//! ```
//!
//! A rejected call never changes the store.
//!
//! # Example
//!
//! ```
//! use newsroom_store::{ArticleDraft, ArticleQuery, Store, StoreError};
//! use newsroom_types::{ArticleStatus, UserId};
//!
//! let mut store = Store::with_sample_data();
//! let john = store.user_by_id(UserId::new(3)).unwrap();
//!
//! // Authors only see their own articles.
//! assert_eq!(store.articles(&john, &ArticleQuery::all()).len(), 1);
//!
//! let draft = ArticleDraft::new("Chip Shortage Eases", "Technology");
//! let article = store
//!     .create_article(&john, draft, ArticleStatus::Draft)
//!     .unwrap();
//! assert_eq!(article.author, "John Doe");
//!
//! // ...and anyone else's work reads as missing.
//! let markets = store.articles(&store.user_by_id(UserId::new(2)).unwrap(), &ArticleQuery::all());
//! let foreign = markets.iter().find(|a| a.author == "Jane Smith").unwrap();
//! assert!(matches!(
//!     store.delete_article(&john, foreign.id),
//!     Err(StoreError::ArticleNotFound(_))
//! ));
//! ```

mod dashboard;
mod error;
mod forms;
mod query;
mod seed;
mod store;

pub use dashboard::{Dashboard, QuickAction};
pub use error::{Result, StoreError, ValidationError};
pub use forms::{ArticleDraft, CategoryDraft, ProfileUpdate, UserDraft};
pub use query::{ArticleQuery, UserQuery};
pub use store::Store;

#[cfg(test)]
mod tests;
