//! Unit tests for newsroom-store

use chrono::NaiveDate;
use newsroom_config::NewsroomConfig;
use newsroom_rbac::{Action, EnforcementError, PolicyEnforcer};
use newsroom_types::{
    ArticleId, ArticleStatus, CategoryId, NotificationPreferences, Role, SiteSettings, User,
    UserId, UserStatus,
};
use proptest::prelude::*;
use test_case::test_case;

use crate::{
    ArticleDraft, ArticleQuery, CategoryDraft, ProfileUpdate, QuickAction, Store, StoreError,
    UserDraft, UserQuery, ValidationError,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
}

fn store() -> Store {
    Store::with_sample_data()
        .with_enforcer(PolicyEnforcer::new().without_audit())
        .with_clock(today)
}

fn admin(store: &Store) -> User {
    store.user_by_id(UserId::new(1)).unwrap()
}

fn jane(store: &Store) -> User {
    store.user_by_id(UserId::new(2)).unwrap()
}

fn john(store: &Store) -> User {
    store.user_by_id(UserId::new(3)).unwrap()
}

fn mike(store: &Store) -> User {
    store.user_by_id(UserId::new(4)).unwrap()
}

fn category_count(store: &Store, name: &str) -> u32 {
    store
        .categories()
        .iter()
        .find(|c| c.name() == name)
        .unwrap()
        .article_count()
}

fn ids(articles: &[newsroom_types::Article]) -> Vec<u64> {
    articles.iter().map(|a| u64::from(a.id)).collect()
}

// ============================================================================
// Sample Data
// ============================================================================

#[test]
fn sample_data_is_seeded() {
    let store = store();
    let admin = admin(&store);

    assert_eq!(store.users(&admin, &UserQuery::all()).unwrap().len(), 5);
    assert_eq!(store.articles(&admin, &ArticleQuery::all()).len(), 3);
    assert_eq!(store.categories().len(), 5);
    assert!(admin.is_primary_admin());
    assert_eq!(category_count(&store, "Technology"), 45);
}

#[test]
fn from_config_without_seed_is_empty() {
    let store = Store::from_config(&NewsroomConfig::empty());

    assert!(store.user_by_id(UserId::new(1)).is_none());
    assert!(store.categories().is_empty());
}

#[test]
fn from_config_applies_settings() {
    let mut config = NewsroomConfig::default();
    config.site.site_name = "Daily Planet".to_string();
    config.notifications.weekly_digest = false;

    let store = Store::from_config(&config);

    assert_eq!(store.site_settings().site_name, "Daily Planet");
    assert!(!store.notification_preferences(UserId::new(3)).weekly_digest);
    assert_eq!(store.categories().len(), 5);
}

#[test]
fn insert_user_replaces_existing_id() {
    let mut store = Store::new();
    store.insert_user(User::new(UserId::new(1), "Old", "old@example.com", Role::Admin));
    store.insert_user(User::new(UserId::new(1), "New", "new@example.com", Role::Admin));

    assert_eq!(store.user_by_id(UserId::new(1)).unwrap().name, "New");
}

// ============================================================================
// Article Visibility
// ============================================================================

#[test_case(1, &[1, 2, 3]; "admin sees everything")]
#[test_case(2, &[1, 2, 3]; "editor sees everything")]
#[test_case(3, &[1]; "author sees own published")]
#[test_case(4, &[3]; "another author sees only their own")]
#[test_case(5, &[]; "author without articles sees nothing")]
fn articles_are_filtered_by_visibility(user_id: u64, expected: &[u64]) {
    let store = store();
    let user = store.user_by_id(UserId::new(user_id)).unwrap();

    assert_eq!(ids(&store.articles(&user, &ArticleQuery::all())), expected);
}

#[test]
fn author_sees_own_drafts() {
    let mut store = store();
    let john = john(&store);
    let draft = store
        .create_article(&john, ArticleDraft::new("Draft", "Technology"), ArticleStatus::Draft)
        .unwrap();

    let visible = store.articles(&john, &ArticleQuery::all());
    assert!(visible.iter().any(|a| a.id == draft.id));

    let mike = mike(&store);
    let visible = store.articles(&mike, &ArticleQuery::all());
    assert!(visible.iter().all(|a| a.id != draft.id));
}

#[test]
fn search_runs_after_visibility() {
    let store = store();
    let query = ArticleQuery::all().with_search("market");

    assert_eq!(ids(&store.articles(&admin(&store), &query)), vec![2]);
    assert!(store.articles(&john(&store), &query).is_empty());
}

#[test]
fn status_filter() {
    let store = store();
    let admin = admin(&store);

    let drafts = store.articles(&admin, &ArticleQuery::all().with_status(ArticleStatus::Draft));
    assert_eq!(ids(&drafts), vec![2]);

    let published = ArticleQuery::all()
        .with_search("mike")
        .with_status(ArticleStatus::Published);
    assert_eq!(ids(&store.articles(&admin, &published)), vec![3]);
}

#[test]
fn hidden_article_reads_as_not_found() {
    let store = store();

    assert!(store.article(&jane(&store), ArticleId::new(2)).is_ok());
    assert_eq!(
        store.article(&john(&store), ArticleId::new(2)),
        Err(StoreError::ArticleNotFound(ArticleId::new(2)))
    );
}

// ============================================================================
// Article Mutations
// ============================================================================

#[test]
fn create_article_as_author() {
    let mut store = store();
    let john = john(&store);
    let draft = ArticleDraft::new("  Chip Shortage Eases  ", "Technology")
        .with_excerpt("Supply is recovering")
        .with_tag("Chips")
        .with_tag("Chips")
        .with_tag(" ");

    let article = store
        .create_article(&john, draft, ArticleStatus::Published)
        .unwrap();

    assert_eq!(article.id, ArticleId::new(4));
    assert_eq!(article.title, "Chip Shortage Eases");
    assert_eq!(article.author, "John Doe");
    assert_eq!(article.tags(), ["Chips"]);
    assert_eq!(article.published_at, Some(today()));
    assert_eq!(article.views, 0);
    assert_eq!(category_count(&store, "Technology"), 46);
    assert_eq!(store.user_by_id(john.id).unwrap().article_count, 16);
}

#[test]
fn create_draft_has_no_publication_date() {
    let mut store = store();
    let jane = jane(&store);

    let article = store
        .create_article(&jane, ArticleDraft::new("Rates", "Business"), ArticleStatus::Draft)
        .unwrap();

    assert!(!article.is_published());
    assert_eq!(article.published_at, None);
}

#[test]
fn create_article_validates_title() {
    let mut store = store();
    let john = john(&store);

    let result = store.create_article(&john, ArticleDraft::new(" ", "Technology"), ArticleStatus::Draft);

    assert_eq!(
        result,
        Err(StoreError::Validation(ValidationError::TitleRequired))
    );
    assert_eq!(store.articles(&admin(&store), &ArticleQuery::all()).len(), 3);
    assert_eq!(category_count(&store, "Technology"), 45);
}

#[test]
fn owner_updates_own_article() {
    let mut store = store();
    let john = john(&store);
    let draft = ArticleDraft::new("Updated AI Product", "Technology").with_tag("AI");

    let article = store
        .update_article(&john, ArticleId::new(1), draft, ArticleStatus::Published)
        .unwrap();

    assert_eq!(article.title, "Updated AI Product");
    assert_eq!(article.tags(), ["AI"]);
    assert_eq!(article.published_at, NaiveDate::from_ymd_opt(2024, 1, 15));
    assert_eq!(article.views, 1250);
}

#[test]
fn update_article_transitions_status() {
    let mut store = store();
    let jane = jane(&store);

    let published = store
        .update_article(
            &jane,
            ArticleId::new(2),
            ArticleDraft::new("Market Analysis", "Business"),
            ArticleStatus::Published,
        )
        .unwrap();
    assert_eq!(published.published_at, Some(today()));

    let unpublished = store
        .update_article(
            &jane,
            ArticleId::new(2),
            ArticleDraft::new("Market Analysis", "Business"),
            ArticleStatus::Draft,
        )
        .unwrap();
    assert_eq!(unpublished.status, ArticleStatus::Draft);
    assert_eq!(unpublished.published_at, None);
}

#[test]
fn update_article_moves_category_counts() {
    let mut store = store();
    let editor = jane(&store);

    store
        .update_article(
            &editor,
            ArticleId::new(1),
            ArticleDraft::new("AI", "Business"),
            ArticleStatus::Published,
        )
        .unwrap();

    assert_eq!(category_count(&store, "Technology"), 44);
    assert_eq!(category_count(&store, "Business"), 33);
}

#[test]
fn foreign_article_update_reads_as_not_found() {
    let mut store = store();
    let john = john(&store);
    let before = store.article(&admin(&store), ArticleId::new(3)).unwrap();

    let result = store.update_article(
        &john,
        ArticleId::new(3),
        ArticleDraft::new("Hijacked", "Sports"),
        ArticleStatus::Draft,
    );

    assert_eq!(result, Err(StoreError::ArticleNotFound(ArticleId::new(3))));
    assert_eq!(store.article(&admin(&store), ArticleId::new(3)).unwrap(), before);
}

#[test]
fn owner_deletes_own_article() {
    let mut store = store();
    let mike = mike(&store);

    let deleted = store.delete_article(&mike, ArticleId::new(3)).unwrap();

    assert_eq!(deleted.author, "Mike Johnson");
    assert_eq!(category_count(&store, "Sports"), 27);
    assert_eq!(store.user_by_id(mike.id).unwrap().article_count, 7);
    assert!(store.articles(&mike, &ArticleQuery::all()).is_empty());
}

#[test]
fn foreign_article_delete_reads_as_not_found() {
    let mut store = store();
    let john = john(&store);

    let result = store.delete_article(&john, ArticleId::new(3));

    assert_eq!(result, Err(StoreError::ArticleNotFound(ArticleId::new(3))));
    assert_eq!(
        store.delete_article(&john, ArticleId::new(99)),
        Err(StoreError::ArticleNotFound(ArticleId::new(99)))
    );
    assert_eq!(store.articles(&admin(&store), &ArticleQuery::all()).len(), 3);
}

#[test]
fn editor_deletes_any_article() {
    let mut store = store();
    let jane = jane(&store);

    assert!(store.delete_article(&jane, ArticleId::new(1)).is_ok());
    assert!(store.delete_article(&jane, ArticleId::new(3)).is_ok());
}

#[test]
fn delete_missing_article() {
    let mut store = store();
    let admin = admin(&store);

    assert_eq!(
        store.delete_article(&admin, ArticleId::new(99)),
        Err(StoreError::ArticleNotFound(ArticleId::new(99)))
    );
}

#[test]
fn create_article_requires_existing_category() {
    let mut store = store();
    let admin = admin(&store);

    let result = store.create_article(&admin, ArticleDraft::new("Flu Season", "Health"), ArticleStatus::Draft);

    assert_eq!(result, Err(StoreError::UnknownCategory("Health".to_string())));
    assert_eq!(store.articles(&admin, &ArticleQuery::all()).len(), 3);

    // A category created later starts out genuinely empty.
    let health = store
        .create_category(&admin, CategoryDraft::new("Health"))
        .unwrap();
    assert_eq!(health.article_count(), 0);
    assert!(store.delete_category(&admin, health.id()).is_ok());
}

#[test]
fn update_article_requires_existing_category() {
    let mut store = store();
    let jane = jane(&store);

    let result = store.update_article(
        &jane,
        ArticleId::new(1),
        ArticleDraft::new("AI", "Health"),
        ArticleStatus::Published,
    );

    assert_eq!(result, Err(StoreError::UnknownCategory("Health".to_string())));
    assert_eq!(store.article(&jane, ArticleId::new(1)).unwrap().category, "Technology");
    assert_eq!(category_count(&store, "Technology"), 45);
}

#[test]
fn article_ids_follow_the_highest() {
    let mut store = store();
    let admin = admin(&store);
    store.delete_article(&admin, ArticleId::new(2)).unwrap();

    let article = store
        .create_article(&admin, ArticleDraft::new("Next", "Politics"), ArticleStatus::Draft)
        .unwrap();

    assert_eq!(article.id, ArticleId::new(4));
}

// ============================================================================
// Categories
// ============================================================================

#[test]
fn author_cannot_create_category() {
    let mut store = store();
    let john = john(&store);

    let result = store.create_category(&john, CategoryDraft::new("Health"));

    assert!(matches!(
        result,
        Err(StoreError::Denied(EnforcementError::AccessDenied {
            action: Action::ManageCategories,
            ..
        }))
    ));
    assert_eq!(store.categories().len(), 5);
}

#[test]
fn editor_creates_category() {
    let mut store = store();
    let jane = jane(&store);

    let plain = store
        .create_category(&jane, CategoryDraft::new("World  News"))
        .unwrap();
    assert_eq!(plain.id(), CategoryId::new(6));
    assert_eq!(plain.slug(), "world-news");
    assert_eq!(plain.color(), "bg-blue-500");
    assert_eq!(plain.article_count(), 0);

    let colored = store
        .create_category(
            &jane,
            CategoryDraft::new("Health")
                .with_description("Health and wellness")
                .with_color("bg-pink-500"),
        )
        .unwrap();
    assert_eq!(colored.id(), CategoryId::new(7));
    assert_eq!(colored.color(), "bg-pink-500");
    assert_eq!(colored.description(), "Health and wellness");
}

#[test]
fn create_category_requires_name() {
    let mut store = store();
    let admin = admin(&store);

    assert_eq!(
        store.create_category(&admin, CategoryDraft::new("  ")),
        Err(StoreError::Validation(ValidationError::CategoryNameRequired))
    );
}

#[test]
fn create_category_rejects_taken_name() {
    let mut store = store();
    let jane = jane(&store);

    assert_eq!(
        store.create_category(&jane, CategoryDraft::new(" Sports ")),
        Err(StoreError::Validation(ValidationError::CategoryNameTaken))
    );
    assert_eq!(store.categories().len(), 5);
}

#[test]
fn rename_category_rejects_taken_name() {
    let mut store = store();
    let jane = jane(&store);

    assert_eq!(
        store.update_category(&jane, CategoryId::new(1), CategoryDraft::new("Sports")),
        Err(StoreError::Validation(ValidationError::CategoryNameTaken))
    );
    assert_eq!(store.category(CategoryId::new(1)).unwrap().name(), "Technology");

    // Keeping its own name is not a clash.
    assert!(
        store
            .update_category(&jane, CategoryId::new(1), CategoryDraft::new("Technology"))
            .is_ok()
    );
}

#[test]
fn category_counts_stay_in_step_after_rename() {
    let mut store = Store::new().with_enforcer(PolicyEnforcer::new().without_audit());
    store.insert_user(User::new(UserId::new(1), "Root", "root@example.com", Role::Admin));
    let admin = admin(&store);
    let x = store.create_category(&admin, CategoryDraft::new("X")).unwrap();
    let y = store.create_category(&admin, CategoryDraft::new("Y")).unwrap();
    let first = store
        .create_article(&admin, ArticleDraft::new("First", "Y"), ArticleStatus::Draft)
        .unwrap();

    assert!(store.update_category(&admin, x.id(), CategoryDraft::new("Y")).is_err());

    store.delete_article(&admin, first.id).unwrap();
    assert_eq!(store.category(y.id()).unwrap().article_count(), 0);
    assert!(store.delete_category(&admin, y.id()).is_ok());
}

#[test]
fn rename_category_refiles_articles() {
    let mut store = store();
    let jane = jane(&store);

    let renamed = store
        .update_category(
            &jane,
            CategoryId::new(1),
            CategoryDraft::new("Tech & Science").with_description("Science too"),
        )
        .unwrap();

    assert_eq!(renamed.slug(), "tech-&-science");
    assert_eq!(renamed.color(), "bg-blue-500");
    assert_eq!(renamed.article_count(), 45);
    assert_eq!(
        store.article(&jane, ArticleId::new(1)).unwrap().category,
        "Tech & Science"
    );
    assert_eq!(store.category(CategoryId::new(1)).unwrap(), renamed);
}

#[test]
fn delete_category_in_use_rejected_for_admin() {
    let mut store = store();
    let admin = admin(&store);

    let result = store.delete_category(&admin, CategoryId::new(1));

    assert_eq!(
        result,
        Err(StoreError::Denied(EnforcementError::CategoryInUse {
            name: "Technology".to_string(),
            article_count: 45,
        }))
    );
    assert_eq!(store.categories().len(), 5);
}

#[test]
fn delete_empty_category() {
    let mut store = store();
    let jane = jane(&store);
    let john = john(&store);
    let health = store
        .create_category(&jane, CategoryDraft::new("Health"))
        .unwrap();

    assert!(matches!(
        store.delete_category(&john, health.id()),
        Err(StoreError::Denied(EnforcementError::AccessDenied { .. }))
    ));
    assert_eq!(store.delete_category(&jane, health.id()).unwrap(), health);
    assert_eq!(
        store.category(health.id()),
        Err(StoreError::CategoryNotFound(health.id()))
    );
}

// ============================================================================
// Users
// ============================================================================

#[test_case(2; "editor")]
#[test_case(3; "author")]
fn non_admin_cannot_list_users(user_id: u64) {
    let store = store();
    let user = store.user_by_id(UserId::new(user_id)).unwrap();

    assert!(matches!(
        store.users(&user, &UserQuery::all()),
        Err(StoreError::Denied(_))
    ));
}

#[test]
fn user_filters() {
    let store = store();
    let admin = admin(&store);

    let authors = store
        .users(&admin, &UserQuery::all().with_role(Role::Author))
        .unwrap();
    assert_eq!(authors.len(), 3);

    let inactive = store
        .users(&admin, &UserQuery::all().with_status(UserStatus::Inactive))
        .unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].name, "Sarah Wilson");

    let by_email = store
        .users(&admin, &UserQuery::all().with_search("JANE@"))
        .unwrap();
    assert_eq!(by_email.len(), 1);
}

#[test]
fn create_user() {
    let mut store = store();
    let admin = admin(&store);

    let user = store
        .create_user(&admin, UserDraft::new("Ann Lee", "ann@example.com", Role::Editor))
        .unwrap();

    assert_eq!(user.id, UserId::new(6));
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.article_count, 0);
    assert_eq!(user.joined_at, Some(today()));
    assert_eq!(store.user_by_id(user.id), Some(user));
}

#[test]
fn create_user_validation_runs_first() {
    let mut store = store();
    let john = john(&store);

    assert_eq!(
        store.create_user(&john, UserDraft::new("", "ann@example.com", Role::Admin)),
        Err(StoreError::Validation(ValidationError::NameAndEmailRequired))
    );
    assert!(matches!(
        store.create_user(&john, UserDraft::new("Ann", "ann@example.com", Role::Admin)),
        Err(StoreError::Denied(_))
    ));
}

#[test]
fn exhausted_ids_are_an_error() {
    let mut store = store();
    let admin = admin(&store);
    store.insert_user(User::new(UserId::new(u64::MAX), "Last", "last@example.com", Role::Author));

    let result = store.create_user(&admin, UserDraft::new("Ann", "ann@example.com", Role::Author));

    assert_eq!(result, Err(StoreError::IdsExhausted("user")));
    assert_eq!(store.users(&admin, &UserQuery::all()).unwrap().len(), 6);
}

#[test]
fn update_user_keeps_article_authors() {
    let mut store = store();
    let admin = admin(&store);

    let promoted = store
        .update_user(
            &admin,
            UserId::new(3),
            UserDraft::new("Johnny Doe", "john@example.com", Role::Editor),
        )
        .unwrap();

    assert_eq!(promoted.role, Role::Editor);
    assert_eq!(store.article(&admin, ArticleId::new(1)).unwrap().author, "John Doe");
}

#[test]
fn toggle_user_status() {
    let mut store = store();
    let admin = admin(&store);

    let sarah = store.toggle_user_status(&admin, UserId::new(5)).unwrap();
    assert_eq!(sarah.status, UserStatus::Active);

    let sarah = store.toggle_user_status(&admin, UserId::new(5)).unwrap();
    assert_eq!(sarah.status, UserStatus::Inactive);

    let jane = jane(&store);
    assert!(store.toggle_user_status(&jane, UserId::new(5)).is_err());
}

#[test]
fn primary_admin_cannot_be_deleted() {
    let mut store = store();
    let admin = admin(&store);
    let second = store
        .create_user(&admin, UserDraft::new("Second", "second@example.com", Role::Admin))
        .unwrap();

    for actor in [&admin, &second] {
        assert_eq!(
            store.delete_user(actor, UserId::new(1)),
            Err(StoreError::Denied(EnforcementError::PrimaryAdminProtected {
                id: 1
            }))
        );
    }
    assert!(store.user_by_id(UserId::new(1)).is_some());
}

#[test]
fn delete_user() {
    let mut store = store();
    let admin = admin(&store);
    let sarah_id = UserId::new(5);
    let sarah = store.user_by_id(sarah_id).unwrap();
    store
        .update_notification_preferences(&sarah, NotificationPreferences {
            weekly_digest: false,
            ..NotificationPreferences::default()
        })
        .unwrap();

    let deleted = store.delete_user(&admin, sarah_id).unwrap();

    assert_eq!(deleted.name, "Sarah Wilson");
    assert!(store.user_by_id(sarah_id).is_none());
    assert_eq!(
        store.notification_preferences(sarah_id),
        NotificationPreferences::default()
    );
    assert_eq!(
        store.delete_user(&admin, sarah_id),
        Err(StoreError::UserNotFound(sarah_id))
    );
}

// ============================================================================
// Dashboard
// ============================================================================

#[test]
fn dashboard_for_admin() {
    let store = store();
    let dashboard = store.dashboard(&admin(&store));

    assert_eq!(dashboard.total_articles, 3);
    assert_eq!(dashboard.published, 2);
    assert_eq!(dashboard.drafts, 1);
    assert_eq!(dashboard.categories, 5);
    assert_eq!(dashboard.total_users, Some(5));
    assert_eq!(ids(&dashboard.recent_articles), vec![3, 2, 1]);
    assert_eq!(
        dashboard.quick_actions,
        vec![
            QuickAction::CreateArticle,
            QuickAction::ViewArticles,
            QuickAction::ManageCategories,
            QuickAction::ManageUsers,
        ]
    );
}

#[test]
fn dashboard_for_author() {
    let store = store();
    let dashboard = store.dashboard(&john(&store));

    assert_eq!(dashboard.total_articles, 3);
    assert_eq!(dashboard.total_users, None);
    assert_eq!(ids(&dashboard.recent_articles), vec![1]);
    assert_eq!(
        dashboard.quick_actions,
        vec![QuickAction::CreateArticle, QuickAction::ViewArticles]
    );
}

#[test]
fn dashboard_for_editor() {
    let store = store();
    let dashboard = store.dashboard(&jane(&store));

    assert_eq!(dashboard.total_users, None);
    assert!(dashboard.quick_actions.contains(&QuickAction::ManageCategories));
    assert!(!dashboard.quick_actions.contains(&QuickAction::ManageUsers));
}

#[test]
fn dashboard_recent_limit_from_config() {
    let mut config = NewsroomConfig::default();
    config.store.recent_articles = 1;
    let store = Store::from_config(&config);
    let dashboard = store.dashboard(&admin(&store));

    assert_eq!(ids(&dashboard.recent_articles), vec![3]);
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn site_settings_admin_only() {
    let mut store = store();
    let jane = jane(&store);
    let settings = SiteSettings {
        site_name: "Daily Planet".to_string(),
        ..SiteSettings::default()
    };

    assert!(matches!(
        store.update_site_settings(&jane, settings.clone()),
        Err(StoreError::Denied(EnforcementError::AccessDenied {
            action: Action::ManageSiteSettings,
            ..
        }))
    ));
    assert_eq!(store.site_settings(), SiteSettings::default());

    let admin = admin(&store);
    assert_eq!(store.update_site_settings(&admin, settings.clone()), Ok(settings.clone()));
    assert_eq!(store.site_settings(), settings);
}

#[test]
fn site_settings_require_name_and_email() {
    let mut store = store();
    let admin = admin(&store);
    let settings = SiteSettings {
        contact_email: String::new(),
        ..SiteSettings::default()
    };

    assert_eq!(
        store.update_site_settings(&admin, settings),
        Err(StoreError::Validation(ValidationError::SiteNameAndEmailRequired))
    );
}

#[test]
fn notification_preferences_are_per_user() {
    let mut store = store();
    let john = john(&store);
    let prefs = NotificationPreferences {
        email_comments: true,
        push_notifications: false,
        ..NotificationPreferences::default()
    };

    assert_eq!(store.update_notification_preferences(&john, prefs), Ok(prefs));
    assert_eq!(store.notification_preferences(john.id), prefs);
    assert_eq!(
        store.notification_preferences(UserId::new(2)),
        NotificationPreferences::default()
    );
}

#[test]
fn notification_preferences_unknown_user() {
    let mut store = store();
    let ghost = User::new(UserId::new(42), "Ghost", "ghost@example.com", Role::Author);

    assert_eq!(
        store.update_notification_preferences(&ghost, NotificationPreferences::default()),
        Err(StoreError::UserNotFound(UserId::new(42)))
    );
}

#[test]
fn update_own_profile() {
    let mut store = store();
    let john = john(&store);

    let updated = store
        .update_profile(&john, john.id, ProfileUpdate::new("John Q. Doe", "jq@example.com"))
        .unwrap();

    assert_eq!(updated.name, "John Q. Doe");
    assert_eq!(updated.email, "jq@example.com");
    assert_eq!(updated.role, Role::Author);
    assert_eq!(updated.last_active, Some(today()));
}

#[test]
fn update_foreign_profile() {
    let mut store = store();
    let john = john(&store);
    let admin = admin(&store);
    let update = ProfileUpdate::new("Jane S.", "jane@example.com");

    assert!(matches!(
        store.update_profile(&john, UserId::new(2), update.clone()),
        Err(StoreError::Denied(EnforcementError::AccessDenied {
            action: Action::EditProfile,
            ..
        }))
    ));
    assert!(store.update_profile(&admin, UserId::new(2), update).is_ok());
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn role_strategy() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_category_count_tracks_articles(created in 1usize..12, deleted in 0usize..12) {
        let mut store = store();
        let jane = jane(&store);
        store.create_category(&jane, CategoryDraft::new("Health")).unwrap();

        let mut created_ids = Vec::new();
        for i in 0..created {
            let draft = ArticleDraft::new(format!("Story {i}"), "Health");
            created_ids.push(store.create_article(&jane, draft, ArticleStatus::Draft).unwrap().id);
        }
        let deleted = deleted.min(created);
        for id in created_ids.iter().take(deleted) {
            store.delete_article(&jane, *id).unwrap();
        }

        let expected = u32::try_from(created - deleted).unwrap();
        prop_assert_eq!(category_count(&store, "Health"), expected);
        prop_assert_eq!(store.user_by_id(jane.id).unwrap().article_count, 23 + expected);
    }

    #[test]
    fn prop_authors_only_list_own_articles(
        name in "[A-Za-z ]{0,16}",
        role in role_strategy(),
        search in "[a-z]{0,3}",
    ) {
        let store = store();
        let user = User::new(UserId::new(99), name, "x@example.com", role);
        let query = ArticleQuery::all().with_search(search);

        for article in store.articles(&user, &query) {
            prop_assert!(role != Role::Author || user.owns(&article));
        }
    }

    #[test]
    fn prop_denied_mutations_leave_store_unchanged(role in role_strategy()) {
        let mut store = store();
        let actor = User::new(UserId::new(99), "Visitor", "v@example.com", role);
        let before = store.clone();

        let _ = store.delete_user(&actor, UserId::new(1));
        let _ = store.delete_category(&actor, CategoryId::new(1));
        if role != Role::Admin {
            let _ = store.update_site_settings(&actor, SiteSettings {
                site_name: "Changed".to_string(),
                ..SiteSettings::default()
            });
        }

        prop_assert_eq!(store.site_settings(), before.site_settings());
        prop_assert_eq!(store.categories(), before.categories());
        prop_assert!(store.user_by_id(UserId::new(1)).is_some());
    }
}
